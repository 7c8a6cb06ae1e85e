pub mod button;
pub mod card;
pub mod container;
pub mod notification;
pub mod palette;
pub mod text;
pub mod text_input;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Theme {
    pub mode: Mode,
    pub colors: palette::Palette,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            mode: Mode::Light,
            colors: palette::Palette::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: Mode::Dark,
            colors: palette::Palette::dark(),
        }
    }
}

impl From<Mode> for Theme {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Light => Self::light(),
            Mode::Dark => Self::dark(),
        }
    }
}

impl std::default::Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

impl iced::application::DefaultStyle for Theme {
    fn default_style(&self) -> iced::application::Appearance {
        iced::application::Appearance {
            background_color: self.colors.general.background,
            text_color: self.colors.text.primary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_toggles_back_and_forth() {
        assert_eq!(Mode::Light.toggled(), Mode::Dark);
        assert_eq!(Mode::Dark.toggled().toggled(), Mode::Dark);
    }

    #[test]
    fn theme_follows_mode() {
        assert_eq!(Theme::from(Mode::Dark), Theme::dark());
        assert_eq!(Theme::default().mode, Mode::Light);
        assert_ne!(
            Theme::light().colors.general.background,
            Theme::dark().colors.general.background
        );
    }
}
