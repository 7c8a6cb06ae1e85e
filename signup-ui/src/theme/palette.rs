use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub transparent: Button,
    pub link: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            general: General {
                background: color::GREY_1,
                foreground: color::WHITE,
            },
            text: Text {
                primary: color::LIGHT_BLACK,
                secondary: color::GREY_4,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::GREY_7,
                        text: color::WHITE,
                        border: color::GREY_7.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_5,
                        text: color::WHITE,
                        border: color::GREY_5.into(),
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::GREY_4,
                        text: color::WHITE,
                        border: color::GREY_4.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::LIGHT_BLACK,
                        border: color::GREY_2.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_1,
                        text: color::LIGHT_BLACK,
                        border: color::GREY_3.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_4,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::LIGHT_BLACK,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::LIGHT_BLACK,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_5,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: color::GREY_2.into(),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::WHITE,
                    text: color::LIGHT_BLACK.into(),
                    border: color::GREY_2.into(),
                },
                error: ContainerPalette {
                    background: color::RED,
                    text: color::WHITE.into(),
                    border: color::RED.into(),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_4,
                        placeholder: color::GREY_3,
                        value: color::LIGHT_BLACK,
                        selection: color::GREY_2,
                        border: color::GREY_2.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::GREY_4,
                        selection: color::GREY_2,
                        border: color::GREY_2.into(),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::RED,
                        placeholder: color::GREY_3,
                        value: color::LIGHT_BLACK,
                        selection: color::GREY_2,
                        border: color::RED.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_1,
                        icon: color::RED,
                        placeholder: color::GREY_3,
                        value: color::GREY_4,
                        selection: color::GREY_2,
                        border: color::RED.into(),
                    },
                },
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            general: General {
                background: color::LIGHT_BLACK,
                foreground: color::GREY_7,
            },
            text: Text {
                primary: color::GREY_1,
                secondary: color::GREY_3,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::GREY_1,
                        text: color::LIGHT_BLACK,
                        border: color::GREY_1.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_2,
                        text: color::LIGHT_BLACK,
                        border: color::GREY_2.into(),
                    },
                    pressed: None,
                    disabled: Some(ButtonPalette {
                        background: color::GREY_4,
                        text: color::LIGHT_BLACK,
                        border: color::GREY_4.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::GREY_7,
                        text: color::GREY_1,
                        border: color::GREY_6.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_6,
                        text: color::GREY_1,
                        border: color::GREY_5.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_1,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_1,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_3,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::GREY_7,
                    text: None,
                    border: color::GREY_6.into(),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::GREY_7,
                    text: color::GREY_1.into(),
                    border: color::GREY_6.into(),
                },
                error: ContainerPalette {
                    background: color::DARK_RED,
                    text: color::LIGHT_RED.into(),
                    border: color::DARK_RED.into(),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::LIGHT_BLACK,
                        icon: color::GREY_3,
                        placeholder: color::GREY_4,
                        value: color::GREY_1,
                        selection: color::GREY_5,
                        border: color::GREY_6.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_7,
                        icon: color::GREY_4,
                        placeholder: color::GREY_4,
                        value: color::GREY_3,
                        selection: color::GREY_5,
                        border: color::GREY_6.into(),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::LIGHT_BLACK,
                        icon: color::RED,
                        placeholder: color::GREY_4,
                        value: color::GREY_1,
                        selection: color::GREY_5,
                        border: color::RED.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_7,
                        icon: color::RED,
                        placeholder: color::GREY_4,
                        value: color::GREY_3,
                        selection: color::GREY_5,
                        border: color::RED.into(),
                    },
                },
            },
        }
    }
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}
