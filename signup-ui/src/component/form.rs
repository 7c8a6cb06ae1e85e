use iced::widget::text_input;
use iced::Length;

use crate::{component::text, theme, widget::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value<T> {
    pub value: T,
    pub warning: Option<&'static str>,
    pub valid: bool,
}

impl std::default::Default for Value<String> {
    fn default() -> Self {
        Self {
            value: String::new(),
            warning: None,
            valid: true,
        }
    }
}

impl Value<String> {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Flags the value as invalid with the given warning.
    pub fn invalidate(&mut self, warning: &'static str) {
        self.valid = false;
        self.warning = Some(warning);
    }
}

pub struct Form<'a, Message> {
    label: Option<&'static str>,
    input: TextInput<'a, Message>,
    warning: Option<&'static str>,
    valid: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &Value<String>, on_change: F) -> Self
    where
        F: 'static + Fn(String) -> Message,
    {
        Self {
            label: None,
            input: TextInput::new(placeholder, &value.value).on_input(on_change),
            warning: value.warning,
            valid: value.valid,
        }
    }

    /// Creates a new [`Form`] that has a disabled input.
    pub fn new_disabled(placeholder: &str, value: &Value<String>) -> Self {
        Self {
            label: None,
            input: TextInput::new(placeholder, &value.value),
            warning: value.warning,
            valid: value.valid,
        }
    }

    /// Sets the label displayed above the input.
    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Masks the input value when `secure` is true.
    pub fn secure(mut self, secure: bool) -> Self {
        self.input = self.input.secure(secure);
        self
    }

    pub fn on_submit(mut self, message: Message) -> Self {
        self.input = self.input.on_submit(message);
        self
    }

    pub fn id(mut self, id: &'static str) -> Self {
        self.input = self.input.id(text_input::Id::new(id));
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    /// Sets the [`Form`] with a text size
    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .push_maybe(form.label.map(text::p2_medium))
                .push(if !form.valid {
                    form.input.style(theme::text_input::invalid)
                } else {
                    form.input
                })
                .push_maybe(if !form.valid {
                    form.warning
                        .map(|message| text::caption(message).style(theme::text::error))
                } else {
                    None
                })
                .width(Length::Fill)
                .spacing(6),
        )
        .width(Length::Fill)
        .into()
    }
}

/// Moves keyboard focus to the input with the given id.
pub fn focus<T: Send + 'static>(id: &'static str) -> iced::Task<T> {
    text_input::focus(text_input::Id::new(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_value_is_empty_and_valid() {
        let value = Value::<String>::default();
        assert!(value.is_empty());
        assert!(value.valid);
        assert!(value.warning.is_none());
    }

    #[test]
    fn invalidate_sets_warning() {
        let mut value = Value::<String>::default();
        value.invalidate("This field is required");
        assert!(!value.valid);
        assert_eq!(value.warning, Some("This field is required"));
    }
}
