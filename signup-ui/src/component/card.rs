use crate::{theme, widget::*};

pub fn simple<'a, T: 'a, C: Into<Element<'a, T>>>(content: C) -> Container<'a, T> {
    Container::new(content)
        .padding(30)
        .style(theme::card::simple)
}
