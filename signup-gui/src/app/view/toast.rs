use signup_ui::{component::toast, widget::*};

use crate::app::{message::Message, toast::Toasts};

/// Stack of notifications, newest at the bottom.
pub fn toasts_view(toasts: &Toasts) -> Element<'_, Message> {
    toasts
        .iter()
        .fold(Column::new().spacing(10), |col, t| {
            col.push(toast::toast(
                t.kind,
                &t.title,
                &t.description,
                Message::ToastDismiss(t.id),
            ))
        })
        .into()
}
