pub mod button;
pub mod card;
pub mod form;
pub mod text;
pub mod toast;
