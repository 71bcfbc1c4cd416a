pub mod card;
pub mod ui_helpers;
