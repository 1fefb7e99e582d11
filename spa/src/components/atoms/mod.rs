pub mod input_text;
pub mod select;
pub mod toggle_switch;
