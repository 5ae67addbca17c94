pub mod accordion;
pub mod button;
pub mod icon_button;
pub mod text_area;
pub mod text_input;
