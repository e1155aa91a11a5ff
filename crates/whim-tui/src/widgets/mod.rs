//! UI widgets

pub mod input_box;
pub mod wheel;

pub use input_box::InputBox;
pub use wheel::WheelWidget;
