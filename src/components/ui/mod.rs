pub mod class_names;
pub mod input;
pub mod spinner;

// Re-export component symbols so callers can `use crate::components::ui::StyledInput` etc.
pub use class_names::*;
pub use input::*;
pub use spinner::*;
