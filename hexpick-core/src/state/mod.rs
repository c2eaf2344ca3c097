//! Picker state: the UI record, the copy reset timer and the picker that
//! owns both.

mod picker;
mod timer;
mod ui;

pub use picker::{ColorPicker, Intent};
pub use timer::{ResetTimer, TimerToken};
pub use ui::UiState;
