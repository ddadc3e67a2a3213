pub mod layout;
mod orientation;
mod render;
mod types;

pub use layout::*;
pub use orientation::Rotation;
pub use render::{PageSink, render_sequence, render_sequence_with};
pub use types::*;
