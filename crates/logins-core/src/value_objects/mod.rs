//! Value objects - immutable types that represent domain concepts

mod page_window;

pub use page_window::{PageBounds, PageWindow, PageWindowParseError};
