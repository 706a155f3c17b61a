pub mod formatting;

pub use formatting::{format_confidence, format_dimensions};
