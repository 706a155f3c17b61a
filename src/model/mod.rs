pub mod image;
pub mod outcome;
pub mod selection;
pub mod window;
pub mod workspace;

pub use image::{decode_data_url, ImageDecodeError, RenderedImage};
pub use outcome::{FailureReport, OutcomePanel};
pub use selection::{FileSelection, ValidationError};
pub use window::{DecodedImageHandle, WindowBounds, WindowParameters};
pub use workspace::Workspace;
