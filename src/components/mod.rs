pub mod banner;
pub mod segmented_toggle;

pub use banner::{banner, Tone};
pub use segmented_toggle::workspace_toggle;
