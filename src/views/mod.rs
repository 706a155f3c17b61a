pub mod dicom_panel;
pub mod file_picker;
pub mod image_viewer;
pub mod metadata_panel;
pub mod outcome;
pub mod plate_panel;

pub use dicom_panel::dicom_panel;
pub use file_picker::file_picker;
pub use image_viewer::image_panel;
pub use metadata_panel::metadata_panel;
pub use outcome::outcome_view;
pub use plate_panel::plate_panel;
