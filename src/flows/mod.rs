pub mod dicom;
pub mod plate;

pub use dicom::{AdjustTicket, DicomFlow, DicomStudyView, LoadTicket, LoadedStudy, WindowingState};
pub use plate::{PlateDetection, PlateFlow};
