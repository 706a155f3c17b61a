#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Workspace {
    #[default]
    Plate,
    Dicom,
}

impl Workspace {
    pub fn title(self) -> &'static str {
        match self {
            Workspace::Plate => "License Plate",
            Workspace::Dicom => "DICOM Viewer",
        }
    }
}
