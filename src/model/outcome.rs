use super::image::RenderedImage;

#[derive(Debug, Clone)]
pub enum OutcomePanel<T> {
    Hidden,
    Loading,
    Success(T),
    Failure(FailureReport),
}

impl<T> Default for OutcomePanel<T> {
    fn default() -> Self {
        OutcomePanel::Hidden
    }
}

impl<T> OutcomePanel<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, OutcomePanel::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            OutcomePanel::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn success_mut(&mut self) -> Option<&mut T> {
        match self {
            OutcomePanel::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&FailureReport> {
        match self {
            OutcomePanel::Failure(report) => Some(report),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FailureReport {
    pub title: String,
    pub message: String,
    pub image: Option<RenderedImage>,
}

impl FailureReport {
    pub fn new(title: &str, message: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            message: message.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, source: Option<String>) -> Self {
        self.image = source.map(RenderedImage::from_source);
        self
    }
}
