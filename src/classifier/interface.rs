use crate::core::Classification;
use crate::image::Image;

/// Deterministic for a given input batch and loaded model. The model itself
/// is out of scope; the core depends only on this interface.
pub trait ImageClassifier: Send + Sync {
    fn classify(
        &self,
        images: &[Image],
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;
}
