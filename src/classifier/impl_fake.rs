use super::interface::ImageClassifier;
use crate::core::{BoundingBox, Classification};
use crate::image::Image;
use crate::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::sync::Arc;

/// Picks a random label from a small fixed pool and a random weight, useful
/// for demos and for driving the supervisor end to end without hardware.
pub struct ImageClassifierFake {
    logger: Arc<dyn Logger>,
    labels: Vec<&'static str>,
}

impl ImageClassifierFake {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger: logger.with_namespace("classifier_fake"),
            labels: vec!["dog", "cat", "none"],
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        images: &[Image],
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let _ = self.logger.info(&format!("classifying {} image(s)", images.len()));

        if images.is_empty() {
            return Ok(vec![]);
        }

        let mut rng = rand::rng();
        let label_dist = Uniform::new(0, self.labels.len())?;
        let weight_dist = Uniform::new(0.0_f32, 1.0_f32)?;

        let label = self.labels[label_dist.sample(&mut rng)];
        if label == "none" {
            return Ok(vec![]);
        }

        Ok(vec![Classification {
            label: label.to_string(),
            weight: weight_dist.sample(&mut rng),
            bounding_box: BoundingBox { x_min: 0.0, y_min: 0.0, x_max: 1.0, y_max: 1.0 },
        }])
    }
}
