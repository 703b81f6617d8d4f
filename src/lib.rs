//! Smart pet door control core: a deterministic state machine plus the
//! effect interpreter that coordinates a camera, an image classifier, and a
//! door actuator into one hysteresis-and-debounce door policy.

pub mod camera;
pub mod classifier;
pub mod config;
pub mod core;
pub mod door;
pub mod image;
pub mod interpreter;
pub mod logger;
pub mod pubsub;
pub mod status;
pub mod supervisor;
pub mod ticker;

use crate::camera::interface::Camera;
use crate::classifier::interface::ImageClassifier;
use crate::config::{Config, ConfigError};
use crate::core::{Model, Msg};
use crate::door::interface::Door;
use crate::interpreter::Interpreter;
use crate::logger::interface::Logger;
use crate::supervisor::Supervisor;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

/// The facade external callers construct. Owns a `Supervisor` and the
/// collaborators it was wired with.
pub struct SmartDogDoor {
    supervisor: Arc<Supervisor>,
}

impl SmartDogDoor {
    /// Validates `config` and wires the supervisor. Returns a `ConfigError`
    /// synchronously rather than starting with an invalid policy.
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger>,
        camera: Arc<dyn Camera>,
        door: Arc<dyn Door>,
        classifier: Arc<dyn ImageClassifier>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let interpreter = Interpreter::new(logger.clone(), camera, door, classifier);
        let supervisor = Arc::new(Supervisor::new(config, logger, interpreter));

        Ok(Self { supervisor })
    }

    pub fn start(&self) {
        self.supervisor.start();
    }

    pub fn stop(&self) {
        self.supervisor.stop();
    }

    /// Every model produced by the supervisor, including the initial one.
    /// Late subscribers receive the current/last model first (replay-1).
    pub fn models(&self) -> Receiver<Model> {
        self.supervisor.models.subscribe()
    }

    /// Every message consumed by the supervisor.
    pub fn msgs(&self) -> Receiver<Msg> {
        self.supervisor.msgs.subscribe()
    }
}
