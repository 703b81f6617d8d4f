//! Executes effects against the three collaborators, converting results and
//! collaborator events into messages. Each effect runs on its own thread so
//! a slow classify call or a blocking actuator RPC never stalls the
//! supervisor loop.

use crate::camera::interface::{Camera, CameraEvent as CollaboratorCameraEvent};
use crate::classifier::interface::ImageClassifier;
use crate::core::{CameraEvent, DoorEvent, Effect, Msg};
use crate::door::interface::{Door, DoorEvent as CollaboratorDoorEvent};
use crate::logger::interface::Logger;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Instant;

#[derive(Clone)]
pub struct Interpreter {
    logger: Arc<dyn Logger>,
    camera: Arc<dyn Camera>,
    door: Arc<dyn Door>,
    classifier: Arc<dyn ImageClassifier>,
}

impl Interpreter {
    pub fn new(
        logger: Arc<dyn Logger>,
        camera: Arc<dyn Camera>,
        door: Arc<dyn Door>,
        classifier: Arc<dyn ImageClassifier>,
    ) -> Self {
        Self { logger: logger.with_namespace("interpreter"), camera, door, classifier }
    }

    /// Spawns a worker thread to run `effect`, sending its resulting
    /// message(s) on `sender`. Never blocks the caller.
    pub fn dispatch(&self, effect: Effect, sender: Sender<Msg>) {
        let interpreter = self.clone();
        std::thread::spawn(move || interpreter.run(effect, sender));
    }

    fn run(&self, effect: Effect, sender: Sender<Msg>) {
        let _ = self.logger.info(&format!("running effect: {effect:?}"));

        match effect {
            Effect::SubscribeCamera => {
                for event in self.camera.events() {
                    let mapped = match event {
                        CollaboratorCameraEvent::Connected => CameraEvent::Connected,
                        CollaboratorCameraEvent::Disconnected => CameraEvent::Disconnected,
                    };
                    if sender.send(Msg::CameraEvent { event: mapped, happened_at: Instant::now() }).is_err() {
                        return;
                    }
                }
            }

            Effect::SubscribeDoor => {
                for event in self.door.events() {
                    let mapped = match event {
                        CollaboratorDoorEvent::Connected => DoorEvent::Connected,
                        CollaboratorDoorEvent::Disconnected => DoorEvent::Disconnected,
                        CollaboratorDoorEvent::Opened => DoorEvent::Opened,
                        CollaboratorDoorEvent::Closed => DoorEvent::Closed,
                    };
                    if sender.send(Msg::DoorEvent { event: mapped, happened_at: Instant::now() }).is_err() {
                        return;
                    }
                }
            }

            Effect::SubscribeTick => {
                // Owned by `Ticker`; the supervisor spawns it separately so
                // it can be stopped independently of effect worker threads.
            }

            Effect::CaptureImage => {
                let images = self.camera.capture().unwrap_or_else(|err| {
                    let _ = self.logger.warn(&format!("capture failed: {err}"));
                    vec![]
                });
                let _ = sender.send(Msg::ImageCaptureDone { images, happened_at: Instant::now() });
            }

            Effect::ClassifyImages { images } => {
                let classifications = self.classifier.classify(&images).unwrap_or_else(|err| {
                    let _ = self.logger.warn(&format!("classify failed: {err}"));
                    vec![]
                });
                let now = Instant::now();
                let run = crate::core::ClassificationRun { classifications, images, finished_at: now };
                let _ = sender.send(Msg::ImageClassifyDone { run, happened_at: now });
            }

            Effect::OpenDoor => {
                if let Err(err) = self.door.open() {
                    let _ = self.logger.warn(&format!("open failed: {err}"));
                }
                let _ = sender.send(Msg::DoorOpenDone { happened_at: Instant::now() });
            }

            Effect::CloseDoor => {
                if let Err(err) = self.door.close() {
                    let _ = self.logger.warn(&format!("close failed: {err}"));
                }
                let _ = sender.send(Msg::DoorCloseDone { happened_at: Instant::now() });
            }
        }
    }
}
