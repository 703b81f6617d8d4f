use super::interface::{Door, DoorEvent};
use crate::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;

/// An in-memory door actuator that connects immediately and always succeeds.
pub struct DoorFake {
    logger: Arc<dyn Logger>,
    open: AtomicBool,
}

impl DoorFake {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger: logger.with_namespace("door_fake"), open: AtomicBool::new(false) }
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}

impl Door for DoorFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let _ = self.logger.info("starting");
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let _ = self.logger.info("stopping");
        Ok(())
    }

    fn open(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let _ = self.logger.info("opening");
        self.open.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn close(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let _ = self.logger.info("closing");
        self.open.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn events(&self) -> Receiver<DoorEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let _ = tx.send(DoorEvent::Connected);
        rx
    }
}
