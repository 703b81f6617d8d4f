use super::interface::{Camera, CameraEvent};
use crate::image::Image;
use crate::logger::interface::Logger;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;

/// A camera that connects immediately and always hands back one blank frame.
pub struct CameraFake {
    logger: Arc<dyn Logger>,
    connected: AtomicBool,
}

impl CameraFake {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            logger: logger.with_namespace("camera_fake"),
            connected: AtomicBool::new(false),
        }
    }
}

impl Camera for CameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let _ = self.logger.info("starting");
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let _ = self.logger.info("stopping");
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn capture(&self) -> Result<Vec<Image>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(vec![Image::new(4, 4, 3, vec![0; 4 * 4 * 3])])
    }

    fn events(&self) -> Receiver<CameraEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let _ = tx.send(CameraEvent::Connected);
        rx
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }
}
