use crate::image::Image;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraEvent {
    Connected,
    Disconnected,
}

/// A camera collaborator, consumed only through this interface. Real
/// backends (RTSP/USB/cloud SDK) are out of scope; only a fake
/// implementation lives in this crate.
pub trait Camera: Send + Sync {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Non-blocking: returns the latest cached frame(s), or none.
    fn capture(&self) -> Result<Vec<Image>, Box<dyn std::error::Error + Send + Sync>>;

    fn events(&self) -> Receiver<CameraEvent>;

    fn is_connected(&self) -> bool;
}
