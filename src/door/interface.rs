use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorEvent {
    Connected,
    Disconnected,
    Opened,
    Closed,
}

/// A door actuator collaborator, consumed only through this interface.
/// `Opened`/`Closed` carry the physical actuator's own state so the door
/// sub-machine can reconcile against it.
pub trait Door: Send + Sync {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn open(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn close(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn events(&self) -> Receiver<DoorEvent>;
}
