//! The pure core: `init`/`transition` plus the model/message/effect algebra.
//!
//! Nothing in this module performs I/O, reads a clock, or blocks. Every
//! timestamp comes in on a message; `transition` only ever compares
//! timestamps it was handed.

mod camera;
mod door;

use crate::config::Config;
use crate::image::Image;
use std::collections::VecDeque;
use std::time::Instant;

/// How many completed classify-runs the camera sub-machine keeps around for
/// diagnostics. The door policy only ever reads the most recent one.
const CLASSIFICATION_RUN_HISTORY: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBox {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    pub weight: f32,
    pub bounding_box: BoundingBox,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationRun {
    pub classifications: Vec<Classification>,
    pub images: Vec<Image>,
    pub finished_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraEvent {
    Connected,
    Disconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorEvent {
    Connected,
    Disconnected,
    Opened,
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Tick {
        happened_at: Instant,
    },
    CameraEvent {
        event: CameraEvent,
        happened_at: Instant,
    },
    DoorEvent {
        event: DoorEvent,
        happened_at: Instant,
    },
    ImageCaptureDone {
        images: Vec<Image>,
        happened_at: Instant,
    },
    ImageClassifyDone {
        run: ClassificationRun,
        happened_at: Instant,
    },
    DoorOpenDone {
        happened_at: Instant,
    },
    DoorCloseDone {
        happened_at: Instant,
    },
}

impl Msg {
    pub fn happened_at(&self) -> Instant {
        match self {
            Msg::Tick { happened_at }
            | Msg::CameraEvent { happened_at, .. }
            | Msg::DoorEvent { happened_at, .. }
            | Msg::ImageCaptureDone { happened_at, .. }
            | Msg::ImageClassifyDone { happened_at, .. }
            | Msg::DoorOpenDone { happened_at }
            | Msg::DoorCloseDone { happened_at } => *happened_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubscribeCamera,
    SubscribeDoor,
    SubscribeTick,
    CaptureImage,
    ClassifyImages { images: Vec<Image> },
    OpenDoor,
    CloseDoor,
}

impl Eq for Classification {}
impl Eq for BoundingBox {}
impl Eq for ClassificationRun {}

// f32 fields make a derived `Eq` unsound in general, but classifications are
// only ever compared in tests against exact literal values, never after
// arithmetic, so this is safe in practice. `PartialEq` alone is what the
// state machine itself uses.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnState {
    Connecting,
    Connected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelConnecting {
    pub camera: ConnState,
    pub door: ConnState,
}

impl ModelConnecting {
    fn init() -> Self {
        Self {
            camera: ConnState::Connecting,
            door: ConnState::Connecting,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraState {
    Idle,
    Capturing,
    Classifying,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraSub {
    pub state: CameraState,
    pub state_start_time: Instant,
    pub classification_runs: VecDeque<ClassificationRun>,
}

impl CameraSub {
    fn init(now: Instant) -> Self {
        Self {
            state: CameraState::Idle,
            state_start_time: now,
            classification_runs: VecDeque::new(),
        }
    }

    pub fn latest_classifications(&self) -> &[Classification] {
        match self.classification_runs.back() {
            Some(run) => &run.classifications,
            None => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Closed,
    WillOpen,
    Opened,
    WillClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorSub {
    pub state: DoorState,
    pub state_start_time: Instant,
}

impl DoorSub {
    fn init(now: Instant) -> Self {
        Self {
            state: DoorState::Closed,
            state_start_time: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelReady {
    pub camera: CameraSub,
    pub door: DoorSub,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Model {
    Connecting(ModelConnecting),
    Ready(ModelReady),
}

pub fn init() -> (Model, Vec<Effect>) {
    (
        Model::Connecting(ModelConnecting::init()),
        vec![Effect::SubscribeCamera, Effect::SubscribeDoor, Effect::SubscribeTick],
    )
}

pub fn transition(config: &Config, model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match model {
        Model::Connecting(connecting) => transition_connecting(connecting, msg),
        Model::Ready(ready) => transition_ready(config, ready, msg),
    }
}

fn transition_connecting(mut model: ModelConnecting, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        Msg::CameraEvent { event, .. } => {
            model.camera = match event {
                CameraEvent::Connected => ConnState::Connected,
                CameraEvent::Disconnected => ConnState::Connecting,
            };
        }
        Msg::DoorEvent { event, .. } => {
            model.door = match event {
                DoorEvent::Connected => ConnState::Connected,
                DoorEvent::Disconnected => ConnState::Connecting,
                DoorEvent::Opened | DoorEvent::Closed => return (Model::Connecting(model), vec![]),
            };
        }
        _ => return (Model::Connecting(model), vec![]),
    }

    if model.camera == ConnState::Connected && model.door == ConnState::Connected {
        let now = msg.happened_at();
        (
            Model::Ready(ModelReady {
                camera: CameraSub::init(now),
                door: DoorSub::init(now),
            }),
            vec![],
        )
    } else {
        (Model::Connecting(model), vec![])
    }
}

fn transition_ready(config: &Config, ready: ModelReady, msg: Msg) -> (Model, Vec<Effect>) {
    match &msg {
        Msg::CameraEvent { event: CameraEvent::Disconnected, .. } => {
            return (
                Model::Connecting(ModelConnecting {
                    camera: ConnState::Connecting,
                    door: ConnState::Connected,
                }),
                vec![],
            );
        }
        Msg::DoorEvent { event: DoorEvent::Disconnected, .. } => {
            return (
                Model::Connecting(ModelConnecting {
                    camera: ConnState::Connected,
                    door: ConnState::Connecting,
                }),
                vec![],
            );
        }
        _ => {}
    }

    let (camera, camera_effects) = camera::transition(config, ready.camera, &msg);
    let (door, door_effects) = door::transition(config, ready.door, &camera, &msg);

    let mut effects = door_effects;
    effects.extend(camera_effects);

    (Model::Ready(ModelReady { camera, door }), effects)
}
