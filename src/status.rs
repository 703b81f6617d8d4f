//! Pure status derivations consumed by presentation layers. Presentation
//! layers must not pattern-match on `Model` directly — these two functions
//! are the only sanctioned views over it.

use crate::config::Config;
use crate::core::{Classification, ConnState, DoorState, Model};
use std::time::Instant;

pub fn door_status(model: &Model, now: Instant, config: &Config) -> String {
    match model {
        Model::Connecting(connecting) => match connecting.door {
            ConnState::Connecting => "Connecting".to_string(),
            ConnState::Connected => "Connected".to_string(),
        },
        Model::Ready(ready) => match ready.door.state {
            DoorState::Opened => "Opened".to_string(),
            DoorState::Closed => "Closed".to_string(),
            DoorState::WillOpen => {
                format!("Will open in {} seconds", seconds_remaining(ready.door.state_start_time, config.minimal_duration_will_open, now))
            }
            DoorState::WillClose => {
                format!("Will close in {} seconds", seconds_remaining(ready.door.state_start_time, config.minimal_duration_will_close, now))
            }
        },
    }
}

fn seconds_remaining(state_start_time: Instant, minimal_duration: std::time::Duration, now: Instant) -> u64 {
    let deadline = state_start_time + minimal_duration;
    let remaining = deadline.saturating_duration_since(now);
    remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
}

pub fn latest_classifications(model: &Model) -> &[Classification] {
    match model {
        Model::Connecting(_) => &[],
        Model::Ready(ready) => ready.camera.latest_classifications(),
    }
}
