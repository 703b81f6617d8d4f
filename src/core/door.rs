use super::{CameraSub, DoorEvent, DoorState, DoorSub, Effect, Msg};
use crate::config::Config;

/// Reconciles `DoorEvent(Opened|Closed)` against the model's door state.
///
/// Physical door events are authoritative for the terminal states but never
/// cancel an in-progress debounce window (`WillOpen`/`WillClose`).
fn reconcile_event(mut door: DoorSub, event: DoorEvent, happened_at: std::time::Instant) -> DoorSub {
    match (door.state, event) {
        (DoorState::Closed, DoorEvent::Opened) => {
            door.state = DoorState::Opened;
            door.state_start_time = happened_at;
        }
        (DoorState::Opened, DoorEvent::Closed) => {
            door.state = DoorState::Closed;
            door.state_start_time = happened_at;
        }
        _ => {}
    }
    door
}

pub fn transition(
    config: &Config,
    door: DoorSub,
    camera: &CameraSub,
    msg: &Msg,
) -> (DoorSub, Vec<Effect>) {
    match msg {
        Msg::DoorEvent { event, happened_at } => (reconcile_event(door, *event, *happened_at), vec![]),

        Msg::Tick { happened_at } => transition_tick(config, door, camera, *happened_at),

        _ => (door, vec![]),
    }
}

fn transition_tick(
    config: &Config,
    mut door: DoorSub,
    camera: &CameraSub,
    now: std::time::Instant,
) -> (DoorSub, Vec<Effect>) {
    let latest = camera.latest_classifications();
    let should_open = config.should_open(latest);
    let should_close = config.should_close(latest);

    match door.state {
        DoorState::Closed if should_open && !should_close => {
            door.state = DoorState::WillOpen;
            door.state_start_time = now;
            (door, vec![])
        }

        DoorState::WillOpen if should_close => {
            door.state = DoorState::Closed;
            door.state_start_time = now;
            (door, vec![])
        }

        DoorState::WillOpen
            if now.saturating_duration_since(door.state_start_time) >= config.minimal_duration_will_open =>
        {
            door.state = DoorState::Opened;
            door.state_start_time = now;
            (door, vec![Effect::OpenDoor])
        }

        DoorState::Opened if should_close || latest.is_empty() => {
            door.state = DoorState::WillClose;
            door.state_start_time = now;
            (door, vec![])
        }

        DoorState::WillClose if should_open && !should_close => {
            door.state = DoorState::Opened;
            door.state_start_time = now;
            (door, vec![])
        }

        DoorState::WillClose
            if now.saturating_duration_since(door.state_start_time) >= config.minimal_duration_will_close =>
        {
            door.state = DoorState::Closed;
            door.state_start_time = now;
            (door, vec![Effect::CloseDoor])
        }

        _ => (door, vec![]),
    }
}
