use super::{CameraState, CameraSub, Effect, Msg, CLASSIFICATION_RUN_HISTORY};
use crate::config::Config;

pub fn transition(config: &Config, mut camera: CameraSub, msg: &Msg) -> (CameraSub, Vec<Effect>) {
    match (camera.state, msg) {
        (CameraState::Idle, Msg::Tick { happened_at }) => {
            let elapsed = happened_at.saturating_duration_since(camera.state_start_time);
            if elapsed > config.minimal_rate_camera_process {
                camera.state = CameraState::Capturing;
                camera.state_start_time = *happened_at;
                (camera, vec![Effect::CaptureImage])
            } else {
                (camera, vec![])
            }
        }

        (CameraState::Capturing, Msg::ImageCaptureDone { images, happened_at }) => {
            if images.is_empty() {
                camera.state = CameraState::Idle;
                camera.state_start_time = *happened_at;
                (camera, vec![])
            } else {
                camera.state = CameraState::Classifying;
                (camera, vec![Effect::ClassifyImages { images: images.clone() }])
            }
        }

        (CameraState::Classifying, Msg::ImageClassifyDone { run, happened_at }) => {
            camera.classification_runs.push_back(run.clone());
            while camera.classification_runs.len() > CLASSIFICATION_RUN_HISTORY {
                camera.classification_runs.pop_front();
            }
            camera.state = CameraState::Idle;
            camera.state_start_time = *happened_at;
            (camera, vec![])
        }

        _ => (camera, vec![]),
    }
}
