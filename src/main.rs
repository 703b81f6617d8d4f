use smart_dog_door::camera::impl_fake::CameraFake;
use smart_dog_door::classifier::impl_fake::ImageClassifierFake;
use smart_dog_door::config::Config;
use smart_dog_door::door::impl_fake::DoorFake;
use smart_dog_door::logger::impl_console::ConsoleLogger;
use smart_dog_door::status::door_status;
use smart_dog_door::SmartDogDoor;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn smart_dog_door::logger::interface::Logger> =
        Arc::new(ConsoleLogger::new(mountain_standard_time()));

    let camera = Arc::new(CameraFake::new(logger.clone()));
    let door = Arc::new(DoorFake::new(logger.clone()));
    let classifier = Arc::new(ImageClassifierFake::new(logger.clone()));

    let smart_door = SmartDogDoor::new(config.clone(), logger.clone(), camera, door, classifier)?;

    let models = smart_door.models();
    smart_door.start();

    for model in models {
        let status = door_status(&model, std::time::Instant::now(), &config);
        let _ = logger.info(&format!("door status: {status}"));
    }

    smart_door.stop();
    Ok(())
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
