//! The single-writer loop: owns the model, serializes message delivery from
//! a bounded mailbox, calls the pure core, and hands effects to the
//! interpreter.

use crate::config::Config;
use crate::core::{init, transition, Effect, Model, Msg};
use crate::interpreter::Interpreter;
use crate::logger::interface::Logger;
use crate::pubsub::PubSub;
use crate::ticker::Ticker;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

/// How long the supervisor loop waits on an empty mailbox before checking
/// whether `stop()` was called.
const MAILBOX_POLL_TIMEOUT: Duration = Duration::from_millis(200);

/// Capacity of the bounded mailbox.
const MAILBOX_CAPACITY: usize = 256;

pub struct Supervisor {
    config: Config,
    logger: Arc<dyn Logger>,
    interpreter: Interpreter,
    sender: SyncSender<Msg>,
    receiver: Mutex<Option<Receiver<Msg>>>,
    running: Arc<AtomicBool>,
    loop_handle: Mutex<Option<JoinHandle<()>>>,
    ticker: Mutex<Option<Ticker>>,
    pub models: PubSub<Model>,
    pub msgs: PubSub<Msg>,
}

impl Supervisor {
    pub fn new(config: Config, logger: Arc<dyn Logger>, interpreter: Interpreter) -> Self {
        let (sender, receiver) = sync_channel(MAILBOX_CAPACITY);
        Self {
            config,
            logger: logger.with_namespace("supervisor"),
            interpreter,
            sender,
            receiver: Mutex::new(Some(receiver)),
            running: Arc::new(AtomicBool::new(false)),
            loop_handle: Mutex::new(None),
            ticker: Mutex::new(None),
            models: PubSub::new(),
            msgs: PubSub::new(),
        }
    }

    /// Runs `init`, publishes the initial model, dispatches the initial
    /// effects, and starts the mailbox loop on a dedicated thread.
    pub fn start(self: &Arc<Self>) {
        self.running.store(true, Ordering::SeqCst);

        let (model, effects) = init();
        self.models.publish(model.clone());
        self.dispatch(effects);

        *self.ticker.lock().unwrap() = Some(Ticker::spawn(self.config.tick_rate, self.sender.clone()));

        let receiver = self
            .receiver
            .lock()
            .unwrap()
            .take()
            .expect("Supervisor::start called more than once");

        let supervisor = Arc::clone(self);
        let handle = std::thread::spawn(move || supervisor.run_loop(model, receiver));
        *self.loop_handle.lock().unwrap() = Some(handle);
    }

    /// Signals the loop to exit and joins it. In-flight effect workers are
    /// abandoned; their completion messages are dropped once the mailbox
    /// receiver is gone.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(ticker) = self.ticker.lock().unwrap().as_mut() {
            ticker.stop();
        }
        if let Some(handle) = self.loop_handle.lock().unwrap().take() {
            let _ = handle.join();
        }
    }

    fn run_loop(&self, mut model: Model, receiver: Receiver<Msg>) {
        while self.running.load(Ordering::SeqCst) {
            let msg = match receiver.recv_timeout(MAILBOX_POLL_TIMEOUT) {
                Ok(msg) => msg,
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => continue,
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
            };

            self.msgs.publish(msg.clone());

            let (new_model, effects) = transition(&self.config, model, msg);
            model = new_model;

            self.models.publish(model.clone());
            self.dispatch(effects);
        }

        let _ = self.logger.info("supervisor loop exited");
    }

    fn dispatch(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.interpreter.dispatch(effect, self.sender.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::impl_fake::CameraFake;
    use crate::classifier::impl_fake::ImageClassifierFake;
    use crate::door::impl_fake::DoorFake;
    use crate::logger::impl_console::ConsoleLogger;
    use crate::status::door_status;
    use std::time::Duration as StdDuration;

    fn fixture() -> Arc<Supervisor> {
        let config = Config {
            tick_rate: StdDuration::from_millis(20),
            minimal_rate_camera_process: StdDuration::from_millis(5),
            ..Config::default()
        };
        let logger: Arc<dyn Logger> = Arc::new(ConsoleLogger::new(chrono::FixedOffset::east_opt(0).unwrap()));
        let camera = Arc::new(CameraFake::new(logger.clone()));
        let door = Arc::new(DoorFake::new(logger.clone()));
        let classifier = Arc::new(ImageClassifierFake::new(logger.clone()));
        let interpreter = Interpreter::new(logger.clone(), camera, door, classifier);
        Arc::new(Supervisor::new(config, logger, interpreter))
    }

    #[test]
    fn reaches_ready_and_can_be_stopped() {
        let supervisor = fixture();
        let models = supervisor.models.subscribe();
        supervisor.start();

        let deadline = std::time::Instant::now() + StdDuration::from_secs(5);
        let mut became_ready = false;
        while std::time::Instant::now() < deadline {
            match models.recv_timeout(StdDuration::from_millis(200)) {
                Ok(Model::Ready(_)) => {
                    became_ready = true;
                    break;
                }
                Ok(_) => continue,
                Err(_) => continue,
            }
        }

        supervisor.stop();
        assert!(became_ready, "supervisor never reached ModelReady");
    }

    #[test]
    fn door_status_is_observable_once_ready() {
        let supervisor = fixture();
        let models = supervisor.models.subscribe();
        supervisor.start();

        let deadline = std::time::Instant::now() + StdDuration::from_secs(5);
        let mut status = None;
        while std::time::Instant::now() < deadline {
            if let Ok(model @ Model::Ready(_)) = models.recv_timeout(StdDuration::from_millis(200)) {
                status = Some(door_status(&model, std::time::Instant::now(), &supervisor.config));
                break;
            }
        }

        supervisor.stop();
        assert_eq!(status, Some("Closed".to_string()));
    }
}
