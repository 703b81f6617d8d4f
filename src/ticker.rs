//! Periodic clock source, run as its own spawnable unit independent of the
//! effect interpreter so it can be stopped on its own schedule.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::core::Msg;

pub struct Ticker {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Starts sending `Msg::Tick` at `tick_rate` on `sender` until `stop` is
    /// called or `sender` is disconnected. Jitter in the sleep is tolerated:
    /// the core only ever compares `happened_at` values, never tick counts.
    pub fn spawn(tick_rate: Duration, sender: Sender<Msg>) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_thread = Arc::clone(&running);

        let handle = std::thread::spawn(move || {
            while running_thread.load(Ordering::SeqCst) {
                std::thread::sleep(tick_rate);
                if !running_thread.load(Ordering::SeqCst) {
                    break;
                }
                if sender.send(Msg::Tick { happened_at: Instant::now() }).is_err() {
                    break;
                }
            }
        });

        Self { running, handle: Some(handle) }
    }

    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
