//! A tiny broadcast primitive with replay-1 semantics: every subscriber
//! first receives the most recently published value (if any), then every
//! value published after it subscribed.

use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

struct Inner<T> {
    last: Option<T>,
    subscribers: Vec<Sender<T>>,
}

#[derive(Clone)]
pub struct PubSub<T: Clone + Send + 'static> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T: Clone + Send + 'static> Default for PubSub<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> PubSub<T> {
    pub fn new() -> Self {
        Self { inner: Arc::new(Mutex::new(Inner { last: None, subscribers: Vec::new() })) }
    }

    pub fn publish(&self, value: T) {
        let mut inner = self.inner.lock().unwrap();
        inner.subscribers.retain(|subscriber| subscriber.send(value.clone()).is_ok());
        inner.last = Some(value);
    }

    /// Subscribes and, if a value has already been published, replays it
    /// immediately as the first item on the returned receiver.
    pub fn subscribe(&self) -> Receiver<T> {
        let (tx, rx) = channel();
        let mut inner = self.inner.lock().unwrap();
        if let Some(last) = &inner.last {
            let _ = tx.send(last.clone());
        }
        inner.subscribers.push(tx);
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn late_subscriber_replays_last_value() {
        let pubsub = PubSub::new();
        pubsub.publish(1);
        pubsub.publish(2);

        let rx = pubsub.subscribe();
        assert_eq!(rx.recv().unwrap(), 2);

        pubsub.publish(3);
        assert_eq!(rx.recv().unwrap(), 3);
    }

    #[test]
    fn subscriber_before_any_publish_gets_nothing_replayed() {
        let pubsub: PubSub<i32> = PubSub::new();
        let rx = pubsub.subscribe();
        pubsub.publish(10);
        assert_eq!(rx.recv().unwrap(), 10);
    }

    #[test]
    fn dropped_subscribers_are_pruned_on_next_publish() {
        let pubsub = PubSub::new();
        {
            let _rx = pubsub.subscribe();
        }
        pubsub.publish(1);
        assert_eq!(pubsub.inner.lock().unwrap().subscribers.len(), 0);
    }
}
