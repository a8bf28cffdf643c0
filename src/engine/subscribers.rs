//! Emission subscribers.

use super::error::SubscriberError;
use std::fmt;

/// Receives the label of every emitted choice.
///
/// Any `FnMut(&str)` closure is a subscriber. Implement the trait directly
/// when a subscriber needs state of its own or can fail.
pub trait Subscriber {
    fn notify(&mut self, label: &str) -> Result<(), SubscriberError>;
}

impl<F: FnMut(&str)> Subscriber for F {
    fn notify(&mut self, label: &str) -> Result<(), SubscriberError> {
        self(label);
        Ok(())
    }
}

/// Registered subscribers, notified in registration order.
#[derive(Default)]
pub struct Subscribers {
    entries: Vec<Box<dyn Subscriber>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<S: Subscriber + 'static>(&mut self, subscriber: S) {
        self.entries.push(Box::new(subscriber));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Notify every subscriber of `label`.
    ///
    /// The first failure is returned as-is; subscribers after it are not
    /// notified.
    pub fn notify_all(&mut self, label: &str) -> Result<(), SubscriberError> {
        for subscriber in &mut self.entries {
            subscriber.notify(label)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.entries.len())
            .finish()
    }
}
