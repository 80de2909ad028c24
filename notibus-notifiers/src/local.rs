//!
//! Local Notifier
//!
//! The local notifier owns its subscribers directly and invokes each of
//! them synchronously from `publish`, in the order they were registered.
//! It is the single-threaded reference notifier: `publish` returns only
//! after every subscriber has returned.
//!
//! Because `publish` takes `&mut self`, a subscriber cannot re-enter the
//! notifier that is invoking it, so the set of notified subscribers is
//! always exactly the set registered when `publish` was called.
//!

use std::fmt;

use notibus_core::{Notifier, Subscriber};

/// Handle identifying a single registration with a [`LocalNotifier`].
///
/// Registering equivalent subscribers twice is permitted and yields two
/// distinct handles; each registration is delivered to separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// An aggregate error from publishing over a [`LocalNotifier`].
///
/// Every subscriber registered at the time of the publish call was invoked
/// before this error was returned; a failing subscriber never prevents
/// delivery to the subscribers registered after it.
#[derive(Debug, PartialEq, Eq)]
pub struct PublishErrors<Error> {
    /// The failed registrations with their errors, in delivery order
    pub failures: Vec<(SubscriptionId, Error)>,
}

impl<Error> fmt::Display for PublishErrors<Error> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} subscriber(s) failed during publish", self.failures.len())
    }
}

impl<Error: fmt::Debug> std::error::Error for PublishErrors<Error> {}

/// Local Notifier that holds an ordered sequence of boxed subscribers and
/// invokes every one of them synchronously on each publish
pub struct LocalNotifier<Payload, Error> {
    /// The registered subscribers, in registration order
    subscribers: Vec<(
        SubscriptionId,
        Box<dyn Subscriber<Payload = Payload, Error = Error>>,
    )>,
    /// The id handed out to the next registration
    next_id: u64,
}

impl<Payload, Error> LocalNotifier<Payload, Error> {
    /// Create a new local notifier with no registered subscribers
    pub const fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Append a subscriber to the end of the registration sequence.
    ///
    /// Returns a [`SubscriptionId`] usable for later removal.  The same
    /// underlying observer may be registered any number of times; each
    /// registration receives its own id and its own deliveries.
    pub fn subscribe<S>(&mut self, subscriber: S) -> SubscriptionId
    where
        S: Subscriber<Payload = Payload, Error = Error> + 'static,
    {
        self.subscribe_boxed(Box::new(subscriber))
    }

    /// Append an already-boxed subscriber to the end of the registration
    /// sequence.
    pub fn subscribe_boxed(
        &mut self,
        subscriber: Box<dyn Subscriber<Payload = Payload, Error = Error>>,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, subscriber));
        id
    }

    /// Remove the registration with the given id.
    ///
    /// Returns whether a registration was removed; unsubscribing an id
    /// that is not registered is a no-op.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.subscribers.iter().position(|(sub_id, _)| *sub_id == id) {
            Some(index) => {
                self.subscribers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Return the number of currently registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<Payload, Error> Default for LocalNotifier<Payload, Error> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Payload, Error> Notifier for LocalNotifier<Payload, Error> {
    type Payload = Payload;
    type Error = PublishErrors<Error>;

    /// Invoke every registered subscriber with a borrow of the payload,
    /// in registration order.
    ///
    /// Subscriber errors are collected while delivery continues; after
    /// every subscriber has been invoked the failures (if any) are
    /// returned as an aggregate [`PublishErrors`].
    fn publish(&mut self, payload: Self::Payload) -> Result<(), Self::Error> {
        let mut failures = Vec::new();
        for (id, subscriber) in self.subscribers.iter_mut() {
            if let Err(error) = subscriber.receive(&payload) {
                failures.push((*id, error));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(PublishErrors { failures })
        }
    }
}
