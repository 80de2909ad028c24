//!
//! Subscribers for integration with the `tracing` ecosystem
//!
//! These are sink subscribers for observability: registering a
//! [`TracingSubscriber`] next to the real observers makes every published
//! payload show up in whatever `tracing` subscriber the host application
//! has installed, without touching the delivery path.
//!

use std::{convert::Infallible, fmt::Debug, marker::PhantomData};

use tracing::debug;

use notibus_core::Subscriber;

/// Subscriber that emits a `tracing` debug event for every payload it
/// receives.
pub struct TracingSubscriber<Payload: Debug> {
    /// Name recorded on each emitted event, to tell notifiers apart
    name: &'static str,
    /// Marker to denote the payload type observed by this subscriber
    _phantom: PhantomData<fn(&Payload)>,
}

impl<Payload: Debug> TracingSubscriber<Payload> {
    /// Create a new tracing subscriber that tags its events with the
    /// given name
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            _phantom: PhantomData,
        }
    }
}

impl<Payload: Debug> Subscriber for TracingSubscriber<Payload> {
    type Payload = Payload;
    type Error = Infallible;

    fn receive(&mut self, payload: &Self::Payload) -> Result<(), Self::Error> {
        debug!(notifier = self.name, payload = ?payload, "payload delivered");
        Ok(())
    }
}
