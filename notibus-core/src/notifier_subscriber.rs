//!
//! Notifier -> Subscriber Communication
//!
//! Notifiers deliver payloads synchronously to the subscribers registered
//! with them.  Subscribers are capabilities: anything that can be invoked
//! with a borrowed payload, including values that close over external state.
//!
//! Registration is not part of the [`Notifier`] trait because each notifier
//! hands out its own registration surface (subscription handles, channel
//! receivers, ...).  Concrete notifiers expose `subscribe`/`unsubscribe` as
//! inherent methods instead.
//!

/// The basic subscriber trait that enables a value to be handed payloads
/// by a notifier.
///
/// Invalid registrations cannot exist at runtime: only `Subscriber`
/// implementors can be registered with a notifier, so the type system
/// rejects non-invocable subscribers at compile time.
pub trait Subscriber {
    /// The type of payload delivered to this subscriber
    type Payload;
    /// The error type from attempting to receive a payload
    type Error;

    /// Receive a single payload delivered by a notifier.
    ///
    /// The payload is borrowed so that every subscriber of a given publish
    /// call observes the same value.
    fn receive(&mut self, payload: &Self::Payload) -> Result<(), Self::Error>;
}

/// The basic notifier trait that enables the delivery of payloads to a
/// set of registered subscribers.
pub trait Notifier {
    /// The payload delivered to subscribers by the notifier
    type Payload;
    /// The error type from attempting to publish a payload
    type Error;

    /// Publish a payload to every subscriber registered at the moment of
    /// the call, in registration order.
    fn publish(&mut self, payload: Self::Payload) -> Result<(), Self::Error>;
}
