//!
//! Closure-Backed Subscribers
//!
//! Most subscribers are one-off observers that append to a log, poke a
//! counter, or forward the payload somewhere else.  [`FnSubscriber`] wraps
//! a plain closure into the [`Subscriber`] trait so callers can register
//! such observers without defining a new type.
//!

use core::marker::PhantomData;

use notibus_core::Subscriber;

/// Subscriber backed by a closure.
///
/// The closure is invoked once per delivered payload and may close over
/// external state (the caller retains ownership of anything shared through
/// `Rc`/`Arc`).
pub struct FnSubscriber<Payload, Error, F: FnMut(&Payload) -> Result<(), Error>> {
    /// The closure invoked for each delivered payload
    callback: F,
    /// Marker binding this subscriber to its payload and error types
    _marker: PhantomData<fn(&Payload) -> Result<(), Error>>,
}

impl<Payload, Error, F: FnMut(&Payload) -> Result<(), Error>> FnSubscriber<Payload, Error, F> {
    /// Wrap a closure into a subscriber.
    pub fn new(callback: F) -> Self {
        Self {
            callback,
            _marker: PhantomData,
        }
    }
}

impl<Payload, Error, F: FnMut(&Payload) -> Result<(), Error>> Subscriber
    for FnSubscriber<Payload, Error, F>
{
    type Payload = Payload;
    type Error = Error;

    fn receive(&mut self, payload: &Self::Payload) -> Result<(), Self::Error> {
        (self.callback)(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// Test that a closure-backed subscriber observes the payloads it is
    /// handed, in order
    fn test_fn_subscriber_receives_payloads() {
        let mut seen = Vec::new();
        {
            let mut subscriber =
                FnSubscriber::new(|payload: &u8| -> Result<(), ()> {
                    seen.push(*payload);
                    Ok(())
                });
            subscriber.receive(&1).unwrap();
            subscriber.receive(&2).unwrap();
        }
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    /// Test that an error returned by the closure is propagated to the
    /// caller
    fn test_fn_subscriber_propagates_errors() {
        let mut subscriber = FnSubscriber::new(|payload: &u8| {
            if *payload == 0 {
                Err("zero payload")
            } else {
                Ok(())
            }
        });
        assert_eq!(subscriber.receive(&1), Ok(()));
        assert_eq!(subscriber.receive(&0), Err("zero payload"));
    }
}
