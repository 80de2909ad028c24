//!
//! Console Subscriber that prints the message "Hello World! {count}"
//! delivered to it by the notifier.
//!

use std::convert::Infallible;

use notibus_core::Subscriber;

/// Console subscriber that prints "I heard: {payload}" for every payload
/// delivered to it
pub struct ConsoleSubscriber {
    /// The name printed alongside each heard payload
    name: &'static str,
}

impl ConsoleSubscriber {
    /// Create a new console subscriber with a given name
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Subscriber for ConsoleSubscriber {
    type Payload = String;
    type Error = Infallible;

    fn receive(&mut self, payload: &Self::Payload) -> Result<(), Self::Error> {
        println!("[{}] I heard: {}", self.name, payload);
        Ok(())
    }
}
