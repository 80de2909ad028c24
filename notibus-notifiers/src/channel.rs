//!
//! Channel Notifier
//!
//! The channel notifier is the multi-threaded adaptation of the local
//! notifier: the registration sequence lives behind a mutex and payloads
//! are fanned out over crossbeam channels, so publishing and consuming
//! may happen on different threads.  Each subscriber's queue receives
//! payloads in publish order.
//!
//! There is no explicit unsubscribe; dropping a [`ChannelSubscriber`]
//! disconnects its channel and the notifier prunes the dead sender on the
//! next publish.
//!

use std::{
    convert::Infallible,
    sync::{Arc, Mutex},
};

use crossbeam::channel::{self, Receiver, Sender, TryIter};

use notibus_core::{Notifier, Subscriber};

/// Channel Notifier that sends a clone of each published payload over a
/// crossbeam channel to every live subscriber
pub struct ChannelNotifier<Payload: Clone> {
    /// The transmit ends of the subscriber channels, in subscription order
    txs: Arc<Mutex<Vec<Sender<Payload>>>>,
}

/// Receiving end of a [`ChannelNotifier`] subscription.
///
/// Payloads queue up until they are drained; dropping the subscriber
/// unsubscribes it.
pub struct ChannelSubscriber<Payload> {
    /// The receiver end of the subscription channel
    rx: Receiver<Payload>,
}

impl<Payload: Clone> ChannelNotifier<Payload> {
    /// Create a new channel notifier with no subscribers
    pub fn new() -> Self {
        Self {
            txs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a new subscriber appended to the end of the subscription
    /// sequence
    pub fn subscribe(&mut self) -> ChannelSubscriber<Payload> {
        let mut txs = self.txs.lock().unwrap();
        let (tx, rx) = channel::unbounded();
        txs.push(tx);

        ChannelSubscriber { rx }
    }

    /// Return the number of subscribers that were live as of the last
    /// publish
    pub fn subscriber_count(&self) -> usize {
        self.txs.lock().unwrap().len()
    }
}

impl<Payload: Clone> Default for ChannelNotifier<Payload> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Payload: Clone> Clone for ChannelNotifier<Payload> {
    fn clone(&self) -> Self {
        Self {
            txs: self.txs.clone(),
        }
    }
}

impl<Payload: Clone> Notifier for ChannelNotifier<Payload> {
    type Payload = Payload;
    type Error = Infallible;

    /// Send a clone of the payload to every live subscriber in
    /// subscription order, pruning subscribers whose receiving end has
    /// been dropped.
    fn publish(&mut self, payload: Self::Payload) -> Result<(), Self::Error> {
        let mut txs = self.txs.lock().unwrap();
        txs.retain(|tx| tx.send(payload.clone()).is_ok());
        Ok(())
    }
}

impl<Payload> ChannelSubscriber<Payload> {
    /// Iterate over the payloads queued so far, oldest first, without
    /// blocking
    pub fn drain(&mut self) -> TryIter<'_, Payload> {
        self.rx.try_iter()
    }

    /// Replay the queued payloads into a subscriber, oldest first.
    ///
    /// Stops at the first subscriber error; the erroring payload is
    /// consumed, payloads not yet drained stay queued.
    pub fn forward<S>(&mut self, subscriber: &mut S) -> Result<(), S::Error>
    where
        S: Subscriber<Payload = Payload>,
    {
        for payload in self.rx.try_iter() {
            subscriber.receive(&payload)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::thread;

    use rand::random;

    use crate::func::FnSubscriber;

    #[test]
    /// Test that a fresh subscriber has no queued payloads
    fn test_subscribe_starts_empty() {
        let mut notifier: ChannelNotifier<u8> = ChannelNotifier::new();
        let mut subscriber = notifier.subscribe();
        assert_eq!(subscriber.drain().next(), None);
    }

    #[test]
    /// Test that every subscriber receives each published payload
    fn test_publish_reaches_every_subscriber() {
        let mut notifier: ChannelNotifier<u64> = ChannelNotifier::new();
        let mut first = notifier.subscribe();
        let mut second = notifier.subscribe();

        let payload: u64 = random();
        notifier.publish(payload).unwrap();

        assert_eq!(first.drain().collect::<Vec<_>>(), vec![payload]);
        assert_eq!(second.drain().collect::<Vec<_>>(), vec![payload]);
    }

    #[test]
    /// Test that payloads published from another thread arrive in publish
    /// order
    fn test_cross_thread_delivery_order() {
        let mut notifier: ChannelNotifier<u8> = ChannelNotifier::new();
        let mut subscriber = notifier.subscribe();

        let mut publisher = notifier.clone();
        let handle = thread::spawn(move || {
            for i in 0..10 {
                publisher.publish(i).unwrap();
            }
        });
        handle.join().unwrap();

        assert_eq!(
            subscriber.drain().collect::<Vec<_>>(),
            (0..10).collect::<Vec<_>>()
        );
    }

    #[test]
    /// Test that a dropped subscriber is pruned on the next publish
    fn test_dropped_subscriber_is_pruned() {
        let mut notifier: ChannelNotifier<u8> = ChannelNotifier::new();
        let mut kept = notifier.subscribe();
        let dropped = notifier.subscribe();
        drop(dropped);

        notifier.publish(7).unwrap();

        assert_eq!(notifier.subscriber_count(), 1);
        assert_eq!(kept.drain().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    /// Test that forwarding replays queued payloads into a subscriber and
    /// stops at the first subscriber error
    fn test_forward_stops_at_first_error() {
        let mut notifier: ChannelNotifier<u8> = ChannelNotifier::new();
        let mut subscriber = notifier.subscribe();
        for i in 1..=4 {
            notifier.publish(i).unwrap();
        }

        let mut seen = Vec::new();
        let mut observer = FnSubscriber::new(|payload: &u8| {
            if *payload == 3 {
                Err("rejected")
            } else {
                seen.push(*payload);
                Ok(())
            }
        });

        assert_eq!(subscriber.forward(&mut observer), Err("rejected"));
        drop(observer);
        assert_eq!(seen, vec![1, 2]);
        assert_eq!(subscriber.drain().collect::<Vec<_>>(), vec![4]);
    }
}
