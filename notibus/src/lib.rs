//!
//! # Notibus
//!
//! Notibus is a minimal publish/subscribe library built around a single
//! idea: a **notifier** holds an ordered collection of **subscribers** and
//! delivers each published **payload** to every one of them, synchronously
//! and in registration order.
//!
//! ## Description
//!
//! The library is the generalized form of the classic Observer pattern:
//! instead of branching on concrete observer types, everything that wants
//! to be notified implements the uniform [`Subscriber`](core::Subscriber)
//! capability and is registered with a notifier.  The notifier is an
//! explicitly constructed value that the application passes to whoever
//! needs it; there is no hidden global instance, which keeps the whole
//! arrangement testable.
//!
//! ## Technical Overview
//!
//! Two notifiers are provided:
//!
//! * [`LocalNotifier`](notifiers::local::LocalNotifier) is the
//!   single-threaded reference notifier.  `publish` invokes every
//!   registered subscriber before returning, collects any subscriber
//!   errors, and reports them as an aggregate after all deliveries were
//!   attempted, so one failing observer never starves the rest.
//! * [`ChannelNotifier`](notifiers::channel::ChannelNotifier) is the
//!   multi-threaded adaptation.  The registration sequence lives behind a
//!   mutex and payloads are fanned out over crossbeam channels; consumers
//!   drain their queues at their own pace.
//!
//! Plain closures become subscribers through
//! [`FnSubscriber`](notifiers::func::FnSubscriber), and with the `tracing`
//! feature every published payload can additionally be mirrored into the
//! host application's `tracing` pipeline.
//!

pub mod prelude;

/// Notibus Core Traits
pub use notibus_core as core;
/// Notibus Notifiers and Subscribers
pub use notibus_notifiers as notifiers;
