//!
//! Common imports for working with notibus.
//!
//! ```rust
//! use notibus::prelude::*;
//! ```
//!

pub use notibus_core::{Notifier, Subscriber};

pub use notibus_notifiers::func::FnSubscriber;

#[cfg(feature = "std")]
pub use notibus_notifiers::{
    channel::{ChannelNotifier, ChannelSubscriber},
    local::{LocalNotifier, PublishErrors, SubscriptionId},
};

#[cfg(feature = "tracing")]
pub use notibus_notifiers::tracing::TracingSubscriber;
