//!
//! Notibus-Core is a collection of traits that layout the core of the
//! notibus publish/subscribe library.
//!

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#[cfg(feature = "alloc")]
extern crate alloc;

pub mod notifier_subscriber;
pub use notifier_subscriber::{Notifier, Subscriber};
