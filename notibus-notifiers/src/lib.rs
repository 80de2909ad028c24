//!
//! Notibus Notifiers and Subscribers
//!
//! This crate contains a set of commonly used notifiers and subscriber
//! adapters so that fanning a payload out to a set of observers is as
//! effortless as choosing the correct notifier.
//!

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
pub mod local;

#[cfg(feature = "std")]
pub mod channel;

pub mod func;

#[cfg(feature = "tracing")]
pub mod tracing;
