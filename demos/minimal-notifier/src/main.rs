//!
//! This example shows a minimal notifier fanning a greeting out to a
//! pair of console subscribers.
//!
//! The premise of this example is that the main loop will publish the
//! string "Hello World! <NUM>", where NUM is incremented with each
//! incremental publish, and every registered subscriber prints what it
//! heard.
//!

#![deny(missing_docs)]

use std::{thread::sleep, time::Duration};

use notibus_core::Notifier;
use notibus_notifiers::local::LocalNotifier;

use crossbeam::channel::unbounded;
use ctrlc;

pub mod console_subscriber;
use console_subscriber::ConsoleSubscriber;

fn main() {
    let mut notifier = LocalNotifier::new();
    notifier.subscribe(ConsoleSubscriber::new("subscriber-1"));
    notifier.subscribe(ConsoleSubscriber::new("subscriber-2"));

    let (tx, rx) = unbounded();
    ctrlc::set_handler(move || tx.send(true).expect("Could not send interrupt"))
        .expect("Error setting Ctrl-C handler");

    let mut count: u128 = 0;
    while rx.try_recv().is_err() {
        let message = format!("Hello World! {}", count);
        println!("Publishing: {}", message);
        notifier
            .publish(message)
            .expect("Console subscribers never fail");
        count = count.wrapping_add(1);
        sleep(Duration::from_millis(500));
    }
}
