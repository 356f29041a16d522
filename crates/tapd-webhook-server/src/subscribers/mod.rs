//! Built-in subscribers.

pub mod log;

pub use log::LogSubscriber;
