//! Event loop wiring for the CLI client.

mod r#loop;

pub use r#loop::EventLoop;
