//! Terminal UI frontend for the marketplace client.
//!
//! This crate provides a terminal-based user interface implementing the
//! `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Takes ownership of the view model
//! - Subscribes to its event channel and re-renders on notifications
//! - Translates keystrokes into view-model intents

mod app;
mod config;
mod event;
mod input;
pub mod logging;
mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::CliConfig;
