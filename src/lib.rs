//! HookNotify - desktop notifications for coding-assistant hook events
//!
//! This crate turns a hook payload (piped on stdin or passed explicitly)
//! into a single title/message pair and shows it through the first
//! desktop notification backend that works.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Resolved notification record, hook payload schema, config, errors
//! - **Application**: Input resolver, payload parser, dispatcher, and port traits
//! - **Infrastructure**: Adapters (notify-rust, notify-send, stdin, log file, config file)
//! - **CLI**: Command-line interface, argument parsing, and the main runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
