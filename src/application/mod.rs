//! Application layer - Use cases and port interfaces
//!
//! Contains the notification pipeline (resolve, parse, dispatch)
//! and trait definitions for external system interactions.

pub mod dispatch;
pub mod parse;
pub mod ports;
pub mod resolve;

// Re-export use cases
pub use dispatch::{DispatchCallbacks, NotificationDispatcher};
pub use parse::PayloadParser;
pub use resolve::{InputResolver, RawInput, ResolveOptions};
