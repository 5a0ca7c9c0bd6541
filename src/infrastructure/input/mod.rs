//! Piped input adapters

mod stdin;

pub use stdin::StdinInput;
