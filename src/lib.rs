//! # DSA Basics
//!
//! Textbook containers built on a capacity-doubling slot buffer.
//!
//! ## Containers
//!
//! 1. **Stack** - growable LIFO stack; popping an empty stack is an error
//! 2. **ArrayList** - append-only dynamic array
//! 3. **LinkedList** - singly linked list with inserts and deletes at both ends
//!
//! ## Running the demos
//!
//! ```bash
//! cargo run --bin stack_demo
//! cargo run --bin array_list_demo
//! RUST_LOG=debug cargo run --bin linked_list_demo
//!
//! # optional growth config (TOML or JSON)
//! cargo run --bin stack_demo -- growth.toml
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - the `DsaError` enum
//! - `serde`, `toml`, `serde_json` - `GrowthConfig` loading
//! - `log` - empty-container warnings and resize events

mod buffer;

pub mod array_list;
pub mod config;
pub mod error;
pub mod linked_list;
pub mod stack;

pub use array_list::ArrayList;
pub use config::GrowthConfig;
pub use error::{DsaError, Result};
pub use linked_list::LinkedList;
pub use stack::Stack;
