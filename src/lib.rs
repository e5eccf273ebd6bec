// src/lib.rs
//! In-memory username registry.
//!
//! A [`Registry`] answers whether a username is free, suggests alternatives
//! for taken ones, and counts how often each name is checked so the most
//! wanted one can be surfaced. All state lives for as long as the registry
//! does; nothing is persisted.
//!
//! ```
//! use std::sync::Arc;
//! use handle_registry::Registry;
//!
//! let reg = Arc::new(Registry::new());
//! reg.register("john_doe", 101);
//! assert!(!reg.check_availability("john_doe"));
//! assert_eq!(reg.suggest_alternatives("john_doe", 2), vec!["john_doe1", "john.doe"]);
//! assert_eq!(reg.most_attempted().as_deref(), Some("john_doe"));
//! ```

pub mod config;
pub mod registry;
pub mod suggest;

pub use config::RegistryConfig;
pub use registry::{OwnerId, Registry};
