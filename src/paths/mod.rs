//! Coordination-tree path scheme.
//!
//! # Data Flow
//! ```text
//! (entity kind, identifiers)
//!     → scheme.rs (pure string construction)
//!     → canonical tree path
//!     → consumed by registry writers and tree watchers
//! ```
//!
//! # Design Decisions
//! - The tree layout is a wire contract: every writer and watcher must
//!   agree on it byte-for-byte, so all separators and parent nodes are
//!   fixed constants
//! - Builders are pure functions with no validation; malformed segments
//!   are a caller-contract breach, not a recoverable error

pub mod scheme;

pub use scheme::app_auth_path;
pub use scheme::plugin_parent_path;
pub use scheme::plugin_path;
pub use scheme::rule_parent_path;
pub use scheme::rule_path;
pub use scheme::selector_parent_path;
pub use scheme::selector_path;
pub use scheme::split_rule_key;
