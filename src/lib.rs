//! # Composable cursors over polymorphic appliance collections
//!
//! This library implements a small object model built around one idea:
//! traversal is a uniform, stateful cursor that can be produced by any
//! container and wrapped by any number of behavior-adding decorators.
//!
//! ## Core pieces
//!
//! 1. **Cursor contract**: `first`, `advance`, `is_done`, `current`
//! 2. **Two storage backends**: a capacity-doubling array and a native `Vec`
//! 3. **Decorators**: counting, skip-every-other, predicate filtering
//! 4. **Foreign adapter**: borrow any ordered std container as a cursor
//! 5. **Traversal driver**: visit every item through its capability set
//!
//! ## Usage Example
//!
//! ```
//! use kitchen_cursor::appliance::{showcase, Appliance, ApplianceKind};
//! use kitchen_cursor::collection::{Collection, VecCollection};
//! use kitchen_cursor::cursor::{Cursor, CursorExt, Filter};
//!
//! let kitchen: VecCollection<_> = showcase().into_iter().collect();
//! let blenders = Filter::kind(kitchen.make_cursor(), ApplianceKind::Blender).counting();
//! let names: Vec<_> = blenders.walk().map(|a| a.name().to_string()).collect();
//! assert_eq!(names.len(), 2);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod appliance;  // Item capability set, models, start strategies, factory
pub mod collection; // Owning collections and their base cursors
pub mod config;     // Traversal configuration
pub mod cursor;     // Cursor contract, decorators, foreign adapter
pub mod driver;     // Generic "visit all" traversal

// Re-exports for convenience
pub use appliance::{Appliance, ApplianceKind, StartMode};
pub use collection::{ArrayCollection, Collection, VecCollection};
pub use config::{Backend, Decoration, TraversalConfig};
pub use cursor::{BoxCursor, Counting, Cursor, CursorExt, Filter, ForeignCursor, Skip};
pub use driver::{visit_all, Visit};

use thiserror::Error;

/// Errors raised while parsing names or validating configuration.
///
/// Traversal itself never fails: absence of an item is the `None` sentinel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KitchenError {
    /// Appliance kind name not recognised
    #[error("unknown appliance kind: {0}")]
    UnknownKind(String),

    /// Start mode name not recognised
    #[error("unknown start mode: {0}")]
    UnknownStartMode(String),

    /// Storage backend name not recognised
    #[error("unknown backend: {0}")]
    UnknownBackend(String),

    /// Cursor decoration name not recognised
    #[error("unknown decoration: {0}")]
    UnknownDecoration(String),

    /// Configuration values out of range
    #[error("invalid traversal configuration: {0}")]
    InvalidConfiguration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = KitchenError::UnknownKind("toaster".to_string());
        assert_eq!(err.to_string(), "unknown appliance kind: toaster");

        let err = KitchenError::InvalidConfiguration("items must be > 0".to_string());
        assert!(err.to_string().contains("items must be > 0"));
    }
}
