//! Traversal configuration
//!
//! Describes which backend to fill, how many items to create and which
//! decorators to stack on the resulting cursor.

use std::fmt;
use std::str::FromStr;

use crate::appliance::ApplianceKind;
use crate::KitchenError;

/// Upper bound on generated items.
pub const MAX_ITEMS: usize = 10_000;

/// Upper bound on stacked decorators.
pub const MAX_DECORATIONS: usize = 8;

/// Storage used for the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Capacity-doubling array collection
    #[default]
    Array,
    /// Native `Vec` collection
    Vec,
    /// Foreign `LinkedList` seen through the adapter
    List,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Array => "array",
            Backend::Vec => "vec",
            Backend::List => "list",
        };
        f.write_str(name)
    }
}

impl FromStr for Backend {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" => Ok(Backend::Array),
            "vec" | "vector" => Ok(Backend::Vec),
            "list" | "linked-list" => Ok(Backend::List),
            _ => Err(KitchenError::UnknownBackend(s.to_string())),
        }
    }
}

/// One decorator layer, applied innermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    /// Counting decorator
    Count,
    /// Skip every second element
    Skip,
    /// Keep only appliances of one kind
    Kind(ApplianceKind),
}

impl Decoration {
    /// Shorthand for the blender-only filter.
    pub const BLENDERS: Decoration = Decoration::Kind(ApplianceKind::Blender);
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decoration::Count => f.write_str("count"),
            Decoration::Skip => f.write_str("skip"),
            Decoration::Kind(kind) => write!(f, "kind={kind}"),
        }
    }
}

impl FromStr for Decoration {
    type Err = KitchenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(kind) = s.strip_prefix("kind=") {
            return kind
                .parse()
                .map(Decoration::Kind)
                .map_err(|_| KitchenError::UnknownDecoration(s.to_string()));
        }
        match s.to_ascii_lowercase().as_str() {
            "count" => Ok(Decoration::Count),
            "skip" => Ok(Decoration::Skip),
            "blenders" => Ok(Decoration::BLENDERS),
            _ => Err(KitchenError::UnknownDecoration(s.to_string())),
        }
    }
}

/// Configuration for one traversal run.
#[derive(Debug, Clone, PartialEq)]
pub struct TraversalConfig {
    /// Storage backend
    pub backend: Backend,
    /// Decorators, innermost first
    pub decorations: Vec<Decoration>,
    /// Random items to create; `None` uses the showcase lineup
    pub items: Option<usize>,
    /// RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl TraversalConfig {
    /// Plain traversal of the showcase lineup on `backend`.
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            decorations: Vec::new(),
            items: None,
            seed: None,
        }
    }

    /// Generate `items` random appliances instead of the showcase.
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    /// Fix the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Push one more decorator on the outside of the chain.
    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decorations.push(decoration);
        self
    }

    /// Whether a counting layer is present.
    pub fn counts(&self) -> bool {
        self.decorations.contains(&Decoration::Count)
    }

    /// Check ranges.
    pub fn validate(&self) -> Result<(), KitchenError> {
        if let Some(items) = self.items {
            if items == 0 {
                return Err(KitchenError::InvalidConfiguration(
                    "items must be > 0".to_string(),
                ));
            }
            if items > MAX_ITEMS {
                return Err(KitchenError::InvalidConfiguration(format!(
                    "items must be <= {MAX_ITEMS}, got {items}"
                )));
            }
        }
        if self.decorations.len() > MAX_DECORATIONS {
            return Err(KitchenError::InvalidConfiguration(format!(
                "at most {MAX_DECORATIONS} decorations, got {}",
                self.decorations.len()
            )));
        }
        Ok(())
    }
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self::new(Backend::default())
    }
}
