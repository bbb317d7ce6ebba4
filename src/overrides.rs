//! User-entered sprinkling amounts.
//!
//! Values are keyed by the selected entity and the day's position in its
//! series. The store is copy-on-write: [`SprinklingOverrides::set`] returns a
//! new handle and leaves every earlier handle untouched.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::geometry::PixelIndex;
use crate::selection::Selection;

/// The entity a sprinkling value belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SelectionIdentity {
    /// A plot, by its id.
    Plot(String),
    /// A grid cell.
    Pixel(PixelIndex),
}

impl SelectionIdentity {
    /// Identity of a selection; `None` for the empty selection.
    pub fn from_selection(selection: &Selection) -> Option<Self> {
        match selection {
            Selection::None => None,
            Selection::Plot(id) => Some(Self::Plot(id.clone())),
            Selection::Pixel(index) => Some(Self::Pixel(*index)),
        }
    }
}

/// Key of one override: an entity and a day index into its series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverrideKey {
    /// Plot or pixel the value belongs to.
    pub identity: SelectionIdentity,
    /// Index into the entity's day series.
    pub day: usize,
}

impl OverrideKey {
    /// Create a key.
    pub fn new(identity: SelectionIdentity, day: usize) -> Self {
        Self { identity, day }
    }
}

/// Formats as `{plot}-{day}` or `{row},{col}-{day}`.
impl fmt::Display for OverrideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.identity {
            SelectionIdentity::Plot(id) => write!(f, "{}-{}", id, self.day),
            SelectionIdentity::Pixel(p) => write!(f, "{},{}-{}", p.row, p.col, self.day),
        }
    }
}

/// Copy-on-write map of sprinkling amounts in mm.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SprinklingOverrides {
    values: Arc<HashMap<OverrideKey, f64>>,
}

impl SprinklingOverrides {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored amount, 0 when nothing was entered.
    pub fn get(&self, key: &OverrideKey) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    /// A store with `key` set to `value`. `self` is not modified.
    pub fn set(&self, key: OverrideKey, value: f64) -> Self {
        let mut next = self.clone();
        Arc::make_mut(&mut next.values).insert(key, value);
        next
    }

    /// Number of entered values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been entered yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&OverrideKey, f64)> {
        self.values.iter().map(|(k, v)| (k, *v))
    }

    /// Sum of every entered amount.
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }
}
