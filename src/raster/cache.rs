//! Memoized overlays.

use std::collections::HashMap;
use std::sync::Arc;

use super::{rasterize, to_data_uri, ColorScale};
use crate::analytics::format_day;
use crate::data::{FarmData, Metric};
use crate::error::{GrowflowError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct OverlayKey {
    day: String,
    metric: Metric,
    domain: (u64, u64),
    colors: (super::Rgb, super::Rgb),
}

/// Data URIs of rendered overlays, keyed by day, metric and color scale.
///
/// The dataset is immutable after loading, so an entry never goes stale.
#[derive(Debug, Default)]
pub struct OverlayCache {
    entries: HashMap<OverlayKey, Arc<str>>,
}

impl OverlayCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached overlays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been rendered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the overlay for `date` and `metric`, rendering it on first use.
    pub fn get_or_render(
        &mut self,
        data: &FarmData,
        date: &str,
        metric: Metric,
        scale: &ColorScale,
    ) -> Result<Arc<str>> {
        let (min, max) = scale.domain();
        let key = OverlayKey {
            day: format_day(date),
            metric,
            domain: (min.to_bits(), max.to_bits()),
            colors: (scale.from(), scale.to()),
        };
        if let Some(uri) = self.entries.get(&key) {
            return Ok(Arc::clone(uri));
        }

        let day = data
            .pixel_day(date)
            .ok_or_else(|| GrowflowError::not_found(format!("pixel data for {}", date)))?;
        let png = rasterize(day.layer(metric).view(), scale)?;
        let uri: Arc<str> = Arc::from(to_data_uri(&png));

        tracing::debug!("Cached {} overlay for {}", metric, key.day);
        self.entries.insert(key, Arc::clone(&uri));
        Ok(uri)
    }
}
