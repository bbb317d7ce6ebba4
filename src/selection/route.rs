//! Navigation paths of the form `/map/:date?/:selectionType?/:selectionId?`.

use std::fmt;

use super::{resolve, validate, Selection, ValidSelection};
use crate::data::FarmData;

/// Parsed navigation path. Segments are kept raw until [`Route::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    /// Date segment.
    pub date: Option<String>,
    /// `plot` or `pixel`.
    pub selection_type: Option<String>,
    /// Plot id or `row-col` pixel id.
    pub selection_id: Option<String>,
}

/// What the front end should do with a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Render the date with the given selection.
    Show {
        /// Loaded date to render.
        date: String,
        /// Validated selection on that date.
        selection: ValidSelection,
    },
    /// Navigate to another path instead.
    Redirect(String),
}

impl Route {
    /// Parse a path. Anything outside `/map` yields the empty route.
    pub fn parse(path: &str) -> Self {
        let mut segments = path
            .trim()
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty());
        if segments.next() != Some("map") {
            return Self::default();
        }
        let mut next = || segments.next().map(str::to_string);
        Self {
            date: next(),
            selection_type: next(),
            selection_id: next(),
        }
    }

    /// Route pointing at a date without a selection.
    pub fn for_date(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            ..Self::default()
        }
    }

    /// Route pointing at a date and selection.
    pub fn for_selection(date: impl Into<String>, selection: &Selection) -> Self {
        Self {
            date: Some(date.into()),
            selection_type: selection.type_name().map(str::to_string),
            selection_id: selection.id(),
        }
    }

    /// Decide what to show for this route against the loaded dataset.
    ///
    /// A missing or unloaded date goes to the dataset's date. A malformed or
    /// unknown selection goes to the plain date view.
    pub fn resolve(&self, data: &FarmData) -> RouteOutcome {
        let date = match &self.date {
            Some(date) if data.is_date_loaded(date) => date.clone(),
            other => {
                tracing::debug!(
                    "Date {:?} not loaded, redirecting to {}",
                    other,
                    data.default_date
                );
                return RouteOutcome::Redirect(Route::for_date(&data.default_date).to_string());
            }
        };

        let checked = resolve(self.selection_type.as_deref(), self.selection_id.as_deref())
            .and_then(|selection| validate(selection, data));
        match checked {
            Ok(selection) => RouteOutcome::Show { date, selection },
            Err(e) => {
                tracing::debug!("Dropping selection from {}: {}", self, e);
                RouteOutcome::Redirect(Route::for_date(date).to_string())
            }
        }
    }
}

/// Redirects followed by [`Route::settle`] before giving up.
const MAX_REDIRECTS: usize = 4;

impl Route {
    /// Follow redirects until a route can be shown.
    ///
    /// Falls back to the dataset's date without a selection.
    pub fn settle(&self, data: &FarmData) -> (String, ValidSelection) {
        let mut route = self.clone();
        for _ in 0..MAX_REDIRECTS {
            match route.resolve(data) {
                RouteOutcome::Show { date, selection } => return (date, selection),
                RouteOutcome::Redirect(path) => route = Route::parse(&path),
            }
        }
        tracing::warn!("Too many redirects from {}", self);
        (data.default_date.clone(), ValidSelection::none())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("/map")?;
        for segment in [&self.date, &self.selection_type, &self.selection_id] {
            match segment {
                Some(s) => write!(f, "/{}", s)?,
                None => break,
            }
        }
        Ok(())
    }
}
