//! Application state and logic.

use std::path::PathBuf;

use crate::analytics::{self, format_day, CurrentValues, DayPoint};
use crate::clipboard;
use crate::data::{FarmData, Metric};
use crate::error::GrowflowError;
use crate::edit::{EditOutcome, EditRequest, PendingEdit, SprinklingDialog};
use crate::geometry::{self, GeoPoint, PixelIndex};
use crate::overrides::{OverrideKey, SelectionIdentity, SprinklingOverrides};
use crate::raster::{ColorScale, OverlayCache};
use crate::selection::{self, Route, Selection, ValidSelection};
use crate::util::LayoutConfig;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark field theme.
    #[default]
    Field,
    /// Light paper theme.
    Paper,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::Field => Theme::Paper,
            Theme::Paper => Theme::Field,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Field => "Field",
            Theme::Paper => "Paper",
        }
    }
}

/// Panel receiving movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Map cursor and selection keys.
    #[default]
    Map,
    /// Plot table rows.
    Plots,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Dataset location.
    pub file_path: PathBuf,
    /// Loaded dataset.
    pub data: FarmData,
    /// Date being shown.
    pub date: String,
    /// Current validated selection.
    pub selection: ValidSelection,
    /// Sprinkling values entered so far.
    pub overrides: SprinklingOverrides,
    /// Rendered overlays.
    pub overlays: OverlayCache,
    /// Color scale of map and overlay.
    pub scale: ColorScale,
    /// Layer shown on the map.
    pub metric: Metric,
    /// Map cursor.
    pub cursor: PixelIndex,
    /// Highlighted row of the plot table.
    pub plot_cursor: usize,
    /// Panel receiving movement keys.
    pub focus: Focus,
    /// Sprinkling edit dialog.
    pub dialog: SprinklingDialog,
    /// Edit waiting for the dialog's answer.
    pub pending_edit: Option<PendingEdit>,
    /// Projected series of the selection.
    pub series: Vec<DayPoint>,
    /// Highlighted day of the series, the target of sprinkling edits.
    pub day_cursor: usize,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Layout constants.
    pub layout: LayoutConfig,
}

impl App {
    /// Create the application on `route`, following redirects.
    pub fn new(file_path: PathBuf, data: FarmData, scale: ColorScale, route: &Route) -> Self {
        let (date, selection) = route.settle(&data);
        let grid = &data.grid;
        let cursor = grid
            .resolve_click(grid.center())
            .unwrap_or(PixelIndex::new(0, 0));

        let mut app = Self {
            file_path,
            data,
            date,
            selection: ValidSelection::none(),
            overrides: SprinklingOverrides::new(),
            overlays: OverlayCache::new(),
            scale,
            metric: Metric::default(),
            cursor,
            plot_cursor: 0,
            focus: Focus::default(),
            dialog: SprinklingDialog::new(),
            pending_edit: None,
            series: Vec::new(),
            day_cursor: 0,
            status: "Ready".to_string(),
            theme: Theme::default(),
            layout: LayoutConfig::default(),
        };
        app.apply_selection(selection);
        app
    }

    /// Current navigation path.
    pub fn route(&self) -> Route {
        Route::for_selection(&self.date, self.selection.selection())
    }

    /// Navigate to a path, as a link or the address bar would.
    pub fn navigate(&mut self, path: &str) {
        let (date, selection) = Route::parse(path).settle(&self.data);
        self.date = date;
        self.apply_selection(selection);
        self.status = format!("At {}", self.route());
    }

    fn apply_selection(&mut self, selection: ValidSelection) {
        if let Selection::Pixel(index) = selection.selection() {
            self.cursor = *index;
        }
        if let Selection::Plot(id) = selection.selection() {
            if let Some(i) = self.data.plots.iter().position(|p| &p.plot_id == id) {
                self.plot_cursor = i;
            }
        }
        self.selection = selection;
        self.refresh_series();
        self.day_cursor = self.date_index().unwrap_or(0);
    }

    /// Series index of the route date.
    fn date_index(&self) -> Option<usize> {
        let wanted = format_day(&self.date);
        self.series.iter().position(|p| p.date == wanted)
    }

    /// Recompute the selection's series.
    pub fn refresh_series(&mut self) {
        self.series = analytics::project(&self.data, &self.selection, &self.overrides);
    }

    /// Move the highlighted day within the series.
    pub fn move_day_cursor(&mut self, delta: isize) {
        let last = self.series.len().saturating_sub(1);
        self.day_cursor = self.day_cursor.saturating_add_signed(delta).min(last);
        if let Some(point) = self.series.get(self.day_cursor) {
            self.status = format!("Day {}", point.date);
        }
    }

    /// The highlighted day of the series.
    pub fn highlighted_day(&self) -> Option<&DayPoint> {
        self.series.get(self.day_cursor)
    }

    /// Values of the selection on the current date.
    pub fn current_values(&self) -> CurrentValues {
        CurrentValues::from_snapshot(analytics::snapshot(&self.series, &self.date))
    }

    /// Middle of a pixel's cell.
    pub fn cell_point(&self, index: PixelIndex) -> GeoPoint {
        let grid = &self.data.grid;
        grid.pixel_polygon(index)
            .ok()
            .and_then(|cell| geometry::centroid(&cell))
            .unwrap_or_else(|| grid.center())
    }

    /// Geographic point under the map cursor.
    pub fn cursor_point(&self) -> GeoPoint {
        self.cell_point(self.cursor)
    }

    /// Move the map cursor; positive `north` goes up, positive `east` right.
    pub fn move_cursor(&mut self, north: isize, east: isize) {
        let grid = &self.data.grid;
        let step = |value: usize, delta: isize, len: usize| {
            value.saturating_add_signed(delta).min(len.saturating_sub(1))
        };
        self.cursor = PixelIndex::new(
            step(self.cursor.row, north, grid.height()),
            step(self.cursor.col, east, grid.width()),
        );
    }

    /// Move the plot table highlight.
    pub fn move_plot_cursor(&mut self, delta: isize) {
        let last = self.data.plots.len().saturating_sub(1);
        self.plot_cursor = self.plot_cursor.saturating_add_signed(delta).min(last);
    }

    /// Switch between map and plot table.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Map => Focus::Plots,
            Focus::Plots => Focus::Map,
        };
    }

    /// Select the pixel under the map cursor.
    pub fn select_pixel_at_cursor(&mut self) {
        let Some(index) = self.data.grid.resolve_click(self.cursor_point()) else {
            self.status = "Cursor is outside the grid".to_string();
            return;
        };
        let route = Route::for_selection(&self.date, &Selection::Pixel(index));
        self.navigate(&route.to_string());
    }

    /// Select the plot under the map cursor.
    pub fn select_plot_at_cursor(&mut self) {
        let point = self.cursor_point();
        let Some(plot_id) = selection::plot_at(&self.data, point).map(|p| p.plot_id.clone())
        else {
            self.status = "No plot under the cursor".to_string();
            return;
        };
        self.select_plot(&plot_id);
    }

    /// Select the highlighted row of the plot table.
    pub fn select_highlighted_plot(&mut self) {
        let Some(plot_id) = self
            .data
            .plots
            .get(self.plot_cursor)
            .map(|p| p.plot_id.clone())
        else {
            self.status = "No plots loaded".to_string();
            return;
        };
        self.select_plot(&plot_id);
    }

    fn select_plot(&mut self, plot_id: &str) {
        let route = Route::for_selection(&self.date, &Selection::Plot(plot_id.to_string()));
        self.navigate(&route.to_string());
        if self.selection.selection().is_none() {
            self.status = format!("Plot {} has no analytics", plot_id);
        }
    }

    /// Drop the selection and show the farm overview.
    pub fn clear_selection(&mut self) {
        self.navigate(&Route::for_date(&self.date).to_string());
    }

    /// Map focus position of the selection.
    pub fn selection_center(&self) -> Option<GeoPoint> {
        selection::center_of(self.selection.selection(), &self.data)
    }

    /// Cycle the map layer.
    pub fn cycle_metric(&mut self) {
        self.metric = self.metric.next();
        self.status = format!("Layer: {}", self.metric.name());
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Key of the highlighted day for the selection.
    fn highlighted_key(&self) -> Option<OverrideKey> {
        let identity = SelectionIdentity::from_selection(self.selection.selection())?;
        self.highlighted_day()?;
        Some(OverrideKey::new(identity, self.day_cursor))
    }

    /// Open the sprinkling dialog for the selection on the highlighted day.
    pub fn open_sprinkling_dialog(&mut self) {
        if self.selection.selection().is_none() {
            self.status = "Select a plot or pixel first".to_string();
            return;
        }
        let Some(key) = self.highlighted_key() else {
            self.status = "No day to edit".to_string();
            return;
        };

        let (request, pending) = EditRequest::new(key.clone(), self.overrides.get(&key));
        match self.dialog.open(request) {
            Ok(()) => {
                self.pending_edit = Some(pending);
                self.status = format!("Editing sprinkling for {}", key);
            }
            Err(e) => self.report(e),
        }
    }

    /// Show an error on the status line.
    ///
    /// Recoverable errors read as plain notices; anything else is logged.
    pub fn report(&mut self, error: GrowflowError) {
        if error.is_recoverable() {
            tracing::debug!("{}", error);
            self.status = error.to_string();
        } else {
            tracing::error!("{}", error);
            self.status = format!("Error: {}", error);
        }
    }

    /// Apply the dialog's answer once it arrives.
    pub fn poll_edit(&mut self) {
        let Some(outcome) = self.pending_edit.as_ref().and_then(PendingEdit::poll) else {
            return;
        };
        let Some(pending) = self.pending_edit.take() else {
            return;
        };
        match outcome {
            EditOutcome::Confirmed(value) => {
                self.overrides = self.overrides.set(pending.key().clone(), value);
                self.refresh_series();
                self.status = format!("Sprinkling {} set to {} mm", pending.key(), value);
                tracing::info!("Sprinkling {} = {}", pending.key(), value);
            }
            EditOutcome::Cancelled => {
                self.status = "Edit cancelled".to_string();
            }
        }
    }

    /// Copy the current overlay's data URI.
    pub fn copy_overlay(&mut self) {
        let copied = self
            .overlays
            .get_or_render(&self.data, &self.date, self.metric, &self.scale)
            .and_then(|uri| clipboard::copy_overlay_uri(&uri));
        match copied {
            Ok(len) => self.status = format!("Copied {} overlay ({} bytes)", self.metric, len),
            Err(e) => self.report(e),
        }
    }
}
