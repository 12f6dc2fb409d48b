//! Row list shown below the search bar.
//!
//! [`DropdownList`] holds the rows currently on display and knows its own
//! natural content height (`rows × row_height`). Whenever that height changes
//! it emits [`content_height_changed`](DropdownList::content_height_changed)
//! so the owner can refit the list frame.
//!
//! # Example
//!
//! ```
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//! use floatsearch::widget::dropdown_list::DropdownList;
//!
//! let mut list = DropdownList::new(44.0);
//! let height = Arc::new(AtomicU32::new(0));
//! let observed = height.clone();
//! list.content_height_changed.connect(move |h| {
//!     observed.store(h.to_bits(), Ordering::SeqCst);
//! });
//!
//! list.set_rows(vec!["Axel".into(), "Raven".into()]);
//! assert_eq!(f32::from_bits(height.load(Ordering::SeqCst)), 88.0);
//! ```

use std::sync::Arc;

use floatsearch_core::{targets, Property, Signal};

use crate::config::DropdownConfig;
use crate::types::{Color, FontMetrics, Point, Rect};

/// A plain list of text rows with fixed row height.
///
/// # Signals
///
/// - `content_height_changed`: Emitted with the new content height whenever
///   the row count or row height changes it
pub struct DropdownList {
    rows: Vec<String>,
    row_height: f32,
    row_metrics: FontMetrics,
    border_color: Color,
    border_width: f32,
    frame: Arc<Property<Rect>>,
    visible: bool,

    /// Signal emitted when the natural content height changes.
    pub content_height_changed: Signal<f32>,
}

impl DropdownList {
    /// Create an empty, hidden list.
    pub fn new(row_height: f32) -> Self {
        let defaults = DropdownConfig::default();
        Self {
            rows: Vec::new(),
            row_height,
            row_metrics: FontMetrics::system(defaults.row_font_size),
            border_color: defaults.border_color,
            border_width: defaults.border_width,
            frame: Arc::new(Property::new(Rect::ZERO)),
            visible: false,
            content_height_changed: Signal::new(),
        }
    }

    /// Create an empty, hidden list styled from `config`.
    pub fn with_config(config: &DropdownConfig) -> Self {
        let mut list = Self::new(config.row_height);
        list.row_metrics = FontMetrics::system(config.row_font_size);
        list.border_color = config.border_color;
        list.border_width = config.border_width;
        list
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// Replace all rows.
    pub fn set_rows(&mut self, rows: Vec<String>) {
        let before = self.content_height();
        self.rows = rows;
        self.notify_if_resized(before);
    }

    /// The rows on display.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Get the text of one row.
    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    /// Number of rows.
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Height needed to show every row.
    pub fn content_height(&self) -> f32 {
        self.rows.len() as f32 * self.row_height
    }

    /// Height of one row.
    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Change the row height.
    pub fn set_row_height(&mut self, height: f32) {
        let before = self.content_height();
        self.row_height = height;
        self.notify_if_resized(before);
    }

    fn notify_if_resized(&self, before: f32) {
        let after = self.content_height();
        if after != before {
            tracing::trace!(target: targets::DROPDOWN, before, after, "list content height changed");
            self.content_height_changed.emit(after);
        }
    }

    /// Frame of row `index` in the list's coordinate space.
    pub fn row_frame(&self, index: usize) -> Option<Rect> {
        (index < self.rows.len()).then(|| {
            Rect::new(
                0.0,
                index as f32 * self.row_height,
                self.frame().width(),
                self.row_height,
            )
        })
    }

    /// Index of the row under `point`, in the list's coordinate space.
    pub fn row_at(&self, point: Point) -> Option<usize> {
        if point.x < 0.0 || point.x >= self.frame().width() || point.y < 0.0 {
            return None;
        }
        let index = (point.y / self.row_height) as usize;
        (index < self.rows.len()).then_some(index)
    }

    // =========================================================================
    // Frame and Visibility
    // =========================================================================

    /// Frame in the owner's coordinate space.
    pub fn frame(&self) -> Rect {
        self.frame.get()
    }

    /// Shared handle to the frame, for slots that refit it.
    pub fn frame_property(&self) -> Arc<Property<Rect>> {
        Arc::clone(&self.frame)
    }

    /// Set the frame. Returns `true` if it changed.
    pub fn set_frame(&self, frame: Rect) -> bool {
        self.frame.set(frame)
    }

    /// Check if the list is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the list. Returns `true` if visibility changed.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        true
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Metrics of the row font.
    pub fn row_metrics(&self) -> FontMetrics {
        self.row_metrics
    }

    /// Change the row font size.
    pub fn set_row_font_size(&mut self, size: f32) {
        self.row_metrics = FontMetrics::system(size);
    }

    /// Border color.
    pub fn border_color(&self) -> Color {
        self.border_color
    }

    /// Change the border color.
    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
    }

    /// Border width.
    pub fn border_width(&self) -> f32 {
        self.border_width
    }

    /// Change the border width.
    pub fn set_border_width(&mut self, width: f32) {
        self.border_width = width;
    }
}

impl std::fmt::Debug for DropdownList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropdownList")
            .field("rows", &self.rows.len())
            .field("row_height", &self.row_height)
            .field("frame", &self.frame())
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(DropdownList: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;

    fn rows(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_new_list_is_hidden_and_empty() {
        let list = DropdownList::new(44.0);
        assert!(!list.is_visible());
        assert!(list.is_empty());
        assert_eq!(list.content_height(), 0.0);
        assert_eq!(list.frame(), Rect::ZERO);
    }

    #[test]
    fn test_content_height_signal_only_on_change() {
        let mut list = DropdownList::new(44.0);
        let heights = Arc::new(Mutex::new(Vec::new()));
        let sink = heights.clone();
        list.content_height_changed.connect(move |h| sink.lock().push(*h));

        list.set_rows(rows(&["Axel", "Raven"]));
        list.set_rows(rows(&["Salem", "Balto"]));
        list.set_rows(rows(&["Bell"]));
        list.set_row_height(30.0);
        list.set_rows(Vec::new());

        assert_eq!(*heights.lock(), vec![88.0, 44.0, 30.0, 0.0]);
    }

    #[test]
    fn test_row_lookup() {
        let mut list = DropdownList::new(44.0);
        list.set_rows(rows(&["Axel", "Raven", "Chuckie"]));
        list.set_frame(Rect::new(28.0, 60.0, 200.0, 132.0));

        assert_eq!(list.row(1), Some("Raven"));
        assert_eq!(list.row(3), None);
        assert_eq!(list.row_frame(2), Some(Rect::new(0.0, 88.0, 200.0, 44.0)));
        assert_eq!(list.row_frame(3), None);

        assert_eq!(list.row_at(Point::new(10.0, 50.0)), Some(1));
        assert_eq!(list.row_at(Point::new(10.0, 140.0)), None);
        assert_eq!(list.row_at(Point::new(-1.0, 10.0)), None);
    }

    #[test]
    fn test_visibility_reports_change() {
        let mut list = DropdownList::new(44.0);
        assert!(list.set_visible(true));
        assert!(!list.set_visible(true));
        assert!(list.set_visible(false));
    }

    #[test]
    fn test_frame_property_is_shared() {
        let list = DropdownList::new(44.0);
        let handle = list.frame_property();
        let updates = Arc::new(AtomicUsize::new(0));
        let counter = updates.clone();

        handle.update(|rect| {
            rect.size.height = 120.0;
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(list.frame().height(), 120.0);
        assert_eq!(updates.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_styled_from_config() {
        let config = DropdownConfig {
            row_height: 36.0,
            row_font_size: 13.0,
            border_width: 2.0,
            ..DropdownConfig::default()
        };
        let list = DropdownList::with_config(&config);
        assert_eq!(list.row_height(), 36.0);
        assert_eq!(list.row_metrics().size(), 13.0);
        assert_eq!(list.border_width(), 2.0);
        assert_eq!(list.border_color(), Color::LIGHT_GRAY);
    }
}
