//! Search bar with a type-ahead filtered dropdown list.
//!
//! [`FilterableDropdown`] combines a [`SearchBar`] with a [`DropdownList`].
//! Every edit of the query re-filters the candidate list; the list is shown
//! while the query is non-empty. Tapping a row copies it into the search bar
//! and closes the list.
//!
//! Events for the host arrive through a [`DropdownListener`]. The embedded
//! search bar keeps its own [`SearchBarListener`](super::listener::SearchBarListener),
//! reachable through [`search_bar_mut`](FilterableDropdown::search_bar_mut),
//! for focus and submit events. Input events fed to that handle are routed
//! through the dropdown, so the list always follows the query.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use floatsearch::widget::filterable_dropdown::FilterableDropdown;
//! use floatsearch::widget::listener::DropdownCallbacks;
//! use floatsearch::types::Rect;
//!
//! let mut dropdown = FilterableDropdown::new(Rect::new(0.0, 60.0, 375.0, 400.0));
//! dropdown.configure(
//!     vec!["Axel".into(), "Raven".into(), "Chuckie".into()],
//!     "Search",
//!     "Enter Search Here",
//! );
//! dropdown.set_listener(Arc::new(
//!     DropdownCallbacks::new().with_row_selected(|text| println!("picked {text}")),
//! ));
//!
//! dropdown.handle_text_edited("a");
//! assert_eq!(dropdown.filtered_items(), ["Axel", "Raven"]);
//! assert!(dropdown.is_list_visible());
//!
//! assert_eq!(dropdown.select_row(1).as_deref(), Some("Raven"));
//! assert_eq!(dropdown.query(), "Raven");
//! assert!(!dropdown.is_list_visible());
//! ```

use std::ops::Deref;
use std::sync::Arc;
use std::time::Instant;

use floatsearch_core::{targets, PerfSpan, Property};
use serde::{Deserialize, Serialize};

use crate::config::{DropdownConfig, SearchBarConfig, WidgetConfig};
use crate::types::{Color, Point, Rect};

use super::dropdown_list::DropdownList;
use super::filter::{CandidateFilter, SubstringFilter};
use super::listener::{DefaultListener, DropdownListener, SearchBarListener};
use super::search_bar::SearchBar;

/// Which side of the search bar the list opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropDirection {
    /// Below the search bar.
    #[default]
    Down,
    /// Above the search bar, growing upwards.
    Up,
}

/// Resize `frame` to `content_height`, capped at `max_height`.
///
/// An upward list keeps its bottom edge anchored to the search bar.
fn fit_list_frame(frame: &mut Rect, content_height: f32, max_height: f32, direction: DropDirection) {
    let height = content_height.min(max_height).max(0.0);
    if direction == DropDirection::Up {
        frame.origin.y = frame.bottom() - height;
    }
    frame.size.height = height;
}

/// A search bar that filters a candidate list as the user types.
pub struct FilterableDropdown {
    frame: Rect,
    config: DropdownConfig,
    search_bar: SearchBar,
    list: DropdownList,
    items: Vec<String>,
    filtered_items: Vec<String>,
    filter: Box<dyn CandidateFilter>,
    max_list_height: Arc<Property<f32>>,
    listener: Arc<dyn DropdownListener>,
}

impl FilterableDropdown {
    /// Create an empty dropdown with the default configuration.
    pub fn new(frame: Rect) -> Self {
        Self::with_config(frame, &WidgetConfig::default())
    }

    /// Create an empty dropdown from a full widget configuration.
    pub fn with_config(frame: Rect, config: &WidgetConfig) -> Self {
        let dropdown = config.dropdown.clone();
        let bar_config = SearchBarConfig {
            height: dropdown.search_bar_height,
            ..config.search_bar.clone()
        };
        let search_bar = SearchBar::with_config(Self::search_bar_frame(frame, &dropdown), bar_config, config.label.clone());

        let list = DropdownList::with_config(&dropdown);
        let max_list_height = Arc::new(Property::new(Self::max_list_height_for(frame, &dropdown)));

        let list_frame = list.frame_property();
        let max_height = Arc::clone(&max_list_height);
        let direction = dropdown.direction;
        list.content_height_changed.connect(move |&content_height| {
            let max = max_height.get();
            list_frame.update(|rect| fit_list_frame(rect, content_height, max, direction));
        });

        let mut this = Self {
            frame,
            filter: Box::new(SubstringFilter::new(dropdown.case_sensitivity)),
            config: dropdown,
            search_bar,
            list,
            items: Vec::new(),
            filtered_items: Vec::new(),
            max_list_height,
            listener: Arc::new(DefaultListener),
        };
        this.place_list();
        this
    }

    fn search_bar_frame(frame: Rect, config: &DropdownConfig) -> Rect {
        Rect::new(
            config.x_margin,
            config.y_margin,
            (frame.width() - 2.0 * config.x_margin).max(0.0),
            config.search_bar_height,
        )
    }

    fn max_list_height_for(frame: Rect, config: &DropdownConfig) -> f32 {
        (frame.height() - 2.0 * config.y_margin).max(0.0)
    }

    // =========================================================================
    // Setup
    // =========================================================================

    /// Set candidates and labels, and close the list.
    pub fn configure(
        &mut self,
        items: Vec<String>,
        title: impl Into<String>,
        placeholder: impl Into<String>,
    ) {
        self.search_bar.configure_title_and_placeholder(title, placeholder);
        self.replace_items(items);
        self.hide_list(true);
    }

    /// Replace all candidates and re-apply the current query.
    ///
    /// With internal filtering disabled the new items are shown as they are,
    /// so a host can push its own pre-filtered set here.
    pub fn replace_items(&mut self, items: Vec<String>) {
        tracing::debug!(target: targets::DROPDOWN, count = items.len(), "items replaced");
        self.filtered_items = items.clone();
        self.items = items;
        self.apply_filter();
    }

    /// Attach the dropdown listener. Replaces any previous one.
    pub fn set_listener(&mut self, listener: Arc<dyn DropdownListener>) {
        self.listener = listener;
    }

    /// Detach the dropdown listener.
    pub fn clear_listener(&mut self) {
        self.listener = Arc::new(DefaultListener);
    }

    /// Replace the filter used on each query change.
    pub fn set_filter(&mut self, filter: Box<dyn CandidateFilter>) {
        self.filter = filter;
        self.filtered_items = self.items.clone();
        self.apply_filter();
    }

    /// Check if the dropdown filters candidates itself.
    pub fn should_handle_filter(&self) -> bool {
        self.config.should_handle_filter
    }

    /// Enable or disable internal filtering.
    ///
    /// When disabled, query edits still show and hide the list, but the
    /// displayed items only change through [`replace_items`](Self::replace_items).
    pub fn set_should_handle_filter(&mut self, enabled: bool) {
        let was_enabled = std::mem::replace(&mut self.config.should_handle_filter, enabled);
        if enabled && !was_enabled {
            self.apply_filter();
        }
    }

    /// Check if selecting a row closes the list.
    pub fn hides_on_selection(&self) -> bool {
        self.config.hides_on_selection
    }

    /// Choose whether selecting a row closes the list.
    pub fn set_hides_on_selection(&mut self, hides: bool) {
        self.config.hides_on_selection = hides;
    }

    /// The side the list opens on.
    pub fn direction(&self) -> DropDirection {
        self.config.direction
    }

    /// The dropdown configuration in effect.
    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The current query.
    pub fn query(&self) -> String {
        self.search_bar.text()
    }

    /// All candidates, in host order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Candidates currently listed.
    pub fn filtered_items(&self) -> &[String] {
        &self.filtered_items
    }

    /// Check if the list is shown.
    pub fn is_list_visible(&self) -> bool {
        self.list.is_visible()
    }

    /// Force the list closed (`true`) or open (`false`).
    pub fn hide_list(&mut self, hide: bool) {
        self.set_list_visible(!hide);
    }

    fn set_list_visible(&mut self, visible: bool) {
        if self.list.set_visible(visible) {
            tracing::debug!(target: targets::DROPDOWN, visible, "list visibility changed");
        }
    }

    /// The embedded search bar.
    pub fn search_bar(&self) -> &SearchBar {
        &self.search_bar
    }

    /// The embedded search bar, mutably.
    ///
    /// Input events sent through the returned handle are handled by the
    /// dropdown.
    pub fn search_bar_mut(&mut self) -> EmbeddedSearchBar<'_> {
        EmbeddedSearchBar { dropdown: self }
    }

    /// The list view.
    pub fn list(&self) -> &DropdownList {
        &self.list
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Handle a user edit of the query.
    pub fn handle_text_edited(&mut self, text: &str) {
        self.search_bar.handle_text_edited(text);
        self.apply_filter();
        self.listener.on_text_changed(text);
    }

    /// Select the listed row at `index`.
    ///
    /// Writes the row into the search bar, reports it, and closes the list
    /// unless [`hides_on_selection`](Self::hides_on_selection) is off.
    /// Returns the selected text, or `None` for an index past the end.
    pub fn select_row(&mut self, index: usize) -> Option<String> {
        let Some(item) = self.filtered_items.get(index).cloned() else {
            tracing::trace!(target: targets::DROPDOWN, index, rows = self.filtered_items.len(), "row index out of range");
            return None;
        };

        self.search_bar.set_text(item);
        let text = self.search_bar.text();
        tracing::debug!(target: targets::DROPDOWN, index, %text, "row selected");
        self.listener.on_row_selected(&text);
        if self.config.hides_on_selection {
            self.hide_list(true);
        }
        Some(text)
    }

    /// Select the row under `point`, given in the dropdown's coordinate space.
    ///
    /// Ignored while the list is hidden.
    pub fn tap_at(&mut self, point: Point) -> Option<String> {
        if !self.list.is_visible() {
            return None;
        }
        let frame = self.list.frame();
        if !frame.contains(point) {
            return None;
        }
        let local = Point::new(point.x - frame.left(), point.y - frame.top());
        let index = self.list.row_at(local)?;
        self.select_row(index)
    }

    /// Handle the return key: show the list iff there is a query, and drop focus.
    pub fn submit(&mut self) -> bool {
        let handled = self.search_bar.handle_return_key();
        let has_query = !self.search_bar.text().is_empty();
        self.set_list_visible(has_query);
        self.search_bar.resign_focus();
        handled
    }

    /// Handle a tap on the cancel button.
    pub fn tap_cancel(&mut self) {
        self.search_bar.tap_cancel();
        self.search_bar.set_text("");
        self.apply_filter();
        self.listener.on_dropdown_cancel();
    }

    /// Ask for keyboard focus. Returns `false` if refused.
    pub fn request_focus(&mut self) -> bool {
        self.search_bar.request_focus()
    }

    /// Give up keyboard focus.
    pub fn resign_focus(&mut self) {
        self.search_bar.resign_focus();
    }

    /// Advance the label animation.
    pub fn advance_animation_at(&mut self, now: Instant) {
        self.search_bar.advance_animation_at(now);
    }

    fn apply_filter(&mut self) {
        let query = self.search_bar.text();

        if self.config.should_handle_filter {
            let _perf = PerfSpan::new("dropdown.filter");
            self.filtered_items = self.filter.filter(&self.items, &query);
            tracing::debug!(
                target: targets::DROPDOWN,
                %query,
                total = self.items.len(),
                matched = self.filtered_items.len(),
                "filter applied"
            );
        } else {
            tracing::trace!(target: targets::DROPDOWN, %query, "filtering left to host");
        }

        self.list.set_rows(self.filtered_items.clone());
        self.set_list_visible(!query.is_empty());
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Frame in the parent's coordinate space.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Move or resize the dropdown. Re-places and refits the list.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.search_bar.set_frame(Self::search_bar_frame(frame, &self.config));
        self.max_list_height.set(Self::max_list_height_for(frame, &self.config));
        self.place_list();
    }

    /// The list frame, in the dropdown's coordinate space.
    pub fn list_frame(&self) -> Rect {
        self.list.frame()
    }

    /// Tallest the list may grow.
    pub fn max_list_height(&self) -> f32 {
        self.max_list_height.get()
    }

    fn place_list(&mut self) {
        let bar = self.search_bar.frame();
        let field = self.search_bar.text_field_frame();
        let y_margin = self.config.y_margin;

        let mut frame = Rect::new(
            field.left() + self.config.x_margin,
            0.0,
            field.width(),
            0.0,
        );
        frame.origin.y = match self.config.direction {
            DropDirection::Down => field.bottom() + 2.0 * y_margin,
            DropDirection::Up => bar.top() - 2.0 * y_margin,
        };
        fit_list_frame(
            &mut frame,
            self.list.content_height(),
            self.max_list_height.get(),
            self.config.direction,
        );
        self.list.set_frame(frame);
    }
}

/// Mutable handle to the search bar inside a [`FilterableDropdown`].
///
/// Dereferences to [`SearchBar`] for reads. Input events go to the owning
/// dropdown, which forwards them to the bar and then refilters.
pub struct EmbeddedSearchBar<'a> {
    dropdown: &'a mut FilterableDropdown,
}

impl EmbeddedSearchBar<'_> {
    /// Attach the search bar listener. Replaces any previous one.
    pub fn set_listener(&mut self, listener: Arc<dyn SearchBarListener>) {
        self.dropdown.search_bar.set_listener(listener);
    }

    /// Detach the search bar listener.
    pub fn clear_listener(&mut self) {
        self.dropdown.search_bar.clear_listener();
    }

    /// See [`FilterableDropdown::handle_text_edited`].
    pub fn handle_text_edited(&mut self, text: &str) {
        self.dropdown.handle_text_edited(text);
    }

    /// See [`FilterableDropdown::tap_cancel`].
    pub fn tap_cancel(&mut self) {
        self.dropdown.tap_cancel();
    }

    /// See [`FilterableDropdown::submit`].
    pub fn handle_return_key(&mut self) -> bool {
        self.dropdown.submit()
    }

    /// Ask for keyboard focus. Returns `false` if refused.
    pub fn request_focus(&mut self) -> bool {
        self.dropdown.request_focus()
    }

    /// Give up keyboard focus.
    pub fn resign_focus(&mut self) {
        self.dropdown.resign_focus();
    }

    /// Change the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.dropdown.search_bar.set_placeholder(placeholder);
    }

    /// Change the input text font size.
    pub fn set_font_size(&mut self, size: f32) {
        self.dropdown.search_bar.set_font_size(size);
    }

    /// Change the floating label font size.
    pub fn set_label_font_size(&mut self, size: f32) {
        self.dropdown.search_bar.set_label_font_size(size);
    }

    /// Change the input text color.
    pub fn set_text_color(&mut self, color: Color) {
        self.dropdown.search_bar.set_text_color(color);
    }

    /// Change the underline color.
    pub fn set_underline_color(&mut self, color: Color) {
        self.dropdown.search_bar.set_underline_color(color);
    }
}

impl Deref for EmbeddedSearchBar<'_> {
    type Target = SearchBar;

    fn deref(&self) -> &SearchBar {
        &self.dropdown.search_bar
    }
}

impl std::fmt::Debug for FilterableDropdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterableDropdown")
            .field("frame", &self.frame)
            .field("query", &self.search_bar.text())
            .field("items", &self.items.len())
            .field("filtered_items", &self.filtered_items)
            .field("list", &self.list)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(FilterableDropdown: Send, Sync);
