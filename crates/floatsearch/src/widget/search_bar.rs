//! Search bar widget.
//!
//! A [`SearchBar`] wraps a [`LabeledInput`] with a cancel button and a thin
//! underline. The cancel button is visible exactly while the input holds
//! text. Every interaction is reported to an optional [`SearchBarListener`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use floatsearch::widget::search_bar::SearchBar;
//! use floatsearch::widget::listener::SearchBarCallbacks;
//! use floatsearch::types::Rect;
//!
//! let mut bar = SearchBar::new(Rect::new(0.0, 0.0, 320.0, 40.0));
//! bar.configure_title_and_placeholder("Search", "Enter Search Here");
//! bar.set_listener(Arc::new(
//!     SearchBarCallbacks::new().with_text_changed(|text| println!("query: {text}")),
//! ));
//!
//! bar.handle_text_edited("Ax");
//! assert!(bar.is_cancel_visible());
//!
//! bar.tap_cancel();
//! assert_eq!(bar.text(), "");
//! assert!(!bar.is_cancel_visible());
//! ```

use std::sync::Arc;
use std::time::Instant;

use floatsearch_core::targets;

use crate::config::{FloatingLabelConfig, SearchBarConfig};
use crate::types::{Color, Rect};

use super::labeled_input::LabeledInput;
use super::listener::{DefaultListener, SearchBarListener};

/// A floating-label input with a cancel button.
///
/// Geometry accessors ([`text_field_frame`](Self::text_field_frame),
/// [`cancel_button_frame`](Self::cancel_button_frame),
/// [`underline_frame`](Self::underline_frame)) are in the bar's own
/// coordinate space.
pub struct SearchBar {
    frame: Rect,
    config: SearchBarConfig,
    input: LabeledInput,
    cancel_visible: bool,
    listener: Arc<dyn SearchBarListener>,
}

impl SearchBar {
    /// Create a search bar with the default configuration.
    pub fn new(frame: Rect) -> Self {
        Self::with_config(frame, SearchBarConfig::default(), FloatingLabelConfig::default())
    }

    /// Create a search bar with explicit bar and label configuration.
    ///
    /// The frame height is replaced by the configured bar height.
    pub fn with_config(frame: Rect, config: SearchBarConfig, label: FloatingLabelConfig) -> Self {
        let mut input = LabeledInput::with_config(label);
        input.set_text_color(config.text_color);

        let mut bar = Self {
            frame,
            config,
            input,
            cancel_visible: false,
            listener: Arc::new(DefaultListener),
        };
        bar.set_frame(frame);
        bar
    }

    // =========================================================================
    // Listener
    // =========================================================================

    /// Attach a listener. Replaces any previous one.
    pub fn set_listener(&mut self, listener: Arc<dyn SearchBarListener>) {
        self.listener = listener;
    }

    /// Detach the listener; events fall back to their defaults.
    pub fn clear_listener(&mut self) {
        self.listener = Arc::new(DefaultListener);
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Get the current text.
    pub fn text(&self) -> String {
        self.input.text()
    }

    /// Set the text programmatically.
    ///
    /// A no-op when `text` equals the current text. Listeners are not
    /// notified; only user edits report [`on_text_changed`](SearchBarListener::on_text_changed).
    /// Returns `true` if the text changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if !self.input.set_text(text) {
            tracing::trace!(target: targets::SEARCH_BAR, "set_text ignored, text unchanged");
            return false;
        }
        self.sync_cancel_visibility();
        true
    }

    /// Set the floating label title and the placeholder shown while empty.
    pub fn configure_title_and_placeholder(
        &mut self,
        title: impl Into<String>,
        placeholder: impl Into<String>,
    ) {
        self.input.set_placeholder_with_title(placeholder, title);
    }

    /// Set the placeholder. The floating label mirrors it.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.input.set_placeholder(placeholder);
    }

    /// Check if the cancel button is shown.
    pub fn is_cancel_visible(&self) -> bool {
        self.cancel_visible
    }

    fn sync_cancel_visibility(&mut self) {
        let visible = self.input.has_text();
        if visible != self.cancel_visible {
            self.cancel_visible = visible;
            tracing::trace!(target: targets::SEARCH_BAR, visible, "cancel button visibility");
        }
    }

    // =========================================================================
    // Input Events
    // =========================================================================

    /// Handle a user edit. `text` is the full new content of the input.
    pub fn handle_text_edited(&mut self, text: &str) {
        self.input.set_text(text);
        self.listener.on_text_changed(text);
        self.sync_cancel_visibility();
    }

    /// Handle a tap on the cancel button.
    ///
    /// The listener hears [`on_cancel`](SearchBarListener::on_cancel) while
    /// the text is still present; the text is cleared afterwards.
    pub fn tap_cancel(&mut self) {
        tracing::debug!(target: targets::SEARCH_BAR, text = %self.input.text(), "cancel tapped");
        self.listener.on_cancel();
        self.input.clear();
        self.sync_cancel_visibility();
    }

    /// Handle the return key. Always returns `true` (handled).
    pub fn handle_return_key(&mut self) -> bool {
        tracing::debug!(target: targets::SEARCH_BAR, text = %self.input.text(), "search submitted");
        self.listener.on_submit();
        if self.config.resign_on_submit {
            self.resign_focus();
        }
        true
    }

    /// Ask for keyboard focus.
    ///
    /// Returns `false` if the listener refused it.
    pub fn request_focus(&mut self) -> bool {
        if self.input.is_focused() {
            return true;
        }
        if !self.listener.on_should_begin_editing() {
            tracing::trace!(target: targets::SEARCH_BAR, "focus refused by listener");
            return false;
        }
        self.input.set_focused(true);
        self.listener.on_begin_editing();
        true
    }

    /// Give up keyboard focus. Does nothing if not focused.
    pub fn resign_focus(&mut self) {
        if !self.input.is_focused() {
            return;
        }
        self.input.set_focused(false);
        self.listener.on_end_editing();
    }

    /// Check if the input has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.input.is_focused()
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    /// Change the input text font size.
    pub fn set_font_size(&mut self, size: f32) {
        self.input.set_text_font_size(size);
    }

    /// Change the floating label font size.
    pub fn set_label_font_size(&mut self, size: f32) {
        self.input.set_label_font_size(size);
    }

    /// Input text color.
    pub fn text_color(&self) -> Color {
        self.input.text_color()
    }

    /// Change the input text color.
    pub fn set_text_color(&mut self, color: Color) {
        self.config.text_color = color;
        self.input.set_text_color(color);
    }

    /// Underline color.
    pub fn underline_color(&self) -> Color {
        self.config.underline_color
    }

    /// Change the underline color.
    pub fn set_underline_color(&mut self, color: Color) {
        self.config.underline_color = color;
    }

    /// The bar configuration in effect.
    pub fn config(&self) -> &SearchBarConfig {
        &self.config
    }

    /// The embedded input.
    pub fn input(&self) -> &LabeledInput {
        &self.input
    }

    /// The embedded input, mutably.
    pub fn input_mut(&mut self) -> &mut LabeledInput {
        &mut self.input
    }

    /// Advance the label animation. See [`LabeledInput::advance_animation_at`].
    pub fn advance_animation_at(&mut self, now: Instant) {
        self.input.advance_animation_at(now);
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Frame in the parent's coordinate space. Height is always the
    /// configured bar height.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Move or resize the bar. The requested height is ignored.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = Rect::new(frame.left(), frame.top(), frame.width(), self.config.height);
        let field = self.text_field_frame();
        self.input.set_frame(field);
    }

    /// Frame of the input.
    pub fn text_field_frame(&self) -> Rect {
        let c = &self.config;
        Rect::new(
            2.0 * c.x_margin,
            c.y_margin,
            (self.frame.width() - 2.0 * c.x_margin - 2.0 * c.icon_size).max(0.0),
            self.frame.height() - c.y_margin,
        )
    }

    /// Frame of the cancel button, at the trailing bottom of the input.
    pub fn cancel_button_frame(&self) -> Rect {
        let c = &self.config;
        let field = self.text_field_frame();
        Rect::new(
            field.right() - c.icon_size - c.x_margin,
            field.height() - c.icon_size - c.y_margin,
            c.icon_size,
            c.icon_size,
        )
    }

    /// The one-point underline below the input.
    pub fn underline_frame(&self) -> Rect {
        let field = self.text_field_frame();
        Rect::new(field.left(), field.height() + 1.0, field.width(), 1.0)
    }
}

impl std::fmt::Debug for SearchBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchBar")
            .field("frame", &self.frame)
            .field("input", &self.input)
            .field("cancel_visible", &self.cancel_visible)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(SearchBar: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use parking_lot::Mutex;

    use crate::widget::listener::SearchBarCallbacks;

    fn bar() -> SearchBar {
        let mut bar = SearchBar::new(Rect::new(0.0, 0.0, 320.0, 40.0));
        bar.configure_title_and_placeholder("Search", "Enter Search Here");
        bar
    }

    #[test]
    fn test_height_forced_to_config() {
        let bar = bar();
        assert_eq!(bar.frame(), Rect::new(0.0, 0.0, 320.0, 50.0));
    }

    #[test]
    fn test_geometry() {
        let bar = bar();
        // 320 - 20 - 32 = 268
        assert_eq!(bar.text_field_frame(), Rect::new(20.0, 5.0, 268.0, 45.0));
        assert_eq!(bar.cancel_button_frame(), Rect::new(262.0, 24.0, 16.0, 16.0));
        assert_eq!(bar.underline_frame(), Rect::new(20.0, 46.0, 268.0, 1.0));
        assert_eq!(bar.input().frame(), bar.text_field_frame());
    }

    #[test]
    fn test_labels_configured() {
        let bar = bar();
        assert_eq!(bar.input().label_text(), "Search");
        assert_eq!(bar.input().placeholder(), "Enter Search Here");
    }

    #[test]
    fn test_set_text_is_idempotent() {
        let mut bar = bar();
        assert!(bar.set_text("Axel"));
        assert!(bar.is_cancel_visible());
        assert!(!bar.set_text("Axel"));
        assert_eq!(bar.text(), "Axel");
    }

    #[test]
    fn test_set_text_does_not_notify() {
        let mut bar = bar();
        let notified = Arc::new(AtomicBool::new(false));
        let flag = notified.clone();
        bar.set_listener(Arc::new(SearchBarCallbacks::new().with_text_changed(move |_| {
            flag.store(true, Ordering::SeqCst);
        })));

        bar.set_text("Raven");
        assert!(!notified.load(Ordering::SeqCst));
    }

    #[test]
    fn test_text_edits_notify_and_track_cancel() {
        let mut bar = bar();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        bar.set_listener(Arc::new(
            SearchBarCallbacks::new().with_text_changed(move |text| sink.lock().push(text.to_string())),
        ));

        bar.handle_text_edited("A");
        assert!(bar.is_cancel_visible());
        bar.handle_text_edited("Ax");
        assert!(bar.is_cancel_visible());
        bar.handle_text_edited("");
        assert!(!bar.is_cancel_visible());

        assert_eq!(*seen.lock(), vec!["A", "Ax", ""]);
    }

    #[test]
    fn test_cancel_notifies_before_clearing() {
        let mut bar = bar();
        bar.handle_text_edited("Axel");

        // The listener cannot borrow the bar, so record the order of events instead.
        let log = Arc::new(Mutex::new(Vec::new()));
        let cancel_log = log.clone();
        let text_log = log.clone();
        bar.set_listener(Arc::new(
            SearchBarCallbacks::new()
                .with_cancel(move || cancel_log.lock().push("cancel"))
                .with_text_changed(move |_| text_log.lock().push("text")),
        ));

        bar.tap_cancel();
        assert_eq!(*log.lock(), vec!["cancel"]);
        assert_eq!(bar.text(), "");
        assert!(!bar.is_cancel_visible());
    }

    #[test]
    fn test_return_key_submits_and_resigns() {
        let mut bar = bar();
        let submitted = Arc::new(AtomicBool::new(false));
        let ended = Arc::new(AtomicBool::new(false));
        let (s, e) = (submitted.clone(), ended.clone());
        bar.set_listener(Arc::new(
            SearchBarCallbacks::new()
                .with_submit(move || s.store(true, Ordering::SeqCst))
                .with_end_editing(move || e.store(true, Ordering::SeqCst)),
        ));

        assert!(bar.request_focus());
        assert!(bar.handle_return_key());
        assert!(submitted.load(Ordering::SeqCst));
        assert!(ended.load(Ordering::SeqCst));
        assert!(!bar.is_focused());
    }

    #[test]
    fn test_return_key_can_keep_focus() {
        let config = SearchBarConfig {
            resign_on_submit: false,
            ..SearchBarConfig::default()
        };
        let mut bar = SearchBar::with_config(Rect::new(0.0, 0.0, 320.0, 50.0), config, FloatingLabelConfig::default());
        bar.request_focus();
        assert!(bar.handle_return_key());
        assert!(bar.is_focused());
    }

    #[test]
    fn test_focus_defaults_to_accepted() {
        let mut bar = bar();
        assert!(bar.request_focus());
        assert!(bar.is_focused());
        assert!(bar.input().label_state() == crate::widget::labeled_input::LabelState::Floating);
    }

    #[test]
    fn test_focus_can_be_refused() {
        let mut bar = bar();
        let began = Arc::new(AtomicUsize::new(0));
        let counter = began.clone();
        bar.set_listener(Arc::new(
            SearchBarCallbacks::new()
                .with_should_begin_editing(|| false)
                .with_begin_editing(move || {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
        ));

        assert!(!bar.request_focus());
        assert!(!bar.is_focused());
        assert_eq!(began.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_begin_and_end_editing_fire_once() {
        let mut bar = bar();
        let began = Arc::new(AtomicUsize::new(0));
        let ended = Arc::new(AtomicUsize::new(0));
        let (b, e) = (began.clone(), ended.clone());
        bar.set_listener(Arc::new(
            SearchBarCallbacks::new()
                .with_begin_editing(move || {
                    b.fetch_add(1, Ordering::SeqCst);
                })
                .with_end_editing(move || {
                    e.fetch_add(1, Ordering::SeqCst);
                }),
        ));

        bar.request_focus();
        bar.request_focus();
        bar.resign_focus();
        bar.resign_focus();
        assert_eq!(began.load(Ordering::SeqCst), 1);
        assert_eq!(ended.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_appearance_forwarded() {
        let mut bar = bar();
        bar.set_text_color(Color::WHITE);
        assert_eq!(bar.input().text_color(), Color::WHITE);

        bar.set_font_size(20.0);
        assert_eq!(bar.input().text_metrics().size(), 20.0);
    }
}
