//! Single-line input with a floating label.
//!
//! A [`LabeledInput`] shows its placeholder while empty. As soon as it holds
//! text or has focus, a small caption (the *floating label*) fades in above
//! the text; when it is empty and unfocused again the caption fades back
//! down into the placeholder position.
//!
//! The widget does not draw. After every change it recomputes the geometry a
//! renderer needs: [`floating_label`](LabeledInput::floating_label),
//! [`text_rect`](LabeledInput::text_rect),
//! [`editing_rect`](LabeledInput::editing_rect) and
//! [`clear_button_rect`](LabeledInput::clear_button_rect), all in the
//! input's own coordinate space.
//!
//! # Example
//!
//! ```
//! use floatsearch::widget::labeled_input::{LabeledInput, LabelState};
//! use floatsearch::types::Rect;
//!
//! let mut input = LabeledInput::new().with_frame(Rect::new(20.0, 5.0, 240.0, 45.0));
//! input.set_placeholder_with_title("Enter Search Here", "Search");
//! assert_eq!(input.label_state(), LabelState::Collapsed);
//!
//! input.set_text("Axel");
//! assert_eq!(input.label_state(), LabelState::Floating);
//! assert!(input.text_rect().top() > 0.0);
//! ```

use std::time::{Duration, Instant};

use floatsearch_core::{targets, Property, Signal};

use crate::animation::{lerp_eased, Easing, Transition, TransitionState};
use crate::config::FloatingLabelConfig;
use crate::types::{Color, EdgeInsets, FontMetrics, Rect, TextAlignment};

/// Vertical offset of the floating label when it may overflow the input.
const UNBOUND_FLOATING_Y: f32 = -15.0;

/// Whether the floating label is hidden in the placeholder position or
/// shown above the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelState {
    /// Hidden, resting below the text baseline.
    #[default]
    Collapsed,
    /// Visible above the text.
    Floating,
}

/// Presentation values of the floating label at the current instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingLabel {
    /// Frame in the input's coordinate space.
    pub frame: Rect,
    /// Opacity from 0.0 (hidden) to 1.0.
    pub opacity: f32,
    /// Text color.
    pub color: Color,
}

/// The animatable part of the label.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LabelPose {
    opacity: f32,
    y: f32,
}

/// A single-line text input with an animated floating label.
///
/// # Signals
///
/// - `label_state_changed`: Emitted when the label switches between
///   [`LabelState::Collapsed`] and [`LabelState::Floating`]
pub struct LabeledInput {
    frame: Rect,
    text: Property<String>,
    placeholder: String,
    label_text: String,
    focused: bool,
    alignment: TextAlignment,
    config: FloatingLabelConfig,
    label_metrics: FontMetrics,
    text_metrics: FontMetrics,
    text_color: Color,

    state: LabelState,
    label: FloatingLabel,
    /// Where the label is, or is animating, to.
    target: LabelPose,
    /// Where the running animation started.
    origin: LabelPose,
    transition: Transition,

    /// Signal emitted when the label state changes.
    pub label_state_changed: Signal<LabelState>,
}

impl LabeledInput {
    /// Create an empty input with the default configuration.
    pub fn new() -> Self {
        Self::with_config(FloatingLabelConfig::default())
    }

    /// Create an empty input with an explicit configuration.
    pub fn with_config(config: FloatingLabelConfig) -> Self {
        let label_metrics = config.label_metrics();
        let collapsed = LabelPose {
            opacity: 0.0,
            y: label_metrics.line_height() + config.y_padding,
        };

        Self {
            frame: Rect::ZERO,
            text: Property::new(String::new()),
            placeholder: String::new(),
            label_text: String::new(),
            focused: false,
            alignment: TextAlignment::Left,
            label_metrics,
            text_metrics: config.text_metrics(),
            text_color: Color::BLACK,
            state: LabelState::Collapsed,
            label: FloatingLabel {
                frame: Rect::new(0.0, collapsed.y, 0.0, 0.0),
                opacity: collapsed.opacity,
                color: config.inactive_color,
            },
            target: collapsed,
            origin: collapsed,
            transition: Transition::new(config.show_duration(), config.easing),
            config,
            label_state_changed: Signal::new(),
        }
    }

    /// Set the frame using builder pattern.
    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.set_frame(frame);
        self
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Frame in the parent's coordinate space.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Resize or move the input. Triggers a layout pass.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.layout();
    }

    /// The input's own bounds (origin at zero).
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.frame.width(), self.frame.height())
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Get the current text.
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Check whether the input holds any text.
    pub fn has_text(&self) -> bool {
        self.text.with(|t| !t.is_empty())
    }

    /// Replace the text. Returns `true` if it changed.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let changed = self.text.set(text.into());
        if changed {
            self.layout();
        }
        changed
    }

    /// Clear all text.
    pub fn clear(&mut self) -> bool {
        self.set_text("")
    }

    /// Input text color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Set the input text color.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Metrics of the input text font.
    pub fn text_metrics(&self) -> FontMetrics {
        self.text_metrics
    }

    /// Change the input text font size. Affects the maximum top inset.
    pub fn set_text_font_size(&mut self, size: f32) {
        self.config.text_font_size = size;
        self.text_metrics = self.config.text_metrics();
        self.layout();
    }

    /// Horizontal text alignment.
    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    /// Set the horizontal text alignment. The label follows it.
    pub fn set_alignment(&mut self, alignment: TextAlignment) {
        self.alignment = alignment;
        self.layout();
    }

    // =========================================================================
    // Placeholder and Label
    // =========================================================================

    /// Get the placeholder shown while the input is empty.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the placeholder. The floating label mirrors it.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
        let mirrored = self.placeholder.clone();
        self.set_label_text(mirrored);
    }

    /// Set the placeholder and a different floating label title.
    pub fn set_placeholder_with_title(
        &mut self,
        placeholder: impl Into<String>,
        title: impl Into<String>,
    ) {
        self.placeholder = placeholder.into();
        self.set_label_text(title);
    }

    /// Get the floating label text.
    pub fn label_text(&self) -> &str {
        &self.label_text
    }

    /// Set the floating label text. Does not change its visibility.
    pub fn set_label_text(&mut self, text: impl Into<String>) {
        self.label_text = text.into();
        self.size_label_to_fit();
        self.align_label();
    }

    /// Metrics of the floating label font.
    pub fn label_metrics(&self) -> FontMetrics {
        self.label_metrics
    }

    /// Change the floating label font size and re-measure the label.
    pub fn set_label_font_size(&mut self, size: f32) {
        self.config.font_size = size;
        self.label_metrics = self.config.label_metrics();
        self.layout();
    }

    // =========================================================================
    // Focus and Animation
    // =========================================================================

    /// Check if the input has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Gain or lose focus. Triggers a layout pass.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.layout();
        }
    }

    /// Whether label transitions animate even without focus.
    pub fn is_animation_forced(&self) -> bool {
        self.config.animate_even_if_unfocused
    }

    /// Force label transitions to animate even without focus.
    pub fn set_animation_forced(&mut self, forced: bool) {
        self.config.animate_even_if_unfocused = forced;
    }

    /// The label configuration in effect.
    pub fn config(&self) -> &FloatingLabelConfig {
        &self.config
    }

    /// Current label state.
    pub fn label_state(&self) -> LabelState {
        self.state
    }

    /// Presentation values of the label as of the last layout or animation step.
    pub fn floating_label(&self) -> FloatingLabel {
        self.label
    }

    /// Check if a label transition is still running.
    pub fn is_animating(&self) -> bool {
        self.transition.is_running()
    }

    /// Label y when floating above the text.
    pub fn floating_label_y(&self) -> f32 {
        if self.config.bound_to_parent {
            0.0
        } else {
            UNBOUND_FLOATING_Y
        }
    }

    /// Label y when collapsed into the placeholder position.
    pub fn collapsed_label_y(&self) -> f32 {
        self.label_metrics.line_height() + self.config.y_padding
    }

    /// Fade the label in and raise it to the floating position.
    pub fn show_label(&mut self, animated: bool) {
        self.show_label_at(animated, Instant::now());
    }

    /// [`show_label`](Self::show_label) with an explicit clock.
    pub fn show_label_at(&mut self, animated: bool, now: Instant) {
        let pose = LabelPose {
            opacity: 1.0,
            y: self.floating_label_y(),
        };
        let duration = self.config.show_duration();
        self.move_label_to(pose, animated, duration, now);
    }

    /// Fade the label out and drop it to the collapsed position.
    pub fn hide_label(&mut self, animated: bool) {
        self.hide_label_at(animated, Instant::now());
    }

    /// [`hide_label`](Self::hide_label) with an explicit clock.
    pub fn hide_label_at(&mut self, animated: bool, now: Instant) {
        let pose = LabelPose {
            opacity: 0.0,
            y: self.collapsed_label_y(),
        };
        let duration = self.config.hide_duration();
        self.move_label_to(pose, animated, duration, now);
    }

    /// Advance a running label animation to `now`.
    ///
    /// Hosts call this once per frame while [`is_animating`](Self::is_animating)
    /// is `true`.
    pub fn advance_animation_at(&mut self, now: Instant) {
        match self.transition.update_at(now) {
            TransitionState::Running { progress } => {
                // Progress is already eased; interpolate linearly on top of it.
                self.label.opacity =
                    lerp_eased(Easing::Linear, self.origin.opacity, self.target.opacity, progress);
                self.label.frame.origin.y =
                    lerp_eased(Easing::Linear, self.origin.y, self.target.y, progress);
            }
            TransitionState::Idle => self.apply_pose(self.target),
        }
    }

    fn move_label_to(&mut self, pose: LabelPose, animated: bool, duration: Duration, now: Instant) {
        if pose == self.target {
            // Already there or already heading there.
            return;
        }

        self.target = pose;
        let animate = animated || self.config.animate_even_if_unfocused;
        if animate {
            self.origin = LabelPose {
                opacity: self.label.opacity,
                y: self.label.frame.origin.y,
            };
            self.transition.set_duration(duration);
            self.transition.set_easing(self.config.easing);
            if self.transition.start_at(now) {
                tracing::trace!(target: targets::LABEL, ?pose, ?duration, "label animation started");
                return;
            }
        }

        self.transition.stop();
        self.apply_pose(pose);
    }

    fn apply_pose(&mut self, pose: LabelPose) {
        self.label.opacity = pose.opacity;
        self.label.frame.origin.y = pose.y;
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Re-evaluate label size, alignment, color and state.
    pub fn layout(&mut self) {
        self.layout_at(Instant::now());
    }

    /// [`layout`](Self::layout) with an explicit clock.
    ///
    /// The label floats iff the input has text or focus. Transitions animate
    /// when the input has focus.
    pub fn layout_at(&mut self, now: Instant) {
        self.size_label_to_fit();
        self.align_label();

        let has_text = self.has_text();
        self.label.color = if self.focused && has_text {
            self.config.active_color
        } else {
            self.config.inactive_color
        };

        let state = if has_text || self.focused {
            LabelState::Floating
        } else {
            LabelState::Collapsed
        };

        match state {
            LabelState::Floating => self.show_label_at(self.focused, now),
            LabelState::Collapsed => self.hide_label_at(self.focused, now),
        }

        if state != self.state {
            self.state = state;
            tracing::debug!(target: targets::LABEL, ?state, has_text, focused = self.focused, "label state changed");
            self.label_state_changed.emit(state);
        }
    }

    fn size_label_to_fit(&mut self) {
        self.label.frame.size = self.label_metrics.size_to_fit(&self.label_text);
    }

    fn align_label(&mut self) {
        let text_rect = self.base_text_rect();
        let label_width = self.label.frame.width();
        self.label.frame.origin.x = match self.alignment {
            TextAlignment::Left => text_rect.left(),
            TextAlignment::Center => text_rect.left() + text_rect.width() / 2.0 - label_width / 2.0,
            TextAlignment::Right => text_rect.right() - label_width,
        };
    }

    // =========================================================================
    // Text Rects
    // =========================================================================

    /// The text area before any label inset.
    fn base_text_rect(&self) -> Rect {
        let inset_x = self.config.text_inset_x;
        self.bounds().inset(EdgeInsets {
            top: 0.0,
            left: inset_x,
            bottom: 0.0,
            right: inset_x,
        })
    }

    /// The largest top inset that still leaves one text line visible.
    pub fn max_top_inset(&self) -> f32 {
        (self.bounds().height() - self.text_metrics.line_height() - self.config.max_inset_margin)
            .floor()
            .max(0.0)
    }

    /// The top inset currently applied to the text area.
    ///
    /// Zero while empty; otherwise the label line height plus padding,
    /// clamped to [`max_top_inset`](Self::max_top_inset).
    pub fn top_inset(&self) -> f32 {
        if !self.has_text() {
            return 0.0;
        }
        let wanted = (self.label_metrics.line_height() + self.config.placeholder_y_padding).ceil();
        wanted.min(self.max_top_inset())
    }

    /// Rect in which the text is displayed.
    pub fn text_rect(&self) -> Rect {
        self.base_text_rect()
            .inset(EdgeInsets::top(self.top_inset()))
            .integral()
    }

    /// Rect in which the text is edited. Matches [`text_rect`](Self::text_rect).
    pub fn editing_rect(&self) -> Rect {
        self.text_rect()
    }

    /// Rect of the trailing clear button, re-centered below the label.
    pub fn clear_button_rect(&self) -> Rect {
        let bounds = self.bounds();
        let size = self.config.clear_button_size;
        let base = Rect::new(
            bounds.right() - size - self.config.text_inset_x,
            (bounds.height() - size) / 2.0,
            size,
            size,
        );
        base.offset(0.0, self.top_inset() / 2.0).integral()
    }
}

impl Default for LabeledInput {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LabeledInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabeledInput")
            .field("frame", &self.frame)
            .field("text", &self.text.get())
            .field("placeholder", &self.placeholder)
            .field("label_text", &self.label_text)
            .field("focused", &self.focused)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(LabeledInput: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use parking_lot::Mutex;

    fn input() -> LabeledInput {
        let mut input = LabeledInput::new().with_frame(Rect::new(20.0, 5.0, 200.0, 45.0));
        input.set_placeholder_with_title("Enter Search Here", "Search");
        input
    }

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-3, "{a} != {b}");
    }

    #[test]
    fn test_starts_collapsed_and_hidden() {
        let input = input();
        assert_eq!(input.label_state(), LabelState::Collapsed);
        let label = input.floating_label();
        assert_eq!(label.opacity, 0.0);
        assert_close(label.frame.origin.y, input.collapsed_label_y());
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_label_state_truth_table() {
        for (text, focused) in [("", false), ("", true), ("Axel", false), ("Axel", true)] {
            let mut input = input();
            input.set_text(text);
            input.set_focused(focused);
            input.advance_animation_at(Instant::now() + Duration::from_secs(1));

            let floating = !text.is_empty() || focused;
            let expected = if floating { LabelState::Floating } else { LabelState::Collapsed };
            assert_eq!(input.label_state(), expected, "text={text:?} focused={focused}");
            assert_eq!(input.floating_label().opacity, if floating { 1.0 } else { 0.0 });
        }
    }

    #[test]
    fn test_unfocused_text_change_is_instant() {
        let mut input = input();
        input.set_text("Axel");
        assert!(!input.is_animating());
        assert_eq!(input.floating_label().opacity, 1.0);
        assert_close(input.floating_label().frame.origin.y, UNBOUND_FLOATING_Y);

        input.clear();
        assert_eq!(input.label_state(), LabelState::Collapsed);
        assert_eq!(input.floating_label().opacity, 0.0);
    }

    #[test]
    fn test_focus_animates_with_ease_out() {
        let mut input = input();
        let start = Instant::now();
        input.focused = true;
        input.layout_at(start);
        assert!(input.is_animating());
        assert_eq!(input.label_state(), LabelState::Floating);

        input.advance_animation_at(start + Duration::from_millis(150));
        let halfway = input.floating_label();
        // Ease-out covers 75% of the distance at half time.
        assert_close(halfway.opacity, 0.75);
        let from_y = input.collapsed_label_y();
        assert_close(halfway.frame.origin.y, from_y + (UNBOUND_FLOATING_Y - from_y) * 0.75);

        input.advance_animation_at(start + Duration::from_millis(300));
        assert!(!input.is_animating());
        assert_eq!(input.floating_label().opacity, 1.0);
    }

    #[test]
    fn test_relayout_does_not_restart_animation() {
        let mut input = input();
        let start = Instant::now();
        input.focused = true;
        input.layout_at(start);
        input.layout_at(start + Duration::from_millis(200));

        input.advance_animation_at(start + Duration::from_millis(300));
        assert!(!input.is_animating());
    }

    #[test]
    fn test_retrigger_reverses_from_current_position() {
        let mut input = input();
        input.set_animation_forced(true);
        let start = Instant::now();

        input.show_label_at(false, start);
        input.advance_animation_at(start + Duration::from_millis(150));
        let midway = input.floating_label().opacity;

        let reverse = start + Duration::from_millis(150);
        input.hide_label_at(false, reverse);
        input.advance_animation_at(reverse);
        assert_close(input.floating_label().opacity, midway);

        input.advance_animation_at(reverse + Duration::from_millis(300));
        assert_eq!(input.floating_label().opacity, 0.0);
    }

    #[test]
    fn test_forced_animation_without_focus() {
        let mut input = input();
        input.set_animation_forced(true);
        input.set_text("Raven");
        assert!(input.is_animating());
    }

    #[test]
    fn test_show_and_hide_use_their_own_durations() {
        let config = FloatingLabelConfig {
            show_duration_ms: 100,
            hide_duration_ms: 400,
            animate_even_if_unfocused: true,
            ..FloatingLabelConfig::default()
        };
        let mut input = LabeledInput::with_config(config).with_frame(Rect::new(20.0, 5.0, 200.0, 45.0));
        input.set_placeholder_with_title("Enter Search Here", "Search");

        let start = Instant::now();
        input.focused = true;
        input.layout_at(start);
        input.advance_animation_at(start + Duration::from_millis(100));
        assert!(!input.is_animating());
        assert_eq!(input.floating_label().opacity, 1.0);

        let blur = start + Duration::from_millis(200);
        input.focused = false;
        input.layout_at(blur);
        assert_eq!(input.label_state(), LabelState::Collapsed);

        input.advance_animation_at(blur + Duration::from_millis(100));
        assert!(input.is_animating());
        let opacity = input.floating_label().opacity;
        assert!(opacity > 0.0 && opacity < 1.0, "opacity {opacity}");

        input.advance_animation_at(blur + Duration::from_millis(400));
        assert!(!input.is_animating());
        assert_eq!(input.floating_label().opacity, 0.0);
    }

    #[test]
    fn test_bound_to_parent_floats_at_zero() {
        let config = FloatingLabelConfig {
            bound_to_parent: true,
            ..FloatingLabelConfig::default()
        };
        let mut input = LabeledInput::with_config(config).with_frame(Rect::new(0.0, 0.0, 200.0, 45.0));
        input.set_text("Axel");
        assert_eq!(input.floating_label().frame.origin.y, 0.0);
    }

    #[test]
    fn test_active_color_only_when_focused_with_text() {
        let mut input = input();
        let config = input.config().clone();

        input.set_focused(true);
        assert_eq!(input.floating_label().color, config.inactive_color);
        input.set_text("Ax");
        assert_eq!(input.floating_label().color, config.active_color);
        input.set_focused(false);
        assert_eq!(input.floating_label().color, config.inactive_color);
    }

    #[test]
    fn test_text_rect_inset_tracks_text() {
        let mut input = input();
        assert_eq!(input.top_inset(), 0.0);
        assert_eq!(input.text_rect(), Rect::new(0.0, 0.0, 200.0, 45.0));

        input.set_text("Axel");
        // 12pt label line height is 14.4, ceiled to 15.
        assert_eq!(input.top_inset(), 15.0);
        assert_eq!(input.text_rect(), Rect::new(0.0, 15.0, 200.0, 30.0));
        assert_eq!(input.editing_rect(), input.text_rect());
    }

    #[test]
    fn test_top_inset_clamped_by_height() {
        let mut input = LabeledInput::new().with_frame(Rect::new(0.0, 0.0, 200.0, 28.5));
        input.set_text("Axel");
        // floor(28.5 - 18 - 4) = 6
        assert_eq!(input.max_top_inset(), 6.0);
        assert_eq!(input.top_inset(), 6.0);

        input.set_frame(Rect::new(0.0, 0.0, 200.0, 10.0));
        assert_eq!(input.max_top_inset(), 0.0);
        assert_eq!(input.top_inset(), 0.0);
    }

    #[test]
    fn test_clear_button_recentered() {
        let mut input = input();
        // Centered at y = 14.5, then pushed down by half the 15pt inset.
        assert_eq!(input.clear_button_rect(), Rect::new(184.0, 14.0, 16.0, 17.0));
        input.set_text("Axel");
        assert_eq!(input.clear_button_rect(), Rect::new(184.0, 22.0, 16.0, 16.0));
    }

    #[test]
    fn test_label_alignment() {
        let mut input = LabeledInput::with_config(FloatingLabelConfig {
            text_inset_x: 10.0,
            ..FloatingLabelConfig::default()
        })
        .with_frame(Rect::new(0.0, 0.0, 220.0, 45.0));
        input.set_label_text("Search");
        let width = input.floating_label().frame.width();
        assert!(width > 0.0);

        assert_eq!(input.floating_label().frame.left(), 10.0);
        input.set_alignment(TextAlignment::Center);
        assert_close(input.floating_label().frame.left(), 10.0 + 100.0 - width / 2.0);
        input.set_alignment(TextAlignment::Right);
        assert_close(input.floating_label().frame.right(), 210.0);
    }

    #[test]
    fn test_placeholder_mirrors_into_label() {
        let mut input = LabeledInput::new();
        input.set_placeholder("Name");
        assert_eq!(input.label_text(), "Name");

        input.set_placeholder_with_title("Type a name", "Name");
        assert_eq!(input.placeholder(), "Type a name");
        assert_eq!(input.label_text(), "Name");

        input.set_label_text("Title");
        assert_eq!(input.label_text(), "Title");
        assert_eq!(input.label_state(), LabelState::Collapsed);
    }

    #[test]
    fn test_label_font_size_remeasures() {
        let mut input = input();
        let before = input.floating_label().frame.size;
        input.set_label_font_size(20.0);
        let after = input.floating_label().frame.size;
        assert!(after.width > before.width);
        assert!(after.height > before.height);
    }

    #[test]
    fn test_label_state_signal() {
        let mut input = input();
        let states = Arc::new(Mutex::new(Vec::new()));
        let sink = states.clone();
        input.label_state_changed.connect(move |state| sink.lock().push(*state));

        input.set_text("A");
        input.set_text("Ax");
        input.clear();

        assert_eq!(*states.lock(), vec![LabelState::Floating, LabelState::Collapsed]);
    }

    #[test]
    fn test_set_text_reports_change() {
        let mut input = input();
        let transitions = Arc::new(AtomicUsize::new(0));
        let counter = transitions.clone();
        input.label_state_changed.connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(input.set_text("Axel"));
        assert!(!input.set_text("Axel"));
        assert_eq!(transitions.load(Ordering::SeqCst), 1);
    }
}
