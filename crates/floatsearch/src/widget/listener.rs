//! Outbound event interfaces.
//!
//! Every method has a default (no-op, or `true` for
//! [`SearchBarListener::on_should_begin_editing`]), so a host implements only
//! the events it cares about. Widgets without a listener behave exactly as if
//! they had one that overrides nothing.
//!
//! For quick wiring without a dedicated type, [`SearchBarCallbacks`] and
//! [`DropdownCallbacks`] implement the traits from optional closures:
//!
//! ```
//! use std::sync::Arc;
//! use floatsearch::widget::listener::{DropdownCallbacks, DropdownListener};
//!
//! let listener = DropdownCallbacks::new()
//!     .with_row_selected(|text| println!("picked {text}"));
//!
//! listener.on_row_selected("Raven");
//! listener.on_dropdown_cancel(); // default no-op
//! let _shared: Arc<dyn DropdownListener> = Arc::new(listener);
//! ```

use std::fmt;

/// Events emitted by a [`SearchBar`](super::search_bar::SearchBar).
pub trait SearchBarListener: Send + Sync {
    /// The cancel button was tapped. Called before the text is cleared.
    fn on_cancel(&self) {}

    /// The return key was pressed.
    fn on_submit(&self) {}

    /// The input wants focus. Return `false` to refuse it.
    fn on_should_begin_editing(&self) -> bool {
        true
    }

    /// The input gained focus.
    fn on_begin_editing(&self) {}

    /// The input lost focus.
    fn on_end_editing(&self) {}

    /// The user edited the text. Receives the full new text.
    fn on_text_changed(&self, _text: &str) {}
}

/// Events emitted by a [`FilterableDropdown`](super::filterable_dropdown::FilterableDropdown).
pub trait DropdownListener: Send + Sync {
    /// The user edited the query. Receives the full new query.
    fn on_text_changed(&self, _text: &str) {}

    /// A row was tapped. Receives the search bar text after selection.
    fn on_row_selected(&self, _text: &str) {}

    /// The cancel button was tapped and the query cleared.
    fn on_dropdown_cancel(&self) {}
}

/// The listener used when a widget has none attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultListener;

impl SearchBarListener for DefaultListener {}
impl DropdownListener for DefaultListener {}

type Callback = Box<dyn Fn() + Send + Sync>;
type TextCallback = Box<dyn Fn(&str) + Send + Sync>;
type PredicateCallback = Box<dyn Fn() -> bool + Send + Sync>;

/// A [`SearchBarListener`] assembled from optional closures.
#[derive(Default)]
pub struct SearchBarCallbacks {
    cancel: Option<Callback>,
    submit: Option<Callback>,
    should_begin_editing: Option<PredicateCallback>,
    begin_editing: Option<Callback>,
    end_editing: Option<Callback>,
    text_changed: Option<TextCallback>,
}

impl SearchBarCallbacks {
    /// Start with every event at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle cancel taps.
    pub fn with_cancel(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.cancel = Some(Box::new(f));
        self
    }

    /// Handle the return key.
    pub fn with_submit(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.submit = Some(Box::new(f));
        self
    }

    /// Decide whether the input may take focus.
    pub fn with_should_begin_editing(mut self, f: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        self.should_begin_editing = Some(Box::new(f));
        self
    }

    /// Handle focus gain.
    pub fn with_begin_editing(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.begin_editing = Some(Box::new(f));
        self
    }

    /// Handle focus loss.
    pub fn with_end_editing(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.end_editing = Some(Box::new(f));
        self
    }

    /// Handle text edits.
    pub fn with_text_changed(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.text_changed = Some(Box::new(f));
        self
    }
}

impl SearchBarListener for SearchBarCallbacks {
    fn on_cancel(&self) {
        if let Some(f) = &self.cancel {
            f();
        }
    }

    fn on_submit(&self) {
        if let Some(f) = &self.submit {
            f();
        }
    }

    fn on_should_begin_editing(&self) -> bool {
        self.should_begin_editing.as_ref().is_none_or(|f| f())
    }

    fn on_begin_editing(&self) {
        if let Some(f) = &self.begin_editing {
            f();
        }
    }

    fn on_end_editing(&self) {
        if let Some(f) = &self.end_editing {
            f();
        }
    }

    fn on_text_changed(&self, text: &str) {
        if let Some(f) = &self.text_changed {
            f(text);
        }
    }
}

impl fmt::Debug for SearchBarCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchBarCallbacks")
            .field("cancel", &self.cancel.is_some())
            .field("submit", &self.submit.is_some())
            .field("should_begin_editing", &self.should_begin_editing.is_some())
            .field("begin_editing", &self.begin_editing.is_some())
            .field("end_editing", &self.end_editing.is_some())
            .field("text_changed", &self.text_changed.is_some())
            .finish()
    }
}

/// A [`DropdownListener`] assembled from optional closures.
#[derive(Default)]
pub struct DropdownCallbacks {
    text_changed: Option<TextCallback>,
    row_selected: Option<TextCallback>,
    dropdown_cancel: Option<Callback>,
}

impl DropdownCallbacks {
    /// Start with every event at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle query edits.
    pub fn with_text_changed(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.text_changed = Some(Box::new(f));
        self
    }

    /// Handle row selection.
    pub fn with_row_selected(mut self, f: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.row_selected = Some(Box::new(f));
        self
    }

    /// Handle cancel.
    pub fn with_dropdown_cancel(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.dropdown_cancel = Some(Box::new(f));
        self
    }
}

impl DropdownListener for DropdownCallbacks {
    fn on_text_changed(&self, text: &str) {
        if let Some(f) = &self.text_changed {
            f(text);
        }
    }

    fn on_row_selected(&self, text: &str) {
        if let Some(f) = &self.row_selected {
            f(text);
        }
    }

    fn on_dropdown_cancel(&self) {
        if let Some(f) = &self.dropdown_cancel {
            f();
        }
    }
}

impl fmt::Debug for DropdownCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownCallbacks")
            .field("text_changed", &self.text_changed.is_some())
            .field("row_selected", &self.row_selected.is_some())
            .field("dropdown_cancel", &self.dropdown_cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_default_listener_accepts_focus() {
        assert!(SearchBarListener::on_should_begin_editing(&DefaultListener));
        assert!(SearchBarCallbacks::new().on_should_begin_editing());
    }

    #[test]
    fn test_callbacks_override_only_what_is_set() {
        let refused = SearchBarCallbacks::new().with_should_begin_editing(|| false);
        assert!(!refused.on_should_begin_editing());
        refused.on_cancel();
        refused.on_text_changed("ignored");
    }

    #[test]
    fn test_dropdown_callbacks_forward() {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();
        let listener = DropdownCallbacks::new().with_dropdown_cancel(move || {
            flag.store(true, Ordering::SeqCst);
        });

        listener.on_row_selected("Raven");
        listener.on_dropdown_cancel();
        assert!(cancelled.load(Ordering::SeqCst));
    }
}
