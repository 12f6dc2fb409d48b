//! Logging facilities for floatsearch.
//!
//! floatsearch instruments itself with the `tracing` crate. Nothing is
//! printed unless the host installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("floatsearch=debug")
//!     .init();
//! ```
//!
//! Every subsystem logs under one of the fixed [`targets`], so filters such
//! as `floatsearch::dropdown=trace` isolate a single widget.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "floatsearch_core";
    /// Signal emission.
    pub const SIGNAL: &str = "floatsearch_core::signal";
    /// Floating label state and animation.
    pub const LABEL: &str = "floatsearch::label";
    /// Search bar events.
    pub const SEARCH_BAR: &str = "floatsearch::search_bar";
    /// Dropdown filtering and list visibility.
    pub const DROPDOWN: &str = "floatsearch::dropdown";
    /// Configuration loading.
    pub const CONFIG: &str = "floatsearch::config";
    /// Performance spans.
    pub const PERF: &str = "floatsearch::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time short operations such as a filter pass.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Enter a new performance span for `name`.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "floatsearch::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
