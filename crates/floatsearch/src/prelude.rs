//! Prelude module for floatsearch.
//!
//! ```
//! use floatsearch::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signal/slot and property primitives (`Signal`, `Property`)
//! - Geometry and color types (`Point`, `Size`, `Rect`, `Color`)
//! - The widgets and their listener traits
//! - Widget configuration

// ============================================================================
// Signal/Slot and Property System
// ============================================================================

pub use floatsearch_core::{ConnectionId, Property, Signal};

// ============================================================================
// Geometry Types
// ============================================================================

pub use crate::types::{Color, EdgeInsets, FontMetrics, Point, Rect, Size, TextAlignment};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::{
    CandidateFilter, CaseSensitivity, DropDirection, DropdownList, EmbeddedSearchBar, FilterableDropdown,
    FloatingLabel, LabelState, LabeledInput, SearchBar, SubstringFilter,
};

// ============================================================================
// Listeners
// ============================================================================

pub use crate::widget::{
    DefaultListener, DropdownCallbacks, DropdownListener, SearchBarCallbacks, SearchBarListener,
};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::config::{DropdownConfig, FloatingLabelConfig, SearchBarConfig, WidgetConfig};
pub use crate::error::{Error, Result};
