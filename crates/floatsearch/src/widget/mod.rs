//! Widgets for floatsearch.
//!
//! Three widgets build on one another:
//!
//! - [`LabeledInput`]: a single-line input whose placeholder floats up into
//!   a caption once the input holds text or focus
//! - [`SearchBar`]: a labeled input with a cancel button and underline
//! - [`FilterableDropdown`]: a search bar over a list that filters its
//!   candidates as the user types
//!
//! Widgets are driven by explicit event methods (`handle_text_edited`,
//! `tap_cancel`, `select_row`, ...) and report back through the listener
//! traits in [`listener`]. They compute geometry but do not render.

pub mod dropdown_list;
pub mod filter;
pub mod filterable_dropdown;
pub mod labeled_input;
pub mod listener;
pub mod search_bar;


pub use dropdown_list::DropdownList;
pub use filter::{filter_items, CandidateFilter, CaseSensitivity, SubstringFilter};
pub use filterable_dropdown::{DropDirection, EmbeddedSearchBar, FilterableDropdown};
pub use labeled_input::{FloatingLabel, LabelState, LabeledInput};
pub use listener::{
    DefaultListener, DropdownCallbacks, DropdownListener, SearchBarCallbacks, SearchBarListener,
};
pub use search_bar::SearchBar;
