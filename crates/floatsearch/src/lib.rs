//! floatsearch - floating-label search inputs with a filtering dropdown.
//!
//! This crate provides three widgets in the style of a retained-mode GUI
//! toolkit, built on the signals and properties of [`floatsearch_core`]:
//!
//! - [`LabeledInput`](widget::LabeledInput): text input with an animated
//!   floating label
//! - [`SearchBar`](widget::SearchBar): labeled input with a cancel button
//! - [`FilterableDropdown`](widget::FilterableDropdown): search bar with a
//!   type-ahead filtered candidate list
//!
//! The widgets keep state and compute geometry; a host feeds them input
//! events and draws the frames they report.
//!
//! # Example
//!
//! ```
//! use floatsearch::prelude::*;
//!
//! let mut dropdown = FilterableDropdown::new(Rect::new(0.0, 60.0, 375.0, 400.0));
//! dropdown.configure(
//!     vec!["Axel".into(), "Raven".into(), "Chuckie".into()],
//!     "Search",
//!     "Enter Search Here",
//! );
//!
//! dropdown.handle_text_edited("ck");
//! assert_eq!(dropdown.filtered_items(), ["Chuckie"]);
//! ```

pub use floatsearch_core::*;

pub mod animation;
pub mod config;
pub mod error;
pub mod prelude;
pub mod types;
pub mod widget;

pub use config::WidgetConfig;
pub use error::{Error, Result};
