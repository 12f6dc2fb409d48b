//! Core systems for floatsearch.
//!
//! This crate provides the reactive primitives the floatsearch widgets are
//! built on:
//!
//! - **Signal/Slot System**: Type-safe notifications from a widget to any
//!   number of observers
//! - **Property System**: Values with change detection
//! - **Logging**: `tracing` targets and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use floatsearch_core::Signal;
//!
//! let row_count_changed = Signal::<usize>::new();
//! let conn_id = row_count_changed.connect(|rows| {
//!     println!("list now shows {rows} rows");
//! });
//!
//! row_count_changed.emit(2);
//! row_count_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod property;
pub mod signal;

pub use logging::{targets, PerfSpan};
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
