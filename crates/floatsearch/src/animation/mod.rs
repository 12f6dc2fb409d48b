//! Easing curves and transition timing for widget animations.
//!
//! A [`Transition`] tracks how far an animation has progressed between an
//! explicit start [`Instant`](std::time::Instant) and "now"; the widget owning
//! it interpolates its own visual properties with the eased progress.
//!
//! # Example
//!
//! ```
//! use floatsearch::animation::{ease, Easing};
//!
//! let eased = ease(Easing::EaseOut, 0.5);
//! assert!(eased > 0.5);
//! ```

mod easing;
mod transition;

pub use easing::{ease, lerp_eased, Easing};
pub use transition::{Transition, TransitionState};
