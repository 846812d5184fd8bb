//! Ambient effects
//!
//! Independent, non-interacting decorations: the two-part custom cursor,
//! tilt-on-hover for cards, and the hero typewriter. Each is a pure state
//! holder; the host applies the computed values to the DOM.

pub mod cursor;
pub mod tilt;
pub mod typewriter;

pub use cursor::CursorTrail;
pub use tilt::{TiltTransform, tilt_for};
pub use typewriter::Typewriter;
