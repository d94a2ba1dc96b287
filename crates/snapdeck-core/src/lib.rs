//! Slide scroll controller core.
//!
//! Turns noisy wheel, touch and keyboard input into exactly one slide
//! transition per gesture, animates the scroll offset with an eased tween
//! and exposes the landed index through a [`SlideBridge`]. Platform-free:
//! frontends supply timestamps and the container's live offset, and apply
//! the offsets handed back.

pub mod animator;
pub mod attach;
pub mod bridge;
pub mod config;
pub mod constants;
pub mod controller;
pub mod easing;
pub mod error;
pub mod gate;
pub mod input;
pub mod position;

pub use animator::*;
pub use attach::*;
pub use bridge::*;
pub use config::*;
pub use controller::*;
pub use easing::*;
pub use error::*;
pub use gate::*;
pub use input::*;
pub use position::*;
