//! Animation driver: advances the ghost lights as a pure function of
//! elapsed time, then steps the camera controls.
//!
//! # Invariants
//! - Ghost positions depend only on elapsed time and fixed path parameters;
//!   there is no accumulation and no cross-light coupling.
//! - A missing ghost handle skips that light (logged) and never aborts the
//!   tick.
//! - The driver mutates ghost light positions and nothing else in the scene.

pub mod clock;
pub mod driver;
pub mod path;

pub use clock::{Clock, FixedStepClock, SystemClock};
pub use driver::{AnimationDriver, CameraRig, GhostLights};
pub use path::{ghost1_position, ghost2_position, ghost3_position};
