//! wgpu render backend for the hauntyard diorama.
//!
//! Renders the scene graph's unit meshes (cube, cone, sphere, plane) with
//! instanced draws, shaded by the scene's ambient, directional, and point
//! lights, with linear fog.
//!
//! # Invariants
//! - The renderer never mutates the scene.
//! - Camera motion lives outside the animation driver's determinism: only
//!   ghost light positions are a function of elapsed time.

mod camera;
mod gpu;
mod mesh;
mod shaders;

pub use camera::{OrbitCamera, Viewport};
pub use gpu::WgpuRenderer;
