//! Scene graph: renderable nodes, lights, fog, and the diorama builder.
//!
//! # Invariants
//! - All mutations flow through explicit operations on [`Scene`].
//! - Iteration order is deterministic (BTreeMap storage).
//! - The diorama builder inserts exactly three ghost point lights and never
//!   removes lights afterwards.

pub mod diorama;
pub mod graph;
pub mod light;

pub use diorama::{DioramaLights, build_diorama};
pub use graph::{Material, MeshKind, Node, Scene};
pub use light::{AmbientLight, DirectionalLight, Fog, Light, PointLight};

pub fn crate_info() -> &'static str {
    "hauntyard-scene v0.1.0"
}
