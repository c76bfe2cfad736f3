use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Namespace tags keeping node and light id spaces disjoint.
const NODE_ID_NS: u64 = 1;
const LIGHT_ID_NS: u64 = 2;

/// Unique identifier for a renderable node in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    /// Fresh random id. Scene construction uses [`NodeId::from_index`]
    /// instead so builds are reproducible.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic id for the nth node inserted into a scene. Indices
    /// order the same way the ids do, so iteration follows insertion.
    pub fn from_index(index: u64) -> Self {
        Self(Uuid::from_u64_pair(NODE_ID_NS, index))
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a light in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LightId(pub Uuid);

impl LightId {
    /// Fresh random id. Scene construction uses [`LightId::from_index`]
    /// instead so builds are reproducible.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic id for the nth light inserted into a scene.
    pub fn from_index(index: u64) -> Self {
        Self(Uuid::from_u64_pair(LIGHT_ID_NS, index))
    }
}

impl Default for LightId {
    fn default() -> Self {
        Self::new()
    }
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

/// Linear RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);

    /// Color from a 24-bit hex value, e.g. `0x262837`. Alpha is 1.
    pub fn from_rgb_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xff) as f32 / 255.0;
        let g = ((hex >> 8) & 0xff) as f32 / 255.0;
        let b = (hex & 0xff) as f32 / 255.0;
        Self([r, g, b, 1.0])
    }
}
