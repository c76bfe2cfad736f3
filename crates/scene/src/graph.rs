use crate::light::{AmbientLight, Fog, Light, PointLight};
use hauntyard_common::{Color, LightId, NodeId, Transform};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unit mesh shape rendered for a node. Size and placement come from the
/// node transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshKind {
    Cube,
    Cone { segments: u32 },
    Sphere,
    Plane,
}

/// Flat-color material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Color,
}

/// A renderable node in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub mesh: MeshKind,
    pub material: Material,
    pub transform: Transform,
    /// Kept as scene data; the current backend does not render shadows.
    pub cast_shadow: bool,
}

/// The scene graph.
///
/// Nodes and lights live in BTreeMaps keyed by their ids so iteration order
/// is deterministic across platforms. Ids are allocated from per-scene
/// counters, so rebuilding the same scene yields the same ids in the same
/// order. Construction happens once at startup; afterwards the only
/// per-frame mutation is point-light repositioning via
/// [`Scene::point_light_mut`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    nodes: BTreeMap<NodeId, Node>,
    lights: BTreeMap<LightId, Light>,
    next_node: u64,
    next_light: u64,
    pub ambient: AmbientLight,
    pub fog: Option<Fog>,
    pub clear_color: Color,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            nodes: BTreeMap::new(),
            lights: BTreeMap::new(),
            next_node: 0,
            next_light: 0,
            ambient: AmbientLight::default(),
            fog: None,
            clear_color: Color([0.0, 0.0, 0.0, 1.0]),
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a renderable node. Returns its id, allocated sequentially so
    /// identical construction sequences produce identical scenes.
    pub fn insert_node(&mut self, node: Node) -> NodeId {
        let id = NodeId::from_index(self.next_node);
        self.next_node += 1;
        self.nodes.insert(id, node);
        id
    }

    /// Insert a light. Returns its id, allocated sequentially.
    pub fn insert_light(&mut self, light: Light) -> LightId {
        let id = LightId::from_index(self.next_light);
        self.next_light += 1;
        self.lights.insert(id, light);
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn light(&self, id: LightId) -> Option<&Light> {
        self.lights.get(&id)
    }

    /// Mutable access to a point light's data. Returns `None` when the id is
    /// unknown or refers to a non-point light.
    pub fn point_light_mut(&mut self, id: LightId) -> Option<&mut PointLight> {
        self.lights.get_mut(&id).and_then(Light::as_point_mut)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Read-only access to all nodes (deterministic iteration order).
    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    /// Read-only access to all lights (deterministic iteration order).
    pub fn lights(&self) -> &BTreeMap<LightId, Light> {
        &self.lights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn gray_cube() -> Node {
        Node {
            mesh: MeshKind::Cube,
            material: Material {
                color: Color::WHITE,
            },
            transform: Transform::default(),
            cast_shadow: false,
        }
    }

    #[test]
    fn insert_and_lookup_node() {
        let mut scene = Scene::new();
        let id = scene.insert_node(gray_cube());
        assert_eq!(scene.node_count(), 1);
        assert!(scene.node(id).is_some());
        assert!(scene.node(NodeId::new()).is_none());
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut scene = Scene::new();
        let ids: Vec<NodeId> = (0..5).map(|_| scene.insert_node(gray_cube())).collect();
        let iterated: Vec<NodeId> = scene.nodes().keys().copied().collect();
        assert_eq!(ids, iterated);

        let mut rebuilt = Scene::new();
        let again: Vec<NodeId> = (0..5).map(|_| rebuilt.insert_node(gray_cube())).collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn point_light_mut_rejects_directional() {
        let mut scene = Scene::new();
        let point = scene.insert_light(Light::Point(PointLight::default()));
        let moon = scene.insert_light(Light::Directional(crate::DirectionalLight {
            position: Vec3::new(4.0, 5.0, -2.0),
            color: Color::WHITE,
            intensity: 0.12,
        }));

        assert!(scene.point_light_mut(point).is_some());
        assert!(scene.point_light_mut(moon).is_none());
        assert!(scene.point_light_mut(LightId::new()).is_none());
    }

    #[test]
    fn point_light_position_mutation_sticks() {
        let mut scene = Scene::new();
        let id = scene.insert_light(Light::Point(PointLight::default()));
        scene.point_light_mut(id).unwrap().position = Vec3::new(4.0, 0.0, 0.0);
        assert_eq!(
            scene.light(id).unwrap().as_point().unwrap().position,
            Vec3::new(4.0, 0.0, 0.0)
        );
    }
}
