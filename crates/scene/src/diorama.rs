//! Builder for the haunted-yard diorama: house, bushes, scattered graves,
//! ground plane, and the static + ghost lights.
//!
//! Grave placement draws from a seeded RNG, so the same seed always produces
//! the same yard. The original texture maps are out of scope; materials are
//! flat colors matching the originals' dominant tones.

use crate::graph::{Material, MeshKind, Node, Scene};
use crate::light::{AmbientLight, DirectionalLight, Fog, Light, PointLight};
use glam::{Quat, Vec3};
use hauntyard_common::{Color, LightId, Transform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;

/// Handles to the lights the animation loop and tests care about.
#[derive(Debug, Clone, Copy)]
pub struct DioramaLights {
    pub ghost1: LightId,
    pub ghost2: LightId,
    pub ghost3: LightId,
    pub door_light: LightId,
    pub moonlight: LightId,
}

const NIGHT: u32 = 0x262837;
const GRAVE_COUNT: usize = 50;

fn node(mesh: MeshKind, color: u32, transform: Transform, cast_shadow: bool) -> Node {
    Node {
        mesh,
        material: Material {
            color: Color::from_rgb_hex(color),
        },
        transform,
        cast_shadow,
    }
}

/// Build the full diorama. Returns the scene and the light handles.
pub fn build_diorama(seed: u64) -> (Scene, DioramaLights) {
    let mut scene = Scene::new();
    scene.clear_color = Color::from_rgb_hex(NIGHT);
    scene.fog = Some(Fog {
        color: Color::from_rgb_hex(NIGHT),
        near: 1.0,
        far: 20.0,
    });
    scene.ambient = AmbientLight {
        color: Color::from_rgb_hex(0xb9d5ff),
        intensity: 0.0,
    };

    // Walls
    scene.insert_node(node(
        MeshKind::Cube,
        0x8d5b4c,
        Transform {
            position: Vec3::new(0.0, 1.251, 0.0),
            scale: Vec3::new(4.0, 2.5, 4.0),
            ..Transform::default()
        },
        true,
    ));

    // Roof: four-sided cone, turned 45 degrees so its faces line up with
    // the walls.
    scene.insert_node(node(
        MeshKind::Cone { segments: 4 },
        0xb35f45,
        Transform {
            position: Vec3::new(0.0, 3.0, 0.0),
            rotation: Quat::from_rotation_y(PI * 0.25),
            scale: Vec3::new(3.5, 1.0, 3.5),
        },
        false,
    ));

    // Door: flat plane just in front of the +Z wall face.
    scene.insert_node(node(
        MeshKind::Plane,
        0x6b4a2f,
        Transform {
            position: Vec3::new(0.0, 1.0, 2.01),
            scale: Vec3::new(2.0, 2.0, 1.0),
            ..Transform::default()
        },
        false,
    ));

    // Bushes
    let bushes = [
        (0.5, Vec3::new(0.8, 0.2, 2.2)),
        (0.25, Vec3::new(1.4, 0.1, 2.1)),
        (0.15, Vec3::new(-1.0, 0.05, 2.6)),
        (0.4, Vec3::new(-0.8, 0.1, 2.2)),
    ];
    for (scale, position) in bushes {
        scene.insert_node(node(
            MeshKind::Sphere,
            0x89c854,
            Transform {
                position,
                scale: Vec3::splat(scale),
                ..Transform::default()
            },
            true,
        ));
    }

    // Graves, scattered in a ring around the house.
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..GRAVE_COUNT {
        let angle = rng.r#gen::<f32>() * PI * 2.0;
        let radius = 3.0 + rng.r#gen::<f32>() * 6.0;
        let yaw = (rng.r#gen::<f32>() - 0.5) * 0.4;
        let roll = (rng.r#gen::<f32>() - 0.5) * 0.4;
        scene.insert_node(node(
            MeshKind::Cube,
            0xb2b6b1,
            Transform {
                position: Vec3::new(angle.sin() * radius, 0.3, angle.cos() * radius),
                rotation: Quat::from_rotation_y(yaw) * Quat::from_rotation_z(roll),
                scale: Vec3::new(0.6, 0.8, 0.2),
            },
            true,
        ));
    }

    // Ground plane, laid flat.
    scene.insert_node(node(
        MeshKind::Plane,
        0x39603d,
        Transform {
            position: Vec3::ZERO,
            rotation: Quat::from_rotation_x(-PI * 0.5),
            scale: Vec3::new(20.0, 20.0, 1.0),
        },
        false,
    ));

    // Door light over the entrance.
    let door_light = scene.insert_light(Light::Point(PointLight {
        position: Vec3::new(0.0, 1.1, 2.7),
        color: Color::from_rgb_hex(0xff7d46),
        intensity: 1.0,
        range: 7.0,
    }));

    // Moonlight
    let moonlight = scene.insert_light(Light::Directional(DirectionalLight {
        position: Vec3::new(4.0, 5.0, -2.0),
        color: Color::from_rgb_hex(0xb9d5ff),
        intensity: 0.12,
    }));

    // Ghost lights: repositioned every tick by the animation driver.
    let ghost = |color| {
        Light::Point(PointLight {
            position: Vec3::ZERO,
            color: Color::from_rgb_hex(color),
            intensity: 2.0,
            range: 3.0,
        })
    };
    let ghost1 = scene.insert_light(ghost(0xff00ff));
    let ghost2 = scene.insert_light(ghost(0x00ffff));
    let ghost3 = scene.insert_light(ghost(0xffff00));

    tracing::debug!(
        nodes = scene.node_count(),
        lights = scene.light_count(),
        seed,
        "diorama built"
    );

    (
        scene,
        DioramaLights {
            ghost1,
            ghost2,
            ghost3,
            door_light,
            moonlight,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diorama_node_and_light_counts() {
        let (scene, _) = build_diorama(42);
        // walls + roof + door + 4 bushes + 50 graves + ground
        assert_eq!(scene.node_count(), 8 + GRAVE_COUNT);
        // door light + moonlight + 3 ghosts
        assert_eq!(scene.light_count(), 5);
    }

    #[test]
    fn exactly_three_ghost_point_lights() {
        let (scene, lights) = build_diorama(42);
        for id in [lights.ghost1, lights.ghost2, lights.ghost3] {
            let light = scene.light(id).expect("ghost light present");
            let point = light.as_point().expect("ghost is a point light");
            assert_eq!(point.intensity, 2.0);
            assert_eq!(point.range, 3.0);
        }
        assert!(scene.light(lights.moonlight).unwrap().as_point().is_none());
    }

    #[test]
    fn same_seed_same_yard() {
        let (a, lights_a) = build_diorama(7);
        let (b, lights_b) = build_diorama(7);

        // Ids, iteration order, and node data all reproduce.
        let nodes_a: Vec<_> = a.nodes().iter().map(|(id, n)| (*id, *n)).collect();
        let nodes_b: Vec<_> = b.nodes().iter().map(|(id, n)| (*id, *n)).collect();
        assert_eq!(nodes_a, nodes_b);

        let lights_in_a: Vec<_> = a.lights().iter().map(|(id, l)| (*id, *l)).collect();
        let lights_in_b: Vec<_> = b.lights().iter().map(|(id, l)| (*id, *l)).collect();
        assert_eq!(lights_in_a, lights_in_b);

        assert_eq!(lights_a.ghost1, lights_b.ghost1);
        assert_eq!(lights_a.ghost2, lights_b.ghost2);
        assert_eq!(lights_a.ghost3, lights_b.ghost3);
    }

    #[test]
    fn different_seed_different_scatter() {
        let (a, _) = build_diorama(7);
        let (b, _) = build_diorama(8);
        let pos_a: Vec<Vec3> = a.nodes().values().map(|n| n.transform.position).collect();
        let pos_b: Vec<Vec3> = b.nodes().values().map(|n| n.transform.position).collect();
        assert_ne!(pos_a, pos_b);
    }

    #[test]
    fn graves_stay_in_the_yard_ring() {
        let (scene, _) = build_diorama(1);
        let graves = scene
            .nodes()
            .values()
            .filter(|n| n.transform.scale == Vec3::new(0.6, 0.8, 0.2));
        let mut count = 0;
        for grave in graves {
            let p = grave.transform.position;
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((3.0..=9.0).contains(&r), "grave radius {r} out of ring");
            assert_eq!(p.y, 0.3);
            count += 1;
        }
        assert_eq!(count, GRAVE_COUNT);
    }

    #[test]
    fn night_palette() {
        let (scene, _) = build_diorama(42);
        assert_eq!(scene.clear_color, Color::from_rgb_hex(0x262837));
        let fog = scene.fog.expect("fog set");
        assert_eq!(fog.color, scene.clear_color);
        assert_eq!(fog.near, 1.0);
        assert_eq!(fog.far, 20.0);
        assert_eq!(scene.ambient.intensity, 0.0);
    }
}
