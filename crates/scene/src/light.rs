use glam::Vec3;
use hauntyard_common::Color;
use serde::{Deserialize, Serialize};

/// Scene-wide ambient term. Exactly one per scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            intensity: 0.0,
        }
    }
}

/// A directional light (moon-like). The direction points from `position`
/// toward the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
}

impl DirectionalLight {
    /// Normalized direction the light travels in.
    pub fn direction(&self) -> Vec3 {
        (-self.position).normalize_or_zero()
    }
}

/// An omnidirectional point light with a finite attenuation range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub color: Color,
    pub intensity: f32,
    /// Distance beyond which the light contributes nothing.
    pub range: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: Color::WHITE,
            intensity: 1.0,
            range: 10.0,
        }
    }
}

/// Any positional light stored in the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
}

impl Light {
    pub fn as_point(&self) -> Option<&PointLight> {
        match self {
            Light::Point(p) => Some(p),
            Light::Directional(_) => None,
        }
    }

    pub fn as_point_mut(&mut self) -> Option<&mut PointLight> {
        match self {
            Light::Point(p) => Some(p),
            Light::Directional(_) => None,
        }
    }
}

/// Linear fog by view distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fog {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directional_light_direction_is_normalized() {
        let moon = DirectionalLight {
            position: Vec3::new(4.0, 5.0, -2.0),
            color: Color::WHITE,
            intensity: 0.12,
        };
        let dir = moon.direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.y < 0.0);
    }

    #[test]
    fn light_point_accessors() {
        let mut l = Light::Point(PointLight::default());
        assert!(l.as_point().is_some());
        l.as_point_mut().unwrap().position = Vec3::ONE;
        assert_eq!(l.as_point().unwrap().position, Vec3::ONE);

        let d = Light::Directional(DirectionalLight {
            position: Vec3::Y,
            color: Color::WHITE,
            intensity: 1.0,
        });
        assert!(d.as_point().is_none());
    }
}
