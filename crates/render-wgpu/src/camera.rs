use glam::{Mat4, Vec3};
use hauntyard_anim::CameraRig;

const MIN_PITCH: f32 = -1.5533; // just shy of +-89 degrees
const MAX_PITCH: f32 = 1.5533;
const MIN_DISTANCE: f32 = 0.5;
const MAX_DISTANCE: f32 = 50.0;
const DAMPING: f32 = 0.15;

/// Orbit camera circling a target point.
///
/// Mouse input accumulates as pending rotation/zoom; [`CameraRig::update`]
/// eases it in with exponential damping each tick, so motion keeps gliding
/// briefly after the drag stops.
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub sensitivity: f32,
    pub zoom_speed: f32,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        // Matches the startup eye position (0, 2, 5) looking at the origin.
        let distance = (2.0_f32 * 2.0 + 5.0 * 5.0).sqrt();
        Self {
            target: Vec3::ZERO,
            yaw: std::f32::consts::FRAC_PI_2,
            pitch: (2.0 / distance).asin(),
            distance,
            fov: 75.0_f32.to_radians(),
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            sensitivity: 0.005,
            zoom_speed: 0.5,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,
        }
    }
}

impl OrbitCamera {
    /// Queue an orbit from a mouse drag, in pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.pending_yaw += dx * self.sensitivity;
        self.pending_pitch += dy * self.sensitivity;
    }

    /// Queue a zoom from scroll input. Positive scroll moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        self.pending_zoom -= scroll * self.zoom_speed;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Vec3 {
        let offset = Vec3::new(
            self.pitch.cos() * self.yaw.cos(),
            self.pitch.sin(),
            self.pitch.cos() * self.yaw.sin(),
        ) * self.distance;
        self.target + offset
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl CameraRig for OrbitCamera {
    fn update(&mut self) {
        self.yaw += self.pending_yaw * DAMPING;
        self.pitch = (self.pitch + self.pending_pitch * DAMPING).clamp(MIN_PITCH, MAX_PITCH);
        self.distance =
            (self.distance + self.pending_zoom * DAMPING).clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.pending_yaw *= 1.0 - DAMPING;
        self.pending_pitch *= 1.0 - DAMPING;
        self.pending_zoom *= 1.0 - DAMPING;
    }
}

/// Output surface dimensions. On resize the owner feeds [`Viewport::aspect`]
/// back into [`OrbitCamera::set_aspect`], keeping the projection in sync
/// with the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hauntyard_anim::{AnimationDriver, FixedStepClock, GhostLights};
    use hauntyard_scene::build_diorama;

    #[test]
    fn default_camera_matches_startup_eye() {
        let cam = OrbitCamera::default();
        let eye = cam.eye();
        assert!((eye - Vec3::new(0.0, 2.0, 5.0)).length() < 1e-4);
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn update_eases_pending_rotation_in() {
        let mut cam = OrbitCamera::default();
        let yaw0 = cam.yaw;
        cam.rotate(100.0, 0.0);
        cam.update();
        assert!(cam.yaw > yaw0);
        let yaw1 = cam.yaw;
        // Damping keeps gliding without further input.
        cam.update();
        assert!(cam.yaw > yaw1);
    }

    #[test]
    fn pitch_and_distance_stay_clamped() {
        let mut cam = OrbitCamera::default();
        cam.rotate(0.0, 1e6);
        cam.zoom(1e6);
        for _ in 0..200 {
            cam.update();
        }
        assert!(cam.pitch <= MAX_PITCH);
        assert!(cam.distance >= MIN_DISTANCE);
    }

    #[test]
    fn resize_updates_aspect_and_reported_size() {
        let mut viewport = Viewport::new(800, 600);
        let mut cam = OrbitCamera::default();
        cam.set_aspect(viewport.aspect());
        assert!((cam.aspect - 800.0 / 600.0).abs() < 1e-6);

        viewport.resize(1920, 1080);
        cam.set_aspect(viewport.aspect());
        assert_eq!((viewport.width(), viewport.height()), (1920, 1080));
        assert!((cam.aspect - 1920.0 / 1080.0).abs() < 1e-6);
    }

    #[test]
    fn resize_leaves_lights_untouched() {
        let (mut scene, lights) = build_diorama(42);
        let driver = AnimationDriver::new(FixedStepClock::new(1.0), GhostLights::from(lights));
        driver.apply_ghost_positions(&mut scene, 1.0);
        let before = scene
            .light(lights.ghost1)
            .unwrap()
            .as_point()
            .unwrap()
            .position;

        let mut viewport = Viewport::new(800, 600);
        let mut cam = OrbitCamera::default();
        viewport.resize(1920, 1080);
        cam.set_aspect(viewport.aspect());

        let after = scene
            .light(lights.ghost1)
            .unwrap()
            .as_point()
            .unwrap()
            .position;
        assert_eq!(before, after);
    }

    #[test]
    fn viewport_clamps_zero_dimensions() {
        let mut viewport = Viewport::new(0, 0);
        assert_eq!((viewport.width(), viewport.height()), (1, 1));
        viewport.resize(100, 0);
        assert_eq!(viewport.height(), 1);
        assert!(viewport.aspect().is_finite());
    }
}
