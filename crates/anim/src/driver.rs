use crate::clock::Clock;
use crate::path;
use glam::DVec3;
use hauntyard_common::LightId;
use hauntyard_scene::Scene;

/// Camera-control seam: the driver steps the controls once per tick, after
/// the ghost lights move and before the caller renders.
pub trait CameraRig {
    fn update(&mut self);
}

/// Optional handle per ghost light. Absence means that ghost is skipped
/// every tick (logged, non-fatal) while the others keep moving.
#[derive(Debug, Clone, Copy, Default)]
pub struct GhostLights {
    pub ghost1: Option<LightId>,
    pub ghost2: Option<LightId>,
    pub ghost3: Option<LightId>,
}

impl From<hauntyard_scene::DioramaLights> for GhostLights {
    fn from(lights: hauntyard_scene::DioramaLights) -> Self {
        Self {
            ghost1: Some(lights.ghost1),
            ghost2: Some(lights.ghost2),
            ghost3: Some(lights.ghost3),
        }
    }
}

/// Drives the per-frame update: reads the clock, writes the closed-form
/// ghost positions into the scene, then steps the camera controls. The
/// caller renders with the result and schedules the next tick.
#[derive(Debug)]
pub struct AnimationDriver<C: Clock> {
    clock: C,
    ghosts: GhostLights,
}

impl<C: Clock> AnimationDriver<C> {
    pub fn new(clock: C, ghosts: GhostLights) -> Self {
        Self { clock, ghosts }
    }

    pub fn ghosts(&self) -> GhostLights {
        self.ghosts
    }

    /// Run one tick. Returns the elapsed time the tick was evaluated at.
    pub fn tick(&mut self, scene: &mut Scene, controls: &mut impl CameraRig) -> f64 {
        let t = self.clock.elapsed_secs();
        self.apply_ghost_positions(scene, t);
        controls.update();
        t
    }

    /// Write the ghost positions for time `t` into the scene. Split out from
    /// [`Self::tick`] so tests can evaluate a known instant directly.
    pub fn apply_ghost_positions(&self, scene: &mut Scene, t: f64) {
        move_ghost(scene, "ghost1", self.ghosts.ghost1, path::ghost1_position(t));
        move_ghost(scene, "ghost2", self.ghosts.ghost2, path::ghost2_position(t));
        move_ghost(scene, "ghost3", self.ghosts.ghost3, path::ghost3_position(t));
    }
}

fn move_ghost(scene: &mut Scene, name: &str, id: Option<LightId>, position: DVec3) {
    let Some(id) = id else {
        tracing::warn!(ghost = name, "ghost light handle missing; skipping");
        return;
    };
    match scene.point_light_mut(id) {
        Some(light) => light.position = position.as_vec3(),
        None => tracing::warn!(ghost = name, "ghost light not in scene; skipping"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedStepClock;
    use glam::Vec3;
    use hauntyard_scene::build_diorama;

    struct CountingRig(u32);

    impl CameraRig for CountingRig {
        fn update(&mut self) {
            self.0 += 1;
        }
    }

    fn ghost_position(scene: &Scene, id: LightId) -> Vec3 {
        scene.light(id).unwrap().as_point().unwrap().position
    }

    #[test]
    fn tick_moves_all_three_ghosts_and_steps_controls() {
        let (mut scene, lights) = build_diorama(42);
        let mut driver = AnimationDriver::new(FixedStepClock::new(0.25), lights.into());
        let mut rig = CountingRig(0);

        let t = driver.tick(&mut scene, &mut rig);
        assert_eq!(t, 0.25);
        assert_eq!(rig.0, 1);

        assert_eq!(
            ghost_position(&scene, lights.ghost1),
            path::ghost1_position(0.25).as_vec3()
        );
        assert_eq!(
            ghost_position(&scene, lights.ghost2),
            path::ghost2_position(0.25).as_vec3()
        );
        assert_eq!(
            ghost_position(&scene, lights.ghost3),
            path::ghost3_position(0.25).as_vec3()
        );
    }

    #[test]
    fn ticks_are_idempotent_at_fixed_time() {
        let (mut scene, lights) = build_diorama(42);
        let driver = AnimationDriver::new(FixedStepClock::new(1.0), GhostLights::from(lights));

        driver.apply_ghost_positions(&mut scene, 3.5);
        let first = ghost_position(&scene, lights.ghost2);
        driver.apply_ghost_positions(&mut scene, 3.5);
        assert_eq!(first, ghost_position(&scene, lights.ghost2));
    }

    #[test]
    fn at_time_zero_ghosts_sit_on_the_x_axis() {
        let (mut scene, lights) = build_diorama(42);
        let driver = AnimationDriver::new(FixedStepClock::new(1.0), GhostLights::from(lights));
        driver.apply_ghost_positions(&mut scene, 0.0);

        assert_eq!(ghost_position(&scene, lights.ghost1), Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(ghost_position(&scene, lights.ghost2), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(ghost_position(&scene, lights.ghost3), Vec3::new(7.0, 0.0, 0.0));
    }

    #[test]
    fn missing_ghost2_skips_cleanly() {
        let (mut scene, lights) = build_diorama(42);
        let ghosts = GhostLights {
            ghost2: None,
            ..GhostLights::from(lights)
        };
        let mut driver = AnimationDriver::new(FixedStepClock::new(0.5), ghosts);
        let mut rig = CountingRig(0);

        let before = ghost_position(&scene, lights.ghost2);
        let t = driver.tick(&mut scene, &mut rig);

        // Ghosts 1 and 3 still follow their paths; ghost 2 never moved.
        assert_eq!(
            ghost_position(&scene, lights.ghost1),
            path::ghost1_position(t).as_vec3()
        );
        assert_eq!(
            ghost_position(&scene, lights.ghost3),
            path::ghost3_position(t).as_vec3()
        );
        assert_eq!(ghost_position(&scene, lights.ghost2), before);
        assert_eq!(rig.0, 1);
    }

    #[test]
    fn stale_handle_skips_cleanly() {
        let (mut scene, lights) = build_diorama(42);
        let ghosts = GhostLights {
            ghost1: Some(LightId::new()),
            ..GhostLights::from(lights)
        };
        let mut driver = AnimationDriver::new(FixedStepClock::new(0.5), ghosts);
        let mut rig = CountingRig(0);
        let t = driver.tick(&mut scene, &mut rig);
        assert_eq!(
            ghost_position(&scene, lights.ghost2),
            path::ghost2_position(t).as_vec3()
        );
    }

    #[test]
    fn hundred_fixed_ticks_land_on_the_closed_form() {
        let (mut scene, lights) = build_diorama(42);
        let mut driver =
            AnimationDriver::new(FixedStepClock::new(1.0 / 60.0), GhostLights::from(lights));
        let mut rig = CountingRig(0);

        let mut t = 0.0;
        for _ in 0..100 {
            t = driver.tick(&mut scene, &mut rig);
        }
        assert!((t - 100.0 / 60.0).abs() < 1e-9);
        assert_eq!(rig.0, 100);

        let expect1 = path::ghost1_position(t).as_vec3();
        let expect2 = path::ghost2_position(t).as_vec3();
        let expect3 = path::ghost3_position(t).as_vec3();
        assert_eq!(ghost_position(&scene, lights.ghost1), expect1);
        assert_eq!(ghost_position(&scene, lights.ghost2), expect2);
        assert_eq!(ghost_position(&scene, lights.ghost3), expect3);
    }

    #[test]
    fn tick_touches_only_ghost_lights() {
        let (mut scene, lights) = build_diorama(42);
        let door_before = *scene.light(lights.door_light).unwrap();
        let nodes_before: Vec<_> = scene.nodes().values().copied().collect();

        let mut driver =
            AnimationDriver::new(FixedStepClock::new(0.1), GhostLights::from(lights));
        let mut rig = CountingRig(0);
        driver.tick(&mut scene, &mut rig);

        assert_eq!(*scene.light(lights.door_light).unwrap(), door_before);
        let nodes_after: Vec<_> = scene.nodes().values().copied().collect();
        assert_eq!(nodes_before, nodes_after);
    }
}
