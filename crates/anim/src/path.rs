//! Closed-form ghost light paths.
//!
//! Each position is a pure function of elapsed seconds. Math is carried out
//! in f64 and narrowed to f32 only when written into the scene.

use glam::DVec3;

/// Ghost 1: circle of radius 4, half a radian per second, bobbing at 3 Hz·rad.
pub fn ghost1_position(t: f64) -> DVec3 {
    let angle = t * 0.5;
    DVec3::new(angle.cos() * 4.0, (t * 3.0).sin(), angle.sin() * 4.0)
}

/// Ghost 2: counter-rotating circle of radius 5 with a two-tone bob.
pub fn ghost2_position(t: f64) -> DVec3 {
    let angle = -t * 0.32;
    DVec3::new(
        angle.cos() * 5.0,
        (t * 4.0).sin() + (t * 2.5).sin(),
        angle.sin() * 5.0,
    )
}

/// Ghost 3: slow counter-rotation on a breathing radius around 7.
pub fn ghost3_position(t: f64) -> DVec3 {
    let angle = -t * 0.18;
    let radius = 7.0 + (t * 0.32).sin();
    DVec3::new(
        angle.cos() * radius,
        (t * 5.0).sin() + (t * 2.0).sin(),
        angle.sin() * radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn close(a: DVec3, b: DVec3) -> bool {
        (a - b).abs().max_element() < TOL
    }

    #[test]
    fn ghost1_matches_closed_form() {
        for i in 0..200 {
            let t = i as f64 * 0.173;
            let expect = DVec3::new(
                (0.5 * t).cos() * 4.0,
                (3.0 * t).sin(),
                (0.5 * t).sin() * 4.0,
            );
            assert!(close(ghost1_position(t), expect), "t={t}");
        }
    }

    #[test]
    fn ghost2_vertical_component() {
        for i in 0..200 {
            let t = i as f64 * 0.091;
            let y = ghost2_position(t).y;
            assert!((y - ((4.0 * t).sin() + (2.5 * t).sin())).abs() < TOL);
        }
    }

    #[test]
    fn ghost3_horizontal_radius_breathes() {
        for i in 0..200 {
            let t = i as f64 * 0.137;
            let p = ghost3_position(t);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - (7.0 + (0.32 * t).sin())).abs() < 1e-9, "t={t}");
        }
    }

    #[test]
    fn paths_start_on_the_x_axis() {
        assert!(close(ghost1_position(0.0), DVec3::new(4.0, 0.0, 0.0)));
        assert!(close(ghost2_position(0.0), DVec3::new(5.0, 0.0, 0.0)));
        assert!(close(ghost3_position(0.0), DVec3::new(7.0, 0.0, 0.0)));
    }

    #[test]
    fn paths_are_pure() {
        let t = 12.345;
        assert_eq!(ghost1_position(t), ghost1_position(t));
        assert_eq!(ghost2_position(t), ghost2_position(t));
        assert_eq!(ghost3_position(t), ghost3_position(t));
    }
}
