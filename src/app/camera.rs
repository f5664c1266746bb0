use std::f32::consts::FRAC_PI_2;

use eframe::egui::{Pos2, Rect, Vec2, vec2};
use paper_universe::universe::Position;

const FIELD_OF_VIEW: f32 = 75.0_f32 * std::f32::consts::PI / 180.0;
const NEAR_PLANE: f32 = 4.0;
const MIN_DISTANCE: f32 = 60.0;
const MAX_DISTANCE: f32 = 900.0;
const MAX_PITCH: f32 = FRAC_PI_2 - 0.05;
const AUTO_ROTATE_SPEED: f32 = 0.1;

/// Orbit camera looking at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Camera {
    pub(super) yaw: f32,
    pub(super) pitch: f32,
    pub(super) distance: f32,
    pub(super) auto_rotate: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Projection {
    pub(super) screen: Pos2,
    /// Distance in front of the camera.
    pub(super) depth: f32,
    /// Pixels per world unit at this depth.
    pub(super) scale: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.18,
            distance: 320.0,
            auto_rotate: true,
        }
    }
}

impl Camera {
    pub(super) const REFERENCE_DISTANCE: f32 = 320.0;

    pub(super) fn project(&self, rect: Rect, point: Position) -> Option<Projection> {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let x = point.x * cos_yaw + point.z * sin_yaw;
        let z = -point.x * sin_yaw + point.z * cos_yaw;

        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let y = point.y * cos_pitch - z * sin_pitch;
        let z = point.y * sin_pitch + z * cos_pitch;

        let depth = self.distance - z;
        if depth < NEAR_PLANE {
            return None;
        }

        let focal = (rect.height() * 0.5) / (FIELD_OF_VIEW * 0.5).tan();
        let scale = focal / depth;
        Some(Projection {
            screen: rect.center() + vec2(x * scale, -y * scale),
            depth,
            scale,
        })
    }

    pub(super) fn orbit(&mut self, drag: Vec2) {
        self.yaw += drag.x * 0.006;
        self.pitch = (self.pitch + drag.y * 0.006).clamp(-MAX_PITCH, MAX_PITCH);
    }

    pub(super) fn zoom(&mut self, scroll: f32) {
        let factor = (1.0 - scroll * 0.0018).clamp(0.85, 1.15);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Advances auto-rotation; returns whether the camera moved.
    pub(super) fn tick(&mut self, delta_seconds: f32, paused: bool) -> bool {
        if !self.auto_rotate || paused {
            return false;
        }
        self.yaw = (self.yaw + delta_seconds * AUTO_ROTATE_SPEED) % std::f32::consts::TAU;
        true
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use super::*;

    fn viewport() -> Rect {
        Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0))
    }

    #[test]
    fn origin_projects_to_center() {
        let camera = Camera {
            pitch: 0.0,
            ..Camera::default()
        };
        let projection = camera
            .project(viewport(), Position::ORIGIN)
            .expect("in front of camera");
        assert_eq!(projection.screen, pos2(400.0, 300.0));
        assert!((projection.depth - camera.distance).abs() < 1e-4);
    }

    #[test]
    fn closer_points_are_larger() {
        let camera = Camera {
            pitch: 0.0,
            ..Camera::default()
        };
        let near = camera
            .project(viewport(), Position::new(0.0, 0.0, 100.0))
            .expect("visible");
        let far = camera
            .project(viewport(), Position::new(0.0, 0.0, -100.0))
            .expect("visible");
        assert!(near.scale > far.scale);
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        let camera = Camera {
            pitch: 0.0,
            distance: 100.0,
            ..Camera::default()
        };
        assert!(camera.project(viewport(), Position::new(0.0, 0.0, 150.0)).is_none());
    }

    #[test]
    fn up_is_up_on_screen() {
        let camera = Camera {
            pitch: 0.0,
            ..Camera::default()
        };
        let projection = camera
            .project(viewport(), Position::new(0.0, 50.0, 0.0))
            .expect("visible");
        assert!(projection.screen.y < 300.0);
    }

    #[test]
    fn zoom_and_pitch_are_clamped() {
        let mut camera = Camera::default();
        for _ in 0..200 {
            camera.zoom(500.0);
            camera.orbit(vec2(0.0, 500.0));
        }
        assert_eq!(camera.distance, MIN_DISTANCE);
        assert!(camera.pitch <= MAX_PITCH);
    }

    #[test]
    fn auto_rotation_pauses() {
        let mut camera = Camera::default();
        assert!(!camera.tick(0.5, true));
        assert_eq!(camera.yaw, 0.0);
        assert!(camera.tick(0.5, false));
        assert!(camera.yaw > 0.0);
    }
}
