use std::f32::consts::{PI, TAU};
use glam::Vec3;
use super::camera::PerspectiveCamera;

/// Contract between a game and whatever moves the camera.
///
/// The engine calls `update` once per tick after the game update; games only
/// read or move the target, reset, and toggle auto-rotation.
pub trait CameraController {
    /// Point the camera orbits around and looks at.
    fn target(&self) -> Vec3;

    fn set_target(&mut self, target: Vec3);

    /// Apply pending motion (damping, auto-rotation) and write the camera pose.
    fn update(&mut self, camera: &mut PerspectiveCamera, dt: f32);

    /// Return to the home pose.
    fn reset(&mut self, camera: &mut PerspectiveCamera);

    fn set_auto_rotate(&mut self, enabled: bool);

    fn auto_rotate(&self) -> bool;

    fn set_auto_rotate_speed(&mut self, speed: f32);

    /// Pointer drag in pixels. Controllers without direct manipulation ignore it.
    fn rotate(&mut self, _dx: f32, _dy: f32, _viewport_height: f32) {}

    /// Wheel delta; negative moves closer.
    fn zoom(&mut self, _delta: f32) {}
}

/// Tunables for [`OrbitControls`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    pub enable_damping: bool,
    /// Fraction of the pending motion applied per update.
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub auto_rotate: bool,
    /// 1.0 = one full turn per minute.
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    /// Per-notch dolly factor.
    pub zoom_scale: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: 0.05,
            min_distance: 20.0,
            max_distance: 1000.0,
            min_polar_angle: 0.0,
            max_polar_angle: PI * 0.9,
            auto_rotate: false,
            auto_rotate_speed: 0.5,
            rotate_speed: 1.0,
            zoom_scale: 0.95,
        }
    }
}

const POLE_EPSILON: f32 = 1e-6;

/// Spherical-coordinate orbit around a target point.
/// Angles follow the usual convention: `theta` around +Y from +Z, `phi` down from +Y.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub settings: OrbitSettings,
    target: Vec3,
    home_position: Vec3,
    home_target: Vec3,
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,
}

impl OrbitControls {
    pub fn new(home_position: Vec3, home_target: Vec3) -> Self {
        Self::with_settings(home_position, home_target, OrbitSettings::default())
    }

    pub fn with_settings(home_position: Vec3, home_target: Vec3, settings: OrbitSettings) -> Self {
        Self {
            settings,
            target: home_target,
            home_position,
            home_target,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
        }
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta_theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta_phi -= angle;
    }

    /// Multiply the orbit radius on the next update.
    pub fn dolly(&mut self, factor: f32) {
        if factor.is_finite() && factor > 0.0 {
            self.scale *= factor;
        }
    }

    fn auto_rotation_angle(&self, dt: f32) -> f32 {
        TAU / 60.0 * self.settings.auto_rotate_speed * dt
    }
}

impl CameraController for OrbitControls {
    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn update(&mut self, camera: &mut PerspectiveCamera, dt: f32) {
        let offset = camera.position - self.target;
        let mut radius = offset.length();
        let mut theta = offset.x.atan2(offset.z);
        let mut phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        if self.settings.auto_rotate {
            self.rotate_left(self.auto_rotation_angle(dt));
        }

        let s = &self.settings;
        if s.enable_damping {
            theta += self.delta_theta * s.damping_factor;
            phi += self.delta_phi * s.damping_factor;
        } else {
            theta += self.delta_theta;
            phi += self.delta_phi;
        }

        phi = phi
            .clamp(s.min_polar_angle, s.max_polar_angle)
            .clamp(POLE_EPSILON, PI - POLE_EPSILON);
        radius = (radius * self.scale).clamp(s.min_distance, s.max_distance);

        let sin_phi = phi.sin();
        let offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        camera.position = self.target + offset;
        camera.target = self.target;

        if s.enable_damping {
            let keep = 1.0 - s.damping_factor;
            self.delta_theta *= keep;
            self.delta_phi *= keep;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
        self.scale = 1.0;
    }

    fn reset(&mut self, camera: &mut PerspectiveCamera) {
        self.target = self.home_target;
        camera.position = self.home_position;
        camera.target = self.home_target;
        self.delta_theta = 0.0;
        self.delta_phi = 0.0;
        self.scale = 1.0;
    }

    fn set_auto_rotate(&mut self, enabled: bool) {
        self.settings.auto_rotate = enabled;
    }

    fn auto_rotate(&self) -> bool {
        self.settings.auto_rotate
    }

    fn set_auto_rotate_speed(&mut self, speed: f32) {
        if speed.is_finite() {
            self.settings.auto_rotate_speed = speed;
        }
    }

    fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let k = TAU * self.settings.rotate_speed / viewport_height;
        self.rotate_left(dx * k);
        self.rotate_up(dy * k);
    }

    fn zoom(&mut self, delta: f32) {
        if delta < 0.0 {
            self.dolly(self.settings.zoom_scale);
        } else if delta > 0.0 {
            self.dolly(1.0 / self.settings.zoom_scale);
        }
    }
}
