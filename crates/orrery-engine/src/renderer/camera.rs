use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};
use crate::core::ray::Ray;

/// Perspective camera looking from `position` at `target`.
/// Uses GL clip conventions (NDC z in [-1, 1]), matching the web renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
    /// xyz = eye position, w unused.
    pub position: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl PerspectiveCamera {
    pub fn new(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Update the aspect ratio (e.g. on window resize).
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        } else {
            log::warn!("ignoring invalid aspect ratio {aspect}");
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
            position: self.position.extend(1.0).to_array(),
        }
    }

    /// Ray from the eye through a point given in normalized device coordinates.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let half_h = (self.fov_y * 0.5).tan();
        let dir_view = Vec3::new(ndc.x * half_h * self.aspect, ndc.y * half_h, -1.0);
        let dir_world = self.view_matrix().inverse().transform_vector3(dir_view);
        Ray::new(self.position, dir_world)
    }

    /// Project a world point to NDC. `None` when the point is behind the eye.
    pub fn project_to_ndc(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(clip.xyz() / clip.w)
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(60.0, 16.0 / 9.0, 0.1, 100_000.0)
    }
}

/// Drawable area in CSS pixels; converts pointer positions to NDC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Pixel position (origin top-left, y down) to NDC (origin center, y up).
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(x / self.width * 2.0 - 1.0, -(y / self.height) * 2.0 + 1.0)
    }

    pub fn to_pixels(&self, ndc: Vec2) -> Vec2 {
        Vec2::new((ndc.x + 1.0) * 0.5 * self.width, (1.0 - ndc.y) * 0.5 * self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        let mut cam = PerspectiveCamera::new(60.0, 1.5, 0.1, 1000.0);
        cam.position = Vec3::new(0.0, 50.0, 200.0);
        cam
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = camera();
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        let expected = (cam.target - cam.position).normalize();
        assert!((ray.direction - expected).length() < 1e-5);
        assert_eq!(ray.origin, cam.position);
    }

    #[test]
    fn project_then_cast_round_trips() {
        let cam = camera();
        let point = Vec3::new(30.0, 0.0, -20.0);
        let ndc = cam.project_to_ndc(point).unwrap();
        let ray = cam.ray_from_ndc(ndc.truncate());
        let expected = (point - cam.position).normalize();
        assert!((ray.direction - expected).length() < 1e-4);
    }

    #[test]
    fn points_behind_the_eye_do_not_project() {
        let cam = camera();
        assert!(cam.project_to_ndc(Vec3::new(0.0, 50.0, 400.0)).is_none());
    }

    #[test]
    fn viewport_ndc_corners() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.to_ndc(0.0, 0.0), Vec2::new(-1.0, 1.0));
        assert_eq!(vp.to_ndc(800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(vp.to_ndc(400.0, 300.0), Vec2::ZERO);
        assert_eq!(vp.to_pixels(Vec2::ZERO), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn set_aspect_ignores_garbage() {
        let mut cam = camera();
        cam.set_aspect(0.0);
        assert_eq!(cam.aspect, 1.5);
        cam.set_aspect(2.0);
        assert_eq!(cam.aspect, 2.0);
    }

    #[test]
    fn uniform_is_20_floats() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), CameraUniform::FLOATS * 4);
    }
}
