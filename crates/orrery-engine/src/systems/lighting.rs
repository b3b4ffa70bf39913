/// Point lights and ambient color for the scene.
///
/// Lights are persistent: they stay until explicitly removed. Each frame the
/// renderer copies them out through `buffer_ptr`.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;
use crate::components::mesh::Color;

/// Floats per light on the wire.
pub const LIGHT_FLOATS: usize = 8;

/// Omnidirectional light with range falloff.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, distance]`
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Range in world units; 0 = infinite.
    pub distance: f32,
}

impl PointLight {
    pub fn new(position: Vec3, color: Color, intensity: f32, distance: f32) -> Self {
        let [r, g, b] = color.to_rgb_f32();
        Self {
            x: position.x,
            y: position.y,
            z: position.z,
            r,
            g,
            b,
            intensity,
            distance,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.x = position.x;
        self.y = position.y;
        self.z = position.z;
        self
    }
}

/// Manages active lights and the ambient term.
///
/// Ambient defaults to white, which leaves lit materials at full color when
/// no lights are present.
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: [f32; 3],
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: [1.0, 1.0, 1.0],
        }
    }

    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    pub fn set_ambient(&mut self, color: Color) {
        self.ambient = color.to_rgb_f32();
    }

    pub fn ambient(&self) -> [f32; 3] {
        self.ambient
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.lights)
    }

    /// Pointer to the light data for zero-copy reads from JS.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}
