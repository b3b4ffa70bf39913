/// Per-frame orbital motion: circular orbits in the XZ plane, spin, and scale.
///
/// Orbital angles are a pure function of elapsed simulation time, so the
/// position at time t never depends on frame history. Spin is accumulated
/// per frame.

use std::f64::consts::TAU;
use std::f32::consts::TAU as TAU_F32;
use glam::Vec3;
use orrery_engine::Scene;
use crate::builder::{DISTANCE_FACTOR, SIZE_FACTOR};
use crate::catalog::BodyDescriptor;
use crate::params::ParameterState;
use crate::registry::SolarScene;

/// Radians per second of simulation time per unit of orbit speed.
pub const BASE_ANGULAR_SPEED: f64 = 0.1;

pub fn orbital_angle(desc: &BodyDescriptor, elapsed: f64, speed: f32) -> f64 {
    elapsed * BASE_ANGULAR_SPEED * desc.orbit_speed as f64 * speed as f64
}

/// Position on the orbit circle for a given angle.
pub fn orbital_position(desc: &BodyDescriptor, angle: f64, distance_multiplier: f32) -> Vec3 {
    let r = desc.distance as f64 * DISTANCE_FACTOR as f64 * distance_multiplier as f64;
    Vec3::new((angle.cos() * r) as f32, 0.0, (angle.sin() * r) as f32)
}

/// Uniform node scale: display radius times the user multiplier.
pub fn body_scale(desc: &BodyDescriptor, scale_multiplier: f32) -> f32 {
    desc.radius * SIZE_FACTOR * scale_multiplier
}

/// Simulation seconds per revolution; `None` when the body does not move.
pub fn orbital_period(desc: &BodyDescriptor, speed: f32) -> Option<f64> {
    let rate = BASE_ANGULAR_SPEED * desc.orbit_speed as f64 * speed as f64;
    (rate != 0.0).then(|| TAU / rate.abs())
}

/// Keep a spin angle within one turn, preserving its sign, so per-frame
/// increments stay above f32 resolution.
fn wrap_spin(angle: f32) -> f32 {
    angle % TAU_F32
}

/// Move every body to its place at `elapsed` and apply spin and scale.
pub fn advance(solar: &mut SolarScene, scene: &mut Scene, elapsed: f64, params: &ParameterState) {
    let star = &mut solar.star;
    star.spin = wrap_spin(star.spin + star.descriptor.spin_speed * params.speed);
    if let Some(node) = scene.get_mut(star.node) {
        node.rotation.y = star.spin;
    }

    for body in solar.bodies.iter_mut() {
        let desc = &body.descriptor;
        let angle = orbital_angle(desc, elapsed, params.speed);
        body.position = orbital_position(desc, angle, params.distance);
        body.scale = body_scale(desc, params.planet_scale);
        body.spin = wrap_spin(body.spin + desc.rotation_speed * params.speed);

        if let Some(node) = scene.get_mut(body.node) {
            node.position = body.position;
            node.rotation = Vec3::new(0.0, body.spin, desc.tilt);
            node.scale = Vec3::splat(body.scale);
        }
    }
}
