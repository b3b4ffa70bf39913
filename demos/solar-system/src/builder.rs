/// Scene construction from the catalog.
///
/// Body spheres use unit-radius geometry; the node's uniform scale carries the
/// display radius so the kinematics can rescale a body with one write and its
/// atmosphere and rings follow through the hierarchy.

use std::f32::consts::FRAC_PI_2;
use glam::Vec3;
use orrery_engine::{Color, EngineContext, MeshComponent, Node, Scene};
use crate::catalog::BodyCatalog;
use crate::params::ParameterState;
use crate::registry::{BodyInstance, BodyRegistry, OrbitMarker, SolarScene, StarInstance};

/// Catalog radius to display radius.
pub const SIZE_FACTOR: f32 = 0.5;
/// Catalog distance to display distance.
pub const DISTANCE_FACTOR: f32 = 0.1;

pub const BODY_SHININESS: f32 = 30.0;
pub const BODY_SPECULAR: Color = Color(0x111111);

pub const ATMOSPHERE_SCALE: f32 = 1.05;
pub const ATMOSPHERE_OPACITY: f32 = 0.3;
const ATMOSPHERE_SHININESS: f32 = 10.0;

pub const RING_INNER: f32 = 1.5;
pub const RING_OUTER: f32 = 2.5;
pub const RING_COLOR: Color = Color(0xd2b48c);
pub const RING_OPACITY: f32 = 0.8;

/// Half-width of an orbit marker band.
pub const ORBIT_HALF_WIDTH: f32 = 0.1;
pub const GLOW_OPACITY: f32 = 0.5;

/// Quarter turn about X: lays a ring from the local XY plane into the orbital plane.
const FLAT: Vec3 = Vec3::new(FRAC_PI_2, 0.0, 0.0);

/// Build the star, every body with its optional atmosphere and rings, and
/// one orbit marker per body, in catalog order.
///
/// Calling this twice without `teardown` duplicates the nodes.
pub fn build(catalog: &BodyCatalog, params: &ParameterState, ctx: &mut EngineContext) -> SolarScene {
    let star = build_star(catalog, ctx);

    let mut bodies = BodyRegistry::new();
    let mut orbits = Vec::with_capacity(catalog.len());

    for desc in &catalog.bodies {
        let position = Vec3::new(desc.distance * DISTANCE_FACTOR, 0.0, 0.0);
        let scale = desc.radius * SIZE_FACTOR;

        let node = ctx.next_id();
        ctx.scene.spawn(
            Node::new(node)
                .with_tag(desc.name.clone())
                .with_position(position)
                .with_rotation(Vec3::new(0.0, 0.0, desc.tilt))
                .with_scale(scale)
                .with_mesh(
                    MeshComponent::sphere(1.0, desc.color)
                        .with_shininess(BODY_SHININESS)
                        .with_specular(BODY_SPECULAR),
                ),
        );

        let atmosphere = desc.atmosphere.map(|color| {
            let id = ctx.next_id();
            ctx.scene.spawn_child(
                node,
                Node::new(id)
                    .with_tag(format!("{} Atmosphere", desc.name))
                    .with_visible(params.show_atmosphere)
                    .with_mesh(
                        MeshComponent::sphere(ATMOSPHERE_SCALE, color)
                            .with_opacity(ATMOSPHERE_OPACITY)
                            .with_shininess(ATMOSPHERE_SHININESS)
                            .with_specular(BODY_SPECULAR),
                    ),
            )
        });

        let rings = desc.has_rings.then(|| {
            let id = ctx.next_id();
            ctx.scene.spawn_child(
                node,
                Node::new(id)
                    .with_tag(format!("{} Rings", desc.name))
                    .with_rotation(FLAT)
                    .with_mesh(
                        MeshComponent::ring(RING_INNER, RING_OUTER, RING_COLOR)
                            .with_opacity(RING_OPACITY),
                    ),
            )
        });

        let radius = position.x;
        let marker = ctx.next_id();
        ctx.scene.spawn(
            Node::new(marker)
                .with_tag(format!("{} Orbit", desc.name))
                .with_rotation(FLAT)
                .with_visible(params.show_orbits)
                .with_mesh(
                    MeshComponent::ring(
                        (radius - ORBIT_HALF_WIDTH).max(0.0),
                        radius + ORBIT_HALF_WIDTH,
                        Color::WHITE,
                    )
                    .with_opacity(params.orbit_opacity)
                    .unlit(),
                ),
        );
        orbits.push(OrbitMarker { node: marker, radius });

        bodies.push(BodyInstance {
            descriptor: desc.clone(),
            node,
            atmosphere,
            rings,
            position,
            scale,
            spin: 0.0,
            highlighted: false,
        });
    }

    log::info!(
        "built {} with {} bodies ({} scene nodes)",
        star.descriptor.name,
        bodies.len(),
        ctx.scene.len()
    );

    SolarScene { star, bodies, orbits }
}

fn build_star(catalog: &BodyCatalog, ctx: &mut EngineContext) -> StarInstance {
    let desc = &catalog.star;

    let node = ctx.next_id();
    ctx.scene.spawn(
        Node::new(node)
            .with_tag(desc.name.clone())
            .with_mesh(
                MeshComponent::sphere(desc.radius, desc.color)
                    .with_emissive(desc.emissive)
                    .unlit(),
            ),
    );

    let glow = ctx.next_id();
    ctx.scene.spawn_child(
        node,
        Node::new(glow)
            .with_tag(format!("{} Glow", desc.name))
            .with_mesh(
                MeshComponent::sphere(desc.glow_radius, desc.glow_color)
                    .with_opacity(GLOW_OPACITY)
                    .additive()
                    .unlit(),
            ),
    );

    StarInstance {
        descriptor: desc.clone(),
        node,
        glow,
        spin: 0.0,
        highlighted: false,
    }
}

/// Remove every node `build` created.
pub fn teardown(solar: &SolarScene, scene: &mut Scene) {
    scene.despawn(solar.star.node);
    for body in solar.bodies.iter() {
        scene.despawn(body.node);
    }
    for orbit in &solar.orbits {
        scene.despawn(orbit.node);
    }
}

/// Push the visibility toggles and orbit opacity onto the scene.
pub fn apply_visibility(solar: &SolarScene, scene: &mut Scene, params: &ParameterState) {
    for orbit in &solar.orbits {
        if let Some(node) = scene.get_mut(orbit.node) {
            node.visible = params.show_orbits;
            if let Some(mesh) = node.mesh.as_mut() {
                mesh.material.opacity = params.orbit_opacity;
            }
        }
    }
    for id in solar.bodies.iter().filter_map(|b| b.atmosphere) {
        if let Some(node) = scene.get_mut(id) {
            node.visible = params.show_atmosphere;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::GameConfig;

    fn built() -> (SolarScene, EngineContext) {
        let mut ctx = EngineContext::new(&GameConfig::default());
        let solar = build(&BodyCatalog::builtin(), &ParameterState::default(), &mut ctx);
        (solar, ctx)
    }

    #[test]
    fn builds_every_node() {
        let (solar, ctx) = built();
        // star + glow, 8 bodies, 2 atmospheres, 1 ring system, 8 orbit markers
        assert_eq!(ctx.scene.len(), 2 + 8 + 2 + 1 + 8);
        assert_eq!(solar.bodies.len(), 8);
        assert_eq!(solar.orbits.len(), 8);
    }

    #[test]
    fn registry_is_catalog_aligned() {
        let (solar, _) = built();
        let catalog = BodyCatalog::builtin();
        for (body, desc) in solar.bodies.iter().zip(&catalog.bodies) {
            assert_eq!(body.name(), desc.name);
        }
        let earth = solar.bodies.get(2).unwrap();
        assert!(earth.atmosphere.is_some());
        assert!(earth.rings.is_none());
        assert!(solar.bodies.get(5).unwrap().rings.is_some());
    }

    #[test]
    fn earth_placement_and_size() {
        let (solar, ctx) = built();
        let earth = solar.bodies.get(2).unwrap();
        let pos = ctx.scene.world_position(earth.node).unwrap();
        assert!((pos - Vec3::new(14.96, 0.0, 0.0)).length() < 1e-4);
        let scale = ctx.scene.world_scale(earth.node).unwrap();
        assert!((scale.x - 3.185).abs() < 1e-4);

        // Atmosphere shell is 1.05x the body radius in world space.
        let shell = ctx.scene.get(earth.atmosphere.unwrap()).unwrap();
        let shell_scale = ctx.scene.world_scale(shell.id).unwrap().x;
        let r = shell.mesh.unwrap().geometry.bounding_radius() * shell_scale;
        assert!((r - 3.185 * 1.05).abs() < 1e-4);
    }

    #[test]
    fn saturn_rings_lie_in_orbital_plane() {
        let (solar, ctx) = built();
        let saturn = solar.bodies.get(5).unwrap();
        let rings = saturn.rings.unwrap();
        let m = ctx.scene.world_matrix(rings).unwrap();
        let center = m.transform_point3(Vec3::ZERO);
        // Outer edge sits at 2.5x Saturn's display radius.
        let edge = m.transform_point3(Vec3::new(0.0, RING_OUTER, 0.0));
        assert!(((edge - center).length() - RING_OUTER * 58.2 * SIZE_FACTOR).abs() < 1e-2);
        let ring_mesh = ctx.scene.get(rings).unwrap().mesh.unwrap();
        assert_eq!(ring_mesh.material.color, RING_COLOR);
        assert!(ring_mesh.material.double_sided);
    }

    #[test]
    fn orbit_marker_spans_the_path() {
        let (solar, ctx) = built();
        let mars_orbit = solar.orbits[3];
        assert!((mars_orbit.radius - 22.79).abs() < 1e-4);
        let mesh = ctx.scene.get(mars_orbit.node).unwrap().mesh.unwrap();
        match mesh.geometry {
            orrery_engine::Geometry::Ring { inner, outer, .. } => {
                assert!((inner - 22.69).abs() < 1e-4);
                assert!((outer - 22.89).abs() < 1e-4);
            }
            other => panic!("expected ring, got {other:?}"),
        }
        assert_eq!(mesh.material.opacity, 0.1);
    }

    #[test]
    fn star_has_additive_glow() {
        let (solar, ctx) = built();
        let glow = ctx.scene.get(solar.star.glow).unwrap();
        assert_eq!(glow.parent, Some(solar.star.node));
        let mesh = glow.mesh.unwrap();
        assert_eq!(mesh.geometry.bounding_radius(), 15.0);
        assert_eq!(mesh.material.opacity, 0.5);
        assert!(mesh.material.is_translucent());
    }

    #[test]
    fn teardown_removes_everything() {
        let (solar, mut ctx) = built();
        teardown(&solar, &mut ctx.scene);
        assert!(ctx.scene.is_empty());
    }

    #[test]
    fn visibility_follows_params() {
        let (solar, mut ctx) = built();
        let params = ParameterState {
            show_orbits: false,
            show_atmosphere: false,
            orbit_opacity: 0.4,
            ..ParameterState::default()
        };
        apply_visibility(&solar, &mut ctx.scene, &params);

        let orbit = ctx.scene.get(solar.orbits[0].node).unwrap();
        assert!(!orbit.visible);
        assert_eq!(orbit.mesh.unwrap().material.opacity, 0.4);
        let earth = solar.bodies.get(2).unwrap();
        assert!(!ctx.scene.is_visible(earth.atmosphere.unwrap()));
        assert!(ctx.scene.is_visible(earth.node));
    }
}
