/// Pointer picking and hover highlight.
///
/// At most one target is highlighted. Its emissive color is swapped for
/// `HIGHLIGHT_EMISSIVE` and the previous value is kept in `PickState` so it can be
/// restored exactly.

use glam::Vec2;
use orrery_engine::{Color, NodeId, PerspectiveCamera, Ray, Scene};
use crate::registry::SolarScene;

pub const HIGHLIGHT_EMISSIVE: Color = Color::WHITE;
/// Tooltip offset from the pointer, in pixels.
pub const TOOLTIP_OFFSET: f32 = 15.0;

/// Something the pointer can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    Star,
    /// Index into the body registry.
    Body(usize),
}

#[derive(Debug, Clone, Default)]
pub struct PickState {
    highlighted: Option<PickTarget>,
    saved_emissive: Color,
}

impl PickState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlighted(&self) -> Option<PickTarget> {
        self.highlighted
    }

    /// Emissive color the highlighted target had before highlighting.
    pub fn saved_emissive(&self) -> Option<Color> {
        self.highlighted.map(|_| self.saved_emissive)
    }
}

/// What the tooltip should do after a pick.
#[derive(Debug, Clone, PartialEq)]
pub enum PickSignal {
    Show { target: PickTarget, name: String },
    Hide,
}

pub fn tooltip_position(x: f32, y: f32) -> Vec2 {
    Vec2::new(x + TOOLTIP_OFFSET, y + TOOLTIP_OFFSET)
}

pub fn target_name(solar: &SolarScene, target: PickTarget) -> Option<&str> {
    match target {
        PickTarget::Star => Some(solar.star.descriptor.name.as_str()),
        PickTarget::Body(i) => solar.bodies.get(i).map(|b| b.name()),
    }
}

pub fn target_node(solar: &SolarScene, target: PickTarget) -> Option<NodeId> {
    match target {
        PickTarget::Star => Some(solar.star.node),
        PickTarget::Body(i) => solar.bodies.get(i).map(|b| b.node),
    }
}

fn candidates(solar: &SolarScene) -> impl Iterator<Item = (PickTarget, NodeId)> + '_ {
    std::iter::once((PickTarget::Star, solar.star.node)).chain(
        solar
            .bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (PickTarget::Body(i), b.node)),
    )
}

/// Nearest pickable target along the ray.
///
/// Only the star and body spheres are candidates (not glow, atmospheres,
/// rings or orbit markers). Equal distances go to the earlier candidate.
pub fn cast(ray: &Ray, solar: &SolarScene, scene: &Scene) -> Option<(PickTarget, f32)> {
    let mut best: Option<(PickTarget, f32)> = None;
    for (target, id) in candidates(solar) {
        let Some(node) = scene.get(id) else { continue };
        let Some(mesh) = &node.mesh else { continue };
        if !scene.is_visible(id) {
            continue;
        }
        let (Some(center), Some(scale)) = (scene.world_position(id), scene.world_scale(id)) else {
            continue;
        };
        let radius = mesh.geometry.bounding_radius() * scale.max_element();
        if let Some(t) = ray.intersect_sphere(center, radius) {
            if best.map_or(true, |(_, bt)| t < bt) {
                best = Some((target, t));
            }
        }
    }
    best
}

fn set_emissive(scene: &mut Scene, id: NodeId, color: Color) {
    if let Some(mesh) = scene.get_mut(id).and_then(|n| n.mesh.as_mut()) {
        mesh.material.emissive = color;
    }
}

fn emissive_of(scene: &Scene, id: NodeId) -> Color {
    scene
        .get(id)
        .and_then(|n| n.mesh.as_ref())
        .map_or(Color::BLACK, |m| m.material.emissive)
}

fn set_flag(solar: &mut SolarScene, target: PickTarget, on: bool) {
    match target {
        PickTarget::Star => solar.star.highlighted = on,
        PickTarget::Body(i) => {
            if let Some(body) = solar.bodies.get_mut(i) {
                body.highlighted = on;
            }
        }
    }
}

/// Drop the current highlight, restoring the saved emissive.
pub fn clear(state: &mut PickState, solar: &mut SolarScene, scene: &mut Scene) {
    if let Some(prev) = state.highlighted.take() {
        if let Some(id) = target_node(solar, prev) {
            set_emissive(scene, id, state.saved_emissive);
        }
        set_flag(solar, prev, false);
        log::debug!("pick: released {prev:?}");
    }
}

/// Apply one pick with an explicit ray.
pub fn update_with_ray(
    ray: &Ray,
    solar: &mut SolarScene,
    scene: &mut Scene,
    state: &mut PickState,
) -> PickSignal {
    let Some((target, _)) = cast(ray, solar, scene) else {
        clear(state, solar, scene);
        return PickSignal::Hide;
    };

    if state.highlighted != Some(target) {
        clear(state, solar, scene);
        if let Some(id) = target_node(solar, target) {
            state.saved_emissive = emissive_of(scene, id);
            set_emissive(scene, id, HIGHLIGHT_EMISSIVE);
        }
        set_flag(solar, target, true);
        state.highlighted = Some(target);
        log::debug!("pick: highlighted {target:?}");
    }

    let name = target_name(solar, target).unwrap_or_default().to_string();
    PickSignal::Show { target, name }
}

/// Pick through a pointer position given in NDC.
pub fn update(
    ndc: Vec2,
    camera: &PerspectiveCamera,
    solar: &mut SolarScene,
    scene: &mut Scene,
    state: &mut PickState,
) -> PickSignal {
    let ray = camera.ray_from_ndc(ndc);
    update_with_ray(&ray, solar, scene, state)
}
