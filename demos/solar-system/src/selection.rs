use glam::Vec3;
use serde::Serialize;
use orrery_engine::{CameraController, Color};
use crate::catalog::BodyFacts;
use crate::picking::PickTarget;
use crate::registry::SolarScene;

/// Info panel record for a selected body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelContent {
    pub name: String,
    pub class: String,
    pub diameter: String,
    pub mass: String,
    pub temperature: String,
    pub orbital_period: String,
    /// Packed `0xRRGGBB`.
    pub color: u32,
    /// CSS `rgb(...)` of `color`.
    pub accent: String,
    /// CSS `rgba(..., 0.5)` of `color`.
    pub glow: String,
}

impl PanelContent {
    fn new(name: &str, class: &str, facts: &BodyFacts, color: Color) -> Self {
        Self {
            name: name.to_string(),
            class: class.to_string(),
            diameter: facts.diameter.clone(),
            mass: facts.mass.clone(),
            temperature: facts.temperature.clone(),
            orbital_period: facts.orbital_period.clone(),
            color: color.hex(),
            accent: color.css_rgb(),
            glow: color.css_rgba(0.5),
        }
    }
}

/// Build the panel for `target` and point the camera controller at it.
/// Simulation state is left alone.
pub fn on_body_selected(
    target: PickTarget,
    solar: &SolarScene,
    controls: &mut dyn CameraController,
) -> Option<PanelContent> {
    let (panel, position) = match target {
        PickTarget::Star => {
            let star = &solar.star.descriptor;
            (
                PanelContent::new(&star.name, &star.class_label, &star.facts, star.color),
                Vec3::ZERO,
            )
        }
        PickTarget::Body(i) => {
            let body = solar.bodies.get(i)?;
            let desc = &body.descriptor;
            (
                PanelContent::new(&desc.name, desc.class.label(), &desc.facts, desc.color),
                body.position,
            )
        }
    };
    controls.set_target(position);
    log::debug!("selected {} at {position}", panel.name);
    Some(panel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{EngineContext, GameConfig};
    use crate::builder;
    use crate::catalog::BodyCatalog;
    use crate::params::ParameterState;

    fn setup() -> (SolarScene, EngineContext) {
        let mut ctx = EngineContext::new(&GameConfig::default());
        let solar = builder::build(&BodyCatalog::builtin(), &ParameterState::default(), &mut ctx);
        (solar, ctx)
    }

    #[test]
    fn earth_panel_and_retarget() {
        let (solar, mut ctx) = setup();
        let panel = on_body_selected(PickTarget::Body(2), &solar, ctx.controls.as_mut()).unwrap();
        assert_eq!(panel.name, "Earth");
        assert_eq!(panel.class, "Terrestrial planet");
        assert_eq!(panel.diameter, "12,742 km");
        assert_eq!(panel.orbital_period, "365.25 days");
        assert_eq!(panel.color, 0x3498db);
        assert_eq!(panel.accent, "rgb(52, 152, 219)");
        assert_eq!(panel.glow, "rgba(52, 152, 219, 0.5)");
        assert_eq!(ctx.controls.target(), solar.bodies.get(2).unwrap().position);
    }

    #[test]
    fn star_panel_targets_origin() {
        let (solar, mut ctx) = setup();
        ctx.controls.set_target(Vec3::ONE);
        let panel = on_body_selected(PickTarget::Star, &solar, ctx.controls.as_mut()).unwrap();
        assert_eq!(panel.name, "Sun");
        assert_eq!(ctx.controls.target(), Vec3::ZERO);
    }

    #[test]
    fn unknown_index_selects_nothing() {
        let (solar, mut ctx) = setup();
        ctx.controls.set_target(Vec3::ONE);
        assert!(on_body_selected(PickTarget::Body(99), &solar, ctx.controls.as_mut()).is_none());
        assert_eq!(ctx.controls.target(), Vec3::ONE);
    }
}
