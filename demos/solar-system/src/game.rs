/// Solar System: eight planets on circular orbits around a glowing star.
///
/// Hover a body for its name, click it for the info panel, tune the
/// simulation from the control panel. Keys: H help, R reset view,
/// Space toggle auto-rotation.

use glam::Vec3;
use orrery_engine::{
    Color, EngineContext, FrameTime, Game, GameConfig, InputEvent, PointLight, SetupError,
};

use crate::builder;
use crate::catalog::BodyCatalog;
use crate::kinematics;
use crate::params::{self, ControlId, ParameterStore};
use crate::picking::{self, PickSignal, PickState};
use crate::registry::SolarScene;
use crate::selection;
use crate::ui::{UiMessage, HELP_TEXT, WELCOME_TEXT};

// ── Scene look ──────────────────────────────────────────────────────

const CAMERA_HOME: Vec3 = Vec3::new(0.0, 50.0, 200.0);
const BACKGROUND: Color = Color(0x0b0e17);
const AMBIENT: Color = Color(0x333333);
const SUN_LIGHT_COLOR: Color = Color(0xffeb3b);
const SUN_LIGHT_INTENSITY: f32 = 2.0;
const SUN_LIGHT_RANGE: f32 = 500.0;

pub struct SolarSystem {
    catalog: BodyCatalog,
    params: ParameterStore,
    picks: PickState,
    solar: Option<SolarScene>,
    outbox: Vec<UiMessage>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self::with_catalog(BodyCatalog::builtin())
    }

    pub fn with_catalog(catalog: BodyCatalog) -> Self {
        Self {
            catalog,
            params: ParameterStore::new(),
            picks: PickState::new(),
            solar: None,
            outbox: Vec::new(),
        }
    }

    pub fn params(&self) -> &ParameterStore {
        &self.params
    }

    pub fn solar(&self) -> Option<&SolarScene> {
        self.solar.as_ref()
    }

    pub fn picks(&self) -> &PickState {
        &self.picks
    }

    fn on_pointer_move(&mut self, ctx: &mut EngineContext, x: f32, y: f32) {
        let Some(solar) = self.solar.as_mut() else { return };
        let ndc = ctx.viewport.to_ndc(x, y);
        let signal = picking::update(ndc, &ctx.camera, solar, &mut ctx.scene, &mut self.picks);
        self.outbox.push(match signal {
            PickSignal::Show { name, .. } => {
                let at = picking::tooltip_position(x, y);
                UiMessage::ShowTooltip { text: name, x: at.x, y: at.y }
            }
            PickSignal::Hide => UiMessage::HideTooltip,
        });
    }

    fn on_click(&mut self, ctx: &mut EngineContext) {
        let (Some(solar), Some(target)) = (self.solar.as_ref(), self.picks.highlighted()) else {
            return;
        };
        if let Some(panel) = selection::on_body_selected(target, solar, ctx.controls.as_mut()) {
            self.outbox.push(UiMessage::ShowPanel(panel));
        }
    }

    fn on_key(&mut self, ctx: &mut EngineContext, key: char) {
        match key {
            'h' => {
                self.outbox.push(UiMessage::notify(HELP_TEXT));
                log::debug!("help shown");
            }
            'r' => {
                ctx.controls.reset(&mut ctx.camera);
                self.outbox.push(UiMessage::HidePanel);
                log::debug!("view reset");
            }
            ' ' => {
                let on = self.params.toggle_auto_rotate();
                ctx.controls.set_auto_rotate(on);
                self.outbox.push(UiMessage::SetToggle { control: ControlId::AutoRotate, checked: on });
                log::debug!("auto-rotate {}", if on { "on" } else { "off" });
            }
            other => log::debug!("unbound key {other:?}"),
        }
    }

    fn on_control(&mut self, ctx: &mut EngineContext, id: u32, value: f32) {
        let Some(control) = ControlId::from_wire(id) else {
            log::warn!("unknown control id {id}");
            return;
        };
        let label = params::apply_control(&mut self.params, control, value);
        let state = self.params.get();

        match control {
            ControlId::ShowOrbits | ControlId::ShowAtmosphere | ControlId::OrbitOpacity => {
                if let Some(solar) = &self.solar {
                    builder::apply_visibility(solar, &mut ctx.scene, &state);
                }
            }
            ControlId::AutoRotate => ctx.controls.set_auto_rotate(state.auto_rotate),
            ControlId::AutoRotateSpeed => ctx.controls.set_auto_rotate_speed(state.auto_rotate_speed),
            ControlId::Speed | ControlId::PlanetScale | ControlId::Distance => {}
        }

        if let Some(text) = label {
            self.outbox.push(UiMessage::SetLabel { control, text });
        }
    }

    fn queue_control_sync(&mut self) {
        let state = self.params.get();
        for control in ControlId::RANGES {
            if let Some(text) = params::label_for(control, &state) {
                self.outbox.push(UiMessage::SetLabel { control, text });
            }
        }
        for (control, checked) in [
            (ControlId::ShowOrbits, state.show_orbits),
            (ControlId::ShowAtmosphere, state.show_atmosphere),
            (ControlId::AutoRotate, state.auto_rotate),
        ] {
            self.outbox.push(UiMessage::SetToggle { control, checked });
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    type Message = UiMessage;

    fn config(&self) -> GameConfig {
        GameConfig {
            camera_position: CAMERA_HOME,
            camera_target: Vec3::ZERO,
            background: BACKGROUND,
            ..GameConfig::default()
        }
    }

    fn load_data(&mut self, json: &str) -> Result<(), SetupError> {
        self.catalog = BodyCatalog::from_json(json)?;
        log::info!("loaded catalog with {} bodies", self.catalog.len());
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), SetupError> {
        self.catalog.validate()?;

        if let Some(mut old) = self.solar.take() {
            picking::clear(&mut self.picks, &mut old, &mut ctx.scene);
            builder::teardown(&old, &mut ctx.scene);
        }

        ctx.lighting.clear();
        ctx.lighting.set_ambient(AMBIENT);
        ctx.lighting.add(PointLight::new(
            Vec3::ZERO,
            SUN_LIGHT_COLOR,
            SUN_LIGHT_INTENSITY,
            SUN_LIGHT_RANGE,
        ));

        let state = self.params.get();
        ctx.controls.set_auto_rotate(state.auto_rotate);
        ctx.controls.set_auto_rotate_speed(state.auto_rotate_speed);

        let solar = builder::build(&self.catalog, &state, ctx);
        builder::apply_visibility(&solar, &mut ctx.scene, &state);
        self.solar = Some(solar);

        self.queue_control_sync();
        self.outbox.push(UiMessage::notify(WELCOME_TEXT));
        Ok(())
    }

    fn handle_input(&mut self, ctx: &mut EngineContext, event: InputEvent) {
        match event {
            InputEvent::PointerMove { x, y } => self.on_pointer_move(ctx, x, y),
            InputEvent::PointerClick { .. } => self.on_click(ctx),
            InputEvent::KeyDown { .. } => {
                if let Some(key) = event.key_char() {
                    self.on_key(ctx, key);
                }
            }
            InputEvent::Control { id, value } => self.on_control(ctx, id, value),
            InputEvent::Drag { .. } | InputEvent::Wheel { .. } | InputEvent::Resize { .. } => {}
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, time: FrameTime) {
        if let Some(solar) = self.solar.as_mut() {
            kinematics::advance(solar, &mut ctx.scene, time.elapsed, &self.params.get());
        }
    }

    fn drain_messages(&mut self) -> Vec<UiMessage> {
        std::mem::take(&mut self.outbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;
    use orrery_web::GameRunner;
    use crate::picking::PickTarget;

    fn runner() -> GameRunner<SolarSystem> {
        let mut runner = GameRunner::new(SolarSystem::new());
        runner.init(None).unwrap();
        runner
    }

    fn angle_diff(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(TAU);
        d.min(TAU - d)
    }

    #[test]
    fn init_queues_labels_and_welcome() {
        let mut runner = runner();
        let messages = runner.take_messages();
        assert!(messages.contains(&UiMessage::SetLabel {
            control: ControlId::Speed,
            text: "1.0x".into()
        }));
        assert!(messages.contains(&UiMessage::SetLabel {
            control: ControlId::PlanetScale,
            text: "100%".into()
        }));
        assert_eq!(messages.last(), Some(&UiMessage::notify(WELCOME_TEXT)));
        assert_eq!(runner.ctx().lighting.count(), 1);
    }

    #[test]
    fn thousand_seconds_at_double_speed() {
        let mut runner = runner();
        runner.dispatch(InputEvent::Control { id: ControlId::Speed as u32, value: 100.0 });
        assert_eq!(runner.game().params().get().speed, 2.0);

        for _ in 0..10_000 {
            runner.tick(0.1);
        }
        assert!((runner.elapsed() - 1000.0).abs() < 1e-3);

        let earth = runner.game().solar().unwrap().bodies.get(2).unwrap();
        let actual = (earth.position.z as f64).atan2(earth.position.x as f64);
        let expected = 2000.0 * kinematics::BASE_ANGULAR_SPEED * earth.descriptor.orbit_speed as f64;
        assert!(angle_diff(actual, expected) < 1e-3, "actual {actual}, expected {expected}");
        assert!((earth.position.length() - 14.96).abs() < 1e-3);
    }

    #[test]
    fn hover_then_click_earth() {
        let mut runner = runner();
        runner.take_messages();

        let (px, py) = {
            let ctx = runner.ctx();
            let earth = runner.game().solar().unwrap().bodies.get(2).unwrap();
            let world = ctx.scene.world_position(earth.node).unwrap();
            let ndc = ctx.camera.project_to_ndc(world).unwrap();
            let px = ctx.viewport.to_pixels(ndc.truncate());
            (px.x, px.y)
        };

        runner.dispatch(InputEvent::PointerMove { x: px, y: py });
        assert_eq!(runner.game().picks().highlighted(), Some(PickTarget::Body(2)));
        runner.dispatch(InputEvent::PointerClick { x: px, y: py });

        let messages = runner.take_messages();
        assert_eq!(
            messages[0],
            UiMessage::ShowTooltip { text: "Earth".into(), x: px + 15.0, y: py + 15.0 }
        );
        match &messages[1] {
            UiMessage::ShowPanel(panel) => {
                assert_eq!(panel.name, "Earth");
                assert_eq!(panel.diameter, "12,742 km");
            }
            other => panic!("expected panel, got {other:?}"),
        }
        let earth_pos = runner.game().solar().unwrap().bodies.get(2).unwrap().position;
        assert_eq!(runner.ctx().controls.target(), earth_pos);
    }

    #[test]
    fn click_with_nothing_highlighted_does_nothing() {
        let mut runner = runner();
        runner.take_messages();
        runner.dispatch(InputEvent::PointerMove { x: 5.0, y: 5.0 });
        runner.dispatch(InputEvent::PointerClick { x: 5.0, y: 5.0 });
        assert_eq!(runner.take_messages(), vec![UiMessage::HideTooltip]);
    }

    #[test]
    fn keyboard_actions() {
        let mut runner = runner();
        runner.take_messages();

        runner.dispatch(InputEvent::key('H'));
        runner.dispatch(InputEvent::key(' '));
        runner.ctx_mut().controls.set_target(Vec3::new(5.0, 0.0, 0.0));
        runner.dispatch(InputEvent::key('r'));
        runner.dispatch(InputEvent::key('x'));

        assert_eq!(
            runner.take_messages(),
            vec![
                UiMessage::notify(HELP_TEXT),
                UiMessage::SetToggle { control: ControlId::AutoRotate, checked: false },
                UiMessage::HidePanel,
            ]
        );
        assert!(!runner.ctx().controls.auto_rotate());
        assert!(!runner.game().params().get().auto_rotate);
        assert_eq!(runner.ctx().controls.target(), Vec3::ZERO);
        assert_eq!(runner.ctx().camera.position, CAMERA_HOME);
    }

    #[test]
    fn toggles_reach_the_scene() {
        let mut runner = runner();
        runner.dispatch(InputEvent::Control { id: ControlId::ShowOrbits as u32, value: 0.0 });
        runner.dispatch(InputEvent::Control { id: ControlId::ShowAtmosphere as u32, value: 0.0 });
        runner.dispatch(InputEvent::Control { id: 42, value: 1.0 });

        let solar = runner.game().solar().unwrap();
        assert!(solar.orbits.iter().all(|o| !runner.ctx().scene.is_visible(o.node)));
        let earth = solar.bodies.get(2).unwrap();
        assert!(!runner.ctx().scene.is_visible(earth.atmosphere.unwrap()));

        runner.tick(0.016);
        // star, glow, 8 bodies, Saturn's rings
        assert_eq!(runner.instance_count(), 11);
    }

    #[test]
    fn json_catalog_replaces_builtin() {
        let json = r#"{"bodies": [{
            "name": "Tatooine", "color": 13938487, "radius": 5.0, "distance": 100.0,
            "orbit_speed": 1.0, "rotation_speed": 0.01, "tilt": 0.1, "class": "terrestrial",
            "facts": {"diameter": "10,465 km", "mass": "?", "temperature": "hot", "orbital_period": "304 days"}
        }]}"#;
        let mut runner = GameRunner::new(SolarSystem::new());
        runner.init(Some(json)).unwrap();
        assert_eq!(runner.game().solar().unwrap().bodies.len(), 1);
    }

    #[test]
    fn invalid_catalog_fails_init() {
        let mut runner = GameRunner::new(SolarSystem::new());
        let err = runner.init(Some(r#"{"bodies": []}"#)).unwrap_err();
        assert!(matches!(err, SetupError::InvalidCatalog { .. }));
    }

    #[test]
    fn reinit_rebuilds_without_duplicates() {
        let mut ctx = EngineContext::new(&SolarSystem::new().config());
        let mut game = SolarSystem::new();
        game.init(&mut ctx).unwrap();
        let nodes = ctx.scene.len();
        game.init(&mut ctx).unwrap();
        assert_eq!(ctx.scene.len(), nodes);
    }
}
