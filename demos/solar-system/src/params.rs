/// User-adjustable simulation parameters and the control wiring that writes them.

use serde::Serialize;

pub const SPEED_RANGE: (f32, f32) = (0.0, 10.0);
pub const PLANET_SCALE_RANGE: (f32, f32) = (0.0, 5.0);
pub const DISTANCE_RANGE: (f32, f32) = (0.0, 5.0);
pub const AUTO_ROTATE_SPEED_RANGE: (f32, f32) = (0.0, 5.0);
pub const ORBIT_OPACITY_RANGE: (f32, f32) = (0.0, 1.0);

/// Snapshot of every parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterState {
    /// Simulation speed multiplier.
    pub speed: f32,
    pub planet_scale: f32,
    pub distance: f32,
    /// Camera auto-rotate speed; 1.0 = one turn per minute.
    pub auto_rotate_speed: f32,
    pub orbit_opacity: f32,
    pub show_orbits: bool,
    pub show_atmosphere: bool,
    pub auto_rotate: bool,
}

impl Default for ParameterState {
    fn default() -> Self {
        Self {
            speed: 1.0,
            planet_scale: 1.0,
            distance: 1.0,
            auto_rotate_speed: 0.5,
            orbit_opacity: 0.1,
            show_orbits: true,
            show_atmosphere: true,
            auto_rotate: true,
        }
    }
}

/// Clamp into range. NaN keeps `current`; any correction is logged.
fn sanitize(name: &str, value: f32, (min, max): (f32, f32), current: f32) -> f32 {
    if value.is_nan() {
        log::warn!("{name}: NaN rejected, keeping {current}");
        return current;
    }
    let clamped = value.clamp(min, max);
    if clamped != value {
        log::warn!("{name}: {value} out of range, clamped to {clamped}");
    }
    clamped
}

/// Holds the live parameters. Every write goes through a validating setter.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    state: ParameterState,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> ParameterState {
        self.state
    }

    pub fn set_speed(&mut self, value: f32) -> f32 {
        self.state.speed = sanitize("speed", value, SPEED_RANGE, self.state.speed);
        self.state.speed
    }

    pub fn set_planet_scale(&mut self, value: f32) -> f32 {
        self.state.planet_scale =
            sanitize("planet scale", value, PLANET_SCALE_RANGE, self.state.planet_scale);
        self.state.planet_scale
    }

    pub fn set_distance(&mut self, value: f32) -> f32 {
        self.state.distance = sanitize("distance", value, DISTANCE_RANGE, self.state.distance);
        self.state.distance
    }

    pub fn set_auto_rotate_speed(&mut self, value: f32) -> f32 {
        self.state.auto_rotate_speed = sanitize(
            "auto-rotate speed",
            value,
            AUTO_ROTATE_SPEED_RANGE,
            self.state.auto_rotate_speed,
        );
        self.state.auto_rotate_speed
    }

    pub fn set_orbit_opacity(&mut self, value: f32) -> f32 {
        self.state.orbit_opacity =
            sanitize("orbit opacity", value, ORBIT_OPACITY_RANGE, self.state.orbit_opacity);
        self.state.orbit_opacity
    }

    pub fn set_show_orbits(&mut self, show: bool) {
        self.state.show_orbits = show;
    }

    pub fn set_show_atmosphere(&mut self, show: bool) {
        self.state.show_atmosphere = show;
    }

    pub fn set_auto_rotate(&mut self, enabled: bool) {
        self.state.auto_rotate = enabled;
    }

    /// Flip auto-rotation and return the new value.
    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.state.auto_rotate = !self.state.auto_rotate;
        self.state.auto_rotate
    }
}

/// UI controls by wire id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlId {
    Speed = 0,
    PlanetScale = 1,
    Distance = 2,
    AutoRotateSpeed = 3,
    OrbitOpacity = 4,
    ShowOrbits = 5,
    ShowAtmosphere = 6,
    AutoRotate = 7,
}

impl ControlId {
    pub const RANGES: [ControlId; 5] = [
        ControlId::Speed,
        ControlId::PlanetScale,
        ControlId::Distance,
        ControlId::AutoRotateSpeed,
        ControlId::OrbitOpacity,
    ];

    pub fn from_wire(id: u32) -> Option<Self> {
        Some(match id {
            0 => ControlId::Speed,
            1 => ControlId::PlanetScale,
            2 => ControlId::Distance,
            3 => ControlId::AutoRotateSpeed,
            4 => ControlId::OrbitOpacity,
            5 => ControlId::ShowOrbits,
            6 => ControlId::ShowAtmosphere,
            7 => ControlId::AutoRotate,
            _ => return None,
        })
    }

    pub fn is_toggle(self) -> bool {
        matches!(
            self,
            ControlId::ShowOrbits | ControlId::ShowAtmosphere | ControlId::AutoRotate
        )
    }
}

fn percent(value: f32) -> String {
    format!("{}%", (value * 100.0).round() as i32)
}

/// Value label shown next to a range control.
pub fn label_for(id: ControlId, state: &ParameterState) -> Option<String> {
    match id {
        ControlId::Speed => Some(format!("{:.1}x", state.speed)),
        ControlId::PlanetScale => Some(percent(state.planet_scale)),
        ControlId::Distance => Some(percent(state.distance)),
        ControlId::AutoRotateSpeed => Some(format!("{:.1}", state.auto_rotate_speed)),
        ControlId::OrbitOpacity => Some(percent(state.orbit_opacity)),
        _ => None,
    }
}

/// Write a raw control value into the store.
///
/// Sliders send their raw position: speed is `raw / 50`, the rest `raw / 100`.
/// Toggles send non-zero for on. Returns the new value label for range controls.
pub fn apply_control(store: &mut ParameterStore, id: ControlId, raw: f32) -> Option<String> {
    match id {
        ControlId::Speed => {
            store.set_speed(raw / 50.0);
        }
        ControlId::PlanetScale => {
            store.set_planet_scale(raw / 100.0);
        }
        ControlId::Distance => {
            store.set_distance(raw / 100.0);
        }
        ControlId::AutoRotateSpeed => {
            store.set_auto_rotate_speed(raw / 100.0);
        }
        ControlId::OrbitOpacity => {
            store.set_orbit_opacity(raw / 100.0);
        }
        ControlId::ShowOrbits => store.set_show_orbits(raw != 0.0),
        ControlId::ShowAtmosphere => store.set_show_atmosphere(raw != 0.0),
        ControlId::AutoRotate => store.set_auto_rotate(raw != 0.0),
    }
    label_for(id, &store.get())
}
