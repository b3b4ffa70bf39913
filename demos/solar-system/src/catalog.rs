/// Body catalog: the star plus an ordered list of orbiting bodies.
///
/// Radii and distances are in catalog units (thousands of km and millions of
/// km respectively); the builder applies the display factors.

use std::collections::HashSet;
use std::rc::Rc;
use serde::{Deserialize, Serialize};
use orrery_engine::{Color, SetupError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyClass {
    Terrestrial,
    GasGiant,
    IceGiant,
}

impl BodyClass {
    pub fn label(self) -> &'static str {
        match self {
            BodyClass::Terrestrial => "Terrestrial planet",
            BodyClass::GasGiant => "Gas giant",
            BodyClass::IceGiant => "Ice giant",
        }
    }
}

/// Display-only strings for the info panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyFacts {
    pub diameter: String,
    pub mass: String,
    pub temperature: String,
    pub orbital_period: String,
}

impl BodyFacts {
    fn new(diameter: &str, mass: &str, temperature: &str, orbital_period: &str) -> Self {
        Self {
            diameter: diameter.to_string(),
            mass: mass.to_string(),
            temperature: temperature.to_string(),
            orbital_period: orbital_period.to_string(),
        }
    }
}

/// Immutable description of one orbiting body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyDescriptor {
    pub name: String,
    pub color: Color,
    pub radius: f32,
    /// Orbital radius.
    pub distance: f32,
    /// Relative angular speed; 1.0 = Earth.
    pub orbit_speed: f32,
    /// Spin added per frame at speed 1; negative = retrograde.
    pub rotation_speed: f32,
    /// Axial tilt in radians.
    pub tilt: f32,
    pub class: BodyClass,
    pub facts: BodyFacts,
    /// Atmosphere shell color; `None` = no atmosphere.
    #[serde(default)]
    pub atmosphere: Option<Color>,
    #[serde(default)]
    pub has_rings: bool,
}

impl BodyDescriptor {
    pub fn has_atmosphere(&self) -> bool {
        self.atmosphere.is_some()
    }

    fn validate(&self) -> Result<(), SetupError> {
        let invalid = |reason: &str| SetupError::InvalidBody {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.name.trim().is_empty() {
            return Err(invalid("empty name"));
        }
        let numbers = [
            ("radius", self.radius),
            ("distance", self.distance),
            ("orbit_speed", self.orbit_speed),
            ("rotation_speed", self.rotation_speed),
            ("tilt", self.tilt),
        ];
        if let Some((field, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(&format!("{field} is not a finite number")));
        }
        if self.radius < 0.0 {
            return Err(invalid("negative radius"));
        }
        if self.distance < 0.0 {
            return Err(invalid("negative distance"));
        }
        Ok(())
    }
}

/// The central star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarDescriptor {
    pub name: String,
    pub color: Color,
    pub emissive: Color,
    pub radius: f32,
    pub glow_radius: f32,
    pub glow_color: Color,
    /// Spin added per frame at speed 1.
    pub spin_speed: f32,
    pub class_label: String,
    pub facts: BodyFacts,
}

impl Default for StarDescriptor {
    fn default() -> Self {
        Self {
            name: "Sun".to_string(),
            color: Color::new(0xffeb3b),
            emissive: Color::new(0xff9800),
            radius: 10.0,
            glow_radius: 15.0,
            glow_color: Color::new(0xff9800),
            spin_speed: 0.002,
            class_label: "G-type main-sequence star".to_string(),
            facts: BodyFacts::new("1,392,700 km", "1.989 × 10³⁰ kg", "5,505 °C", "N/A"),
        }
    }
}

impl StarDescriptor {
    fn validate(&self) -> Result<(), SetupError> {
        let invalid = |reason: &str| SetupError::InvalidBody {
            name: self.name.clone(),
            reason: reason.to_string(),
        };
        if self.name.trim().is_empty() {
            return Err(invalid("empty name"));
        }
        for (field, v) in [
            ("radius", self.radius),
            ("glow_radius", self.glow_radius),
            ("spin_speed", self.spin_speed),
        ] {
            if !v.is_finite() {
                return Err(invalid(&format!("{field} is not a finite number")));
            }
        }
        if self.radius < 0.0 || self.glow_radius < 0.0 {
            return Err(invalid("negative radius"));
        }
        Ok(())
    }
}

/// Star plus bodies in display order. Bodies are shared with the live
/// registry through `Rc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCatalog {
    #[serde(default)]
    pub star: StarDescriptor,
    pub bodies: Vec<Rc<BodyDescriptor>>,
}

impl BodyCatalog {
    /// The eight planets, Mercury to Neptune.
    pub fn builtin() -> Self {
        let planet = |name: &str,
                      color: u32,
                      radius: f32,
                      distance: f32,
                      orbit_speed: f32,
                      rotation_speed: f32,
                      tilt: f32,
                      class: BodyClass,
                      facts: BodyFacts| BodyDescriptor {
            name: name.to_string(),
            color: Color::new(color),
            radius,
            distance,
            orbit_speed,
            rotation_speed,
            tilt,
            class,
            facts,
            atmosphere: None,
            has_rings: false,
        };

        let bodies = vec![
            planet("Mercury", 0x8a8a8a, 2.44, 57.9, 4.1, 0.017, 0.034, BodyClass::Terrestrial,
                BodyFacts::new("4,880 km", "3.301 × 10²³ kg", "167 °C", "88 days")),
            planet("Venus", 0xe6c229, 6.05, 108.2, 1.6, -0.004, 2.64, BodyClass::Terrestrial,
                BodyFacts::new("12,104 km", "4.867 × 10²⁴ kg", "464 °C", "225 days")),
            BodyDescriptor {
                atmosphere: Some(Color::new(0x3498db)),
                ..planet("Earth", 0x3498db, 6.37, 149.6, 1.0, 0.01, 0.41, BodyClass::Terrestrial,
                    BodyFacts::new("12,742 km", "5.972 × 10²⁴ kg", "15 °C", "365.25 days"))
            },
            BodyDescriptor {
                atmosphere: Some(Color::new(0xe67e22)),
                ..planet("Mars", 0xe67e22, 3.39, 227.9, 0.5, 0.009, 0.44, BodyClass::Terrestrial,
                    BodyFacts::new("6,779 km", "6.417 × 10²³ kg", "-65 °C", "687 days"))
            },
            planet("Jupiter", 0xf1c40f, 69.9, 778.5, 0.08, 0.02, 0.03, BodyClass::GasGiant,
                BodyFacts::new("139,820 km", "1.899 × 10²⁷ kg", "-110 °C", "12 years")),
            BodyDescriptor {
                has_rings: true,
                ..planet("Saturn", 0xf39c12, 58.2, 1434.0, 0.03, 0.018, 0.47, BodyClass::GasGiant,
                    BodyFacts::new("116,460 km", "5.685 × 10²⁶ kg", "-140 °C", "29.5 years"))
            },
            planet("Uranus", 0x1abc9c, 25.4, 2871.0, 0.01, 0.012, 1.71, BodyClass::IceGiant,
                BodyFacts::new("50,724 km", "8.682 × 10²⁵ kg", "-195 °C", "84 years")),
            planet("Neptune", 0x2980b9, 24.6, 4495.0, 0.006, 0.013, 0.72, BodyClass::IceGiant,
                BodyFacts::new("49,244 km", "1.024 × 10²⁶ kg", "-200 °C", "165 years")),
        ];

        Self {
            star: StarDescriptor::default(),
            bodies: bodies.into_iter().map(Rc::new).collect(),
        }
    }

    /// Parse a catalog from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        let catalog: BodyCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reject catalogs the scene cannot be built from.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.bodies.is_empty() {
            return Err(SetupError::InvalidCatalog {
                reason: "no bodies".to_string(),
            });
        }
        self.star.validate()?;

        let mut seen = HashSet::new();
        for body in &self.bodies {
            body.validate()?;
            if !seen.insert(body.name.as_str()) {
                return Err(SetupError::InvalidBody {
                    name: body.name.clone(),
                    reason: "duplicate name".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&Rc<BodyDescriptor>> {
        self.bodies.iter().find(|b| b.name == name)
    }
}

impl Default for BodyCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_eight_valid_planets() {
        let catalog = BodyCatalog::builtin();
        assert_eq!(catalog.len(), 8);
        catalog.validate().unwrap();
        let names: Vec<&str> = catalog.bodies.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
    }

    #[test]
    fn builtin_special_bodies() {
        let catalog = BodyCatalog::builtin();
        let earth = catalog.find("Earth").unwrap();
        assert_eq!(earth.atmosphere, Some(Color::new(0x3498db)));
        assert_eq!(earth.facts.diameter, "12,742 km");
        assert!(catalog.find("Mars").unwrap().has_atmosphere());
        assert!(catalog.find("Saturn").unwrap().has_rings);
        assert!(catalog.find("Venus").unwrap().rotation_speed < 0.0);
        assert_eq!(catalog.find("Jupiter").unwrap().class.label(), "Gas giant");
        assert_eq!(catalog.star.name, "Sun");
    }

    #[test]
    fn json_catalog_with_defaults() {
        let json = r#"{
            "bodies": [{
                "name": "Vulcan", "color": 16711680, "radius": 1.0, "distance": 20.0,
                "orbit_speed": 6.0, "rotation_speed": 0.02, "tilt": 0.0,
                "class": "terrestrial",
                "facts": {"diameter": "1 km", "mass": "?", "temperature": "hot", "orbital_period": "20 days"}
            }]
        }"#;
        let catalog = BodyCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.bodies[0].color, Color::new(0xff0000));
        assert!(!catalog.bodies[0].has_rings);
        assert_eq!(catalog.star, StarDescriptor::default());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = BodyCatalog::from_json(r#"{"bodies": []}"#).unwrap_err();
        assert!(matches!(err, SetupError::InvalidCatalog { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(BodyCatalog::from_json("{"), Err(SetupError::Parse(_))));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut catalog = BodyCatalog::builtin();
        let earth = catalog.bodies[2].clone();
        catalog.bodies.push(earth);
        match catalog.validate() {
            Err(SetupError::InvalidBody { name, reason }) => {
                assert_eq!(name, "Earth");
                assert_eq!(reason, "duplicate name");
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
    }

    #[test]
    fn bad_numbers_are_rejected() {
        let mut catalog = BodyCatalog::builtin();
        let mut mars = (*catalog.bodies[3]).clone();
        mars.radius = -1.0;
        catalog.bodies[3] = Rc::new(mars);
        assert!(matches!(catalog.validate(), Err(SetupError::InvalidBody { .. })));

        let mut catalog = BodyCatalog::builtin();
        let mut venus = (*catalog.bodies[1]).clone();
        venus.orbit_speed = f32::NAN;
        catalog.bodies[1] = Rc::new(venus);
        assert!(matches!(catalog.validate(), Err(SetupError::InvalidBody { .. })));
    }
}
