use serde::{Deserialize, Serialize};

/// Packed 24-bit RGB color (`0xRRGGBB`), the same layout hex literals use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xffffff);

    pub const fn new(hex: u32) -> Self {
        Self(hex & 0xff_ffff)
    }

    pub const fn hex(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16 & 0xff) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8 & 0xff) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// Channels normalized to 0.0..=1.0.
    pub fn to_rgb_f32(self) -> [f32; 3] {
        [
            self.red() as f32 / 255.0,
            self.green() as f32 / 255.0,
            self.blue() as f32 / 255.0,
        ]
    }

    /// CSS `rgb(r, g, b)` string.
    pub fn css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.red(), self.green(), self.blue())
    }

    /// CSS `rgba(r, g, b, a)` string.
    pub fn css_rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.red(), self.green(), self.blue(), alpha)
    }
}

/// Renderable shape. Dimensions are in the node's local units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Sphere { radius: f32 },
    /// Flat annulus in the local XY plane.
    Ring { inner: f32, outer: f32 },
}

impl Geometry {
    /// Radius of the smallest origin-centered sphere enclosing the shape.
    pub fn bounding_radius(&self) -> f32 {
        match *self {
            Geometry::Sphere { radius } => radius,
            Geometry::Ring { outer, .. } => outer,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Normal,
    Additive,
}

/// Surface description handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    /// Self-illumination added on top of lighting.
    pub emissive: Color,
    /// 1.0 = opaque.
    pub opacity: f32,
    /// Phong specular exponent.
    pub shininess: f32,
    pub specular: Color,
    pub blend: BlendMode,
    pub double_sided: bool,
    /// Unlit materials ignore scene lights (stars, halos, markers).
    pub lit: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            emissive: Color::BLACK,
            opacity: 1.0,
            shininess: 30.0,
            specular: Color(0x111111),
            blend: BlendMode::Normal,
            double_sided: false,
            lit: true,
        }
    }
}

impl Material {
    pub fn is_translucent(&self) -> bool {
        self.opacity < 1.0 || self.blend == BlendMode::Additive
    }
}

/// Geometry plus material; attached to a node to make it renderable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    pub geometry: Geometry,
    pub material: Material,
}

impl MeshComponent {
    pub fn new(geometry: Geometry, material: Material) -> Self {
        Self { geometry, material }
    }

    pub fn sphere(radius: f32, color: Color) -> Self {
        Self::new(
            Geometry::Sphere { radius },
            Material { color, ..Material::default() },
        )
    }

    pub fn ring(inner: f32, outer: f32, color: Color) -> Self {
        Self::new(
            Geometry::Ring { inner, outer },
            Material { color, double_sided: true, ..Material::default() },
        )
    }

    pub fn with_emissive(mut self, emissive: Color) -> Self {
        self.material.emissive = emissive;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.material.opacity = opacity;
        self
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.material.shininess = shininess;
        self
    }

    pub fn with_specular(mut self, specular: Color) -> Self {
        self.material.specular = specular;
        self
    }

    pub fn additive(mut self) -> Self {
        self.material.blend = BlendMode::Additive;
        self
    }

    pub fn unlit(mut self) -> Self {
        self.material.lit = false;
        self
    }
}
