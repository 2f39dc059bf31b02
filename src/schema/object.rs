use serde::{Deserialize, Serialize};

/// A 3-component vector, serialized as a JSON array.
pub type Vec3 = [f64; 3];

/// Linear RGB color. Channels are conventionally in [0, 1] but not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise average of two colors.
    pub fn average(&self, other: &Color) -> Color {
        Color::new(
            (self.r + other.r) * 0.5,
            (self.g + other.g) * 0.5,
            (self.b + other.b) * 0.5,
        )
    }

    /// Scale each channel independently.
    pub fn tinted(&self, r: f64, g: f64, b: f64) -> Color {
        Color::new(self.r * r, self.g * g, self.b * b)
    }

    pub fn channels(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

/// Shading model the client should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    #[default]
    Standard,
    Lambert,
    Phong,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(default)]
    pub kind: MaterialKind,
    pub color: Color,
    #[serde(default)]
    pub metalness: f64,
    #[serde(default = "default_roughness")]
    pub roughness: f64,
}

fn default_roughness() -> f64 {
    1.0
}

impl Material {
    pub fn standard(color: Color, metalness: f64, roughness: f64) -> Self {
        Self {
            kind: MaterialKind::Standard,
            color,
            metalness,
            roughness,
        }
    }
}

/// Client-side animation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BehaviorKind {
    #[default]
    None,
    Rotate,
    Orbit,
    Pulse,
}

/// An animation descriptor executed by the viewer, not by this crate.
///
/// Which scalars matter depends on `kind`:
/// - `Rotate`: `speed`, `axis`
/// - `Orbit`: `speed`, `radius`, `axis`
/// - `Pulse`: `amplitude`, `speed`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Behavior {
    pub kind: BehaviorKind,
    pub speed: f64,
    pub radius: f64,
    pub amplitude: f64,
    pub axis: Vec3,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            kind: BehaviorKind::None,
            speed: 0.4,
            radius: 6.0,
            amplitude: 0.2,
            axis: [0.0, 1.0, 0.0],
        }
    }
}

impl Behavior {
    pub fn rotate(speed: f64, axis: Vec3) -> Self {
        Self {
            kind: BehaviorKind::Rotate,
            speed,
            axis,
            ..Self::default()
        }
    }

    pub fn orbit(speed: f64, radius: f64, axis: Vec3) -> Self {
        Self {
            kind: BehaviorKind::Orbit,
            speed,
            radius,
            axis,
            ..Self::default()
        }
    }

    pub fn pulse(amplitude: f64, speed: f64) -> Self {
        Self {
            kind: BehaviorKind::Pulse,
            amplitude,
            speed,
            ..Self::default()
        }
    }

    pub fn is_static(&self) -> bool {
        self.kind == BehaviorKind::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Box,
    Sphere,
    Cylinder,
    Plane,
    Cone,
    Torus,
}

fn unit_scale() -> Vec3 {
    [1.0, 1.0, 1.0]
}

/// One placed, shaded primitive in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object3D {
    /// Unique within a scene; informative only.
    pub id: String,
    pub primitive: Primitive,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Vec3,
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
    pub material: Material,
    #[serde(default)]
    pub behavior: Behavior,
}

impl Object3D {
    /// A static object at the origin with unit scale.
    pub fn new(id: impl Into<String>, primitive: Primitive, material: Material) -> Self {
        Self {
            id: id.into(),
            primitive,
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: unit_scale(),
            material,
            behavior: Behavior::default(),
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_average() {
        let c = Color::new(0.25, 0.5, 1.0).average(&Color::new(0.75, 0.0, 0.0));
        assert_eq!(c, Color::new(0.5, 0.25, 0.5));
    }

    #[test]
    fn behavior_constructors_keep_defaults() {
        let pulse = Behavior::pulse(0.15, 0.5);
        assert_eq!(pulse.kind, BehaviorKind::Pulse);
        assert_eq!(pulse.radius, 6.0);
        assert_eq!(pulse.axis, [0.0, 1.0, 0.0]);

        let orbit = Behavior::orbit(0.3, 9.0, [0.0, 1.0, 0.0]);
        assert_eq!(orbit.amplitude, 0.2);
        assert!(!orbit.is_static());
        assert!(Behavior::default().is_static());
    }

    #[test]
    fn object_builder() {
        let obj = Object3D::new("crate", Primitive::Box, Material::standard(Color::WHITE, 0.0, 1.0))
            .at([1.0, 2.0, 3.0])
            .scaled([2.0, 2.0, 2.0]);
        assert_eq!(obj.position, [1.0, 2.0, 3.0]);
        assert_eq!(obj.rotation, [0.0; 3]);
        assert_eq!(obj.scale, [2.0, 2.0, 2.0]);
        assert!(obj.behavior.is_static());
    }

    #[test]
    fn wire_tags_are_lowercase() {
        let obj = Object3D::new("t", Primitive::Torus, Material::standard(Color::WHITE, 0.0, 0.2))
            .with_behavior(Behavior::rotate(0.1, [0.0, 1.0, 0.0]));
        let json = serde_json::to_value(&obj).unwrap();
        assert_eq!(json["primitive"], "torus");
        assert_eq!(json["material"]["kind"], "standard");
        assert_eq!(json["behavior"]["kind"], "rotate");
    }

    #[test]
    fn object_defaults_on_deserialize() {
        let obj: Object3D = serde_json::from_str(
            r#"{"id": "a", "primitive": "cone", "material": {"color": {"r": 1, "g": 0, "b": 0}}}"#,
        )
        .unwrap();
        assert_eq!(obj.scale, [1.0, 1.0, 1.0]);
        assert_eq!(obj.material.kind, MaterialKind::Standard);
        assert_eq!(obj.material.roughness, 1.0);
        assert_eq!(obj.material.metalness, 0.0);
        assert!(obj.behavior.is_static());
    }
}
