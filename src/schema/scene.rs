use serde::{Deserialize, Serialize};

use super::object::{Color, Material, Object3D, Vec3};
use super::request::Style;

/// Discrete time-of-day label for the sky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Dawn,
    #[default]
    Day,
    Dusk,
    Night,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 4] = [Self::Dawn, Self::Day, Self::Dusk, Self::Night];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dawn => "dawn",
            Self::Day => "day",
            Self::Dusk => "dusk",
            Self::Night => "night",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightKind {
    Ambient,
    Hemisphere,
    Directional,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    #[serde(rename = "type")]
    pub kind: LightKind,
    pub intensity: f64,
    pub color: Color,
    /// Absent for ambient lights; serialized as `null`.
    pub position: Option<Vec3>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sky {
    pub time_of_day: TimeOfDay,
    pub color_top: Color,
    pub color_bottom: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ground {
    pub size: f64,
    pub material: Material,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub look_at: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fog {
    pub enabled: bool,
    pub color: Color,
    pub near: f64,
    pub far: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneMapping {
    #[default]
    Aces,
    Reinhard,
    Linear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostFx {
    pub bloom: bool,
    pub bloom_strength: f64,
    pub vignette: bool,
    pub tone_mapping: ToneMapping,
}

/// The complete, renderer-agnostic scene description handed to a viewer.
///
/// `objects` is in insertion order: totem, orbs, then trees, structures,
/// water and stars when their groups are triggered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub title: String,
    pub description: String,
    pub style: Style,
    pub camera: Camera,
    pub sky: Sky,
    pub lights: Vec<Light>,
    pub ground: Ground,
    pub objects: Vec<Object3D>,
    pub fog: Fog,
    pub postfx: PostFx,
}

impl SceneGraph {
    /// Objects whose id starts with `prefix`, in scene order.
    pub fn objects_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a Object3D> + 'a {
        self.objects.iter().filter(move |o| o.id.starts_with(prefix))
    }

    pub fn object(&self, id: &str) -> Option<&Object3D> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Every color in the scene: sky, lights, ground, fog and materials.
    pub fn colors(&self) -> Vec<Color> {
        let mut colors = vec![
            self.sky.color_top,
            self.sky.color_bottom,
            self.ground.material.color,
            self.fog.color,
        ];
        colors.extend(self.lights.iter().map(|l| l.color));
        colors.extend(self.objects.iter().map(|o| o.material.color));
        colors
    }
}
