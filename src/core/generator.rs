//! Scene assembly: palette, layout parameters and keyword triggers
//! composed into one `SceneGraph`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::FRAC_PI_2;
use std::path::PathBuf;
use thiserror::Error;

use crate::core::keywords::{KeywordError, KeywordSets, Triggers};
use crate::core::layout::ring_layout;
use crate::core::mood::LayoutParams;
use crate::core::palette::Palette;
use crate::schema::object::{Behavior, Color, Material, Object3D, Primitive};
use crate::schema::request::{GenerationRequest, ValidationError};
use crate::schema::scene::{
    Camera, Fog, Ground, Light, LightKind, PostFx, SceneGraph, Sky, ToneMapping,
};

pub const DEFAULT_TITLE: &str = "DreamArchitect (No-Key Edition)";

const UP: [f64; 3] = [0.0, 1.0, 0.0];
const ORB_HEIGHT: f64 = 0.9;
const TREE_COUNT: usize = 12;
const TREE_RING_RADIUS: f64 = 16.0;
const PILLAR_COUNT: usize = 6;
const PILLAR_RING_RADIUS: f64 = 22.0;
const PILLAR_RING_HEIGHT: f64 = 0.6;
/// Pillars are placed by center; the ring height only fixes the azimuths.
const PILLAR_CENTER_Y: f64 = 0.9;
const STAR_COUNT: usize = 50;
const STAR_SPREAD: f64 = 40.0;
const STAR_MIN_HEIGHT: f64 = 10.0;
const STAR_MAX_HEIGHT: f64 = 25.0;
const GROUND_SIZE: f64 = 240.0;
const FOG_NEAR: f64 = 12.0;
const FOG_FAR: f64 = 180.0;

const TRUNK_COLOR: Color = Color::new(0.25, 0.13, 0.05);
const PILLAR_COLOR: Color = Color::new(0.75, 0.75, 0.78);

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("keyword error: {0}")]
    Keywords(#[from] KeywordError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Stateless scene generator. Built via `SceneGenerator::builder()`.
///
/// Holds only read-only configuration, so one instance can serve
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct SceneGenerator {
    keywords: KeywordSets,
    title: String,
}

/// Builder for constructing a `SceneGenerator`.
#[derive(Debug, Default)]
pub struct SceneGeneratorBuilder {
    keywords: Option<KeywordSets>,
    keywords_path: Option<PathBuf>,
    title: Option<String>,
}

impl Default for SceneGenerator {
    fn default() -> Self {
        Self {
            keywords: KeywordSets::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Generate a scene with the default keyword sets and title.
pub fn generate_scene(request: &GenerationRequest) -> SceneGraph {
    SceneGenerator::default().generate(request)
}

impl SceneGenerator {
    pub fn builder() -> SceneGeneratorBuilder {
        SceneGeneratorBuilder::default()
    }

    pub fn keywords(&self) -> &KeywordSets {
        &self.keywords
    }

    /// Generate a scene. Stars draw from a request-local generator: seeded
    /// when the request carries a seed, from OS entropy otherwise.
    ///
    /// Performs no range checks; see [`Self::generate_validated`].
    pub fn generate(&self, request: &GenerationRequest) -> SceneGraph {
        let mut rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed as u64),
            None => StdRng::from_entropy(),
        };
        self.generate_with_rng(request, &mut rng)
    }

    /// Validate the request's mood ranges, then generate.
    pub fn generate_validated(
        &self,
        request: &GenerationRequest,
    ) -> Result<SceneGraph, GeneratorError> {
        request.validate()?;
        Ok(self.generate(request))
    }

    /// Generate a scene drawing every random value from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> SceneGraph {
        let mood = &request.mood;
        let palette = Palette::from_mood(mood);
        let params = LayoutParams::from_mood(mood);
        let triggers = self.keywords.classify(&request.narrative, params.time_of_day);

        let mut objects = Vec::new();
        objects.push(totem(&palette, &params));
        push_orbs(&mut objects, &palette, &params);
        if triggers.trees {
            push_trees(&mut objects, &palette);
        }
        if triggers.structures {
            push_pillars(&mut objects);
        }
        if triggers.water {
            objects.push(water(&palette, &params));
        }
        if triggers.stars {
            push_stars(&mut objects, rng);
        }

        tracing::debug!(
            time_of_day = params.time_of_day.name(),
            groups = ?triggers.active(),
            objects = objects.len(),
            seeded = request.seed.is_some(),
            "generated scene"
        );

        SceneGraph {
            title: self.title.clone(),
            description: request.narrative.clone(),
            style: request.style,
            camera: Camera {
                position: [0.0, 3.0, params.camera_distance],
                look_at: [0.0, 0.0, 0.0],
            },
            sky: Sky {
                time_of_day: params.time_of_day,
                color_top: palette.sky_top,
                color_bottom: palette.sky_bottom,
            },
            lights: lights(&palette),
            ground: Ground {
                size: GROUND_SIZE,
                material: Material::standard(palette.ground, 0.0, 1.0),
            },
            objects,
            fog: Fog {
                enabled: true,
                color: palette.sky_bottom,
                near: FOG_NEAR,
                far: FOG_FAR,
            },
            postfx: PostFx {
                bloom: true,
                bloom_strength: 0.7 + 0.3 * mood.warmth,
                vignette: true,
                tone_mapping: ToneMapping::Aces,
            },
        }
    }

    /// The keyword triggers this generator would use for a request.
    pub fn triggers(&self, request: &GenerationRequest) -> Triggers {
        let params = LayoutParams::from_mood(&request.mood);
        self.keywords.classify(&request.narrative, params.time_of_day)
    }
}

fn lights(palette: &Palette) -> Vec<Light> {
    vec![
        Light {
            kind: LightKind::Ambient,
            intensity: 0.6,
            color: palette.sky_bottom,
            position: None,
        },
        Light {
            kind: LightKind::Hemisphere,
            intensity: 0.45,
            color: palette.sky_top,
            position: Some([0.0, 10.0, 0.0]),
        },
        Light {
            kind: LightKind::Directional,
            intensity: 0.95,
            color: palette.key,
            position: Some([5.0, 8.0, 5.0]),
        },
    ]
}

fn totem(palette: &Palette, params: &LayoutParams) -> Object3D {
    let height = params.totem_height;
    Object3D::new("totem", Primitive::Cylinder, Material::standard(palette.key, 0.2, 0.5))
        .at([0.0, height / 2.0, 0.0])
        .scaled([0.8, height, 0.8])
        .with_behavior(Behavior::pulse(params.pulse_amplitude, params.pulse_speed))
}

fn push_orbs(objects: &mut Vec<Object3D>, palette: &Palette, params: &LayoutParams) {
    let material = Material::standard(palette.orb(), 0.0, 0.25);
    let behavior = Behavior::orbit(params.orbit_speed, params.orbit_radius, UP);
    for point in ring_layout(params.orb_count, params.orbit_radius, ORB_HEIGHT) {
        let orb = Object3D::new(format!("orb-{}", objects.len()), Primitive::Sphere, material)
            .at(point.position)
            .rotated([0.0, point.angle, 0.0])
            .scaled([0.9, 0.9, 0.9])
            .with_behavior(behavior);
        objects.push(orb);
    }
}

fn push_trees(objects: &mut Vec<Object3D>, palette: &Palette) {
    let trunk = Material::standard(TRUNK_COLOR, 0.0, 1.0);
    let canopy = Material::standard(palette.canopy(), 0.0, 0.8);
    for (i, point) in ring_layout(TREE_COUNT, TREE_RING_RADIUS, 0.0).iter().enumerate() {
        let (x, z) = (point.x(), point.z());
        objects.push(
            Object3D::new(format!("tree-trunk-{i}"), Primitive::Cylinder, trunk)
                .at([x, 1.0, z])
                .scaled([0.3, 2.0, 0.3]),
        );
        objects.push(
            Object3D::new(format!("tree-leaf-{i}"), Primitive::Cone, canopy)
                .at([x, 3.0, z])
                .scaled([1.4, 2.0, 1.4]),
        );
    }
}

fn push_pillars(objects: &mut Vec<Object3D>) {
    let material = Material::standard(PILLAR_COLOR, 0.12, 0.6);
    let ring = ring_layout(PILLAR_COUNT, PILLAR_RING_RADIUS, PILLAR_RING_HEIGHT);
    for (i, point) in ring.iter().enumerate() {
        objects.push(
            Object3D::new(format!("pillar-{i}"), Primitive::Box, material)
                .at([point.x(), PILLAR_CENTER_Y, point.z()])
                .scaled([1.4, 1.6, 1.4]),
        );
    }
}

fn water(palette: &Palette, params: &LayoutParams) -> Object3D {
    let radius = params.water_radius;
    Object3D::new("water", Primitive::Torus, Material::standard(palette.water(), 0.0, 0.2))
        .at([0.0, 0.2, 0.0])
        .rotated([FRAC_PI_2, 0.0, 0.0])
        .scaled([radius, 0.2, radius])
}

fn push_stars<R: Rng + ?Sized>(objects: &mut Vec<Object3D>, rng: &mut R) {
    let material = Material::standard(Color::WHITE, 0.0, 0.0);
    for i in 0..STAR_COUNT {
        let x = rng.gen_range(-STAR_SPREAD..=STAR_SPREAD);
        let z = rng.gen_range(-STAR_SPREAD..=STAR_SPREAD);
        let y = rng.gen_range(STAR_MIN_HEIGHT..=STAR_MAX_HEIGHT);
        objects.push(
            Object3D::new(format!("star-{i}"), Primitive::Sphere, material)
                .at([x, y, z])
                .scaled([0.05, 0.05, 0.05])
                .with_behavior(Behavior::rotate(0.1, UP)),
        );
    }
}

impl SceneGeneratorBuilder {
    /// Use these keyword sets instead of the built-in ones.
    pub fn keywords(mut self, keywords: KeywordSets) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Load keyword sets from a RON file at build time. Takes precedence
    /// over `keywords`.
    pub fn keywords_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.keywords_path = Some(path.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn build(self) -> Result<SceneGenerator, GeneratorError> {
        let keywords = match self.keywords_path {
            Some(path) => KeywordSets::load_from_ron(&path)?,
            None => self.keywords.unwrap_or_default(),
        };
        Ok(SceneGenerator {
            keywords,
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        })
    }
}
