//! DreamArchitect: mood-driven scene description generation.
//!
//! Turns a short narrative and a four-axis mood vector into a complete,
//! renderer-agnostic 3D scene: camera, sky, lights, ground, fog, post
//! processing and a list of animated primitives, using deterministic
//! color and layout math plus keyword-triggered object groups.

pub mod core;
pub mod schema;

pub use crate::core::generator::{generate_scene, GeneratorError, SceneGenerator};
pub use crate::schema::mood::Mood;
pub use crate::schema::request::{GenerationRequest, Style, ValidationError};
pub use crate::schema::scene::SceneGraph;
