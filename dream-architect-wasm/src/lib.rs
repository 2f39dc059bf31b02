//! WASM bindings for dream-architect, letting a browser viewer generate
//! scenes client-side.

use wasm_bindgen::prelude::*;

use dream_architect::core::keywords::KeywordSets;
use dream_architect::schema::scene::TimeOfDay;
use dream_architect::{GenerationRequest, SceneGenerator, Style};

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct TriggerInfo {
    time_of_day: &'static str,
    groups: Vec<&'static str>,
}

// ---------------------------------------------------------------------------
// Plain-Rust core of each binding; errors become `JsError` at the boundary
// ---------------------------------------------------------------------------
fn parse_request(request_json: &str) -> Result<GenerationRequest, String> {
    serde_json::from_str(request_json).map_err(|e| format!("Invalid request JSON: {e}"))
}

fn check_request(request_json: &str) -> Result<(), String> {
    parse_request(request_json)?
        .validate()
        .map_err(|e| e.to_string())
}

fn generate_json(generator: &SceneGenerator, request_json: &str) -> Result<String, String> {
    let request = parse_request(request_json)?;
    let scene = generator
        .generate_validated(&request)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&scene).map_err(|e| format!("Serialization error: {e}"))
}

fn triggers_json(generator: &SceneGenerator, request_json: &str) -> Result<String, String> {
    let request = parse_request(request_json)?;
    let info = TriggerInfo {
        time_of_day: dream_architect::core::mood::time_of_day(request.mood.arousal).name(),
        groups: generator.triggers(&request).active(),
    };
    serde_json::to_string(&info).map_err(|e| format!("Serialization error: {e}"))
}

fn build_generator(keywords_ron: &str, title: Option<String>) -> Result<SceneGenerator, String> {
    let mut builder = SceneGenerator::builder();
    if !keywords_ron.trim().is_empty() {
        let keywords = KeywordSets::parse_ron(keywords_ron)
            .map_err(|e| format!("Keyword parse error: {e}"))?;
        builder = builder.keywords(keywords);
    }
    if let Some(title) = title {
        builder = builder.title(title);
    }
    builder
        .build()
        .map_err(|e| format!("Generator build error: {e}"))
}

fn js_error(message: String) -> JsError {
    JsError::new(&message)
}

// ---------------------------------------------------------------------------
// Free functions using the built-in vocabulary
// ---------------------------------------------------------------------------

/// Validate and generate a scene. Returns the scene graph as JSON.
///
/// Expected JSON shape:
/// ```json
/// {
///   "narrative": "a temple by a lake",
///   "mood": { "valence": 0.2, "arousal": 0.5, "warmth": 0.7, "nostalgia": 0.3 },
///   "seed": 42,
///   "style": "stylized"
/// }
/// ```
#[wasm_bindgen(js_name = generateScene)]
pub fn generate_scene(request_json: &str) -> Result<String, JsError> {
    generate_json(&SceneGenerator::default(), request_json).map_err(js_error)
}

/// Check a request's mood ranges without generating anything.
#[wasm_bindgen(js_name = validateRequest)]
pub fn validate_request(request_json: &str) -> Result<(), JsError> {
    check_request(request_json).map_err(js_error)
}

/// Return JSON array of accepted style tags.
#[wasm_bindgen]
pub fn styles() -> String {
    let names: Vec<_> = Style::ALL.iter().map(Style::name).collect();
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

/// Return JSON array of time-of-day labels.
#[wasm_bindgen(js_name = timesOfDay)]
pub fn times_of_day() -> String {
    let names: Vec<_> = TimeOfDay::ALL.iter().map(TimeOfDay::name).collect();
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

// ---------------------------------------------------------------------------
// SceneArchitect: a generator with custom vocabulary
// ---------------------------------------------------------------------------
#[wasm_bindgen]
#[derive(Default)]
pub struct SceneArchitect {
    generator: SceneGenerator,
}

#[wasm_bindgen]
impl SceneArchitect {
    /// Create a generator from RON keyword sets. An empty string keeps the
    /// built-in vocabulary.
    #[wasm_bindgen(constructor)]
    pub fn new(keywords_ron: &str, title: Option<String>) -> Result<SceneArchitect, JsError> {
        let generator = build_generator(keywords_ron, title).map_err(js_error)?;
        Ok(SceneArchitect { generator })
    }

    /// Validate and generate a scene. Returns the scene graph as JSON.
    pub fn generate(&self, request_json: &str) -> Result<String, JsError> {
        generate_json(&self.generator, request_json).map_err(js_error)
    }

    /// Report which optional groups a request would trigger, as JSON.
    pub fn triggers(&self, request_json: &str) -> Result<String, JsError> {
        triggers_json(&self.generator, request_json).map_err(js_error)
    }
}
