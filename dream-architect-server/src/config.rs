// =============================================================================
// DreamArchitect API - Configuration
// =============================================================================

use clap::Parser;
use dream_architect::{GeneratorError, SceneGenerator};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration from command-line flags, falling back to
/// environment variables.
#[derive(Parser, Debug, Clone)]
#[command(name = "dream-architect-api")]
#[command(about = "HTTP API turning narratives and moods into 3D scene descriptions")]
pub struct Config {
    /// TCP address to bind the web server
    #[arg(long, env = "DREAM_BIND", default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Keyword sets in RON format, replacing the built-in vocabulary
    #[arg(long, env = "DREAM_KEYWORDS")]
    pub keywords: Option<PathBuf>,

    /// Scene title override
    #[arg(long, env = "DREAM_TITLE")]
    pub title: Option<String>,
}

impl Config {
    pub fn build_generator(&self) -> Result<SceneGenerator, GeneratorError> {
        let mut builder = SceneGenerator::builder();
        if let Some(ref path) = self.keywords {
            builder = builder.keywords_path(path);
        }
        if let Some(ref title) = self.title {
            builder = builder.title(title.clone());
        }
        builder.build()
    }
}
