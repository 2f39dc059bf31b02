/// Scene preview: generate a scene from the command line and print it.
///
/// Usage: scene_preview "<narrative>" [--valence v] [--arousal a] [--warmth w]
///                      [--nostalgia n] [--seed s] [--style stylized|realistic|lowpoly]
///                      [--keywords <file.ron>] [--summary] [--request <file.json>]
///
/// Prints the scene graph as pretty JSON on stdout, or a one-screen
/// summary with `--summary`. Logs go to stderr (`RUST_LOG=debug` for
/// generation details).

use clap::{Parser, ValueEnum};
use dream_architect::core::mood::LayoutParams;
use dream_architect::{GenerationRequest, Mood, SceneGenerator, SceneGraph, Style};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StyleArg {
    Stylized,
    Realistic,
    Lowpoly,
}

impl From<StyleArg> for Style {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Stylized => Style::Stylized,
            StyleArg::Realistic => Style::Realistic,
            StyleArg::Lowpoly => Style::Lowpoly,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "scene_preview")]
#[command(about = "Generate a mood-driven scene description and print it")]
struct Cli {
    /// Narrative text to compose the scene from
    #[arg(default_value = "")]
    narrative: String,

    /// Read the whole request from a JSON file instead of flags
    #[arg(long, conflicts_with = "narrative")]
    request: Option<PathBuf>,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    valence: f64,

    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    arousal: f64,

    #[arg(long, default_value_t = 0.0)]
    warmth: f64,

    #[arg(long, default_value_t = 0.0)]
    nostalgia: f64,

    /// Seed for the star field; omit for a fresh sky every run
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    #[arg(long, value_enum, default_value = "stylized")]
    style: StyleArg,

    /// Keyword sets in RON format, replacing the built-in vocabulary
    #[arg(long)]
    keywords: Option<PathBuf>,

    /// Print a summary instead of the full JSON scene
    #[arg(long)]
    summary: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dream_architect=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let request = match cli.request {
        Some(ref path) => load_request(path),
        None => {
            let mood = Mood::new(cli.valence, cli.arousal, cli.warmth, cli.nostalgia);
            let mut request = GenerationRequest::new(cli.narrative.clone(), mood)
                .with_style(cli.style.into());
            request.seed = cli.seed;
            request
        }
    };

    let mut builder = SceneGenerator::builder();
    if let Some(ref path) = cli.keywords {
        builder = builder.keywords_path(path);
    }
    let generator = builder.build().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let scene = generator.generate_validated(&request).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(2);
    });

    if cli.summary {
        print_summary(&request, &scene);
    } else {
        match serde_json::to_string_pretty(&scene) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing scene: {e}");
                process::exit(1);
            }
        }
    }
}

fn load_request(path: &Path) -> GenerationRequest {
    let contents = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading request file '{}': {}", path.display(), e);
        process::exit(1);
    });
    serde_json::from_str(&contents).unwrap_or_else(|e| {
        eprintln!("Invalid request JSON in '{}': {}", path.display(), e);
        process::exit(1);
    })
}

fn print_summary(request: &GenerationRequest, scene: &SceneGraph) {
    let params = LayoutParams::from_mood(&request.mood);
    let top = scene.sky.color_top;
    let bottom = scene.sky.color_bottom;

    println!("{}", scene.title);
    println!("  \"{}\"", scene.description);
    println!("  style:        {}", scene.style.name());
    println!("  time of day:  {}", scene.sky.time_of_day.name());
    println!("  sky top:      {}", hex(top.channels()));
    println!("  sky bottom:   {}", hex(bottom.channels()));
    println!("  camera dist:  {:.2}", params.camera_distance);
    println!("  totem height: {:.2}", params.totem_height);
    println!("  bloom:        {:.2}", scene.postfx.bloom_strength);

    let mut groups: BTreeMap<&str, usize> = BTreeMap::new();
    for obj in &scene.objects {
        let group = obj.id.split('-').next().unwrap_or("?");
        *groups.entry(group).or_default() += 1;
    }
    println!("  objects:      {}", scene.objects.len());
    for (group, count) in groups {
        println!("    {group:<8} {count}");
    }
}

fn hex(channels: [f64; 3]) -> String {
    let [r, g, b] = channels.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{r:02x}{g:02x}{b:02x}")
}
