use clap::{Parser, Subcommand};
use cli::RunConfig;
use color_eyre::eyre::Result;
use objscan::{
    overlay::{default_font, load_font},
    DetectionResult, ImageCanvas, MaskStrategy, ObjectDetector, OverlayRenderer, Pipeline,
};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect and measure objects in an image
    Detect {
        /// Path to the input image
        #[arg(short, long)]
        input: PathBuf,
        /// Write an annotated copy of the image here
        #[arg(short, long)]
        annotated: Option<PathBuf>,
        /// Write the JSON record here instead of stdout
        #[arg(short, long)]
        json: Option<PathBuf>,
        /// Path to a TOML or JSON run configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Mask source: auto, alpha or luminance
        #[arg(long)]
        mask_strategy: Option<MaskStrategy>,
    },
    /// Print the JSON schema of the detection record
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // stdout carries the JSON record, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect {
            input,
            annotated,
            json,
            config,
            mask_strategy,
        } => {
            let mut run_config = match config {
                Some(path) => RunConfig::from_file(path)?,
                None => RunConfig::default(),
            };
            if let Some(strategy) = mask_strategy {
                run_config.mask_strategy = strategy;
            }
            if annotated.is_some() {
                run_config.output.annotated = annotated;
            }
            if json.is_some() {
                run_config.output.json = json;
            }
            detect(&input, run_config).await?;
        }
        Commands::Schema => {
            println!("{}", serde_json::to_string_pretty(&DetectionResult::schema())?);
        }
    }

    Ok(())
}

async fn detect(input: &Path, config: RunConfig) -> Result<()> {
    let detector = ObjectDetector::ready(
        Pipeline::builder()
            .with_mask_strategy(config.mask_strategy)
            .build(),
    )
    .with_renderer(OverlayRenderer::new(config.overlay.clone()));

    let bytes = tokio::fs::read(input).await?;
    let image = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await??;
    info!(
        "Loaded {:?} ({}x{}, mask strategy: {})",
        input,
        image.width(),
        image.height(),
        config.mask_strategy
    );

    let result = match &config.output.annotated {
        Some(path) => {
            let font = match &config.font {
                Some(font_path) => load_font(font_path)?,
                None => default_font()?,
            };
            let mut canvas = ImageCanvas::new(image.to_rgba8(), font);
            let result = detector.process_and_render(&image, &mut canvas)?;
            canvas.save(path)?;
            info!("Annotated image written to {:?}", path);
            result
        }
        None => detector.process(&image)?,
    };

    info!(
        "Detected {} objects, edge distances {:?}",
        result.objects.len(),
        result.distances
    );

    let json = result.to_json_pretty()?;
    match &config.output.json {
        Some(path) => {
            tokio::fs::write(path, json).await?;
            info!("Detection record written to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
