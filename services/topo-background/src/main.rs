//! Topographic background renderer.
//!
//! - `render`: draw one background and write it as SVG (and optionally PNG)
//! - `watch`: read resize and theme events from stdin and rewrite the output
//!   after each debounced regeneration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::io::BufReader;
use tokio::sync::{broadcast, mpsc};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use topo_background::{
    forward_host_events, BackgroundConfig, BackgroundController, BackgroundService, FileSurface,
    ResizeSignal,
};
use topo_common::{Theme, Viewport};

#[derive(Parser, Debug)]
#[command(name = "topo-background")]
#[command(about = "Procedural topographic contour background renderer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (YAML); built-in defaults when omitted
    #[arg(long, global = true, env = "TOPO_CONFIG")]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draw a single background
    Render(SurfaceArgs),

    /// Regenerate on resize/theme lines read from stdin
    Watch(SurfaceArgs),
}

#[derive(Args, Debug)]
struct SurfaceArgs {
    /// Viewport width in pixels
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value = "720")]
    height: u32,

    /// Terrain seed (random when omitted)
    #[arg(long, env = "TOPO_SEED")]
    seed: Option<u32>,

    /// Initial theme: light or dark
    #[arg(long, env = "TOPO_THEME")]
    theme: Option<Theme>,

    /// Use the dark theme when no explicit theme is given
    #[arg(long, env = "TOPO_PREFERS_DARK")]
    prefers_dark: bool,

    /// SVG output path
    #[arg(short, long, default_value = "background.svg")]
    output: PathBuf,

    /// Also write a PNG rendering to this path
    #[arg(long)]
    png: Option<PathBuf>,
}

impl SurfaceArgs {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    fn build(
        &self,
        config: &BackgroundConfig,
    ) -> (BackgroundController<FileSurface>, FileSurface) {
        let theme = Theme::resolve(self.theme, self.prefers_dark);
        let style = config.style.clone();
        let color = style.palette.color_for(theme);

        let controller = match self.seed {
            Some(seed) => BackgroundController::with_seed(style, theme, seed),
            None => BackgroundController::new(style, theme),
        };

        let mut surface = FileSurface::new(color, &self.output);
        if let Some(png) = &self.png {
            surface = surface.with_png(png);
        }
        (controller, surface)
    }
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);
    if cli.json_logs {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }

    let config = BackgroundConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Render(args) => render(args, &config),
        Commands::Watch(args) => {
            let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
            let result = runtime.block_on(watch(args, &config));
            // A stdin read blocked on an open pipe cannot be cancelled
            runtime.shutdown_background();
            result
        }
    }
}

fn render(args: SurfaceArgs, config: &BackgroundConfig) -> Result<()> {
    let (mut controller, surface) = args.build(config);
    let report = controller
        .mount(surface, args.viewport())
        .context("Surface was not mounted")?;

    info!(
        output = %args.output.display(),
        seed = report.seed,
        levels = report.stats.levels,
        polylines = report.stats.polylines,
        paths = report.paths,
        "Background rendered"
    );
    Ok(())
}

async fn watch(args: SurfaceArgs, config: &BackgroundConfig) -> Result<()> {
    let (mut controller, surface) = args.build(config);
    controller.mount(surface, args.viewport());

    let signal = ResizeSignal::new();
    let (theme_tx, theme_rx) = mpsc::channel(16);
    let (shutdown_tx, _) = broadcast::channel::<()>(1);

    let service = BackgroundService::new(controller, config.debounce());
    let handle = tokio::spawn(service.run(signal.subscribe(), theme_rx, shutdown_tx.subscribe()));

    // Handle Ctrl+C
    let shutdown_tx_clone = shutdown_tx.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received shutdown signal");
        shutdown_tx_clone.send(()).ok();
    });

    info!(output = %args.output.display(), "Watching stdin for resize and theme events");

    let reader = BufReader::new(tokio::io::stdin());
    forward_host_events(reader, &signal, &theme_tx, shutdown_tx.subscribe())
        .await
        .context("Failed to read stdin")?;

    // End of input or Ctrl+C tears the background down
    drop(signal);
    let mut controller = handle.await.context("Background service panicked")?;
    controller.unmount();

    info!(passes = controller.passes(), "Background service stopped");
    Ok(())
}
