//! Quakemap CLI - earthquakes and plate boundaries on a web map

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use quakemap_colormap::{classify, legend, EncodeParams, Palette};
use quakemap_feeds::blocking::BlockingLoader;
use quakemap_feeds::{Datasets, EventFeed, FeedOptions, PB2002_BOUNDARIES_URL};
use quakemap_layers::{compose, valid_events, ComposeOptions};
use quakemap_map::{write_html, MapOptions};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "quakemap")]
#[command(author, version, about = "Earthquakes and plate boundaries on a web map", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct FeedArgs {
    /// USGS summary window: hour, day, week, month
    #[arg(short, long, default_value = "week")]
    scope: String,
    /// Custom earthquake feed URL (overrides --scope)
    #[arg(long)]
    events_url: Option<String>,
    /// Plate-boundary GeoJSON URL
    #[arg(long, default_value = PB2002_BOUNDARIES_URL)]
    boundaries_url: String,
    /// Per-request timeout in seconds (unbounded if omitted)
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch both feeds and write the HTML map
    Render {
        #[command(flatten)]
        feeds: FeedArgs,
        /// Output HTML file
        #[arg(short, long, default_value = "quakemap.html")]
        output: PathBuf,
        /// Mapbox access token for the base tiles
        #[arg(long, env = "MAPBOX_ACCESS_TOKEN", hide_env_values = true)]
        access_token: Option<String>,
        /// Color palette: reference, distinct
        #[arg(short, long, default_value = "reference")]
        palette: String,
        /// Smallest marker radius in metres
        #[arg(long, default_value = "0")]
        min_radius: f64,
    },
    /// Print the magnitude band table
    Legend {
        /// Color palette: reference, distinct
        #[arg(short, long, default_value = "reference")]
        palette: String,
    },
    /// Fetch both feeds and print event counts per magnitude band
    Summary {
        #[command(flatten)]
        feeds: FeedArgs,
        /// Color palette: reference, distinct
        #[arg(short, long, default_value = "reference")]
        palette: String,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn done(name: &str, path: &PathBuf, elapsed: Duration) {
    println!("{} saved to: {}", name, path.display());
    println!("  Processing time: {:.2?}", elapsed);
}

fn parse_palette(s: &str) -> Result<Palette> {
    Palette::from_name(s)
        .ok_or_else(|| anyhow::anyhow!("Unknown palette: {}. Use reference or distinct.", s))
}

fn parse_scope(s: &str) -> Result<EventFeed> {
    match EventFeed::from_str_or_url(s) {
        EventFeed::Custom(_) => anyhow::bail!(
            "Unknown scope: {}. Use hour, day, week, or month (or --events-url).",
            s
        ),
        feed => Ok(feed),
    }
}

fn feed_options(args: &FeedArgs) -> Result<FeedOptions> {
    let events = match &args.events_url {
        Some(url) => EventFeed::Custom(url.clone()),
        None => parse_scope(&args.scope)?,
    };
    Ok(FeedOptions {
        events,
        boundaries_url: args.boundaries_url.clone(),
        request_timeout: args.timeout_secs.map(Duration::from_secs),
        ..FeedOptions::default()
    })
}

fn load(options: &FeedOptions) -> Result<Datasets> {
    let pb = spinner("Fetching earthquakes and plate boundaries...");
    let loader = BlockingLoader::new(options).context("Failed to create feed loader")?;
    let result = loader.load();
    pb.finish_and_clear();
    let data = result.context("Failed to load map data")?;
    info!(
        "Loaded {} earthquakes ({}) and {} boundary segments",
        data.events.len(),
        options.events.describe(),
        data.boundaries.len()
    );
    Ok(data)
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        // ── Render ───────────────────────────────────────────────────
        Commands::Render {
            feeds,
            output,
            access_token,
            palette,
            min_radius,
        } => {
            let palette = parse_palette(&palette)?;
            let access_token = access_token.filter(|t| !t.trim().is_empty());
            if access_token.is_none() {
                anyhow::bail!(
                    "No tile access token. Set MAPBOX_ACCESS_TOKEN or pass --access-token."
                );
            }
            let feed_opts = feed_options(&feeds)?;

            let start = Instant::now();
            let data = load(&feed_opts)?;

            let compose_opts =
                ComposeOptions::new(EncodeParams::new(palette).with_min_radius(min_radius));
            let out = compose(&data.events, &data.boundaries, &compose_opts);
            if out.report.skipped() > 0 {
                warn!(
                    "Skipped {} earthquake and {} boundary features",
                    out.report.events_skipped, out.report.boundaries_skipped
                );
            }

            let map_opts = MapOptions {
                title: format!(
                    "Earthquakes ({}) and Plate Boundaries",
                    feed_opts.events.describe()
                ),
                access_token,
                palette,
                ..MapOptions::default()
            };
            let pb = spinner("Writing map...");
            let written = write_html(&out.points, &out.lines, &map_opts, &output);
            pb.finish_and_clear();
            written.context("Failed to write map")?;

            println!(
                "{} markers, {} boundary lines",
                out.report.events_rendered, out.report.boundaries_rendered
            );
            done("Map", &output, start.elapsed());
        }

        // ── Legend ───────────────────────────────────────────────────
        Commands::Legend { palette } => {
            let palette = parse_palette(&palette)?;
            println!("Palette: {}", palette);
            println!("{:>9}  {:<8}  {:<6}  Class", "Threshold", "Color", "Label");
            for entry in legend(palette) {
                println!(
                    "{:>9}  {:<8}  {:<6}  {}",
                    entry.threshold,
                    entry.color.to_hex(),
                    entry.label,
                    entry.class
                );
            }
        }

        // ── Summary ──────────────────────────────────────────────────
        Commands::Summary { feeds, palette } => {
            let palette = parse_palette(&palette)?;
            let data = load(&feed_options(&feeds)?)?;

            let events = valid_events(&data.events);
            let bands = palette.bands();
            let mut counts = vec![0usize; bands.len()];
            for event in &events {
                let band = classify(palette, event.magnitude);
                if let Some(i) = bands.iter().position(|b| b.severity == band.severity) {
                    counts[i] += 1;
                }
            }

            println!(
                "Earthquakes: {} ({} without a usable magnitude or location)",
                events.len(),
                data.events.len() - events.len()
            );
            println!("Boundary segments: {}", data.boundaries.len());
            println!("\nBy magnitude:");
            for (band, count) in bands.iter().zip(&counts) {
                println!("  {:<6} {:<9} {:>6}", band.label, band.severity.name(), count);
            }
        }
    }

    Ok(())
}
