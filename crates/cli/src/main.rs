mod render;
mod sample;

use anyhow::{Context, Result};
use catalog::{parser, Catalog, Category, LatLon};
use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::pagination::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE_WINDOW};
use pipeline::{PageNav, SettingsAction, ShoppingView, SortKey, ViewConfig, DEFAULT_REFERENCE_POINT};
use render::DisplayMode;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// ShopCompare - furnishing product comparison
#[derive(Parser)]
#[command(name = "shop-compare")]
#[command(about = "Filter, sort and page through furnishing offers", long_about = None)]
struct Cli {
    /// Catalog JSON file; a random preview catalog is used when omitted
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Latitude of the reference point
    #[arg(long, default_value_t = DEFAULT_REFERENCE_POINT.lat, allow_negative_numbers = true)]
    ref_lat: f64,

    /// Longitude of the reference point
    #[arg(long, default_value_t = DEFAULT_REFERENCE_POINT.lon, allow_negative_numbers = true)]
    ref_lon: f64,

    /// Products per page
    #[arg(long, default_value_t = DEFAULT_ITEMS_PER_PAGE)]
    per_page: usize,

    /// Numbered page buttons shown around the current page
    #[arg(long, default_value_t = DEFAULT_PAGE_WINDOW)]
    window: usize,

    /// Size of the preview catalog when no --catalog is given
    #[arg(long, default_value = "60")]
    preview_size: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of filtered and sorted products
    Browse {
        /// Lowest price to include
        #[arg(long)]
        min_price: Option<f64>,

        /// Highest price to include
        #[arg(long)]
        max_price: Option<f64>,

        /// Room category to include (repeatable); all categories when omitted
        #[arg(long = "category")]
        categories: Vec<String>,

        /// Only stores within this many km of the reference point (0 = any)
        #[arg(long, default_value = "0")]
        within_km: f64,

        /// Sort key: price, rating or distance
        #[arg(long, default_value = "price")]
        sort: String,

        /// Page to show (1-indexed, clamped to the available pages)
        #[arg(long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// How to display the page
        #[arg(long, value_enum, default_value = "table")]
        display: DisplayMode,

        /// Print the page as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Show product counts per category
    Summary,

    /// Write a random preview catalog to a file
    Sample {
        /// Number of products to generate
        #[arg(long, default_value = "100")]
        count: usize,

        /// Output file
        #[arg(long)]
        out: PathBuf,

        /// Seed for reproducible catalogs
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ViewConfig {
        items_per_page: cli.per_page,
        page_window: cli.window,
        reference_point: LatLon::new(cli.ref_lat, cli.ref_lon),
    };
    config.validate().context("Invalid view configuration")?;

    match cli.command {
        Commands::Sample { count, out, seed } => {
            handle_sample(count, out, seed, config.reference_point)?
        }
        Commands::Summary => {
            let catalog = load_catalog(cli.catalog, cli.preview_size, config.reference_point)?;
            handle_summary(&catalog);
        }
        Commands::Browse {
            min_price,
            max_price,
            categories,
            within_km,
            sort,
            page,
            display,
            json,
        } => {
            let catalog = load_catalog(cli.catalog, cli.preview_size, config.reference_point)?;
            let mut view = ShoppingView::new(catalog, config)?;

            let mut actions = Vec::new();
            if let Some(min) = min_price {
                actions.push(SettingsAction::SetMinPrice(min));
            }
            if let Some(max) = max_price {
                actions.push(SettingsAction::SetMaxPrice(max));
            }
            for category in parse_categories(&categories)? {
                actions.push(SettingsAction::ToggleCategory(category));
            }
            actions.push(SettingsAction::SetProximity(within_km));
            actions.push(SettingsAction::SetSort(SortKey::from_name(&sort)));

            for action in actions {
                view.dispatch(action);
            }
            view.navigate(PageNav::To(page));

            if json {
                render::print_json(&view)?;
            } else {
                render::print_page(&view, display);
            }
        }
    }

    Ok(())
}

/// Load the catalog file, or generate a preview catalog around `center`
fn load_catalog(path: Option<PathBuf>, preview_size: usize, center: LatLon) -> Result<Catalog> {
    let start = Instant::now();
    let catalog = match path {
        Some(path) => Catalog::load_from_file(&path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => {
            info!("No catalog given, generating {} preview products", preview_size);
            Catalog::from_products(sample::generate(preview_size, center, None)?)
                .context("Generated preview catalog is invalid")?
        }
    };
    info!("Catalog ready in {:?} ({} products)", start.elapsed(), catalog.len());
    Ok(catalog)
}

/// Parse category flags, ignoring repeats so each category is toggled once
fn parse_categories(labels: &[String]) -> Result<BTreeSet<Category>> {
    labels
        .iter()
        .map(|label| parser::parse_category(label).map_err(anyhow::Error::from))
        .collect()
}

/// Handle the 'summary' command
fn handle_summary(catalog: &Catalog) {
    println!("{}", "Catalog summary:".bold().blue());
    for (category, count) in catalog.counts_by_category() {
        println!("{}{:<12} {}", "• ".green(), category.label(), count);
    }
    match catalog.price_span() {
        Some((lo, hi)) => println!("{}Prices: ${:.2} - ${:.2}", "• ".cyan(), lo, hi),
        None => println!("{}", "Catalog is empty.".yellow()),
    }
}

/// Handle the 'sample' command
fn handle_sample(count: usize, out: PathBuf, seed: Option<u64>, center: LatLon) -> Result<()> {
    let products = sample::generate(count, center, seed)?;
    let json = parser::products_to_json(&products)?;
    fs::write(&out, json).with_context(|| format!("Failed to write {}", out.display()))?;
    println!(
        "{} Wrote {} products to {}",
        "✓".green(),
        products.len(),
        out.display()
    );
    Ok(())
}
