//! Terminal rendering of a result page.
//!
//! Every display reads the same paginated output of the view; none of them
//! filter or sort on their own.

use catalog::Product;
use colored::Colorize;
use pipeline::{FilterSortSettings, Page, PageButton, PageControls, ShoppingView};
use serde::Serialize;

/// How the current page is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DisplayMode {
    Table,
    Cards,
    Map,
}

/// One displayed product with its distance from the reference point
#[derive(Debug, Serialize)]
pub struct Row<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    pub distance_km: f64,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    settings: &'a FilterSortSettings,
    current_page: usize,
    result_count: usize,
    page: Page<Row<'a>>,
    controls: PageControls,
}

fn rows(view: &ShoppingView) -> Page<Row<'_>> {
    view.page().map(|product| Row {
        product,
        distance_km: view.distance_km(product),
    })
}

pub fn print_json(view: &ShoppingView) -> anyhow::Result<()> {
    let output = JsonOutput {
        settings: view.settings(),
        current_page: view.current_page(),
        result_count: view.result_count(),
        page: rows(view),
        controls: view.controls(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_page(view: &ShoppingView, display: DisplayMode) {
    let page = rows(view);

    println!(
        "{}",
        format!(
            "Products sorted by {} (page {} of {})",
            view.settings().sort_by,
            view.current_page(),
            page.total_pages
        )
        .bold()
        .blue()
    );

    if page.is_empty() {
        println!("{}", "No products match the current filters.".yellow());
    } else {
        match display {
            DisplayMode::Table => print_table(&page),
            DisplayMode::Cards => print_cards(&page),
            DisplayMode::Map => print_markers(&page),
        }
    }

    let shown_from = if page.is_empty() { 0 } else { page.start_index + 1 };
    println!(
        "Showing {}-{} of {} products",
        shown_from,
        page.end_index,
        view.result_count()
    );
    println!("{}", format_controls(&view.controls()));
}

fn print_table(page: &Page<Row<'_>>) {
    println!(
        "{:>4}  {:<28} {:<12} {:>9} {:>6} {:>8}  {}",
        "#", "Name", "Category", "Price", "Rating", "Km", "Store"
    );
    for (offset, row) in page.items.iter().enumerate() {
        let p = row.product;
        println!(
            "{:>4}  {:<28} {:<12} {:>9.2} {:>6.1} {:>8.1}  {}",
            (page.start_index + offset + 1).to_string().green(),
            truncate(&p.name, 28),
            p.category.label(),
            p.price,
            p.rating,
            row.distance_km,
            p.store.name
        );
    }
}

fn print_cards(page: &Page<Row<'_>>) {
    for row in &page.items {
        let p = row.product;
        println!("┌ {}", p.name.bold());
        println!("│ {} · ${:.2} · {}", p.category, p.price, stars(p.rating));
        println!("│ {} {}", p.store.name.cyan(), p.store.address.dimmed());
        println!("└ {:.1} km away", row.distance_km);
    }
}

fn print_markers(page: &Page<Row<'_>>) {
    for (offset, row) in page.items.iter().enumerate() {
        let p = row.product;
        println!(
            "{} {} {} ({}, {:.1} km)",
            format!("[{}]", page.start_index + offset + 1).green(),
            p.coordinates,
            p.store.name,
            p.name,
            row.distance_km
        );
    }
}

fn stars(rating: f32) -> String {
    let full = rating.round().clamp(0.0, 5.0) as usize;
    format!("{}{} {:.1}", "★".repeat(full), "☆".repeat(5 - full), rating)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Render controls as `« ‹ 1 … 4 [5] 6 … 10 › »`, dimming disabled arrows
pub fn format_controls(controls: &PageControls) -> String {
    let arrow = |symbol: &str, enabled: bool| {
        if enabled {
            symbol.normal().to_string()
        } else {
            symbol.dimmed().to_string()
        }
    };

    let mut parts = vec![
        arrow("«", controls.first_enabled),
        arrow("‹", controls.prev_enabled),
    ];
    parts.extend(controls.buttons.iter().map(|button| match button {
        PageButton::Number { page, current: true } => format!("[{}]", page).bold().to_string(),
        PageButton::Number { page, .. } => page.to_string(),
        PageButton::Ellipsis => "…".to_string(),
    }));
    parts.push(arrow("›", controls.next_enabled));
    parts.push(arrow("»", controls.last_enabled));
    parts.join(" ")
}
