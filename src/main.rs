// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tracing_subscriber::EnvFilter;

use toolscout::{
    edit_distance, similarity, Catalog, MatchConfig, MatchResult, Query, SearchSession, Surface,
    TieredMatcher,
};

mod cli;
use cli::display::{
    dim, double_footer, double_header, pad_right, row, section_bot, section_top,
    similarity_colored, themed, tier_badge, title, truncate, BOLD, GREEN, YELLOW,
};
use cli::{Cli, Commands};

/// Environment variable holding the tracing filter directive
const LOG_ENV: &str = "TOOLSCOUT_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Search {
            catalog,
            query,
            surface,
            config,
            json,
            explain,
        } => run_search(&catalog, &query, surface.into(), config.as_deref(), json, explain),
        Commands::Inspect { catalog } => run_inspect(&catalog),
        Commands::Distance { a, b } => {
            run_distance(&a, &b);
            Ok(())
        }
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("toolscout=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_search(
    catalog_path: &str,
    raw_query: &str,
    surface: Surface,
    config_path: Option<&str>,
    json: bool,
    explain: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(catalog_path)?;
    let config = match config_path {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };

    let mut session = SearchSession::new(&catalog, surface, config);
    session.set_query(raw_query);

    if json {
        println!("{}", serde_json::to_string_pretty(session.result())?);
        return Ok(());
    }

    // Tiers only mean something for the overlay matcher
    let explainer = (explain && surface == Surface::Overlay).then(|| TieredMatcher::new(config));
    print_result(
        session.result(),
        session.state().query(),
        surface,
        explainer.as_ref(),
    );
    Ok(())
}

fn print_result(
    result: &MatchResult<'_>,
    query: &Query,
    surface: Surface,
    explainer: Option<&TieredMatcher>,
) {
    let surface_name = match surface {
        Surface::Overlay => "overlay",
        Surface::Sidebar => "sidebar",
    };

    println!();
    double_header();
    title(&format!("toolscout · {} · \"{}\"", surface_name, query.as_str()));
    double_footer();
    println!();

    if result.is_empty() {
        println!(
            "  {}",
            themed(YELLOW, &[BOLD], &format!("No results for \"{}\"", query.as_str()))
        );
        println!();
        return;
    }

    for group in result.groups() {
        section_top(&format!("{} ({})", group.label, group.entries.len()));
        for entry in &group.entries {
            let mut line = format!(
                " {} {}",
                pad_right(&themed(GREEN, &[], &truncate(entry.id(), 24)), 24),
                truncate(entry.name(), 34)
            );
            if let Some(matcher) = explainer {
                let tier = matcher.match_tier(entry.search_text(), query);
                line = format!("{} {}", pad_right(&line, 60), tier_badge(tier));
            }
            row(&line);
            if !entry.description().is_empty() {
                row(&format!("   {}", dim(&truncate(entry.description(), 66))));
            }
        }
        section_bot();
    }

    println!(
        "  {} in {} categories",
        themed(GREEN, &[BOLD], &format!("{} matches", result.len())),
        result.groups().len()
    );
    println!();
}

fn run_inspect(catalog_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(catalog_path)?;

    println!();
    double_header();
    title(&format!("CATALOG: {}", truncate(catalog_path, 50)));
    double_footer();
    println!();

    for category in catalog.categories() {
        section_top(&format!("{} ({})", category.label(), category.entries().len()));
        for entry in category.entries() {
            row(&format!(
                " {} {}",
                pad_right(&themed(GREEN, &[], &truncate(entry.id(), 28)), 28),
                truncate(entry.name(), 40)
            ));
        }
        section_bot();
    }

    println!(
        "  {} entries in {} categories",
        catalog.len(),
        catalog.categories().len()
    );
    println!();
    Ok(())
}

fn run_distance(a: &str, b: &str) {
    let a = toolscout::normalize(a);
    let b = toolscout::normalize(b);
    let threshold = MatchConfig::default().similarity_threshold;

    println!("  edit distance: {}", edit_distance(&a, &b));
    println!(
        "  similarity:    {} {}",
        similarity_colored(similarity(&a, &b), threshold),
        dim(&format!("(fuzzy tier accepts > {})", threshold))
    );
}
