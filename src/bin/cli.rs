//! Ofertas CLI
//!
//! Presentation front end for the offer catalog: fetches the collection,
//! applies the requested view parameters, and prints the result.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ofertas::{
    error::Result,
    models::{Config, SortKey, ViewParams},
    services::HttpOfferSource,
    store::OfferStore,
    utils::fmt,
    view,
};

/// Ofertas - Scholarship Offer Catalog
#[derive(Parser, Debug)]
#[command(
    name = "ofertas",
    version,
    about = "Scholarship offer catalog with search, filter, and sort"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the catalog and print the derived view
    List {
        /// Free-text search over course names
        #[arg(long)]
        search: Option<String>,

        /// Restrict to an academic level (repeatable)
        #[arg(long)]
        level: Vec<String>,

        /// Restrict to a course modality (repeatable)
        #[arg(long)]
        kind: Vec<String>,

        /// Price ceiling; defaults to the configured value
        #[arg(long)]
        max_price: Option<f64>,

        /// Sort axis: course-name, price, or rating
        #[arg(long, default_value_t = SortKey::CourseName)]
        sort: SortKey,

        /// Per-offer output template (e.g. "{course};{offered_price}")
        #[arg(long)]
        template: Option<String>,

        /// Emit the derived view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Show the effective configuration
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::List {
            search,
            level,
            kind,
            max_price,
            sort,
            template,
            json,
        } => {
            let mut params = ViewParams {
                max_price: max_price.unwrap_or(config.view.max_price),
                sort_key: sort,
                ..ViewParams::default()
            };
            if let Some(term) = search {
                params.search_term = term;
            }
            for tag in &level {
                params.toggle_level(tag);
            }
            for tag in &kind {
                params.toggle_kind(tag);
            }

            log::info!("{}", config.messages.loading);

            let source = HttpOfferSource::new(&config.api)?;
            let mut store = OfferStore::new();
            if let Err(error) = store.load(&source).await {
                log::error!("Catalog load failed: {error}");
                eprintln!("{}", config.messages.load_failed);
                return Err(error);
            }

            let offers = view::derive_view(store.get(), &params);

            if json {
                println!("{}", serde_json::to_string_pretty(&offers)?);
                return Ok(());
            }

            if let Some(template) = template {
                for offer in &offers {
                    println!("{}", offer.format(&template));
                }
                return Ok(());
            }

            println!("{}\n", config.messages.results_header);

            if offers.is_empty() {
                println!("{}", config.messages.no_results);
                return Ok(());
            }

            for offer in &offers {
                println!(
                    "{}  {:.1} {}",
                    fmt::truncate_graphemes(&offer.course_name, 48),
                    offer.rating,
                    fmt::rating_stars(offer.rating)
                );
                println!(
                    "    {} por {} ({}% de desconto)",
                    fmt::format_brl(offer.full_price),
                    fmt::format_brl(offer.offered_price),
                    offer.discount_percent()
                );
                println!(
                    "    {} · {} · {}",
                    config.view.kind_name(&offer.kind),
                    config.view.level_name(&offer.level),
                    offer.ies_name
                );
                println!();
            }

            println!("{} oferta(s)", offers.len());
        }

        Command::Validate => {
            let config = Config::load(&cli.config)?;
            config.validate()?;
            log::info!("Configuration at {} is valid", cli.config.display());
        }

        Command::Info => {
            println!("Endpoint:      {}", config.api.endpoint);
            println!("Timeout:       {}s", config.api.timeout_secs);
            println!("Price ceiling: {}", fmt::format_brl(config.view.max_price));
            println!("Levels:");
            for dimension in &config.view.levels {
                println!("    {} ({})", dimension.display_name, dimension.id);
            }
            println!("Kinds:");
            for dimension in &config.view.kinds {
                println!("    {} ({})", dimension.display_name, dimension.id);
            }
        }
    }

    Ok(())
}
