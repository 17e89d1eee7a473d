//! Sneaker Shelf CLI - browse the catalog and manage favorites.
//!
//! # Usage
//!
//! ```bash
//! # Home view, narrowed to one brand and a price range
//! shelf list --brand Nike --min 500 --max 1000
//!
//! # Search by name (case- and accent-insensitive)
//! shelf search "air max"
//!
//! # Favorites
//! shelf toggle 3
//! shelf favorites --brand Adidas
//!
//! # Product details
//! shelf show 3
//!
//! # Grid columns for a viewport width
//! shelf columns 600
//! ```
//!
//! # Commands
//!
//! - `list` - All products, optionally filtered
//! - `search` - Products whose name contains a term
//! - `favorites` - Favorite products, optionally filtered
//! - `show` - Details and purchase links for one product
//! - `toggle` - Add or remove a favorite
//! - `brands` - Brands available to the brand filter
//! - `columns` - Grid columns for a viewport width

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Args, Parser, Subcommand};
use sneaker_shelf::{
    BrandFilter, FilterCriteria, FilterError, GridLayout, Shelf, ShelfConfig, parse_price_bound,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about = "Browse the sneaker catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products, optionally filtered by brand and price
    List {
        #[command(flatten)]
        filter: FilterArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Search products by name
    Search {
        /// Text to look for in product names
        term: String,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// List favorite products, optionally filtered by brand and price
    Favorites {
        #[command(flatten)]
        filter: FilterArgs,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Show details and purchase links for a product
    Show {
        /// Product ID
        id: String,
    },
    /// Add a product to favorites, or remove it if already there
    Toggle {
        /// Product ID
        id: String,
    },
    /// List brands available to the brand filter
    Brands {
        /// Only brands among favorite products
        #[arg(long)]
        favorites: bool,
    },
    /// Print how many grid columns fit a viewport width
    Columns {
        /// Viewport width in layout units
        #[arg(allow_negative_numbers = true)]
        width: f64,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Brand to show, or "all"
    #[arg(short, long, default_value = "all")]
    brand: BrandFilter,

    /// Minimum price (inclusive)
    #[arg(long)]
    min: Option<String>,

    /// Maximum price (inclusive)
    #[arg(long)]
    max: Option<String>,
}

impl FilterArgs {
    fn criteria(&self) -> Result<FilterCriteria, FilterError> {
        let min = parse_price_bound(self.min.as_deref().unwrap_or_default())?;
        let max = parse_price_bound(self.max.as_deref().unwrap_or_default())?;
        FilterCriteria::new()
            .with_brand(self.brand.clone())
            .with_price_range(min, max)
    }
}

#[derive(Args)]
struct ViewArgs {
    /// Viewport width used to lay out the grid (default: SHELF_VIEWPORT_WIDTH)
    #[arg(short, long)]
    width: Option<f64>,
}

#[tokio::main]
async fn main() {
    // Defaults to warnings only if RUST_LOG is not set; logs go to stderr
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sneaker_shelf=warn,shelf=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Layout needs neither the catalog nor storage
    if let Commands::Columns { width } = cli.command {
        commands::layout::columns(&GridLayout::default(), width)?;
        return Ok(());
    }

    let config = ShelfConfig::from_env()?;
    let mut shelf = Shelf::from_config(&config).await?;
    let width_or_default = |view: &ViewArgs| view.width.unwrap_or(config.viewport_width);

    match cli.command {
        Commands::List { filter, view } => {
            commands::browse::list(&shelf, &filter.criteria()?, width_or_default(&view))?;
        }
        Commands::Search { term, view } => {
            commands::browse::search(&shelf, &term, width_or_default(&view))?;
        }
        Commands::Favorites { filter, view } => {
            commands::browse::favorites(&shelf, &filter.criteria()?, width_or_default(&view))?;
        }
        Commands::Show { id } => commands::details::show(&shelf, &id.into())?,
        Commands::Toggle { id } => commands::favorites::toggle(&mut shelf, &id.into())?,
        Commands::Brands { favorites } => commands::browse::brands(&shelf, favorites)?,
        Commands::Columns { .. } => {}
    }

    shelf.flush().await;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_accepts_negative_width() {
        let cli = Cli::try_parse_from(["shelf", "columns", "-5"]).unwrap();
        let Commands::Columns { width } = cli.command else {
            panic!("expected the columns command");
        };
        assert!((width + 5.0).abs() < f64::EPSILON);
        assert_eq!(GridLayout::default().columns(width), 1);
    }

    #[test]
    fn test_filter_args_build_criteria() {
        let cli =
            Cli::try_parse_from(["shelf", "list", "--brand", "Nike", "--min", "100"]).unwrap();
        let Commands::List { filter, .. } = cli.command else {
            panic!("expected the list command");
        };
        let criteria = filter.criteria().unwrap();
        assert_eq!(criteria.brand, BrandFilter::Only("Nike".to_string()));
        assert!(criteria.min_price.is_some());
        assert!(criteria.max_price.is_none());
    }

    #[test]
    fn test_filter_args_reject_negative_bound() {
        let cli = Cli::try_parse_from(["shelf", "list", "--max=-1"]).unwrap();
        let Commands::List { filter, .. } = cli.command else {
            panic!("expected the list command");
        };
        assert!(matches!(
            filter.criteria(),
            Err(FilterError::NegativePrice(_))
        ));
    }
}
