//! CLI command definitions

use clap::{Parser, ValueEnum};
use fairfinder_domain::{CATEGORIES, CITIES, Catalog, PROVINCES, SearchFilterBuilder};
use std::path::PathBuf;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One card per exhibition
    Cards,
    /// Bar chart by province and invitation-type breakdown
    Charts,
    /// JSON array of the results
    Json,
}

impl From<OutputFormat> for fairfinder_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Cards => Self::Cards,
            OutputFormat::Charts => Self::Charts,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Catalog printed by `--list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListTarget {
    Provinces,
    Cities,
    Categories,
}

impl ListTarget {
    pub fn catalog(&self) -> Catalog {
        match self {
            ListTarget::Provinces => PROVINCES,
            ListTarget::Cities => CITIES,
            ListTarget::Categories => CATEGORIES,
        }
    }
}

/// CLI arguments for fairfinder
#[derive(Parser, Debug)]
#[command(name = "fairfinder")]
#[command(author, version, about = "Find trade fairs in China that offer exhibitor invitations")]
#[command(long_about = r#"
Fairfinder asks a generative model for trade fairs in China matching your
filters and prints them as cards, charts, or JSON.

The listings are generated, not looked up. Check every record against the
organizer's official website before relying on it.

Configuration files are loaded from (in priority order):
1. FAIRFINDER_<SECTION>__<KEY>   Environment variables
2. --config <path>               Explicit config file
3. ./fairfinder.toml             Project-level config
4. ~/.config/fairfinder/config.toml   Global config

The API key is read from $API_KEY (or $GEMINI_API_KEY).

Example:
  fairfinder -p Guangdong -c Shenzhen --from 2025-03-01 --to 2025-06-01
  fairfinder -k Electronics -i free -o charts
  fairfinder --cached
"#)]
pub struct Cli {
    /// Province to search in ("Any" for all)
    #[arg(short, long, value_name = "PROVINCE")]
    pub province: Option<String>,

    /// City to search in ("Any" for all)
    #[arg(short, long, value_name = "CITY")]
    pub city: Option<String>,

    /// Industry category ("Any" for all)
    #[arg(short = 'k', long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Invitation type: free, paid or any
    #[arg(short, long, value_name = "TYPE")]
    pub invitation: Option<String>,

    /// First day of the window (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Last day of the window (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Output format (default from config, otherwise cards)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Show the cached results of the last search without a new request
    #[arg(long, conflicts_with = "clear_cache")]
    pub cached: bool,

    /// Remove the cached results and exit
    #[arg(long)]
    pub clear_cache: bool,

    /// Print a catalog of accepted filter values and exit
    #[arg(long, value_enum, value_name = "CATALOG")]
    pub list: Option<ListTarget>,

    /// Number of exhibitions to ask for
    #[arg(long, value_name = "N")]
    pub count: Option<usize>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Overlay the filter flags that were given on top of `builder`
    pub fn apply_filter_args(&self, mut builder: SearchFilterBuilder) -> SearchFilterBuilder {
        if let Some(province) = &self.province {
            builder = builder.province(province);
        }
        if let Some(city) = &self.city {
            builder = builder.city(city);
        }
        if let Some(category) = &self.category {
            builder = builder.category(category);
        }
        if let Some(invitation) = &self.invitation {
            builder = builder.invitation(invitation);
        }
        if let Some(from) = &self.from {
            builder = builder.start_date(from);
        }
        if let Some(to) = &self.to {
            builder = builder.end_date(to);
        }
        builder
    }
}
