use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "item-price")]
#[command(about = "Calculate the total price of shipped TRUCK and PARCEL items")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Price a list of items
    Price {
        /// JSON file holding an array of items
        #[arg(short, long)]
        items: PathBuf,
        /// JSON file mapping item ids to weights; overrides inline weights
        #[arg(short, long)]
        weights: Option<PathBuf>,
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
        /// Show the per-item breakdown
        #[arg(short, long)]
        detailed: bool,
    },
    /// Show the pricing rules
    Rules,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_price_command() {
        let args = Args::try_parse_from([
            "item-price",
            "price",
            "--items",
            "items.json",
            "--weights",
            "weights.json",
            "--format",
            "json",
            "-v",
        ])
        .unwrap();

        assert!(args.verbose);
        match args.command {
            Commands::Price {
                items,
                weights,
                format,
                detailed,
            } => {
                assert_eq!(items, PathBuf::from("items.json"));
                assert_eq!(weights, Some(PathBuf::from("weights.json")));
                assert_eq!(format, OutputFormat::Json);
                assert!(!detailed);
            }
            Commands::Rules => panic!("expected price command"),
        }
    }

    #[test]
    fn test_price_requires_items_file() {
        assert!(Args::try_parse_from(["item-price", "price"]).is_err());
    }
}
