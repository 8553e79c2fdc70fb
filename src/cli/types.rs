//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Storefront category index - resolve and inspect marketplace categories", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of .catalog/
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the category id for a slug
    Resolve {
        /// Category slug (case-insensitive)
        slug: String,
    },

    /// Print the full category record for a slug
    Show {
        /// Category slug (case-insensitive)
        slug: String,
    },

    /// List cached categories
    List {
        /// Only show categories without a parent
        #[arg(long)]
        top_level: bool,
    },

    /// List subcategories of a category
    Children {
        /// Parent category slug (case-insensitive)
        slug: String,
    },

    /// Show preload status of the category index
    Status,
}
