//! CLI module - Command-line interface for the directory site
//!
//! This module provides a structured CLI using clap for argument parsing.

pub mod commands;

use clap::{Parser, Subcommand};

/// Business Directory - server-rendered listings, scam alerts and reviews
#[derive(Parser)]
#[command(name = "bizdir")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start the web server (default)
    #[command(alias = "web")]
    Serve,

    /// Insert demo categories, businesses and complaints into an empty database
    Seed,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Connect to the database, apply migrations and print row counts
    #[command(alias = "-c", alias = "--check")]
    Check,
}

pub use commands::*;
