//! CLI module for the WHT Teams API
//!
//! Provides subcommands for running the service:
//! - `serve`: run the HTTP server
//! - `openapi`: print the generated API document

pub mod openapi;
pub mod serve;

use clap::{Parser, Subcommand};

/// WHT Teams API - persons, teams and team membership over HTTP
#[derive(Parser)]
#[command(name = "wht-teams")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,

    /// Print the OpenAPI document to stdout
    Openapi,
}
