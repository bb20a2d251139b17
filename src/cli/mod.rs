//! CLI module for the user onboarding API

pub mod serve;

use clap::{Parser, Subcommand};

/// User Onboarding API - CRUD service for user records
#[derive(Parser)]
#[command(name = "user-onboarding-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,
}
