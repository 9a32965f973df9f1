use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::RepositoryConfig;
use crate::repository::build_repository;

#[derive(Parser)]
#[command(name = "extension-repo-builder")]
#[command(version = "0.1.0")]
#[command(about = "Build an extension repository feed from annotated source files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse extension headers, stage the files, and write the index
    Parse {
        /// Directory scanned recursively for extension source files
        #[arg(long = "from", default_value = "./extensions")]
        from: PathBuf,
        /// Directory the repository and index file are written to
        #[arg(long = "to", default_value = "./repository/v2")]
        to: PathBuf,
    },
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Parse { from, to }) => {
            build_repository(&from, &to, &RepositoryConfig::default())?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("No subcommand given, use --help for usage information");
            Ok(ExitCode::FAILURE)
        }
    }
}
