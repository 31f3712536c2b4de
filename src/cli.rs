use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "modmap", version, about = "C module map generation CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Generate {
        name: String,
        path: PathBuf,
    },
    GenerateAll {
        sources: PathBuf,
    },
    Inspect {
        name: String,
        path: PathBuf,
    },
}
