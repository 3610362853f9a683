// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines the init, inspect, and simulate subcommands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ros2-fdu")]
#[command(about = "Inspect and exercise ROS2 fog deployment unit records")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print only final results
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print JSON lines instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to ros2-fdu.yml (discovered in the current directory otherwise)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a template ros2-fdu.yml into the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Build a record from a descriptor and print it
    Inspect {
        /// Deployment descriptor (YAML, or JSON with a .json extension)
        descriptor: PathBuf,

        /// Instance id to assign
        #[arg(long, default_value = "local")]
        instance: String,

        /// Display name (defaults to the descriptor name)
        #[arg(long)]
        name: Option<String>,
    },

    /// Drive a record through lifecycle transitions
    Simulate {
        /// Deployment descriptor (YAML, or JSON with a .json extension)
        descriptor: PathBuf,

        /// Transitions: define, configure, clean, start:<pid>, stop, pause, resume
        #[arg(required = true)]
        transitions: Vec<String>,

        /// Instance id to assign
        #[arg(long, default_value = "local")]
        instance: String,

        /// Reject transitions outside the lifecycle table
        #[arg(long)]
        strict: bool,
    },
}
