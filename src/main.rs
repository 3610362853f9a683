// ABOUTME: Entry point for the ros2-fdu CLI application.
// ABOUTME: Parses arguments and dispatches to the command handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use ros2_fdu::config::{self, Config, TransitionPolicy};
use ros2_fdu::descriptor::FduDescriptor;
use ros2_fdu::error::Result;
use ros2_fdu::fdu::{Ros2Fdu, Transition};
use ros2_fdu::output::{Output, OutputMode};
use ros2_fdu::types::InstanceId;
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let output = Output::new(OutputMode::from_flags(cli.quiet, cli.json));

    if let Err(e) = run(cli, &output) {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: &Output) -> Result<()> {
    let cwd = env::current_dir()?;

    match cli.command {
        Commands::Init { force } => {
            let path = config::init_config(&cwd, force)?;
            output.success(&format!("Created {}", path.display()));
            Ok(())
        }
        Commands::Inspect {
            descriptor,
            instance,
            name,
        } => {
            let config = load_config(cli.config.as_deref(), &cwd)?;
            let descriptor = FduDescriptor::load(&descriptor)?;
            let uuid = InstanceId::new(instance);
            let fdu = match name {
                Some(name) => {
                    let outfile = config.outfile_for(&descriptor.id, &uuid);
                    Ros2Fdu::new(&descriptor, uuid, name, outfile)?
                }
                None => Ros2Fdu::from_descriptor(&descriptor, uuid, &config)?,
            };
            output.record(&fdu);
            Ok(())
        }
        Commands::Simulate {
            descriptor,
            transitions,
            instance,
            strict,
        } => {
            let config = load_config(cli.config.as_deref(), &cwd)?;
            let policy = if strict {
                TransitionPolicy::Strict
            } else {
                config.transitions
            };

            // Parse everything up front so a typo doesn't leave a half-run.
            let transitions = transitions
                .iter()
                .map(|t| t.parse::<Transition>())
                .collect::<std::result::Result<Vec<_>, _>>()?;

            let descriptor = FduDescriptor::load(&descriptor)?;
            let mut fdu = Ros2Fdu::from_descriptor(&descriptor, InstanceId::new(instance), &config)?;

            output.progress(&format!("Simulating {} ({})", fdu.name(), fdu.uuid()));
            for transition in transitions {
                fdu.apply(transition, policy)?;
                output.transition(transition, &fdu);
            }
            output.success(&format!("Final status: {}", fdu.status()));
            Ok(())
        }
    }
}

fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    match explicit {
        Some(path) => Config::load(path),
        None => Config::discover_or_default(cwd),
    }
}
