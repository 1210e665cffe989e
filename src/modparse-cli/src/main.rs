mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use modparse::Mode;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::*;
use commands::extract::BeaconIds;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", describe(&err));
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Standard(args) => {
            commands::extract::handle(Mode::Standard, args, BeaconIds::default())?;
        }

        Commands::Beacon(args) => {
            let ids = BeaconIds {
                mod_id: args.mod_id,
                content_pack_id: args.content_pack_id,
            };
            commands::extract::handle(Mode::Beacon, args.common, ids)?;
        }

        Commands::Csv(args) => {
            commands::extract::handle(Mode::Csv, args, BeaconIds::default())?;
        }

        Commands::Configure {
            assets,
            output_folder,
            mda,
            show,
        } => {
            let updates = commands::configure::Updates {
                assets,
                output_folder,
                mda,
            };
            commands::configure::handle(updates, show)?;
        }
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise warnings only, raised by each `-v`
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// One-line report for a failed run, classified when the cause is a run error
fn describe(err: &anyhow::Error) -> String {
    match err.downcast_ref::<modparse::Error>() {
        Some(run_err) => format!("error ({}): {:#}", run_err.kind(), err),
        None => format!("error: {:#}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_describe_classifies_run_errors() {
        let err = anyhow::Error::new(modparse::Error::MissingRequiredOption(vec!["mod-name"]));
        assert_eq!(
            describe(&err),
            "error (configuration): Missing required option(s): --mod-name"
        );
    }

    #[test]
    fn test_describe_sees_through_context() {
        let result: std::result::Result<(), modparse::Error> =
            Err(modparse::Error::ModRootNotFound {
                folder: "/MyMod/".into(),
                mda: "ModDataAsset".into(),
            });
        let err = result.context("Extraction failed").unwrap_err();
        assert!(describe(&err).starts_with("error (discovery): Extraction failed: "));
    }

    #[test]
    fn test_describe_other_errors() {
        let err = anyhow::anyhow!("Could not determine config directory");
        assert_eq!(describe(&err), "error: Could not determine config directory");
    }
}
