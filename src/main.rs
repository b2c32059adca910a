// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::io;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use snafu::ErrorCompat;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dockerfile_rdf::{build_with, read_file, write_graph, BuildOptions, Format, Result};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
  Ntriples,
  Turtle
}

impl From<OutputFormat> for Format {
  fn from(format: OutputFormat) -> Self {
    match format {
      OutputFormat::Ntriples => Format::NTriples,
      OutputFormat::Turtle => Format::Turtle
    }
  }
}

/// Prints a Dockerfile's build history as a PROV provenance graph.
#[derive(Debug, Parser)]
#[command(name = "dockerfile-rdf", version)]
struct Cli {
  /// Path to the Dockerfile
  #[arg(value_name = "DOCKERFILE")]
  dockerfile: PathBuf,

  /// Output syntax
  #[arg(long, value_enum, default_value_t = OutputFormat::Ntriples)]
  format: OutputFormat,

  /// Leave the final image unattributed instead of failing when the
  /// Dockerfile has no MAINTAINER
  #[arg(long)]
  allow_missing_maintainer: bool
}

fn wrap(cli: Cli) -> Result<()> {
  let records = read_file(&cli.dockerfile)?;
  info!(path = %cli.dockerfile.display(), instructions = records.len(), "read Dockerfile");

  let options = BuildOptions {
    require_maintainer: !cli.allow_missing_maintainer
  };
  let graph = build_with(&records, &options)?;

  let stdout = io::stdout();
  write_graph(&graph, cli.format.into(), stdout.lock())
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    )
    .with_writer(io::stderr)
    .with_target(false)
    .init();

  // a missing DOCKERFILE argument prints usage and exits with status 2
  let cli = Cli::parse();

  match wrap(cli) {
    Ok(()) => std::process::exit(0),
    Err(e) => {
      eprintln!("error: {}", e);
      if let Some(backtrace) = ErrorCompat::backtrace(&e) {
        eprintln!("{}", backtrace);
      }

      std::process::exit(1);
    }
  }
}
