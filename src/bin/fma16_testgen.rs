//! Write golden test vectors for a binary16 fused multiply-add unit.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fir_fma16::testgen::{Generator, Suite};
use fir_fma16::Tininess;

#[derive(Parser, Debug)]
#[command(version, about = "Generate .tv test vector files for a half-precision FMA unit")]
struct Args {
  /// Directory the .tv files are written to; created if missing.
  #[arg(long, default_value = "work")]
  out_dir: PathBuf,

  /// Which set of files to generate.
  #[arg(long, default_value = "torture", value_parser = clap::builder::PossibleValuesParser::new(Suite::NAMES))]
  suite: String,

  /// When a result counts as tiny for the underflow flag.
  #[arg(long, value_enum, default_value_t = TininessArg::Before)]
  tininess: TininessArg,

  /// Log every file and more.
  #[arg(short, long)]
  verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TininessArg {
  /// Before rounding, with unbounded exponent.
  Before,
  /// After rounding to 11 significant bits.
  After,
}

impl From<TininessArg> for Tininess {
  fn from(value: TininessArg) -> Self {
    match value {
      TininessArg::Before => Tininess::BeforeRounding,
      TininessArg::After => Tininess::AfterRounding,
    }
  }
}

fn main() -> ExitCode {
  let args = Args::parse();
  let default = if args.verbose {"fma16_testgen=debug,fir_fma16=debug"} else {"fma16_testgen=info,fir_fma16=info"};
  tracing_subscriber::registry()
    .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
    .with(tracing_subscriber::fmt::layer())
    .init();

  // The parser only lets known names through.
  let Some(suite) = Suite::by_name(&args.suite) else {
    tracing::error!("unknown suite {}", args.suite);
    return ExitCode::FAILURE
  };

  let generator = match Generator::new(args.out_dir.clone(), args.tininess.into()) {
    Ok(generator) => generator,
    Err(e) => {
      tracing::error!("{e}");
      return ExitCode::FAILURE
    },
  };

  match generator.run_suite(&suite) {
    Ok(summaries) => {
      let cases: usize = summaries.iter().map(|s| s.cases).sum();
      tracing::info!(suite = %args.suite, files = summaries.len(), cases, "done");
      ExitCode::SUCCESS
    },
    Err(e) => {
      tracing::error!(path = %e.path().display(), "{e}");
      ExitCode::FAILURE
    },
  }
}
