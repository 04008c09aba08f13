//! Run the Q1.31 FIR filter on the reference sine wave and check its output.
//!
//! Exits with status 0 if every output sample matches, 1 otherwise.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fir_fma16::q31::reference::{EXPECTED, LOWPASS, SIN_TABLE};
use fir_fma16::{fir, verify};

#[derive(Parser, Debug)]
#[command(version, about = "Filter a sine wave with a Q1.31 low-pass FIR and check the result")]
struct Args {
  /// Log every output sample.
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> ExitCode {
  let args = Args::parse();
  let default = if args.verbose {"fir=debug,fir_fma16=debug"} else {"fir=info,fir_fma16=info"};
  tracing_subscriber::registry()
    .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
    .with(tracing_subscriber::fmt::layer())
    .init();

  let start = Instant::now();
  let y = fir(&SIN_TABLE, &LOWPASS);
  let elapsed = start.elapsed();
  tracing::info!(samples = SIN_TABLE.len(), taps = LOWPASS.len(), ?elapsed, "filtered");
  for (i, sample) in y.iter().enumerate() {
    tracing::debug!("y[{i:2}] = {sample:#010x} ({:+.9})", sample.to_f64());
  }

  match verify(&y, &EXPECTED) {
    Ok(()) => {
      tracing::info!("all {} samples match", EXPECTED.len());
      ExitCode::SUCCESS
    },
    Err(mismatch) => {
      tracing::error!("{mismatch}");
      ExitCode::FAILURE
    },
  }
}
