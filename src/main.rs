use basecalc::lang::ast::Radix;
use basecalc::mach::Runtime;
use clap::Parser;
use std::convert::TryFrom;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod term;

#[derive(Parser, Debug)]
#[command(name = "basecalc")]
#[command(version, about = "Line-oriented calculator with selectable output base", long_about = None)]
struct Cli {
    /// Script to run. Starts the interactive editor when omitted.
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Base in effect before the first `config` (dec, hex or bin)
    #[arg(short, long, value_name = "BASE")]
    base: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "basecalc=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut runtime = Runtime::new();
    if let Some(base) = &cli.base {
        match Radix::try_from(base.as_str()) {
            Ok(radix) => runtime.set_default_radix(Some(radix)),
            Err(error) => {
                term::report(&error);
                std::process::exit(2);
            }
        }
    }

    let code = match cli.input {
        Some(path) => term::run_file(&mut runtime, &path),
        None => term::main(runtime),
    };
    std::process::exit(code);
}
