use std::process;

use clap::Parser;
use colored::Colorize;
use kcounter::{cli::Args, run};

fn main() {
    let args = Args::parse();

    #[cfg(feature = "tracing")]
    init_tracing();

    if !args.quiet {
        eprintln!("{}: {}", "k-length".bold(), args.k.to_string().blue().bold());
        eprintln!(
            "{}: {}",
            "data".bold(),
            args.input().to_string().underline().bold().blue()
        );
        eprintln!(
            "{}: {}",
            "mode".bold(),
            match (args.canonical, args.relative) {
                (false, false) => "k-mer counts",
                (true, false) => "canonical k-mer counts",
                (false, true) => "k-mer frequencies",
                (true, true) => "canonical k-mer frequencies",
            }
            .blue()
            .bold()
        );
        eprintln!();
    }

    if let Err(e) = run::run_with_options(
        &args.input(),
        args.k,
        args.options(),
        args.input_format,
        args.format,
    ) {
        eprintln!(
            "{}\n {}",
            "Application error:".blue().bold(),
            e.to_string().blue()
        );
        process::exit(1);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
