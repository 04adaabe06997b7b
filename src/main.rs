use anyhow::Context;
use clap::Parser;
use pixel_scale::cli::Args;
use pixel_scale::constants::NOT_FOUND_MESSAGE;
use pixel_scale::logger::{set_quiet_mode, set_verbose_mode};
use pixel_scale::{error, verbose, Options, ResizeError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    set_quiet_mode(args.quiet);
    set_verbose_mode(args.debug);

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> anyhow::Result<()> {
    let options = Options::new(
        args.target,
        args.recursive,
        args.debug,
        args.scale,
        args.export,
        args.optimize,
    )
    .context("Invalid configuration")?;

    verbose!("{}", options);

    pixel_scale::run(&options)
        .with_context(|| format!("Failed to process {}", options.target.display()))?;

    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<ResizeError>() {
        Some(ResizeError::FileNotFound(_)) => eprintln!("{}", NOT_FOUND_MESSAGE),
        _ => error!("{:#}", err),
    }
}
