use std::process::ExitCode;

use ascii_fractal_drawer::cli::{args::FractalDrawerArgs, render::run};
use clap::Parser;

fn main() -> ExitCode {
    let args: FractalDrawerArgs = FractalDrawerArgs::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR:  {err}");
            ExitCode::FAILURE
        }
    }
}
