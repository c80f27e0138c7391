use clap::Parser;

/// Draws Sierpinski carpets, Sierpinski sieves and Cantor dust as ASCII art.
/// Fractals are printed in reverse order of their records in the input file.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct FractalDrawerArgs {
    /// File with one `<type>,<height>` record per line, e.g. `1,4`.
    /// Type: 1 = carpet, 2 = sieve, 3 = dust. Height: 1 to 6.
    pub input_path: String,

    /// Build the grids on a thread pool. The output is identical.
    #[clap(long, short)]
    pub parallel: bool,

    /// Print timing and a JSON summary of the batch to stderr.
    #[clap(long, short)]
    pub diagnostics: bool,
}
