use std::io::{self, BufWriter, Write};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;

use crate::cli::{args::FractalDrawerArgs, records::parse_records};
use crate::core::{
    error::Result,
    file_io::{extract_base_name, read_input_file},
    stopwatch::Stopwatch,
};
use crate::fractals::{
    common::FractalKind,
    shape::{write_lines, FractalShape},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Build all grids concurrently before writing any of them.
    pub parallel: bool,
}

/// What was drawn for one shape, reported in drawing order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ShapeSummary {
    pub kind: FractalKind,
    pub height: u32,
    pub side_length: usize,
    pub filled_count: usize,
}

fn render_shape(shape: &FractalShape) -> (ShapeSummary, Vec<String>) {
    let grid = shape.build_grid();
    let summary = ShapeSummary {
        kind: shape.kind(),
        height: shape.height(),
        side_length: shape.side_length(),
        filled_count: grid.filled_count(),
    };
    (summary, grid.render())
}

/**
 * Draws every shape to `writer`, starting with the last one in `shapes` and
 * ending with the first. Each grid is followed by a blank line.
 *
 * With `options.parallel` the grids are built on the rayon thread pool; the
 * output is written afterwards, so the bytes are the same either way.
 */
pub fn render_all<W: Write>(
    shapes: &[FractalShape],
    options: RenderOptions,
    writer: &mut W,
) -> io::Result<Vec<ShapeSummary>> {
    let mut summaries = Vec::with_capacity(shapes.len());
    if options.parallel {
        let rendered: Vec<(ShapeSummary, Vec<String>)> =
            shapes.par_iter().map(render_shape).collect();
        for (summary, lines) in rendered.into_iter().rev() {
            write_lines(&lines, writer)?;
            summaries.push(summary);
        }
    } else {
        for shape in shapes.iter().rev() {
            let (summary, lines) = render_shape(shape);
            write_lines(&lines, writer)?;
            summaries.push(summary);
        }
    }
    Ok(summaries)
}

/**
 * Full batch: read the input file, parse every record, then draw the fractals
 * to stdout. Nothing is written to stdout unless every record is valid.
 */
pub fn run(args: &FractalDrawerArgs) -> Result<()> {
    let mut stopwatch = Stopwatch::new(format!(
        "fractal-drawer: {}",
        extract_base_name(&args.input_path)
    ));

    let content = read_input_file(&args.input_path)?;
    stopwatch.record_split("read input".to_owned());

    let shapes = parse_records(&content)?;
    stopwatch.record_split(format!("parse {} records", shapes.len()));

    let options = RenderOptions {
        parallel: args.parallel,
    };
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let summaries = render_all(&shapes, options, &mut writer)?;
    writer.flush()?;
    stopwatch.record_split("render".to_owned());

    if args.diagnostics {
        let mut stderr = io::stderr().lock();
        stopwatch.display(&mut stderr)?;
        writeln!(stderr, "INFO:  Shapes drawn: {}", serde_json::to_string(&summaries)?)?;
    }
    Ok(())
}
