//! Command line bezier curve plotter.
//!
//! Reads a control point table (plain text, or JSON for `.json` inputs),
//! samples the curve it defines, and writes the sampled points to the
//! output file.
//!
//! ```text
//! bezier-plotter <input-file> <output-file>
//! ```

use anyhow::{bail, Context};
use log::info;

use bezier_plotter::modules::eval::{sample_curve, Strategy};
use bezier_plotter::modules::export::ToPointTable;
use bezier_plotter::modules::parse::PointTable;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        bail!("usage: bezier-plotter <input-file> <output-file>");
    }
    let input_path = &args[1];
    let output_path = &args[2];

    let input = std::fs::read_to_string(input_path)
        .with_context(|| format!("cannot open file \"{input_path}\""))?;
    let table = if input_path.ends_with(".json") {
        PointTable::from_json(&input)
    } else {
        PointTable::parse(&input)
    }
    .with_context(|| format!("failed to process input file \"{input_path}\""))?;

    info!("number of control points: {}", table.polygon.len());
    info!("number of sampled points: {}", table.sample_count);

    info!("computing bezier curve...");
    let evaluator = Strategy::default().evaluator();
    let samples = sample_curve(&table.polygon, table.sample_count, evaluator.as_ref())?;

    std::fs::write(output_path, samples.to_point_table())
        .with_context(|| format!("cannot write file \"{output_path}\""))?;
    info!("result successfully saved to {output_path}");

    Ok(())
}
