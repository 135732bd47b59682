//! Batch command implementation.

// Run rates are reported as floats
#![allow(clippy::cast_precision_loss)]

use super::output::{BatchStats, JsonBatchResult, format_batch_csv, format_batch_text};
use super::{BatchFormat, CliError, ModelArgs, resolve_seed};
use cursus::{Report, Simulation};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} runs ({per_sec})";

/// Execute the batch command.
///
/// Runs are independent and simulated one after another; run `i` uses seed
/// `base + i`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or output fails.
pub(crate) fn execute(
    model: &ModelArgs,
    runs: u64,
    seed: Option<u64>,
    format: BatchFormat,
    progress: bool,
) -> Result<(), CliError> {
    let base_seed = resolve_seed(seed);

    // Validate once up front so a bad configuration fails before the progress bar.
    let ladder = model.to_config(base_seed).ladder()?;

    let pb = if progress {
        let style = ProgressStyle::default_bar()
            .template(PROGRESS_TEMPLATE)
            .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
            .progress_chars("=>-");
        let pb = ProgressBar::new(runs);
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let mut stats = BatchStats::new(&ladder);

    for i in 0..runs {
        let run_seed = base_seed.wrapping_add(i);
        let mut sim = Simulation::new(model.to_config(run_seed))?;
        sim.run();
        stats.add_report(&Report::from_simulation(&sim));

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();
    let runs_per_sec = if duration.as_secs_f64() > 0.0 {
        stats.runs as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    match format {
        BatchFormat::Text => {
            println!();
            println!("Base seed: {base_seed}");
            print!("{}", format_batch_text(&stats));
            println!();
            println!("Duration: {:.2}s ({:.0} runs/sec)", duration.as_secs_f64(), runs_per_sec);
        }
        BatchFormat::Json => {
            let json_result = JsonBatchResult::from_stats(&stats, base_seed);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
        BatchFormat::Csv => {
            print!("{}", format_batch_csv(&stats));
        }
    }

    Ok(())
}
