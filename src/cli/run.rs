//! Run command implementation.

use super::output::JsonRunResult;
use super::{CliError, ModelArgs, OutputFormat, resolve_seed};
use cursus::{Report, Simulation};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or JSON output fails.
pub(crate) fn execute(
    model: &ModelArgs,
    seed: Option<u64>,
    format: OutputFormat,
    history: bool,
) -> Result<(), CliError> {
    let seed = resolve_seed(seed);
    let mut sim = Simulation::new(model.to_config(seed))?;
    let outcomes = sim.run();
    let report = Report::from_simulation(&sim);

    match format {
        OutputFormat::Text => {
            println!("Simulation (seed: {seed})");
            println!();
            print!("{}", report.render_text());
        }
        OutputFormat::Json => {
            let json_result = JsonRunResult {
                seed,
                config: sim.config(),
                report: &report,
                history: history.then_some(outcomes.as_slice()),
            };
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
