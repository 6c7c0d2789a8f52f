mod bootstrap;

use anyhow::{Context, Result};
use complaints_core::settings::Settings;
use complaints_data::analysis;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Complaint report v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Working to create output file....");

    let config = settings.pipeline_config();
    let report = match analysis::run(&config) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Problem with input or output file: {}", e);
            return Err(e).context("complaint report failed");
        }
    };

    if let Some(path) = settings.report.as_ref() {
        report
            .save_to(path)
            .with_context(|| format!("writing run report to {}", path.display()))?;
    }

    tracing::info!(
        "Program completed successfully. Output written to file {}",
        config.output.display()
    );

    Ok(())
}
