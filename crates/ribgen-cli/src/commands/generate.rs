//! `ribgen add`, `ribgen link`, and the informational `help` / `version`.

use tracing::{info, instrument};

use ribgen_core::{application::ScaffoldService, domain::Invocation};

use crate::{error::CliResult, output::OutputManager};

/// Run a non-outline invocation and return the process exit code.
#[instrument(skip_all, fields(invocation = %invocation))]
pub fn execute(
    invocation: &Invocation,
    service: &ScaffoldService,
    output: &OutputManager,
) -> CliResult<u8> {
    let mut write_result = Ok(());
    let summary = service.execute(invocation, &mut |step| {
        if write_result.is_ok() {
            write_result = output.step(step);
        }
    })?;
    write_result?;

    if summary.created + summary.edited + summary.skipped + summary.failed > 1 {
        output.summary(&summary)?;
    }

    info!(exit_code = summary.exit_code(), "Generation finished");
    Ok(summary.exit_code())
}
