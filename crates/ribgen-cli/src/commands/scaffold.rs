//! `ribgen scaffold <outline> --parent <Root>`.

use std::path::Path;

use tracing::{info, instrument};

use ribgen_core::application::ScaffoldService;

use crate::{error::CliResult, output::OutputManager};

/// Compile the outline, run every edge, and return the process exit code.
///
/// A missing or malformed outline is fatal; failures inside individual
/// edges are reported and the run continues.
#[instrument(skip(service, output), fields(outline = %outline.display()))]
pub fn execute(
    outline: &Path,
    parent: &str,
    service: &ScaffoldService,
    output: &OutputManager,
) -> CliResult<u8> {
    let edges = service.compile_outline(outline, parent)?;

    output.header(&format!(
        "Scaffolding {} RIB(s) under {parent} from {}",
        edges.len(),
        outline.display()
    ))?;

    let mut write_result = Ok(());
    let summary = service.scaffold(&edges, &mut |step| {
        if write_result.is_ok() {
            write_result = output.step(step);
        }
    });
    write_result?;
    output.summary(&summary)?;

    info!(exit_code = summary.exit_code(), "Scaffold finished");
    Ok(summary.exit_code())
}
