//! Full pipeline: load → build graph → inspect → report.

use std::io::Write;
use std::path::Path;

use crate::parse;
use crate::report::{self, Palette, Reporter};
use crate::validate::{self, Analysis};

/// Final outcome of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
    LoadFailed,
}

impl Verdict {
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Pass => 0,
            Verdict::Fail | Verdict::LoadFailed => 1,
        }
    }
}

/// Parse and inspect a workflow already held in memory.
pub fn analyze_str(json: &str) -> Result<Analysis, crate::error::LoadError> {
    let workflow = parse::parse(json)?;
    let graph = parse::WorkflowGraph::build(&workflow);
    Ok(validate::analyze(&workflow, &graph))
}

/// Analyze the file at `path` and write the transcript to `out`.
///
/// Load failures are reported like any other outcome; only write errors
/// are returned as `Err`.
pub fn run(path: &Path, palette: &Palette, out: &mut impl Write) -> std::io::Result<Verdict> {
    let reporter = Reporter::new(palette);

    let (workflow, graph) = match parse::load_and_build(path) {
        Ok(loaded) => loaded,
        Err(err) => {
            log::debug!("load failed: {:?}", err);
            reporter.write(&report::load_failure(&err), out)?;
            return Ok(Verdict::LoadFailed);
        }
    };

    let analysis = validate::analyze(&workflow, &graph);
    log::debug!(
        "analysis of '{}' finished with {} issue(s)",
        analysis.workflow_name,
        analysis.issues.len()
    );
    reporter.write(&report::transcript(&analysis), out)?;

    Ok(if analysis.passed() {
        Verdict::Pass
    } else {
        Verdict::Fail
    })
}
