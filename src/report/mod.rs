//! Output phase: Analysis → toned transcript → writer.
//!
//! Building the transcript is pure; only `Reporter::write` touches I/O, and
//! the palette decides what each tone looks like.

pub mod palette;

use std::io::Write;

pub use palette::{Palette, Style, Tone};

use crate::error::LoadError;
use crate::validate::{
    Analysis, BatchSize, FirstNode, LoopReport, LoopWiring, MODE_EACH_ITEM, TargetRef,
};

const TITLE: &str = "=== n8n Loop Iteration Analyzer ===";
const RULE: &str = "============================================================";

/// Things worth looking at when the wiring itself is fine.
pub const NEXT_CAUSES: [&str; 3] = [
    "An n8n version-specific bug",
    "A workflow state corruption issue",
    "A data format mismatch between nodes",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub tone: Tone,
    pub text: String,
}

/// Accumulates transcript lines.
#[derive(Debug, Default)]
struct Transcript {
    lines: Vec<Line>,
}

impl Transcript {
    fn push(&mut self, tone: Tone, text: impl Into<String>) {
        self.lines.push(Line {
            tone,
            text: text.into(),
        });
    }

    fn blank(&mut self) {
        self.push(Tone::Neutral, "");
    }

    /// Pick between a good and a bad rendering of the same check.
    fn check(&mut self, ok: bool, good: String, bad: String, bad_tone: Tone) {
        if ok {
            self.push(Tone::Success, good);
        } else {
            self.push(bad_tone, bad);
        }
    }
}

/// Full transcript for a completed analysis, summary included.
pub fn transcript(analysis: &Analysis) -> Vec<Line> {
    let mut t = Transcript::default();
    t.push(Tone::Emphasis, TITLE);
    t.blank();
    t.push(Tone::Info, format!("📋 Workflow: {}", analysis.workflow_name));
    t.push(Tone::Info, format!("📊 Total nodes: {}", analysis.node_count));
    t.blank();

    if analysis.loops.is_empty() {
        t.push(Tone::Error, "❌ No 'Split in Batches' nodes found");
    } else {
        t.push(
            Tone::Success,
            format!("🔍 Found {} Split in Batches node(s)", analysis.loops.len()),
        );
    }

    for (idx, report) in analysis.loops.iter().enumerate() {
        render_loop(&mut t, idx, report);
    }

    render_summary(&mut t, analysis);
    t.lines
}

/// Transcript for a run that never got past loading.
pub fn load_failure(err: &LoadError) -> Vec<Line> {
    let mut t = Transcript::default();
    t.push(Tone::Emphasis, TITLE);
    t.blank();
    t.push(Tone::Error, format!("❌ ERROR: {}", err));

    if let LoadError::NotFound { path, .. } = err {
        t.blank();
        t.push(Tone::Warning, "Please export your workflow from n8n and save it as:");
        t.push(Tone::Info, format!("  {}", path.display()));
    }
    t.lines
}

fn render_loop(t: &mut Transcript, idx: usize, report: &LoopReport) {
    t.blank();
    t.push(Tone::Info, RULE);
    t.push(Tone::Emphasis, format!("Loop {}: {}", idx + 1, report.name));
    t.push(Tone::Info, RULE);

    t.blank();
    t.push(Tone::Info, "1️⃣  Node Configuration:");
    match &report.batch_size {
        BatchSize::One => t.push(Tone::Success, "   Batch Size: 1 ✅"),
        BatchSize::Unset => {
            t.push(Tone::Error, "   Batch Size: NOT SET (using default) ❌");
            t.push(Tone::Warning, "   ⚠️  WARNING: Batch size must be explicitly set to 1");
        }
        BatchSize::Other(value) => t.push(Tone::Error, format!("   Batch Size: {} ❌", value)),
    }

    let version = report
        .type_version
        .map_or_else(|| "unknown".to_string(), |v| v.to_string());
    t.push(Tone::Neutral, format!("   Type Version: {}", version));

    match report.reset {
        Some(true) => t.push(Tone::Warning, "   Reset: ON ⚠️"),
        Some(false) => t.push(Tone::Success, "   Reset: OFF ✅"),
        None => t.push(Tone::Success, "   Reset: NOT SET ✅"),
    }

    t.check(
        !report.always_output_data,
        "   Always Output Data: OFF ✅".into(),
        "   Always Output Data: ON ❌".into(),
        Tone::Error,
    );

    if report.disabled {
        t.push(Tone::Warning, "   ⚠️  WARNING: Node is DISABLED");
    }

    t.blank();
    t.push(Tone::Info, "2️⃣  Connections:");
    match &report.wiring {
        None => t.push(Tone::Error, "   ❌ ERROR: Missing loop/done outputs"),
        Some(wiring) => render_wiring(t, wiring),
    }

    t.blank();
    t.push(Tone::Info, "5️⃣  Common Issues Check:");
    if report.issues.is_empty() {
        t.push(Tone::Success, "   ✅ No obvious configuration issues found");
    } else {
        t.push(
            Tone::Error,
            format!("   ❌ Found {} issue(s):", report.issues.len()),
        );
        for issue in &report.issues {
            t.push(Tone::Error, format!("     • {}", issue.message));
        }
    }
}

fn render_wiring(t: &mut Transcript, wiring: &LoopWiring) {
    t.push(
        Tone::Neutral,
        format!("   Output 0 (loop): {} connection(s)", wiring.loop_groups),
    );
    render_targets(t, &wiring.loop_targets);
    t.push(
        Tone::Neutral,
        format!("   Output 1 (done): {} connection(s)", wiring.done_groups),
    );
    render_targets(t, &wiring.done_targets);

    t.blank();
    t.push(Tone::Info, "3️⃣  Loop Back Connection:");
    t.check(
        wiring.loops_back,
        "   Loop back exists: ✅ YES".into(),
        "   Loop back exists: ❌ NO".into(),
        Tone::Error,
    );

    if let Some(first) = &wiring.first_node {
        render_first_node(t, first);
    }
}

fn render_targets(t: &mut Transcript, targets: &[TargetRef]) {
    for target in targets {
        if target.disabled {
            t.push(Tone::Warning, format!("     → {} [DISABLED]", target.name));
        } else {
            t.push(Tone::Success, format!("     → {}", target.name));
        }
        if !target.resolved {
            t.push(Tone::Warning, "       ⚠️  Target node not found in workflow");
        }
    }
}

fn render_first_node(t: &mut Transcript, first: &FirstNode) {
    t.blank();
    t.push(Tone::Info, format!("4️⃣  First Node in Loop: {}", first.name));
    t.push(Tone::Neutral, format!("   Type: {}", first.node_type));
    t.check(
        !first.disabled,
        "   Disabled: NO ✅".into(),
        "   Disabled: YES ❌".into(),
        Tone::Error,
    );

    if let Some(mode) = &first.mode {
        t.push(Tone::Neutral, format!("   Execution Mode: {}", mode));
        t.check(
            !first.runs_once_for_all_items(),
            "     ✅ Correct mode for loop".into(),
            format!("     ⚠️  WARNING: Should be \"{}\" for loop iteration", MODE_EACH_ITEM),
            Tone::Warning,
        );
    }

    if first.continue_on_fail {
        t.push(Tone::Warning, "   ⚠️  WARNING: Continue on Fail is enabled");
    }
    if first.always_output_data {
        t.push(Tone::Warning, "   ⚠️  WARNING: Always Output Data is enabled");
    }
}

fn render_summary(t: &mut Transcript, analysis: &Analysis) {
    t.blank();
    t.blank();
    t.push(Tone::Emphasis, "=== Summary ===");
    t.blank();

    if analysis.passed() {
        t.push(Tone::Success, "✅ All loop configurations look correct");
        t.blank();
        t.push(Tone::Warning, "If loop still doesn't work, this is likely:");
        for (i, cause) in NEXT_CAUSES.iter().enumerate() {
            t.push(Tone::Warning, format!("  {}. {}", i + 1, cause));
        }
        t.blank();
        t.push(Tone::Info, "Recommended actions:");
        t.push(Tone::Neutral, "  • Try duplicating the workflow to a fresh instance");
        t.push(Tone::Neutral, "  • Test with a minimal loop");
        t.push(Tone::Neutral, "  • Check n8n version and upgrade to latest");
    } else {
        t.push(
            Tone::Error,
            format!("❌ Found {} configuration issue(s):", analysis.issues.len()),
        );
        for issue in &analysis.issues {
            t.push(Tone::Error, format!("  • {}", issue));
        }
        t.blank();
        t.push(Tone::Warning, "Fix these issues and test again.");
    }
}

/// Writes transcripts through a palette.
pub struct Reporter<'p> {
    palette: &'p Palette,
}

impl<'p> Reporter<'p> {
    pub fn new(palette: &'p Palette) -> Self {
        Reporter { palette }
    }

    pub fn write(&self, lines: &[Line], out: &mut impl Write) -> std::io::Result<()> {
        for line in lines {
            writeln!(out, "{}", self.palette.paint(line.tone, &line.text))?;
        }
        out.flush()
    }

    /// Render into a `String`, mostly for tests and the plain-text surfaces.
    pub fn render(&self, lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| self.palette.paint(line.tone, &line.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
