//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::error::Issue;
use crate::pipeline;
use crate::report::{self, Palette, Reporter};

/// Analyze a workflow JSON string: parse + loop inspection.
/// Returns a JSON object tagged by `status` (`pass`, `fail` or `error`).
#[wasm_bindgen]
pub fn analyze_workflow(json: &str) -> JsValue {
    let result = analyze_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn analyze_workflow_inner(json: &str) -> AnalysisResult {
    let palette = Palette::plain();
    let reporter = Reporter::new(&palette);

    match pipeline::analyze_str(json) {
        Ok(analysis) => {
            let transcript = reporter.render(&report::transcript(&analysis));
            if analysis.passed() {
                AnalysisResult::Pass { transcript }
            } else {
                AnalysisResult::Fail {
                    issues: analysis.issues.into_iter().map(IssueDto::from).collect(),
                    transcript,
                }
            }
        }
        Err(err) => AnalysisResult::Error {
            message: err.to_string(),
            transcript: reporter.render(&report::load_failure(&err)),
        },
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct IssueDto {
    code: String,
    message: String,
    node: Option<String>,
}

impl From<Issue> for IssueDto {
    fn from(issue: Issue) -> Self {
        IssueDto {
            code: issue.code().to_string(),
            message: issue.message,
            node: issue.node,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum AnalysisResult {
    #[serde(rename = "pass")]
    Pass { transcript: String },
    #[serde(rename = "fail")]
    Fail {
        issues: Vec<IssueDto>,
        transcript: String,
    },
    #[serde(rename = "error")]
    Error { message: String, transcript: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_reports_error_status() {
        let result = analyze_workflow_inner("{ not json");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], "error");
        assert!(value["message"].as_str().unwrap().starts_with("Invalid JSON"));
    }

    #[test]
    fn missing_loop_node_reports_single_issue() {
        let result = analyze_workflow_inner(r#"{"name": "wf", "nodes": [], "connections": {}}"#);
        let (issues, transcript) = match result {
            AnalysisResult::Fail { issues, transcript } => (issues, transcript),
            other => panic!("expected fail, got {:?}", other),
        };
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "L000");
        assert!(!transcript.contains('\u{1b}'));
    }
}
