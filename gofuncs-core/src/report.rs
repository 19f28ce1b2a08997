//! Output rendering for query results
//!
//! Global invariants enforced:
//! - Reports keep document order
//! - Byte-for-byte identical output across runs

use crate::document::FuncKind;
use crate::funcs::Func;
use crate::position::Range;
use serde::{Deserialize, Serialize};

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One function in report form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FuncReport {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub offset: usize,
    pub kind: FuncKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub signature: String,
    pub body: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Range>,
}

impl FuncReport {
    pub fn new(func: &Func, file: &str) -> Self {
        FuncReport {
            file: file.to_string(),
            line: func.func_pos.line,
            column: func.func_pos.column,
            offset: func.func_pos.offset,
            kind: func.kind,
            name: func.name.clone(),
            signature: func.signature.clone(),
            body: func.body_range,
            comment: func.comment_range,
        }
    }
}

/// Render reports as text output: `line:column  signature`, one function per line
pub fn render_text(reports: &[FuncReport]) -> String {
    let mut output = String::new();
    for report in reports {
        output.push_str(&format!("{}:{}  {}\n", report.line, report.column, report.signature));
    }
    output
}

/// Render reports as JSON output
pub fn render_json(reports: &[FuncReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
