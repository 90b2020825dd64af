// Report module - 审计报告生成
// 将任务信息与漏洞发现合成为 Markdown 报告文本，发现顺序即输入顺序

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::severity::{Severity, SeverityCategory};
use crate::templates;

/// 审计任务描述，由宿主应用维护
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditTask {
    pub task_id: String,
    pub filename: String,
    pub project_type: String,
    pub status: String,
}

/// 漏洞发现结果，由外部检测引擎提供
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub vuln_type: String,
    pub file: String,
    pub line: usize,
}

/// 知识库补全后的漏洞记录
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedFinding {
    #[serde(rename = "type")]
    pub vuln_type: String,
    pub file: String,
    pub line: usize,
    pub severity: Severity,
    pub category: SeverityCategory,
    pub description: &'static str,
    pub suggestion: &'static str,
    pub code_snippet: &'static str,
}

/// 用知识库模板补全单条发现，模板字段优先于调用方附带的描述
pub fn enrich(finding: &Finding) -> EnrichedFinding {
    let template = templates::lookup(&finding.vuln_type);
    EnrichedFinding {
        vuln_type: finding.vuln_type.clone(),
        file: finding.file.clone(),
        line: finding.line,
        severity: template.severity,
        category: template.severity.category(),
        description: template.description,
        suggestion: template.suggestion,
        code_snippet: template.code_snippet,
    }
}

/// 生成 Markdown 格式报告，使用本地时钟打时间戳
pub fn generate_markdown_report(task: &AuditTask, findings: &[Finding]) -> String {
    let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    render_report(task, findings, &now)
}

/// 确定性的报告合成，时间戳由调用方注入
pub fn render_report(task: &AuditTask, findings: &[Finding], generated_at: &str) -> String {
    let mut lines: Vec<String> = vec![
        "# Code Audit Report".to_string(),
        String::new(),
        format!("> Generated at: {}", generated_at),
        String::new(),
        "## Task Info".to_string(),
        String::new(),
        "| Item | Value |".to_string(),
        "|------|-------|".to_string(),
        format!("| Task ID | {} |", task.task_id),
        format!("| Filename | {} |", task.filename),
        format!("| Project Type | {} |", task.project_type),
        format!("| Status | {} |", task.status),
        format!("| Findings | {} |", findings.len()),
        String::new(),
        "## Findings".to_string(),
        String::new(),
    ];

    if findings.is_empty() {
        lines.push("✅ No security issues found, the code looks clean!".to_string());
    } else {
        for (index, finding) in findings.iter().enumerate() {
            let enriched = enrich(finding);
            lines.push(format!(
                "### {}. {} [{}]",
                index + 1,
                enriched.vuln_type,
                enriched.severity.tag()
            ));
            lines.push(String::new());
            lines.push(format!("- **Location**: `{}:{}`", enriched.file, enriched.line));
            lines.push(format!("- **Description**: {}", enriched.description));
            lines.push(format!("- **Suggestion**: {}", enriched.suggestion));
            if !enriched.code_snippet.is_empty() {
                lines.push(String::new());
                lines.push("```".to_string());
                lines.push(enriched.code_snippet.to_string());
                lines.push("```".to_string());
            }
            lines.push(String::new());
            lines.push("---".to_string());
            lines.push(String::new());
        }
    }

    lines.push(String::new());
    lines.push("*This report was generated by the automated code audit system*".to_string());

    tracing::info!(
        "Generated report for task {} with {} findings",
        task.task_id,
        findings.len()
    );

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> AuditTask {
        AuditTask {
            task_id: "T1".to_string(),
            filename: "app.py".to_string(),
            project_type: "Python".to_string(),
            status: "completed".to_string(),
        }
    }

    #[test]
    fn test_end_to_end_scenario() {
        let task = sample_task();
        let findings = vec![Finding {
            vuln_type: "SQL Injection".to_string(),
            file: "db.py".to_string(),
            line: 42,
        }];

        let report = render_report(&task, &findings, "2026-01-01 00:00:00");

        assert!(report.contains("# Code Audit Report"));
        assert!(report.contains("> Generated at: 2026-01-01 00:00:00"));
        assert!(report.contains("| Task ID | T1 |"));
        assert!(report.contains("| Filename | app.py |"));
        assert!(report.contains("| Project Type | Python |"));
        assert!(report.contains("| Status | completed |"));
        assert!(report.contains("| Findings | 1 |"));
        assert!(report.contains("### 1. SQL Injection [CRITICAL]"));
        assert!(report.contains("- **Location**: `db.py:42`"));

        let template = templates::lookup("SQL Injection");
        assert!(report.contains(template.description));
        assert!(report.contains(template.suggestion));
        assert!(report.contains(template.code_snippet));
        assert!(report.contains("```"));
    }

    #[test]
    fn test_empty_findings() {
        let report = render_report(&sample_task(), &[], "2026-01-01 00:00:00");
        assert!(report.contains("No security issues found"));
        assert!(report.contains("| Findings | 0 |"));
        assert!(!report.contains("### 1."));
    }

    #[test]
    fn test_input_order_preserved() {
        // 低严重程度在前也不会被重排
        let findings = vec![
            Finding {
                vuln_type: "Hardcoded Secret".to_string(),
                file: "config.py".to_string(),
                line: 3,
            },
            Finding {
                vuln_type: "SQL Injection".to_string(),
                file: "db.py".to_string(),
                line: 42,
            },
        ];
        let report = render_report(&sample_task(), &findings, "2026-01-01 00:00:00");

        let first = report.find("### 1. Hardcoded Secret [MEDIUM]").unwrap();
        let second = report.find("### 2. SQL Injection [CRITICAL]").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_unknown_type_uses_fallback_and_omits_snippet() {
        let findings = vec![Finding {
            vuln_type: "never-seen-before-xyz".to_string(),
            file: "main.py".to_string(),
            line: 7,
        }];
        let report = render_report(&sample_task(), &findings, "2026-01-01 00:00:00");

        assert!(report.contains("### 1. never-seen-before-xyz [LOW]"));
        assert!(report.contains("Unknown type of security issue"));
        assert!(report.contains("Manual code review required"));
        // fallback 模板没有示例代码，不应出现围栏代码块
        assert!(!report.contains("```"));
    }

    #[test]
    fn test_single_newline_convention() {
        let report = render_report(&sample_task(), &[], "2026-01-01 00:00:00");
        assert!(!report.contains('\r'));
    }

    #[test]
    fn test_enrich_category() {
        let finding = Finding {
            vuln_type: "Cross-Site Scripting".to_string(),
            file: "view.js".to_string(),
            line: 10,
        };
        let enriched = enrich(&finding);
        assert_eq!(enriched.severity, Severity::High);
        assert_eq!(enriched.category, SeverityCategory::Danger);
    }

    #[test]
    fn test_finding_wire_shape() {
        let finding: Finding =
            serde_json::from_str(r#"{"type":"SQL Injection","file":"db.py","line":42}"#).unwrap();
        assert_eq!(finding.vuln_type, "SQL Injection");
        assert_eq!(finding.file, "db.py");
        assert_eq!(finding.line, 42);
    }
}
