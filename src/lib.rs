// DeepAudit Report Core Library
// 报告核心库，包含严重程度分级、漏洞知识库、项目类型识别和报告生成

mod detector;
mod export;
mod report;
mod severity;
mod templates;

// 重新导出常用类型
pub use detector::{detect_project_type, ProjectType};
pub use export::{export_report, suggested_report_name, ExportRequest, ExportTarget, FileSystemTarget};
pub use report::{enrich, generate_markdown_report, render_report, AuditTask, EnrichedFinding, Finding};
pub use severity::{category_of, Severity, SeverityCategory};
pub use templates::{lookup, VulnTemplate};

pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CoreError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Export error: {0}")]
        Export(String),
    }

    pub type Result<T> = std::result::Result<T, CoreError>;
}
