// Export module - 报告导出
// 核心只决定导出内容和建议文件名，实际落盘/下载由宿主应用完成

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::report::AuditTask;

/// 导出请求：报告内容 + 建议文件名
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub filename: String,
    pub content: String,
}

/// 宿主应用实现的保存接口
pub trait ExportTarget {
    fn save(&self, request: &ExportRequest) -> Result<()>;
}

/// 根据任务生成建议文件名
pub fn suggested_report_name(task: &AuditTask) -> String {
    format!("audit_report_{}.md", task.task_id)
}

/// 单次移交给宿主，不在核心内做重试
pub fn export_report(target: &dyn ExportTarget, content: &str, suggested_name: &str) -> Result<()> {
    let request = ExportRequest {
        filename: suggested_name.to_string(),
        content: content.to_string(),
    };
    tracing::info!("Exporting report as {}", request.filename);
    target.save(&request)
}

/// 写入本地目录的导出实现
pub struct FileSystemTarget {
    pub output_dir: PathBuf,
}

impl ExportTarget for FileSystemTarget {
    fn save(&self, request: &ExportRequest) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(&request.filename);
        std::fs::write(&path, &request.content)?;
        tracing::info!("Report saved to {:?}", path);
        Ok(())
    }
}
