// Severity module - 严重程度分级
// 细粒度严重程度与前端徽章使用的粗粒度分类之间的固定映射

use serde::{Deserialize, Serialize};

/// 漏洞严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// 报告标题中使用的大写标签
    pub fn tag(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }

    pub fn category(&self) -> SeverityCategory {
        match self {
            Severity::Critical | Severity::High => SeverityCategory::Danger,
            Severity::Medium => SeverityCategory::Warning,
            Severity::Low => SeverityCategory::Info,
        }
    }
}

/// 展示分类，对应前端徽章样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityCategory {
    Danger,
    Warning,
    Info,
}

impl SeverityCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityCategory::Danger => "danger",
            SeverityCategory::Warning => "warning",
            SeverityCategory::Info => "info",
        }
    }
}

/// 上游检测器给出的 severity 字符串可能不规范，无法识别时统一按 info 处理
pub fn category_of(severity: &str) -> SeverityCategory {
    match severity {
        "critical" | "high" => SeverityCategory::Danger,
        "medium" => SeverityCategory::Warning,
        "low" => SeverityCategory::Info,
        _ => SeverityCategory::Info,
    }
}
