// 项目类型识别 - 根据上传的文件清单推断主要语言生态

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    Python,
    JavaScript,
    Java,
    #[serde(rename = "PHP")]
    Php,
    Go,
    Rust,
    Unknown,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Python => "Python",
            ProjectType::JavaScript => "JavaScript",
            ProjectType::Java => "Java",
            ProjectType::Php => "PHP",
            ProjectType::Go => "Go",
            ProjectType::Rust => "Rust",
            ProjectType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 规则按优先级排列，自上而下先命中先生效：
// 同时包含 requirements.txt 和 package.json 的项目识别为 Python
static DETECT_RULES: &[(ProjectType, &[&str], &[&str])] = &[
    (ProjectType::Python, &["requirements.txt", "pipfile"], &[".py"]),
    (ProjectType::JavaScript, &["package.json", "node_modules"], &[".js", ".ts"]),
    (ProjectType::Java, &["pom.xml", "build.gradle"], &[".java"]),
    (ProjectType::Php, &["composer.json"], &[".php"]),
    (ProjectType::Go, &["go.mod"], &[]),
    (ProjectType::Rust, &["cargo.toml"], &[]),
];

/// 根据文件列表检测项目类型，空清单返回 Unknown
pub fn detect_project_type(files: &[String]) -> ProjectType {
    if files.is_empty() {
        return ProjectType::Unknown;
    }

    let names: Vec<String> = files.iter().map(|f| f.to_lowercase()).collect();

    for (project_type, markers, extensions) in DETECT_RULES {
        let matched = names.iter().any(|name| {
            markers.iter().any(|marker| name.contains(marker))
                || extensions.iter().any(|ext| name.ends_with(ext))
        });
        if matched {
            tracing::info!("Detected project type {} from {} files", project_type, files.len());
            return *project_type;
        }
    }

    ProjectType::Unknown
}
