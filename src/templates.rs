// 漏洞知识库 - 漏洞类型模板
// 进程启动即固定的只读表，按漏洞类型精确匹配，未知类型走通用 fallback

use serde::Serialize;

use crate::severity::Severity;

/// 漏洞类型模板记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VulnTemplate {
    pub severity: Severity,
    pub description: &'static str,
    pub suggestion: &'static str,
    pub code_snippet: &'static str,
}

// 条目顺序即检查顺序，键区分大小写
static TEMPLATES: &[(&str, VulnTemplate)] = &[
    (
        "SQL Injection",
        VulnTemplate {
            severity: Severity::Critical,
            description: "User input is concatenated into SQL queries without filtering, which may hand control of the database to an attacker",
            suggestion: "Use parameterized queries (prepared statements); never concatenate user input directly into SQL statements",
            code_snippet: "// Unsafe\nquery = \"SELECT * FROM users WHERE id = \" + userId\ndb.execute(query)\n\n// Safe\nquery = \"SELECT * FROM users WHERE id = ?\"\ndb.execute(query, [userId])",
        },
    ),
    (
        "Cross-Site Scripting",
        VulnTemplate {
            severity: Severity::High,
            description: "Output is not HTML-escaped, so an attacker can inject scripts to steal user cookies or mount phishing attacks",
            suggestion: "Rely on the template engine's auto-escaping, or HTML-encode special characters before output",
            code_snippet: "// Unsafe\nelement.innerHTML = userInput\n\n// Safe\nelement.textContent = userInput",
        },
    ),
    (
        "Command Injection",
        VulnTemplate {
            severity: Severity::Critical,
            description: "User input is passed straight into system commands, which can lead to full server compromise",
            suggestion: "Avoid system/exec style functions; if unavoidable, apply strict input validation and whitelist filtering",
            code_snippet: "// Unsafe\nos.system(\"ping \" + hostname)\n\n// Safe\nsubprocess.run([\"ping\", \"-c\", \"4\", hostname], check=True)",
        },
    ),
    (
        "Path Traversal",
        VulnTemplate {
            severity: Severity::High,
            description: "File paths are not validated, allowing an attacker to read arbitrary files (such as /etc/passwd)",
            suggestion: "Validate file names against a whitelist and strip all path separators and special characters",
            code_snippet: "// Unsafe\nfs.readFileSync(\"/var/www/uploads/\" + filename)\n\n// Safe\nconst safeName = path.basename(filename)\nfs.readFileSync(\"/var/www/uploads/\" + safeName)",
        },
    ),
    (
        "Hardcoded Secret",
        VulnTemplate {
            severity: Severity::Medium,
            description: "API keys, passwords or tokens are hardcoded in source code and may leak sensitive credentials",
            suggestion: "Store sensitive configuration in environment variables or a key management service (KMS); keep only the config-loading logic in code",
            code_snippet: "// Unsafe\nconst API_KEY = \"sk-1234567890abcdef\"\n\n// Safe\nconst API_KEY = process.env.API_KEY",
        },
    ),
    (
        "Insecure Deserialization",
        VulnTemplate {
            severity: Severity::Critical,
            description: "User-supplied data is deserialized directly, which can lead to remote code execution",
            suggestion: "Replace pickle-style formats with safe ones such as JSON, or enforce strict type checks and signature verification",
            code_snippet: "// Unsafe\ndata = pickle.loads(user_input)\n\n// Safe\ndata = json.loads(user_input)",
        },
    ),
    (
        "Sensitive Information Disclosure",
        VulnTemplate {
            severity: Severity::Medium,
            description: "Error messages expose system paths, database structure, stack traces or other sensitive details",
            suggestion: "Use custom error pages, disable debug mode in production, and return uniformly vague error messages",
            code_snippet: "// Unsafe\ncatch (Exception e) {\n  return e.getStackTrace().toString()\n}\n\n// Safe\ncatch (Exception e) {\n  logger.error(e)\n  return \"Internal error, please contact the administrator\"\n}",
        },
    ),
    (
        "Weak Cryptographic Algorithm",
        VulnTemplate {
            severity: Severity::Medium,
            description: "Broken hash algorithms such as MD5/SHA1 are in use and are vulnerable to rainbow table attacks",
            suggestion: "Use a modern password hash such as bcrypt/Argon2, or a strong cipher such as AES-256",
            code_snippet: "// Unsafe\npassword_hash = md5(password)\n\n// Safe\npassword_hash = bcrypt.hashpw(password, bcrypt.gensalt())",
        },
    ),
];

static FALLBACK: VulnTemplate = VulnTemplate {
    severity: Severity::Low,
    description: "Unknown type of security issue",
    suggestion: "Manual code review required",
    code_snippet: "",
};

/// 根据漏洞类型获取模板，任何输入都有定义的结果
pub fn lookup(vuln_type: &str) -> &'static VulnTemplate {
    for (key, template) in TEMPLATES {
        if *key == vuln_type {
            return template;
        }
    }
    tracing::debug!("No template for vuln type {:?}, using fallback", vuln_type);
    &FALLBACK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_lookup() {
        let template = lookup("SQL Injection");
        assert_eq!(template.severity, Severity::Critical);
        assert!(template.description.contains("SQL"));
        assert!(!template.code_snippet.is_empty());
    }

    #[test]
    fn test_fallback_identity() {
        let template = lookup("never-seen-before-xyz");
        assert_eq!(*template, FALLBACK);
        assert_eq!(template.severity, Severity::Low);
        assert_eq!(template.description, "Unknown type of security issue");
        assert_eq!(template.suggestion, "Manual code review required");
        assert_eq!(template.code_snippet, "");
    }

    #[test]
    fn test_totality() {
        // 空串、大小写不匹配的键都必须得到有效记录
        for vuln_type in ["", "sql injection", "XSS", "漏洞"] {
            let template = lookup(vuln_type);
            assert!(matches!(
                template.severity,
                Severity::Critical | Severity::High | Severity::Medium | Severity::Low
            ));
        }
    }

    #[test]
    fn test_shipped_severities() {
        assert_eq!(lookup("Cross-Site Scripting").severity, Severity::High);
        assert_eq!(lookup("Command Injection").severity, Severity::Critical);
        assert_eq!(lookup("Path Traversal").severity, Severity::High);
        assert_eq!(lookup("Hardcoded Secret").severity, Severity::Medium);
        assert_eq!(lookup("Insecure Deserialization").severity, Severity::Critical);
        assert_eq!(lookup("Sensitive Information Disclosure").severity, Severity::Medium);
        assert_eq!(lookup("Weak Cryptographic Algorithm").severity, Severity::Medium);
    }
}
