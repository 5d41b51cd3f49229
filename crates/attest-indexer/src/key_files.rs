//! Heuristic tagging of compliance-relevant files
//!
//! Claims about security, data handling, and configuration tend to be
//! resolvable from a small set of well-known locations. These path and
//! filename patterns tag those files with a human-readable reason that
//! surfaces in the final report and in selection fallbacks.

/// Well-known configuration and schema filenames.
const CONFIG_FILENAMES: &[&str] = &[
    "package.json",
    "cargo.toml",
    "pyproject.toml",
    "go.mod",
    "pom.xml",
    "build.gradle",
    "dockerfile",
    "docker-compose.yml",
    "docker-compose.yaml",
    ".env.example",
    "tsconfig.json",
];

const SCHEMA_FILENAMES: &[&str] = &[
    "schema.prisma",
    "schema.sql",
    "schema.graphql",
    "openapi.yaml",
    "openapi.yml",
    "openapi.json",
    "swagger.yaml",
    "swagger.json",
];

/// Return the tagging reason for a path, or `None` when nothing matched.
///
/// `rel_path` is the forward-slash relative path produced by the walker.
pub fn key_file_reason(rel_path: &str) -> Option<String> {
    let lower = rel_path.to_lowercase();
    let file_name = lower.rsplit('/').next().unwrap_or(&lower);

    if CONFIG_FILENAMES.contains(&file_name) {
        return Some("project configuration file".to_string());
    }
    if SCHEMA_FILENAMES.contains(&file_name) {
        return Some("data or API schema definition".to_string());
    }
    if file_name.contains("auth") {
        return Some("authentication/authorization related filename".to_string());
    }
    if file_name.contains("session") {
        return Some("session handling related filename".to_string());
    }
    if file_name.contains("middleware") {
        return Some("request middleware".to_string());
    }
    if lower.contains("/api/") || lower.starts_with("api/") {
        return Some("part of the API surface".to_string());
    }
    if file_name.contains("security") || file_name.contains("crypto") {
        return Some("security related filename".to_string());
    }
    if file_name.contains("config") || file_name.contains("settings") {
        return Some("configuration related filename".to_string());
    }

    None
}

/// Extensions treated as code for index statistics.
const CODE_EXTENSIONS: &[&str] = &[
    "rs", "ts", "tsx", "js", "jsx", "mjs", "py", "go", "java", "kt", "rb", "php", "cs", "c",
    "h", "cpp", "hpp", "swift", "scala", "sql", "sh",
];

/// Whether the path looks like a source-code file, by extension.
pub fn is_code_file(rel_path: &str) -> bool {
    rel_path
        .rsplit('.')
        .next()
        .map(|ext| CODE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_pattern() {
        let reason = key_file_reason("src/auth/login.rs").unwrap();
        assert!(reason.contains("authentication"));
    }

    #[test]
    fn test_api_segment() {
        let reason = key_file_reason("server/api/users.ts").unwrap();
        assert!(reason.contains("API"));
        assert!(key_file_reason("api/index.py").is_some());
    }

    #[test]
    fn test_known_config_filenames() {
        assert_eq!(
            key_file_reason("package.json").unwrap(),
            "project configuration file"
        );
        assert_eq!(
            key_file_reason("backend/Dockerfile").unwrap(),
            "project configuration file"
        );
        assert!(key_file_reason("prisma/schema.prisma")
            .unwrap()
            .contains("schema"));
    }

    #[test]
    fn test_middleware_and_session() {
        assert!(key_file_reason("src/middleware.ts").is_some());
        assert!(key_file_reason("lib/session_store.py").is_some());
    }

    #[test]
    fn test_plain_files_untouched() {
        assert!(key_file_reason("src/utils/strings.rs").is_none());
        assert!(key_file_reason("README.md").is_none());
    }

    #[test]
    fn test_is_code_file() {
        assert!(is_code_file("src/main.rs"));
        assert!(is_code_file("app/Model.java"));
        assert!(!is_code_file("docs/guide.md"));
        assert!(!is_code_file("LICENSE"));
    }
}
