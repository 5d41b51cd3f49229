//! Oracle prompts for claim extraction

/// System prompt shared by both extraction modes. Enumerates the exact
/// JSON schema and the closed category/severity vocabularies.
pub const EXTRACTION_SYSTEM_PROMPT: &str = r#"You are a compliance auditor extracting discrete, checkable claims.
Each claim must follow this exact JSON shape:

{
  "id": "claim-1",
  "section": "section heading the claim came from",
  "category": "data-privacy" | "security" | "functionality" | "operational" | "legal",
  "severity": "critical" | "high" | "medium" | "low",
  "text": "the atomic assertion",
  "testable": true | false
}

Rules:
- One assertion per claim; split compound statements
- category and severity must come from the closed lists above
- testable is false only when no codebase evidence could ever settle the
  claim (marketing language, legal boilerplate, intent statements)
- Keep text verbatim from the source where possible

Output format: a JSON array of claim objects only. No markdown code
blocks, no explanations, no trailing commentary."#;

/// Build the user prompt for extracting claims from a document.
pub fn document_prompt(document: &str) -> String {
    format!(
        "Extract every checkable claim from the following specification \
         document.\n\nDocument:\n---\n{}\n---\n\n\
         Return the JSON array of claims.",
        document
    )
}

/// Build the user prompt for inferring claims from a codebase summary.
pub fn codebase_prompt(file_tree: &[String], key_file_summary: &str) -> String {
    format!(
        "No specification document is available. Infer the claims this \
         codebase implicitly makes (security posture, data handling, \
         functionality) from its structure, then phrase each as a \
         checkable assertion.\n\n\
         Codebase summary: {}\n\nFile tree:\n{}\n\n\
         Return the JSON array of claims.",
        key_file_summary,
        file_tree.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_enumerates_schema() {
        assert!(EXTRACTION_SYSTEM_PROMPT.contains("\"category\""));
        assert!(EXTRACTION_SYSTEM_PROMPT.contains("data-privacy"));
        assert!(EXTRACTION_SYSTEM_PROMPT.contains("\"severity\""));
        assert!(EXTRACTION_SYSTEM_PROMPT.contains("critical"));
        assert!(EXTRACTION_SYSTEM_PROMPT.contains("testable"));
    }

    #[test]
    fn test_document_prompt_embeds_document() {
        let prompt = document_prompt("All data is encrypted.");
        assert!(prompt.contains("All data is encrypted."));
    }

    #[test]
    fn test_codebase_prompt_embeds_tree_and_summary() {
        let tree = vec!["src/auth.rs".to_string(), "src/api/users.rs".to_string()];
        let prompt = codebase_prompt(&tree, "repo: 2 files");
        assert!(prompt.contains("src/auth.rs"));
        assert!(prompt.contains("repo: 2 files"));
    }
}
