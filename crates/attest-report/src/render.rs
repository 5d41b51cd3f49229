//! Markdown report rendering

use std::collections::HashMap;
use std::fmt::Write;

use attest_domain::{ClaimVerification, RemediationTask, Severity, Verdict};

use crate::config::ReportConfig;
use crate::score::VerdictCounts;

/// Render the full audit report as markdown.
///
/// Rendering is pure: the same inputs always produce the same string.
/// Sections appear in first-encounter order of the (claim-id-sorted)
/// verification list; within a section, failures surface first.
pub fn generate_report(
    verifications: &[ClaimVerification],
    tasks: &[RemediationTask],
    config: &ReportConfig,
) -> String {
    let mut out = String::new();

    out.push_str("# Compliance Audit Report\n\n");
    render_summary(&mut out, verifications, tasks);
    render_priority_matrix(&mut out, verifications);
    render_sections(&mut out, verifications, config);
    render_checklist(&mut out, tasks);

    out
}

fn render_summary(out: &mut String, verifications: &[ClaimVerification], tasks: &[RemediationTask]) {
    let counts = VerdictCounts::tally(verifications);

    out.push_str("## Executive Summary\n\n");
    let _ = writeln!(out, "- **Compliance score:** {:.1}%", counts.score());
    let _ = writeln!(out, "- **Claims checked:** {}", counts.total());
    let _ = writeln!(
        out,
        "- **Verdicts:** {} PASS, {} PARTIAL, {} FAIL, {} N/A",
        counts.pass, counts.partial, counts.fail, counts.na
    );
    let _ = writeln!(out, "- **Remediation tasks:** {}", tasks.len());
    out.push('\n');
}

fn render_priority_matrix(out: &mut String, verifications: &[ClaimVerification]) {
    let mut cells: HashMap<(Severity, Verdict), usize> = HashMap::new();
    for v in verifications {
        *cells.entry((v.claim.severity, v.verdict)).or_default() += 1;
    }

    const COLUMNS: [Verdict; 4] = [
        Verdict::Fail,
        Verdict::Partial,
        Verdict::Pass,
        Verdict::NotApplicable,
    ];

    out.push_str("## Priority Matrix\n\n");
    out.push_str("| Severity | FAIL | PARTIAL | PASS | N/A |\n");
    out.push_str("|---|---|---|---|---|\n");
    for severity in Severity::all() {
        let _ = write!(out, "| {} |", severity);
        for verdict in COLUMNS {
            let count = cells.get(&(severity, verdict)).copied().unwrap_or(0);
            let _ = write!(out, " {} |", count);
        }
        out.push('\n');
    }
    out.push('\n');
}

fn render_sections(
    out: &mut String,
    verifications: &[ClaimVerification],
    config: &ReportConfig,
) {
    out.push_str("## Findings by Section\n\n");

    // Preserve the order sections first appear in; the input arrives
    // sorted by claim id, so this order is stable across runs.
    let mut section_order: Vec<&str> = Vec::new();
    let mut by_section: HashMap<&str, Vec<&ClaimVerification>> = HashMap::new();
    for v in verifications {
        let section = v.claim.section.as_str();
        if !by_section.contains_key(section) {
            section_order.push(section);
        }
        by_section.entry(section).or_default().push(v);
    }

    for section in section_order {
        let _ = writeln!(out, "### {}\n", section);

        let mut entries = by_section.remove(section).unwrap_or_default();
        entries.sort_by_key(|v| v.verdict.report_rank());

        for v in entries {
            let _ = writeln!(
                out,
                "#### {} `{}` ({}, {})\n",
                v.verdict, v.claim_id, v.claim.severity, v.claim.category
            );
            let _ = writeln!(out, "> {}\n", v.claim.text);
            let _ = writeln!(out, "{}\n", v.reasoning);

            for evidence in &v.evidence {
                match evidence.line_number {
                    Some(line) => {
                        let _ = writeln!(out, "- `{}:{}`", evidence.file, line);
                    }
                    None => {
                        let _ = writeln!(out, "- `{}`", evidence.file);
                    }
                }
                let snippet = truncate_snippet(&evidence.snippet, config.snippet_chars);
                if !snippet.is_empty() {
                    let _ = writeln!(out, "\n  ```\n{}\n  ```", indent(&snippet, "  "));
                }
            }
            if !v.evidence.is_empty() {
                out.push('\n');
            }
        }
    }
}

fn render_checklist(out: &mut String, tasks: &[RemediationTask]) {
    out.push_str("## Fix Checklist\n\n");

    if tasks.is_empty() {
        out.push_str("No remediation tasks.\n");
        return;
    }

    // Tasks arrive severity-sorted with ids renumbered from 1.
    for task in tasks {
        let _ = writeln!(
            out,
            "- [ ] **{}.** [{}] {} ({}, {}, effort: {})",
            task.id,
            task.severity,
            task.title,
            task.claim_id,
            task.action.as_str(),
            task.estimated_effort.as_str()
        );
        let _ = writeln!(out, "  - {}", task.description);
        if !task.target_files.is_empty() {
            let _ = writeln!(out, "  - Files: {}", task.target_files.join(", "));
        }
        if !task.code_guidance.is_empty() {
            let _ = writeln!(out, "  - Guidance: {}", task.code_guidance);
        }
    }
}

/// Truncate a snippet to `max_chars` characters, appending an ellipsis
/// when anything was cut. Char-based, never splits a UTF-8 scalar.
fn truncate_snippet(snippet: &str, max_chars: usize) -> String {
    let trimmed = snippet.trim_end();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}...", cut)
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}
