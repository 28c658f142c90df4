use itertools::Itertools;
use log::debug;
use serde::Serialize;

use findz_core::{metered_contains, Variant};

/// The worked example every driver run reproduces.
pub const SAMPLE_SEQ: [i64; 5] = [3, 8, 2, 5, 10];
pub const SAMPLE_QUERIES: [i64; 2] = [5, 99];

const SEPARATOR: &str = "----------------------------------------";

/// Verdict of one scan variant for one query.
#[derive(Serialize, Debug, Clone)]
pub struct VariantCheck {
    pub variant: Variant,
    pub label: &'static str,
    pub outcome: bool,
    pub comparisons: usize,
}

/// All four verdicts for a single query, in registry order.
#[derive(Serialize, Debug, Clone)]
pub struct QuerySection {
    pub query: i64,
    pub checks: Vec<VariantCheck>,
}

#[derive(Serialize, Debug, Clone)]
pub struct MembershipReport {
    pub sequence: Vec<i64>,
    pub sections: Vec<QuerySection>,
}

/// Runs every scan variant over `seq` for each query in turn.
pub fn run_checks(seq: &[i64], queries: &[i64]) -> MembershipReport {
    let mut sections = Vec::with_capacity(queries.len());
    for &query in queries {
        debug!(
            "checking membership of {} in [{}]",
            query,
            seq.iter().join(", ")
        );
        let checks = Variant::ALL
            .iter()
            .map(|&variant| {
                let (outcome, comparisons) = metered_contains(variant, seq, &query);
                debug!(
                    "{} answered {} after {} comparisons",
                    variant.label(),
                    outcome,
                    comparisons
                );
                VariantCheck {
                    variant,
                    label: variant.label(),
                    outcome,
                    comparisons,
                }
            })
            .collect();
        sections.push(QuerySection { query, checks });
    }
    MembershipReport {
        sequence: seq.to_vec(),
        sections,
    }
}

/// Renders the report as labeled result lines, one separator line between
/// query sections.
pub fn render_text(report: &MembershipReport) -> Vec<String> {
    let mut lines = Vec::new();
    for (position, section) in report.sections.iter().enumerate() {
        if position > 0 {
            lines.push(SEPARATOR.to_string());
        }
        for check in &section.checks {
            lines.push(format!("{}: {}", check.label, check.outcome));
        }
    }
    lines
}

pub fn render_json(report: &MembershipReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_run_produces_nine_lines_in_stable_order() {
        let report = run_checks(&SAMPLE_SEQ, &SAMPLE_QUERIES);
        let lines = render_text(&report);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[4], SEPARATOR);
        for line in &lines[..4] {
            assert!(line.ends_with(": true"), "unexpected line: {line}");
        }
        for line in &lines[5..] {
            assert!(line.ends_with(": false"), "unexpected line: {line}");
        }
    }

    #[test]
    fn result_lines_identify_their_variant() {
        let report = run_checks(&SAMPLE_SEQ, &SAMPLE_QUERIES);
        let lines = render_text(&report);
        let expected_labels: Vec<&str> = Variant::ALL.iter().map(|v| v.label()).collect();
        for (line, label) in lines[..4].iter().zip(&expected_labels) {
            assert_eq!(line, &format!("{label}: true"));
        }
        for (line, label) in lines[5..].iter().zip(&expected_labels) {
            assert_eq!(line, &format!("{label}: false"));
        }
    }

    #[test]
    fn report_records_comparison_costs() {
        let report = run_checks(&SAMPLE_SEQ, &SAMPLE_QUERIES);
        let hit = &report.sections[0];
        assert_eq!(hit.query, 5);
        for check in &hit.checks {
            match check.variant {
                // The flag scan never exits early.
                Variant::Flag => assert_eq!(check.comparisons, SAMPLE_SEQ.len()),
                // 5 sits at index 3.
                _ => assert_eq!(check.comparisons, 4),
            }
        }
        let miss = &report.sections[1];
        for check in &miss.checks {
            assert_eq!(check.comparisons, SAMPLE_SEQ.len());
        }
    }

    #[test]
    fn json_dump_carries_the_same_outcomes() {
        let report = run_checks(&SAMPLE_SEQ, &SAMPLE_QUERIES);
        let dump = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&dump).unwrap();
        assert_eq!(value["sequence"], serde_json::json!([3, 8, 2, 5, 10]));
        let sections = value["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 2);
        for check in sections[0]["checks"].as_array().unwrap() {
            assert_eq!(check["outcome"], serde_json::json!(true));
        }
        for check in sections[1]["checks"].as_array().unwrap() {
            assert_eq!(check["outcome"], serde_json::json!(false));
        }
    }

    #[test]
    fn empty_query_list_renders_nothing() {
        let report = run_checks(&SAMPLE_SEQ, &[]);
        assert!(render_text(&report).is_empty());
    }
}
