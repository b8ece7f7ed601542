use std::collections::HashSet;

use commonground_core::catalog::Catalog;
use commonground_core::config::{AppConfig, LoadOptions};
use commonground_core::domain::interest::InterestId;
use commonground_core::recommend::{QuestionEngine, RecommendationRequest};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    command: &'static str,
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"command\":\"doctor\",\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    // The catalog and engine checks do not depend on configuration, so a
    // broken config never hides them.
    let checks = vec![check_config(), check_catalog_integrity(), check_engine_smoke()];

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { command: "doctor", overall_status, summary, checks }
}

fn check_config() -> DoctorCheck {
    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Pass,
            details: format!(
                "configuration loaded and validated (max_per_bucket: {})",
                config
                    .engine
                    .max_per_bucket
                    .map_or_else(|| "unlimited".to_string(), |cap| cap.to_string())
            ),
        },
        Err(error) => DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn check_catalog_integrity() -> DoctorCheck {
    let catalog = Catalog::builtin();
    let violations = catalog.integrity_violations();

    if violations.is_empty() {
        DoctorCheck {
            name: "catalog_integrity",
            status: CheckStatus::Pass,
            details: format!(
                "{} interests, {} templates, no violations",
                catalog.interests().len(),
                catalog.templates().len()
            ),
        }
    } else {
        let mut details: Vec<String> =
            violations.iter().take(3).map(|violation| violation.to_string()).collect();
        if violations.len() > 3 {
            details.push(format!("and {} more", violations.len() - 3));
        }
        DoctorCheck {
            name: "catalog_integrity",
            status: CheckStatus::Fail,
            details: details.join("; "),
        }
    }
}

fn check_engine_smoke() -> DoctorCheck {
    let engine = QuestionEngine::new();
    let request = RecommendationRequest::new(
        vec![InterestId::from("coffee"), InterestId::from("hiking")],
        vec![InterestId::from("coffee"), InterestId::from("movies")],
    );

    let result = engine.generate(&request);

    if result.is_empty() {
        return DoctorCheck {
            name: "engine_smoke",
            status: CheckStatus::Fail,
            details: "two-profile generation returned an empty result".to_string(),
        };
    }

    let ids: Vec<&str> = result.all_questions().map(|question| question.id.as_str()).collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    if ids.len() != unique.len() {
        return DoctorCheck {
            name: "engine_smoke",
            status: CheckStatus::Fail,
            details: "duplicate template ids across buckets".to_string(),
        };
    }

    let shared_ok = result
        .common_questions
        .iter()
        .all(|question| question.interests == vec![InterestId::from("coffee")]);
    if !shared_ok {
        return DoctorCheck {
            name: "engine_smoke",
            status: CheckStatus::Fail,
            details: "shared bucket strayed outside the interest intersection".to_string(),
        };
    }

    DoctorCheck {
        name: "engine_smoke",
        status: CheckStatus::Pass,
        details: format!("{} starters across four buckets, deduplicated", result.total_count),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
