use std::env;
use std::sync::{Mutex, OnceLock};

use commonground_cli::commands::{catalog, doctor, interests, suggest};
use serde_json::Value;

fn suggest_args(mine: &[&str], theirs: &[&str]) -> suggest::SuggestArgs {
    suggest::SuggestArgs {
        mine: mine.iter().map(|id| (*id).to_string()).collect(),
        theirs: theirs.iter().map(|id| (*id).to_string()).collect(),
        depth: None,
        situation: None,
        max_per_bucket: None,
        refresh: None,
        json: true,
    }
}

fn bucket_len(payload: &Value, bucket: &str) -> usize {
    payload["result"][bucket].as_array().map(Vec::len).unwrap_or(0)
}

#[test]
fn suggest_returns_bucketed_json_report() {
    with_env(&[], || {
        let result = suggest::run(suggest_args(&["coffee", "hiking"], &["coffee", "movies"]));
        assert_eq!(result.exit_code, 0, "expected successful suggest run");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "suggest");
        assert_eq!(payload["status"], "ok");

        let total = payload["result"]["total_count"].as_u64().expect("total_count present");
        let sum = bucket_len(&payload, "common_questions")
            + bucket_len(&payload, "their_questions")
            + bucket_len(&payload, "cross_questions")
            + bucket_len(&payload, "situation_questions");
        assert_eq!(total as usize, sum);
        assert!(bucket_len(&payload, "common_questions") > 0);
        assert!(bucket_len(&payload, "their_questions") > 0);
    });
}

#[test]
fn suggest_tolerates_unknown_interest_ids() {
    with_env(&[], || {
        let result =
            suggest::run(suggest_args(&["coffee", "__nonexistent__"], &["__nonexistent__"]));
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "ok");

        // The unknown id may echo in the request but never in the result.
        for bucket in
            ["common_questions", "their_questions", "cross_questions", "situation_questions"]
        {
            let questions = payload["result"][bucket].as_array().cloned().unwrap_or_default();
            for question in questions {
                let interests = question["interests"].as_array().cloned().unwrap_or_default();
                assert!(interests.iter().all(|id| id != "__nonexistent__"));
            }
        }
    });
}

#[test]
fn suggest_honors_cap_from_environment() {
    with_env(&[("COMMONGROUND_MAX_PER_BUCKET", "1")], || {
        let result = suggest::run(suggest_args(&["coffee", "hiking"], &["coffee", "movies"]));
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        for bucket in
            ["common_questions", "their_questions", "cross_questions", "situation_questions"]
        {
            assert!(bucket_len(&payload, bucket) <= 1, "{bucket} exceeded the env cap");
        }
        assert_eq!(payload["request"]["max_per_bucket"], 1);
    });
}

#[test]
fn suggest_fails_cleanly_on_invalid_env_cap() {
    with_env(&[("COMMONGROUND_MAX_PER_BUCKET", "banana")], || {
        let result = suggest::run(suggest_args(&["coffee"], &["coffee"]));
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "suggest");
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "config_validation");
    });
}

#[test]
fn suggest_refresh_token_is_stable_across_runs() {
    with_env(&[], || {
        let mut args = suggest_args(&[], &[]);
        args.max_per_bucket = Some(3);
        args.refresh = Some("round-2".to_string());

        let first = suggest::run(args.clone());
        let second = suggest::run(args);

        let first_payload = parse_payload(&first.output);
        let second_payload = parse_payload(&second.output);
        assert_eq!(
            first_payload["result"]["situation_questions"],
            second_payload["result"]["situation_questions"]
        );
    });
}

#[test]
fn interests_lists_the_builtin_catalog() {
    with_env(&[], || {
        let output = interests::run(true);
        let payload = parse_payload(&output);

        assert_eq!(payload["command"], "interests");
        assert_eq!(payload["status"], "ok");

        let entries = payload["interests"].as_array().expect("interests array");
        assert_eq!(entries.len(), payload["count"].as_u64().unwrap() as usize);
        assert!(entries.len() >= 10);
        assert!(entries.iter().any(|interest| interest["id"] == "coffee"));
    });
}

#[test]
fn catalog_summary_counts_add_up() {
    with_env(&[], || {
        let output = catalog::run(true);
        let payload = parse_payload(&output);

        assert_eq!(payload["command"], "catalog");
        let total = payload["total_templates"].as_u64().unwrap();

        let by_kind = &payload["by_kind"];
        let kind_sum = by_kind["agnostic"].as_u64().unwrap()
            + by_kind["single_interest"].as_u64().unwrap()
            + by_kind["cross_interest"].as_u64().unwrap();
        assert_eq!(kind_sum, total);

        let by_depth = &payload["by_depth"];
        let depth_sum = by_depth["icebreaker"].as_u64().unwrap()
            + by_depth["casual"].as_u64().unwrap()
            + by_depth["deep"].as_u64().unwrap()
            + by_depth["unclassified"].as_u64().unwrap();
        assert_eq!(depth_sum, total);
    });
}

#[test]
fn doctor_reports_all_checks_passing() {
    with_env(&[], || {
        let output = doctor::run(true);
        let payload = parse_payload(&output);

        assert_eq!(payload["command"], "doctor");
        assert_eq!(payload["overall_status"], "pass");

        let checks = payload["checks"].as_array().expect("checks array");
        let names: Vec<&str> =
            checks.iter().filter_map(|check| check["name"].as_str()).collect();
        assert_eq!(names, vec!["config_validation", "catalog_integrity", "engine_smoke"]);
        assert!(checks.iter().all(|check| check["status"] == "pass"));
    });
}

#[test]
fn doctor_flags_invalid_config_but_still_runs_engine_checks() {
    with_env(&[("COMMONGROUND_MAX_PER_BUCKET", "0")], || {
        let output = doctor::run(true);
        let payload = parse_payload(&output);

        assert_eq!(payload["overall_status"], "fail");

        let checks = payload["checks"].as_array().expect("checks array");
        let config_check =
            checks.iter().find(|check| check["name"] == "config_validation").unwrap();
        assert_eq!(config_check["status"], "fail");

        let engine_check = checks.iter().find(|check| check["name"] == "engine_smoke").unwrap();
        assert_eq!(engine_check["status"], "pass");
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "COMMONGROUND_CONFIG",
        "COMMONGROUND_MAX_PER_BUCKET",
        "COMMONGROUND_LOGGING_LEVEL",
        "COMMONGROUND_LOGGING_FORMAT",
        "COMMONGROUND_LOG_LEVEL",
        "COMMONGROUND_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
