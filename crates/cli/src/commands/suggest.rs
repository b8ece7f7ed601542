use commonground_core::config::{AppConfig, LoadOptions};
use commonground_core::domain::interest::InterestId;
use commonground_core::domain::question::{DepthTier, SituationTag};
use commonground_core::errors::ApplicationError;
use commonground_core::recommend::{
    GeneratedQuestion, QuestionBucket, QuestionEngine, RecommendationRequest,
    RecommendationResult,
};
use serde::Serialize;

use super::CommandResult;

#[derive(Debug, Clone)]
pub struct SuggestArgs {
    pub mine: Vec<String>,
    pub theirs: Vec<String>,
    pub depth: Option<DepthTier>,
    pub situation: Option<SituationTag>,
    pub max_per_bucket: Option<usize>,
    pub refresh: Option<String>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SuggestReport {
    command: &'static str,
    status: &'static str,
    request: RequestEcho,
    result: RecommendationResult,
}

#[derive(Debug, Serialize)]
struct RequestEcho {
    mine: Vec<String>,
    theirs: Vec<String>,
    depth: Option<DepthTier>,
    situation: Option<SituationTag>,
    max_per_bucket: Option<usize>,
    refreshed: bool,
}

pub fn run(args: SuggestArgs) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            let error = ApplicationError::Configuration(error.to_string());
            return CommandResult::failure("suggest", error.error_class(), error.to_string(), 2);
        }
    };

    // A cap on the command line wins over the configured one.
    let max_per_bucket = args.max_per_bucket.or(config.engine.max_per_bucket);

    let mut request = RecommendationRequest::new(
        args.mine.iter().map(|id| InterestId::from(id.as_str())).collect(),
        args.theirs.iter().map(|id| InterestId::from(id.as_str())).collect(),
    );
    request.depth = args.depth;
    request.situation = args.situation;
    request.max_per_bucket = max_per_bucket;
    request.refresh_token = args.refresh.clone();

    let engine = QuestionEngine::new();
    let result = engine.generate(&request);

    tracing::debug!(
        event_name = "cli.suggest.generated",
        total_count = result.total_count,
        capped = max_per_bucket.is_some(),
        refreshed = request.refresh_token.is_some(),
        "generated conversation starters"
    );

    let output = if args.json {
        let report = SuggestReport {
            command: "suggest",
            status: "ok",
            request: RequestEcho {
                mine: args.mine,
                theirs: args.theirs,
                depth: args.depth,
                situation: args.situation,
                max_per_bucket,
                refreshed: args.refresh.is_some(),
            },
            result,
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"command\":\"suggest\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
                error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
            )
        })
    } else {
        render_human(&engine, &result)
    };

    CommandResult { exit_code: 0, output }
}

fn render_human(engine: &QuestionEngine, result: &RecommendationResult) -> String {
    if result.is_empty() {
        return "No starters matched. Add interests or drop a filter.".to_string();
    }

    let mut lines = vec![format!("Conversation starters ({})", result.total_count)];

    let buckets: [(QuestionBucket, &[GeneratedQuestion]); 4] = [
        (QuestionBucket::Shared, &result.common_questions),
        (QuestionBucket::TheirsOnly, &result.their_questions),
        (QuestionBucket::Cross, &result.cross_questions),
        (QuestionBucket::Situation, &result.situation_questions),
    ];

    for (bucket, questions) in buckets {
        if questions.is_empty() {
            continue;
        }

        lines.push(String::new());
        lines.push(format!("{} ({})", bucket.description(), questions.len()));
        for question in questions {
            lines.push(format!("  {}", render_question(engine, question)));
            for follow_up in &question.follow_ups {
                lines.push(format!("      \u{21b3} {follow_up}"));
            }
        }
    }

    lines.join("\n")
}

fn render_question(engine: &QuestionEngine, question: &GeneratedQuestion) -> String {
    let chips: Vec<String> = question
        .interests
        .iter()
        .filter_map(|id| engine.catalog().interest(id))
        .map(|interest| interest.display())
        .collect();

    let mut tags = Vec::new();
    if let Some(depth) = question.depth {
        tags.push(depth.label().to_string());
    }
    if let Some(situation) = question.situation {
        tags.push(situation.label().to_string());
    }

    let mut line = String::new();
    if !chips.is_empty() {
        line.push_str(&chips.join(" \u{00d7} "));
        line.push_str(": ");
    }
    line.push_str(&question.text);
    if !tags.is_empty() {
        line.push_str(&format!("  [{}]", tags.join(" \u{00b7} ")));
    }

    line
}
