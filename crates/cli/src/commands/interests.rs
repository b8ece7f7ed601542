use commonground_core::catalog::Catalog;
use commonground_core::domain::interest::Interest;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct InterestsReport {
    command: &'static str,
    status: &'static str,
    count: usize,
    interests: Vec<Interest>,
}

pub fn run(json_output: bool) -> String {
    let catalog = Catalog::builtin();
    let interests = catalog.interests().to_vec();

    if json_output {
        let report = InterestsReport {
            command: "interests",
            status: "ok",
            count: interests.len(),
            interests,
        };
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"command\":\"interests\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&interests)
}

fn render_human(interests: &[Interest]) -> String {
    let mut lines = vec![format!("interest catalog ({} entries):", interests.len())];

    let id_width = interests.iter().map(|interest| interest.id.as_str().len()).max().unwrap_or(0);
    for interest in interests {
        lines.push(format!(
            "  {:id_width$}  {}  ({})",
            interest.id.as_str(),
            interest.display(),
            interest.category.label(),
        ));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
