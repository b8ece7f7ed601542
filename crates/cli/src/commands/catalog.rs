use commonground_core::catalog::Catalog;
use commonground_core::domain::question::{DepthTier, SituationTag, TemplateKind};
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
struct KindCounts {
    agnostic: usize,
    single_interest: usize,
    cross_interest: usize,
}

#[derive(Debug, Default, Serialize)]
struct DepthCounts {
    icebreaker: usize,
    casual: usize,
    deep: usize,
    unclassified: usize,
}

#[derive(Debug, Default, Serialize)]
struct SituationCounts {
    first_meeting: usize,
    group_setting: usize,
    networking: usize,
    untagged: usize,
}

#[derive(Debug, Serialize)]
struct CatalogReport {
    command: &'static str,
    status: &'static str,
    total_templates: usize,
    with_follow_ups: usize,
    by_kind: KindCounts,
    by_depth: DepthCounts,
    by_situation: SituationCounts,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"command\":\"catalog\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
                error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
            )
        });
    }

    render_human(&report)
}

fn build_report() -> CatalogReport {
    let catalog = Catalog::builtin();

    let mut by_kind = KindCounts::default();
    let mut by_depth = DepthCounts::default();
    let mut by_situation = SituationCounts::default();
    let mut with_follow_ups = 0;

    for template in catalog.templates() {
        match template.kind() {
            TemplateKind::Agnostic => by_kind.agnostic += 1,
            TemplateKind::SingleInterest => by_kind.single_interest += 1,
            TemplateKind::CrossInterest => by_kind.cross_interest += 1,
        }

        match template.depth {
            Some(DepthTier::Icebreaker) => by_depth.icebreaker += 1,
            Some(DepthTier::Casual) => by_depth.casual += 1,
            Some(DepthTier::Deep) => by_depth.deep += 1,
            None => by_depth.unclassified += 1,
        }

        match template.situation {
            Some(SituationTag::FirstMeeting) => by_situation.first_meeting += 1,
            Some(SituationTag::GroupSetting) => by_situation.group_setting += 1,
            Some(SituationTag::Networking) => by_situation.networking += 1,
            None => by_situation.untagged += 1,
        }

        if !template.follow_ups.is_empty() {
            with_follow_ups += 1;
        }
    }

    CatalogReport {
        command: "catalog",
        status: "ok",
        total_templates: catalog.templates().len(),
        with_follow_ups,
        by_kind,
        by_depth,
        by_situation,
    }
}

fn render_human(report: &CatalogReport) -> String {
    vec![
        format!("question catalog ({} templates):", report.total_templates),
        format!(
            "  kind:      {} single-interest, {} cross-interest, {} agnostic",
            report.by_kind.single_interest, report.by_kind.cross_interest, report.by_kind.agnostic
        ),
        format!(
            "  depth:     {} icebreaker, {} casual, {} deep, {} unclassified",
            report.by_depth.icebreaker,
            report.by_depth.casual,
            report.by_depth.deep,
            report.by_depth.unclassified
        ),
        format!(
            "  situation: {} first_meeting, {} group_setting, {} networking, {} untagged",
            report.by_situation.first_meeting,
            report.by_situation.group_setting,
            report.by_situation.networking,
            report.by_situation.untagged
        ),
        format!("  follow-ups on {} templates", report.with_follow_ups),
    ]
    .join("\n")
}
