use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MISSING_MESSAGE_REPLY: &str = "Please provide a question to analyze.";

pub const NEXT_STEPS: [&str; 4] = [
    "Consider extending the sample size with multi-mission aggregation to improve statistical power.",
    "Evaluate countermeasure protocols alongside biomarkers to isolate which interventions drive recovery.",
    "Explore cross-species comparisons to identify conserved adaptation mechanisms.",
    "Integrate radiation dosimetry with immune response tracking to reveal dose-response patterns.",
];

pub const FOLLOW_UP_IDEAS: [&str; 3] = [
    "Pair in-flight telemetry with post-landing clinical follow-ups to detect latent effects.",
    "Design a mixed-methods study that couples quantitative biomarkers with astronaut qualitative reports.",
    "Leverage machine learning to correlate omics signatures with mission conditions.",
];

const KEYWORD_SNIPPET_LEN: usize = 3;

/// Optional context about the paper the question refers to.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct PaperContext {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub keywords: Vec<String>,
    pub authors: Vec<String>,
    pub source: Option<String>,
    pub date: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

/// Formats the templated analysis reply. The next-step and follow-up lines
/// are drawn from fixed pools, so identical input can produce different
/// replies.
pub fn compose_reply<R: Rng + ?Sized>(message: &str, paper: &PaperContext, rng: &mut R) -> String {
    let keyword_snippet = if paper.keywords.is_empty() {
        "space biology".to_owned()
    } else {
        paper
            .keywords
            .iter()
            .take(KEYWORD_SNIPPET_LEN)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let author_snippet = paper
        .authors
        .first()
        .map(|author| format!("{author} et al."))
        .unwrap_or_else(|| "the research team".to_owned());
    let overview = match non_blank(&paper.summary) {
        Some(summary) => summary.to_owned(),
        None => format!(
            "This study explores key adaptation mechanisms related to {keyword_snippet}."
        ),
    };
    let subject = match non_blank(&paper.title) {
        Some(title) => format!("\"{title}\""),
        None => "this paper".to_owned(),
    };
    let source_note = match (non_blank(&paper.source), non_blank(&paper.date)) {
        (Some(source), Some(date)) => format!(" (source: {source}, {date})"),
        (Some(source), None) => format!(" (source: {source})"),
        _ => String::new(),
    };

    let next_step = NEXT_STEPS[rng.gen_range(0..NEXT_STEPS.len())];
    let follow_up = FOLLOW_UP_IDEAS[rng.gen_range(0..FOLLOW_UP_IDEAS.len())];

    format!(
        "Here is what I can derive from {subject}:\n\
         \n\
         • Overview: {overview}\n\
         • Key insight: {author_snippet} highlight how mission conditions influence long-term adaptation.\n\
         • Suggested next step: {next_step}\n\
         • Follow-up idea: {follow_up}\n\
         \n\
         You asked: \"{message}\"{source_note}. Align these recommendations with NASA’s Human Research Roadmap for validation."
    )
}
