//! Document generation
//!
//! `generate` is a pure transformation of session state: the same context,
//! answers, and task graph always produce the same sections, task summary,
//! and completeness ratio. Only `generated_at` differs between runs, and
//! content equality checks exclude it.

use chrono::Utc;
use prdgen_catalog::{section_order, Section};
use prdgen_core::{
    AnswerValue, Complexity, Document, DocumentSection, PrdError, Result,
};
use prdgen_engine::{QuestionEngine, Session};
use tracing::debug;

/// Generate a document from the session's current state
///
/// Partial interviews are allowed; the produced document carries the
/// answered/applicable completeness ratio so callers can decide whether
/// to export it. A session with zero answers fails with `EmptySession`.
pub fn generate(session: &Session, engine: &QuestionEngine) -> Result<Document> {
    if session.answers().is_empty() {
        return Err(PrdError::EmptySession);
    }

    let completeness = engine.completeness(&session.context, session.answers());
    debug!(
        "Generating document for {} at {:.0}% completeness",
        session.id,
        completeness * 100.0
    );

    let sections = section_order(session.context.product_type)
        .iter()
        .filter_map(|section| build_section(session, engine, *section))
        .collect();

    let title = session
        .answers()
        .get("project_name")
        .map(|v| v.render())
        .unwrap_or_else(|| session.name.clone());

    Ok(Document {
        title,
        sections,
        task_summary: prdgen_graph::summarize(session.tasks()),
        completeness,
        generated_at: Utc::now(),
    })
}

/// Generate a document and record it on the session
///
/// Appends a new version; when the interview had no questions left the
/// session advances to completed.
pub fn generate_and_record(session: &mut Session, engine: &QuestionEngine) -> Result<Document> {
    let document = generate(session, engine)?;
    let complete = engine.interview_complete(&session.context, session.answers());
    session.record_document(document.clone(), complete);
    Ok(document)
}

/// Assemble one section, or `None` when it has no answered questions
///
/// Answered questions that later became inapplicable still contribute:
/// answers are historical record and are never silently dropped.
fn build_section(
    session: &Session,
    engine: &QuestionEngine,
    section: Section,
) -> Option<DocumentSection> {
    let answered: Vec<(&str, &AnswerValue)> = engine
        .catalog()
        .questions()
        .iter()
        .filter(|q| q.section == section)
        .filter_map(|q| session.answers().get(&q.key).map(|v| (q.key.as_str(), v)))
        .collect();

    if answered.is_empty() {
        return None;
    }

    let mut body = String::new();
    if section == Section::Overview {
        body.push_str(&overview_lead(session));
        body.push_str("\n\n");
    }
    for (i, (key, value)) in answered.iter().enumerate() {
        if i > 0 {
            body.push('\n');
        }
        body.push_str(&format!("{}: {}", humanize(key), value.render()));
    }

    Some(DocumentSection {
        heading: section.heading().to_string(),
        body,
        source_question_keys: answered.iter().map(|(k, _)| k.to_string()).collect(),
    })
}

/// Executive-summary style lead paragraph for the overview section
fn overview_lead(session: &Session) -> String {
    let name = session
        .answers()
        .get("project_name")
        .map(|v| v.render())
        .unwrap_or_else(|| session.name.clone());

    let product = session.context.product_type.to_string().replace('_', " ");
    let mut lead = format!("{} is a {} solution", name, product);

    if let Some(problem) = session.answers().get("problem_statement") {
        lead.push_str(&format!(" that addresses {}", problem.render()));
    }
    lead.push_str(". ");

    let complexity_desc = match session.context.complexity {
        Complexity::Simple => "a streamlined solution designed for rapid deployment",
        Complexity::Moderate => "a comprehensive solution with standard features",
        Complexity::Complex => "an advanced solution with sophisticated capabilities",
        Complexity::Enterprise => "an enterprise-grade solution with comprehensive features",
    };
    lead.push_str(&format!("This is {}", complexity_desc));

    if let Some(industry) = session.context.industry {
        lead.push_str(&format!(
            " targeted at the {} industry",
            industry.to_string().replace('_', " ")
        ));
    }
    lead.push('.');
    lead
}

fn humanize(key: &str) -> String {
    let mut label = key.replace('_', " ");
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    label
}
