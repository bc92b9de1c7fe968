//! Document rendering
//!
//! Adapters consume the document model alone; everything needed to render
//! is already on it. The pdf format currently renders the text form since
//! no typeset backend is wired in.

use prdgen_core::{Document, Result};
use tracing::warn;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Text,
    Pdf,
}

impl ExportFormat {
    /// File extension for exported files
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Text => "txt",
            Self::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Text => write!(f, "text"),
            Self::Pdf => write!(f, "pdf"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "text" | "txt" => Ok(Self::Text),
            "pdf" => Ok(Self::Pdf),
            _ => Err(format!("Invalid export format: {}", s)),
        }
    }
}

/// Render a document to bytes in the requested format
pub fn render(document: &Document, format: ExportFormat) -> Result<Vec<u8>> {
    let output = match format {
        ExportFormat::Markdown => render_markdown(document),
        ExportFormat::Text => render_text(document),
        ExportFormat::Pdf => {
            warn!("No typeset backend available; rendering pdf export as plain text");
            render_text(document)
        }
    };
    Ok(output.into_bytes())
}

fn render_markdown(document: &Document) -> String {
    let mut out = format!("# {}\n", document.title);

    if document.completeness < 1.0 {
        out.push_str(&format!(
            "\n> Interview {:.0}% complete at generation time\n",
            document.completeness * 100.0
        ));
    }

    for section in &document.sections {
        out.push_str(&format!("\n## {}\n\n{}\n", section.heading, section.body));
    }

    out.push_str("\n## Task Summary\n\n");
    let summary = &document.task_summary;
    out.push_str(&format!(
        "{} tasks: {} pending, {} in progress, {} completed, {} blocked\n\n",
        summary.total, summary.pending, summary.in_progress, summary.completed, summary.blocked
    ));
    for row in &summary.rows {
        out.push_str(&format!(
            "- **{}** {} ({}, {}, {}h est)\n",
            row.id, row.title, row.status, row.difficulty, row.estimated_hours
        ));
    }

    out.push_str(&format!(
        "\n_Generated {}_\n",
        document.generated_at.to_rfc3339()
    ));
    out
}

fn render_text(document: &Document) -> String {
    let mut out = format!("{}\n{}\n", document.title, "=".repeat(document.title.len()));

    if document.completeness < 1.0 {
        out.push_str(&format!(
            "\nInterview {:.0}% complete at generation time\n",
            document.completeness * 100.0
        ));
    }

    for section in &document.sections {
        out.push_str(&format!(
            "\n{}\n\n{}\n",
            section.heading.to_uppercase(),
            section.body
        ));
    }

    out.push_str("\nTASK SUMMARY\n\n");
    out.push_str(&document.task_summary.to_string());

    out.push_str(&format!(
        "\nGenerated {}\n",
        document.generated_at.to_rfc3339()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use prdgen_core::{DocumentSection, TaskSummary};

    fn document() -> Document {
        Document {
            title: "Acme".to_string(),
            sections: vec![DocumentSection {
                heading: "Overview".to_string(),
                body: "Problem statement: slow builds".to_string(),
                source_question_keys: vec!["problem_statement".to_string()],
            }],
            task_summary: TaskSummary {
                total: 1,
                pending: 1,
                in_progress: 0,
                completed: 0,
                blocked: 0,
                rows: Vec::new(),
            },
            completeness: 0.5,
            generated_at: Utc::now(),
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert!("docx".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_markdown_render() {
        let bytes = render(&document(), ExportFormat::Markdown).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("# Acme\n"));
        assert!(text.contains("## Overview"));
        assert!(text.contains("Problem statement: slow builds"));
        assert!(text.contains("## Task Summary"));
        assert!(text.contains("50% complete"));
    }

    #[test]
    fn test_text_render() {
        let bytes = render(&document(), ExportFormat::Text).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("Acme\n====\n"));
        assert!(text.contains("OVERVIEW"));
        assert!(text.contains("TASK SUMMARY"));
    }

    #[test]
    fn test_pdf_falls_back_to_text() {
        let doc = document();
        let pdf = render(&doc, ExportFormat::Pdf).unwrap();
        let text = render(&doc, ExportFormat::Text).unwrap();
        assert_eq!(pdf, text);
    }

    #[test]
    fn test_complete_document_omits_banner() {
        let mut doc = document();
        doc.completeness = 1.0;
        let text = String::from_utf8(render(&doc, ExportFormat::Markdown).unwrap()).unwrap();
        assert!(!text.contains("complete at generation time"));
    }
}
