//! Optional document enrichment boundary
//!
//! An enricher takes a generated document and returns an improved one,
//! e.g. by sending it through an AI provider. The pipeline never depends
//! on one being available: a fully valid document is produced without it,
//! and the passthrough implementation is the default.

use prdgen_core::{Document, Result};

/// Post-generation document enhancement hook
pub trait Enrich {
    fn enhance(&self, document: Document) -> Result<Document>;
}

/// Enricher that returns the document unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughEnricher;

impl Enrich for PassthroughEnricher {
    fn enhance(&self, document: Document) -> Result<Document> {
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use prdgen_core::TaskSummary;

    #[test]
    fn test_passthrough_preserves_content() {
        let document = Document {
            title: "Unchanged".to_string(),
            sections: Vec::new(),
            task_summary: TaskSummary {
                total: 0,
                pending: 0,
                in_progress: 0,
                completed: 0,
                blocked: 0,
                rows: Vec::new(),
            },
            completeness: 1.0,
            generated_at: Utc::now(),
        };

        let enhanced = PassthroughEnricher.enhance(document.clone()).unwrap();
        assert!(enhanced.content_eq(&document));
    }
}
