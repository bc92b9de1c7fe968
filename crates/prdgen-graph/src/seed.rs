//! Initial task derivation from product context

use prdgen_core::{Complexity, ProductContext, Result, SessionId, TaskDifficulty};

use crate::graph::TaskGraph;

/// Seed a session's task graph from its product context
///
/// Every session gets the interview -> draft -> review chain. Complex and
/// enterprise products add a technical specification task; regulated
/// industries add a compliance framework task. Both hang off the draft
/// task.
pub fn derive_initial(session: SessionId, context: &ProductContext) -> Result<TaskGraph> {
    let mut graph = TaskGraph::new(session);

    let interview = graph.add_task(
        "Conduct comprehensive interview",
        vec![],
        TaskDifficulty::Easy,
        2,
    )?;
    let draft = graph.add_task(
        "Generate initial PRD content",
        vec![interview],
        TaskDifficulty::Medium,
        4,
    )?;
    graph.add_task(
        "Review and refine PRD",
        vec![draft],
        TaskDifficulty::Easy,
        2,
    )?;

    if context.complexity >= Complexity::Complex {
        graph.add_task(
            "Create detailed technical specifications",
            vec![draft],
            TaskDifficulty::Hard,
            8,
        )?;
    }

    if context.industry.map(|i| i.is_regulated()).unwrap_or(false) {
        graph.add_task(
            "Develop compliance framework",
            vec![draft],
            TaskDifficulty::Expert,
            6,
        )?;
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prdgen_core::{Industry, ProductType, TaskStatus};

    #[test]
    fn test_base_chain_for_simple_product() {
        let context = ProductContext::new(ProductType::LandingPage, Complexity::Simple);
        let graph = derive_initial(SessionId(1), &context).unwrap();

        assert_eq!(graph.len(), 3);
        let titles: Vec<&str> = graph.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Conduct comprehensive interview",
                "Generate initial PRD content",
                "Review and refine PRD"
            ]
        );
        assert!(graph.tasks().iter().all(|t| t.status == TaskStatus::Pending));
    }

    #[test]
    fn test_complex_products_add_technical_spec() {
        let context = ProductContext::new(ProductType::Saas, Complexity::Complex);
        let graph = derive_initial(SessionId(1), &context).unwrap();

        assert_eq!(graph.len(), 4);
        assert!(graph
            .tasks()
            .iter()
            .any(|t| t.title == "Create detailed technical specifications"));
    }

    #[test]
    fn test_regulated_industry_adds_compliance() {
        let context = ProductContext::new(ProductType::WebApp, Complexity::Moderate)
            .with_industry(Industry::Healthcare);
        let graph = derive_initial(SessionId(1), &context).unwrap();

        let compliance = graph
            .tasks()
            .iter()
            .find(|t| t.title == "Develop compliance framework")
            .unwrap();
        assert_eq!(compliance.difficulty, TaskDifficulty::Expert);
        // Depends on the draft task, not the interview
        assert_eq!(compliance.depends_on, vec![SessionId(1).task(2)]);
    }

    #[test]
    fn test_unregulated_industry_skips_compliance() {
        let context = ProductContext::new(ProductType::WebApp, Complexity::Moderate)
            .with_industry(Industry::Retail);
        let graph = derive_initial(SessionId(1), &context).unwrap();
        assert!(!graph
            .tasks()
            .iter()
            .any(|t| t.title == "Develop compliance framework"));
    }

    #[test]
    fn test_enterprise_regulated_gets_both_extras() {
        let context = ProductContext::new(ProductType::Fintech, Complexity::Enterprise)
            .with_industry(Industry::Finance);
        let graph = derive_initial(SessionId(1), &context).unwrap();
        assert_eq!(graph.len(), 5);
    }
}
