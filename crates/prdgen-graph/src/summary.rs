//! Point-in-time snapshots of a task graph for generated documents

use prdgen_core::{TaskRow, TaskStatus, TaskSummary};

use crate::graph::TaskGraph;

/// Snapshot the graph's current state into a document-embeddable summary
pub fn summarize(graph: &TaskGraph) -> TaskSummary {
    let count = |status: TaskStatus| graph.tasks().iter().filter(|t| t.status == status).count();

    TaskSummary {
        total: graph.len(),
        pending: count(TaskStatus::Pending),
        in_progress: count(TaskStatus::InProgress),
        completed: count(TaskStatus::Completed),
        blocked: count(TaskStatus::Blocked),
        rows: graph
            .tasks()
            .iter()
            .map(|t| TaskRow {
                id: t.id,
                title: t.title.clone(),
                status: t.status,
                difficulty: t.difficulty,
                estimated_hours: t.estimated_hours,
                actual_hours: t.actual_hours,
                depends_on: t.depends_on.clone(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prdgen_core::{SessionId, TaskDifficulty};

    #[test]
    fn test_snapshot_counts_by_status() {
        let mut graph = TaskGraph::new(SessionId(3));
        let t1 = graph
            .add_task("T1", vec![], TaskDifficulty::Easy, 1)
            .unwrap();
        graph
            .add_task("T2", vec![t1], TaskDifficulty::Medium, 2)
            .unwrap();
        graph.transition(t1, TaskStatus::InProgress).unwrap();

        let summary = summarize(&graph);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].id, t1);
    }

    #[test]
    fn test_display_lists_every_row() {
        let mut graph = TaskGraph::new(SessionId(1));
        graph
            .add_task("Only", vec![], TaskDifficulty::Easy, 1)
            .unwrap();

        let text = summarize(&graph).to_string();
        assert!(text.contains("1 total"));
        assert!(text.contains("PRD-001-1 [pending] Only"));
    }
}
