//! Task graph with dependency-respecting status transitions
//!
//! All mutation goes through [`TaskGraph::add_task`] and
//! [`TaskGraph::transition`]; both validate fully before touching state, so
//! a failed call leaves the graph exactly as it was.

use chrono::Utc;
use prdgen_core::{PrdError, Result, SessionId, Task, TaskDifficulty, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// Directed acyclic graph of a session's derived work items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskGraph {
    session: SessionId,
    /// Sequence for the next task id; ids are monotone and never reused
    next_sequence: u32,
    tasks: Vec<Task>,
}

impl TaskGraph {
    /// Create an empty graph for a session
    pub fn new(session: SessionId) -> Self {
        Self {
            session,
            next_sequence: 1,
            tasks: Vec::new(),
        }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Tasks in creation order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by id
    pub fn get(&self, task_id: TaskId) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == task_id)
            .ok_or_else(|| PrdError::UnknownTask(task_id.to_string()))
    }

    /// Add a task with the given dependencies
    ///
    /// Fails with `InvalidDependency` when a dependency id is absent from
    /// the graph, and with `CyclicDependency` when the dependency set
    /// would introduce a cycle (checked by reachability from the
    /// dependencies back to the new task's id, before any insertion).
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        depends_on: Vec<TaskId>,
        difficulty: TaskDifficulty,
        estimated_hours: u32,
    ) -> Result<TaskId> {
        let new_id = self.session.task(self.next_sequence);

        for dep in &depends_on {
            if self.reaches(*dep, new_id) {
                return Err(PrdError::CyclicDependency(format!(
                    "dependency {} would cycle back to {}",
                    dep, new_id
                )));
            }
            if !self.tasks.iter().any(|t| t.id == *dep) {
                return Err(PrdError::InvalidDependency(format!(
                    "dependency {} does not exist in the graph",
                    dep
                )));
            }
        }

        let task = Task::new(new_id, title)
            .with_depends_on(depends_on)
            .with_difficulty(difficulty)
            .with_estimate(estimated_hours);

        self.tasks.push(task);
        self.next_sequence += 1;
        Ok(new_id)
    }

    /// Transition a task to a new status
    ///
    /// Allowed moves: pending -> in_progress, in_progress -> completed,
    /// pending -> blocked, blocked -> pending, in_progress -> blocked.
    /// Entering `in_progress` or `completed` requires every dependency to
    /// be completed; violations reject the call without mutating anything.
    pub fn transition(&mut self, task_id: TaskId, new_status: TaskStatus) -> Result<&Task> {
        let current = self.get(task_id)?.status;

        let allowed = matches!(
            (current, new_status),
            (TaskStatus::Pending, TaskStatus::InProgress)
                | (TaskStatus::InProgress, TaskStatus::Completed)
                | (TaskStatus::Pending, TaskStatus::Blocked)
                | (TaskStatus::Blocked, TaskStatus::Pending)
                | (TaskStatus::InProgress, TaskStatus::Blocked)
        );
        if !allowed {
            return Err(PrdError::InvalidTransition(format!(
                "{}: {} -> {}",
                task_id, current, new_status
            )));
        }

        if matches!(new_status, TaskStatus::InProgress | TaskStatus::Completed) {
            if let Some(unfinished) = self.first_unfinished_dependency(task_id)? {
                return Err(PrdError::DependencyViolation(format!(
                    "{} cannot move to {} while dependency {} is {}",
                    task_id, new_status, unfinished.id, unfinished.status
                )));
            }
        }

        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| PrdError::UnknownTask(task_id.to_string()))?;
        task.status = new_status;
        task.updated_at = Utc::now();
        Ok(task)
    }

    /// Record hours actually spent on a completed task
    pub fn record_actual_hours(&mut self, task_id: TaskId, hours: u32) -> Result<&Task> {
        let status = self.get(task_id)?.status;
        if status != TaskStatus::Completed {
            return Err(PrdError::InvalidTransition(format!(
                "{}: actual hours can only be recorded on a completed task (status is {})",
                task_id, status
            )));
        }

        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| PrdError::UnknownTask(task_id.to_string()))?;
        task.actual_hours = Some(hours);
        task.updated_at = Utc::now();
        Ok(task)
    }

    /// Pending tasks whose dependencies are all completed
    pub fn ready(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| {
                t.status == TaskStatus::Pending
                    && t.depends_on
                        .iter()
                        .all(|dep| self.status_of(*dep) == Some(TaskStatus::Completed))
            })
            .collect()
    }

    fn status_of(&self, task_id: TaskId) -> Option<TaskStatus> {
        self.tasks.iter().find(|t| t.id == task_id).map(|t| t.status)
    }

    fn first_unfinished_dependency(&self, task_id: TaskId) -> Result<Option<&Task>> {
        let task = self.get(task_id)?;
        Ok(task
            .depends_on
            .iter()
            .filter_map(|dep| self.tasks.iter().find(|t| t.id == *dep))
            .find(|dep| dep.status != TaskStatus::Completed))
    }

    /// Whether `target` is reachable from `from` along dependency edges
    fn reaches(&self, from: TaskId, target: TaskId) -> bool {
        if from == target {
            return true;
        }
        let mut stack = vec![from];
        let mut visited = Vec::new();
        while let Some(current) = stack.pop() {
            if current == target {
                return true;
            }
            if visited.contains(&current) {
                continue;
            }
            visited.push(current);
            if let Some(task) = self.tasks.iter().find(|t| t.id == current) {
                stack.extend(task.depends_on.iter().copied());
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> TaskGraph {
        TaskGraph::new(SessionId(1))
    }

    #[test]
    fn test_add_task_allocates_monotone_ids() {
        let mut g = graph();
        let t1 = g
            .add_task("First", vec![], TaskDifficulty::Easy, 2)
            .unwrap();
        let t2 = g
            .add_task("Second", vec![t1], TaskDifficulty::Medium, 4)
            .unwrap();

        assert_eq!(t1.to_string(), "PRD-001-1");
        assert_eq!(t2.to_string(), "PRD-001-2");
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn test_add_task_rejects_missing_dependency() {
        let mut g = graph();
        let missing = SessionId(1).task(99);
        let err = g
            .add_task("Orphan", vec![missing], TaskDifficulty::Easy, 1)
            .unwrap_err();
        assert!(matches!(err, PrdError::InvalidDependency(_)));
        assert!(g.is_empty());
    }

    #[test]
    fn test_add_task_rejects_self_cycle() {
        let mut g = graph();
        // The next id will be PRD-001-1; depending on it is a cycle.
        let own_id = SessionId(1).task(1);
        let err = g
            .add_task("Ouroboros", vec![own_id], TaskDifficulty::Easy, 1)
            .unwrap_err();
        assert!(matches!(err, PrdError::CyclicDependency(_)));
        assert!(g.is_empty());
    }

    #[test]
    fn test_transition_respects_dependencies() {
        let mut g = graph();
        let t1 = g.add_task("T1", vec![], TaskDifficulty::Easy, 1).unwrap();
        let t2 = g
            .add_task("T2", vec![t1], TaskDifficulty::Easy, 1)
            .unwrap();

        // T2 cannot start while T1 is pending
        let err = g.transition(t2, TaskStatus::InProgress).unwrap_err();
        assert!(matches!(err, PrdError::DependencyViolation(_)));
        assert_eq!(g.get(t2).unwrap().status, TaskStatus::Pending);

        // Complete T1, then T2 can start
        g.transition(t1, TaskStatus::InProgress).unwrap();
        g.transition(t1, TaskStatus::Completed).unwrap();
        g.transition(t2, TaskStatus::InProgress).unwrap();
        assert_eq!(g.get(t2).unwrap().status, TaskStatus::InProgress);
    }

    #[test]
    fn test_invalid_transitions_rejected() {
        let mut g = graph();
        let t1 = g.add_task("T1", vec![], TaskDifficulty::Easy, 1).unwrap();

        // pending -> completed skips in_progress
        let err = g.transition(t1, TaskStatus::Completed).unwrap_err();
        assert!(matches!(err, PrdError::InvalidTransition(_)));

        // blocked -> in_progress is not an edge
        g.transition(t1, TaskStatus::Blocked).unwrap();
        let err = g.transition(t1, TaskStatus::InProgress).unwrap_err();
        assert!(matches!(err, PrdError::InvalidTransition(_)));

        // blocked -> pending is
        g.transition(t1, TaskStatus::Pending).unwrap();
        assert_eq!(g.get(t1).unwrap().status, TaskStatus::Pending);
    }

    #[test]
    fn test_unknown_task_rejected() {
        let mut g = graph();
        let err = g
            .transition(SessionId(1).task(42), TaskStatus::InProgress)
            .unwrap_err();
        assert!(matches!(err, PrdError::UnknownTask(_)));
    }

    #[test]
    fn test_actual_hours_only_on_completed() {
        let mut g = graph();
        let t1 = g.add_task("T1", vec![], TaskDifficulty::Easy, 1).unwrap();

        let err = g.record_actual_hours(t1, 3).unwrap_err();
        assert!(matches!(err, PrdError::InvalidTransition(_)));

        g.transition(t1, TaskStatus::InProgress).unwrap();
        g.transition(t1, TaskStatus::Completed).unwrap();
        let task = g.record_actual_hours(t1, 3).unwrap();
        assert_eq!(task.actual_hours, Some(3));
    }

    #[test]
    fn test_ready_tasks() {
        let mut g = graph();
        let t1 = g.add_task("T1", vec![], TaskDifficulty::Easy, 1).unwrap();
        let t2 = g
            .add_task("T2", vec![t1], TaskDifficulty::Easy, 1)
            .unwrap();

        let ready: Vec<TaskId> = g.ready().iter().map(|t| t.id).collect();
        assert_eq!(ready, vec![t1]);

        g.transition(t1, TaskStatus::InProgress).unwrap();
        g.transition(t1, TaskStatus::Completed).unwrap();

        let ready: Vec<TaskId> = g.ready().iter().map(|t| t.id).collect();
        assert_eq!(ready, vec![t2]);
    }

    #[test]
    fn test_failed_transition_leaves_graph_unchanged() {
        let mut g = graph();
        let t1 = g.add_task("T1", vec![], TaskDifficulty::Easy, 1).unwrap();
        let t2 = g
            .add_task("T2", vec![t1], TaskDifficulty::Easy, 1)
            .unwrap();
        let before = g.get(t2).unwrap().updated_at;

        assert!(g.transition(t2, TaskStatus::Completed).is_err());
        assert_eq!(g.get(t2).unwrap().status, TaskStatus::Pending);
        assert_eq!(g.get(t2).unwrap().updated_at, before);
    }
}
