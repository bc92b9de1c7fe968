//! Core type definitions for prdgen sessions and tasks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product classification driving question applicability and task seeding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    LandingPage,
    MobileApp,
    WebApp,
    DesktopApp,
    Saas,
    Enterprise,
    Ecommerce,
    Fintech,
    Healthtech,
    BusinessPlan,
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LandingPage => write!(f, "landing_page"),
            Self::MobileApp => write!(f, "mobile_app"),
            Self::WebApp => write!(f, "web_app"),
            Self::DesktopApp => write!(f, "desktop_app"),
            Self::Saas => write!(f, "saas"),
            Self::Enterprise => write!(f, "enterprise"),
            Self::Ecommerce => write!(f, "ecommerce"),
            Self::Fintech => write!(f, "fintech"),
            Self::Healthtech => write!(f, "healthtech"),
            Self::BusinessPlan => write!(f, "business_plan"),
        }
    }
}

impl std::str::FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "landing_page" | "landing-page" => Ok(Self::LandingPage),
            "mobile_app" | "mobile-app" => Ok(Self::MobileApp),
            "web_app" | "web-app" => Ok(Self::WebApp),
            "desktop_app" | "desktop-app" => Ok(Self::DesktopApp),
            "saas" => Ok(Self::Saas),
            "enterprise" => Ok(Self::Enterprise),
            "ecommerce" => Ok(Self::Ecommerce),
            "fintech" => Ok(Self::Fintech),
            "healthtech" => Ok(Self::Healthtech),
            "business_plan" | "business-plan" => Ok(Self::BusinessPlan),
            _ => Err(format!("Invalid product type: {}", s)),
        }
    }
}

/// Industry classification for specialized requirements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Finance,
    Healthcare,
    Education,
    Retail,
    Manufacturing,
    Entertainment,
    Logistics,
    RealEstate,
    Government,
}

impl Industry {
    /// Industries with regulatory oversight that seed compliance work
    pub fn is_regulated(&self) -> bool {
        matches!(self, Self::Finance | Self::Healthcare | Self::Government)
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finance => write!(f, "finance"),
            Self::Healthcare => write!(f, "healthcare"),
            Self::Education => write!(f, "education"),
            Self::Retail => write!(f, "retail"),
            Self::Manufacturing => write!(f, "manufacturing"),
            Self::Entertainment => write!(f, "entertainment"),
            Self::Logistics => write!(f, "logistics"),
            Self::RealEstate => write!(f, "real_estate"),
            Self::Government => write!(f, "government"),
        }
    }
}

impl std::str::FromStr for Industry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "finance" => Ok(Self::Finance),
            "healthcare" => Ok(Self::Healthcare),
            "education" => Ok(Self::Education),
            "retail" => Ok(Self::Retail),
            "manufacturing" => Ok(Self::Manufacturing),
            "entertainment" => Ok(Self::Entertainment),
            "logistics" => Ok(Self::Logistics),
            "real_estate" | "real-estate" => Ok(Self::RealEstate),
            "government" => Ok(Self::Government),
            _ => Err(format!("Invalid industry: {}", s)),
        }
    }
}

/// Project complexity level, ordered from simplest to most involved
///
/// Applicability thresholds compare against this ordering, so variant
/// order is load-bearing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    #[default]
    Moderate,
    Complex,
    Enterprise,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Moderate => write!(f, "moderate"),
            Self::Complex => write!(f, "complex"),
            Self::Enterprise => write!(f, "enterprise"),
        }
    }
}

impl std::str::FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "moderate" => Ok(Self::Moderate),
            "complex" => Ok(Self::Complex),
            "enterprise" => Ok(Self::Enterprise),
            _ => Err(format!("Invalid complexity: {}", s)),
        }
    }
}

/// Session lifecycle status
///
/// Advances forward only; the single backward edge is the explicit
/// reopen-for-edit transition to `Interviewing`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Draft,
    Interviewing,
    Generating,
    Completed,
    Archived,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Interviewing => write!(f, "interviewing"),
            Self::Generating => write!(f, "generating"),
            Self::Completed => write!(f, "completed"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

/// Task completion status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Blocked,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Completed => write!(f, "completed"),
            Self::Blocked => write!(f, "blocked"),
        }
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" | "inprogress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "blocked" => Ok(Self::Blocked),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

/// Task difficulty assessment, ordered from trivial to expert
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskDifficulty {
    Trivial,
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl std::fmt::Display for TaskDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trivial => write!(f, "trivial"),
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
            Self::Expert => write!(f, "expert"),
        }
    }
}

impl std::str::FromStr for TaskDifficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trivial" => Ok(Self::Trivial),
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            _ => Err(format!("Invalid difficulty: {}", s)),
        }
    }
}

/// Session identifier
///
/// Format: PRD-{sequence} (e.g., PRD-001, PRD-042)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl SessionId {
    pub fn new(sequence: u32) -> Self {
        Self(sequence)
    }

    /// Derive the id for the next task in this session's graph
    pub fn task(&self, sequence: u32) -> TaskId {
        TaskId {
            session: *self,
            sequence,
        }
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PRD-{:03}", self.0)
    }
}

impl std::str::FromStr for SessionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix("PRD-")
            .ok_or_else(|| format!("Invalid session ID format: {}", s))?;
        let sequence: u32 = rest
            .parse()
            .map_err(|_| format!("Invalid session ID format: {}", s))?;
        Ok(Self(sequence))
    }
}

/// Task identifier, unique within the owning session
///
/// Format: {SESSION-ID}-{sequence} (e.g., PRD-001-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId {
    pub session: SessionId,
    pub sequence: u32,
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.session, self.sequence)
    }
}

impl std::str::FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (session, sequence) = s
            .rsplit_once('-')
            .ok_or_else(|| format!("Invalid task ID format: {}", s))?;
        let session: SessionId = session.parse()?;
        let sequence: u32 = sequence
            .parse()
            .map_err(|_| format!("Invalid task ID format: {}", s))?;
        Ok(Self { session, sequence })
    }
}

/// Immutable per-session product characteristics
///
/// Set once at session creation; drives question applicability and
/// initial task derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductContext {
    pub product_type: ProductType,
    pub industry: Option<Industry>,
    pub complexity: Complexity,
}

impl ProductContext {
    pub fn new(product_type: ProductType, complexity: Complexity) -> Self {
        Self {
            product_type,
            industry: None,
            complexity,
        }
    }

    pub fn with_industry(mut self, industry: Industry) -> Self {
        self.industry = Some(industry);
        self
    }
}

/// A typed answer value, matching the question's answer kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum AnswerValue {
    Text(String),
    Choice(String),
    MultiChoice(Vec<String>),
    Number(f64),
    Bool(bool),
}

impl AnswerValue {
    /// Render the value as display text for documents and summaries
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) | Self::Choice(s) => s.clone(),
            Self::MultiChoice(items) => items.join(", "),
            Self::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            Self::Bool(true) => "yes".to_string(),
            Self::Bool(false) => "no".to_string(),
        }
    }
}

/// A recorded interview answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question_key: String,
    pub value: AnswerValue,
    pub answered_at: DateTime<Utc>,
}

impl Answer {
    pub fn new(question_key: impl Into<String>, value: AnswerValue) -> Self {
        Self {
            question_key: question_key.into(),
            value,
            answered_at: Utc::now(),
        }
    }
}

/// A derived work item tracked in the session's task graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Ids of tasks that must complete before this one may start
    pub depends_on: Vec<TaskId>,
    pub status: TaskStatus,
    pub difficulty: TaskDifficulty,
    pub estimated_hours: u32,
    /// Recorded only when the task reaches `Completed`
    pub actual_hours: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title: title.into(),
            depends_on: Vec::new(),
            status: TaskStatus::Pending,
            difficulty: TaskDifficulty::Medium,
            estimated_hours: 0,
            actual_hours: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_depends_on(mut self, depends_on: Vec<TaskId>) -> Self {
        self.depends_on = depends_on;
        self
    }

    pub fn with_difficulty(mut self, difficulty: TaskDifficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_estimate(mut self, hours: u32) -> Self {
        self.estimated_hours = hours;
        self
    }
}

/// Snapshot of a task graph taken at document generation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub blocked: usize,
    pub rows: Vec<TaskRow>,
}

/// One task's state at snapshot time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub status: TaskStatus,
    pub difficulty: TaskDifficulty,
    pub estimated_hours: u32,
    pub actual_hours: Option<u32>,
    pub depends_on: Vec<TaskId>,
}

impl std::fmt::Display for TaskSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Tasks: {} total ({} pending, {} in progress, {} completed, {} blocked)",
            self.total, self.pending, self.in_progress, self.completed, self.blocked
        )?;
        for row in &self.rows {
            write!(
                f,
                "  {} [{}] {} ({}, {}h est",
                row.id, row.status, row.title, row.difficulty, row.estimated_hours
            )?;
            if let Some(actual) = row.actual_hours {
                write!(f, ", {}h actual", actual)?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

/// One section of a generated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSection {
    pub heading: String,
    pub body: String,
    /// Keys of the answers this section was assembled from
    pub source_question_keys: Vec<String>,
}

/// A generated document version
///
/// Immutable once produced; regeneration appends a new version to the
/// owning session. The model is self-sufficient: export adapters render
/// it without further lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub sections: Vec<DocumentSection>,
    pub task_summary: TaskSummary,
    /// Answered / applicable question count at generation time
    pub completeness: f64,
    pub generated_at: DateTime<Utc>,
}

impl Document {
    /// Content equality, ignoring the generation timestamp
    pub fn content_eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.sections == other.sections
            && self.task_summary == other.task_summary
            && self.completeness == other.completeness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_round_trip() {
        let id: SessionId = "PRD-007".parse().unwrap();
        assert_eq!(id.0, 7);
        assert_eq!(id.to_string(), "PRD-007");
    }

    #[test]
    fn test_task_id_round_trip() {
        let id: TaskId = "PRD-012-3".parse().unwrap();
        assert_eq!(id.session, SessionId(12));
        assert_eq!(id.sequence, 3);
        assert_eq!(id.to_string(), "PRD-012-3");
    }

    #[test]
    fn test_invalid_ids_rejected() {
        assert!("PRD".parse::<SessionId>().is_err());
        assert!("SES-001".parse::<SessionId>().is_err());
        assert!("PRD-xyz-1".parse::<TaskId>().is_err());
    }

    #[test]
    fn test_complexity_ordering() {
        assert!(Complexity::Simple < Complexity::Moderate);
        assert!(Complexity::Moderate < Complexity::Complex);
        assert!(Complexity::Complex < Complexity::Enterprise);
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(TaskDifficulty::Trivial < TaskDifficulty::Easy);
        assert!(TaskDifficulty::Hard < TaskDifficulty::Expert);
    }

    #[test]
    fn test_regulated_industries() {
        assert!(Industry::Finance.is_regulated());
        assert!(Industry::Healthcare.is_regulated());
        assert!(Industry::Government.is_regulated());
        assert!(!Industry::Retail.is_regulated());
    }

    #[test]
    fn test_product_type_parsing() {
        assert_eq!(
            "landing_page".parse::<ProductType>().unwrap(),
            ProductType::LandingPage
        );
        assert_eq!("saas".parse::<ProductType>().unwrap(), ProductType::Saas);
        assert!("spaceship".parse::<ProductType>().is_err());
    }
}
