//! prdgen CLI - adaptive PRD authoring
//!
//! Usage:
//!   prdgen new <name> --product-type <type>   Create a session
//!   prdgen list                               List sessions
//!   prdgen status <id>                        Show session status
//!   prdgen interview <id>                     Run the adaptive interview
//!   prdgen generate <id>                      Generate a document version
//!   prdgen export <id> <format>               Export the latest document
//!   prdgen task <...>                         Inspect and update tasks
//!   prdgen delete <id>                        Delete a session

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use prdgen_catalog::{builtin_catalog, AnswerKind, QuestionDefinition};
use prdgen_compose::generate_and_record;
use prdgen_core::{
    AnswerValue, Complexity, Industry, PrdgenConfig, ProductContext, ProductType, SessionId,
    SessionStatus, TaskDifficulty, TaskId, TaskStatus,
};
use prdgen_engine::{QuestionEngine, Session};
use prdgen_export::{render, ExportFormat};
use prdgen_storage::{export_path, JsonFileStore, SessionStore};
use std::io::Write;
use std::path::Path;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "prdgen")]
#[command(author, version, about = "Adaptive PRD interviews, task tracking, and export")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new PRD session
    New {
        /// Project name
        name: String,

        /// Product type (landing_page, mobile_app, web_app, desktop_app,
        /// saas, enterprise, ecommerce, fintech, healthtech, business_plan)
        #[arg(long)]
        product_type: String,

        /// Industry (finance, healthcare, education, retail, manufacturing,
        /// entertainment, logistics, real_estate, government)
        #[arg(long)]
        industry: Option<String>,

        /// Complexity (simple, moderate, complex, enterprise)
        #[arg(long)]
        complexity: Option<String>,
    },

    /// List all sessions
    List,

    /// Show status for a session
    Status {
        /// Session ID (e.g. PRD-001)
        id: String,
    },

    /// Run or continue the adaptive interview
    Interview {
        /// Session ID
        id: String,
    },

    /// Generate a document version from current answers
    Generate {
        /// Session ID
        id: String,

        /// Also export in the given format (markdown, text, pdf)
        #[arg(long)]
        export: Option<String>,
    },

    /// Export the latest generated document
    Export {
        /// Session ID
        id: String,

        /// Output format (markdown, text, pdf)
        format: String,
    },

    /// Task management
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Delete a session and its tasks
    Delete {
        /// Session ID
        id: String,
    },
}

#[derive(Subcommand)]
enum TaskCommands {
    /// List tasks for a session
    List {
        /// Session ID
        id: String,
    },

    /// Add a task to a session's graph
    Add {
        /// Session ID
        id: String,

        /// Task title
        title: String,

        /// Task ids this task depends on (e.g. PRD-001-2)
        #[arg(long, value_delimiter = ',')]
        depends_on: Vec<String>,

        /// Difficulty (trivial, easy, medium, hard, expert)
        #[arg(long, default_value = "medium")]
        difficulty: String,

        /// Estimated hours
        #[arg(long, default_value = "4")]
        estimate: u32,
    },

    /// Move a task to in_progress
    Start {
        /// Task ID (e.g. PRD-001-2)
        task: String,
    },

    /// Mark a task completed
    Done {
        /// Task ID
        task: String,

        /// Hours actually spent
        #[arg(long)]
        hours: Option<u32>,
    },

    /// Mark a task blocked
    Block {
        /// Task ID
        task: String,
    },

    /// Return a blocked task to pending
    Unblock {
        /// Task ID
        task: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = PrdgenConfig::load_or_default(Path::new("."))?;
    let store = JsonFileStore::new(config.sessions_dir());
    let engine = QuestionEngine::new(builtin_catalog()?);

    match cli.command {
        Commands::New {
            name,
            product_type,
            industry,
            complexity,
        } => cmd_new(&store, &config, name, product_type, industry, complexity).await,
        Commands::List => cmd_list(&store).await,
        Commands::Status { id } => cmd_status(&store, &engine, &id).await,
        Commands::Interview { id } => cmd_interview(&store, &engine, &id).await,
        Commands::Generate { id, export } => {
            cmd_generate(&store, &engine, &config, &id, export).await
        }
        Commands::Export { id, format } => cmd_export(&store, &engine, &config, &id, &format).await,
        Commands::Task { action } => cmd_task(&store, action).await,
        Commands::Delete { id } => cmd_delete(&store, &id).await,
    }
}

fn parse_session_id(raw: &str) -> Result<SessionId> {
    raw.parse::<SessionId>()
        .map_err(|e| anyhow::anyhow!("{}", e))
}

fn parse_task_id(raw: &str) -> Result<TaskId> {
    raw.parse::<TaskId>().map_err(|e| anyhow::anyhow!("{}", e))
}

async fn cmd_new(
    store: &JsonFileStore,
    config: &PrdgenConfig,
    name: String,
    product_type: String,
    industry: Option<String>,
    complexity: Option<String>,
) -> Result<()> {
    let product_type: ProductType = product_type
        .parse()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let complexity = match complexity {
        Some(raw) => raw.parse::<Complexity>().map_err(|e| anyhow::anyhow!("{}", e))?,
        None => config.interview.complexity,
    };

    let mut context = ProductContext::new(product_type, complexity);
    if let Some(raw) = industry {
        let industry: Industry = raw.parse().map_err(|e| anyhow::anyhow!("{}", e))?;
        context = context.with_industry(industry);
    }

    let id = store.next_id().await?;
    let session = Session::new(id, name.as_str(), context)?;
    store.save(&session).await?;

    info!("Created session {}", id);
    println!("Created session {}: {}", id, name);
    println!("  Product type: {}", context.product_type);
    if let Some(industry) = context.industry {
        println!("  Industry:     {}", industry);
    }
    println!("  Complexity:   {}", context.complexity);
    println!("  Seeded tasks: {}", session.tasks().len());
    println!("\nRun `prdgen interview {}` to start the interview.", id);
    Ok(())
}

async fn cmd_list(store: &JsonFileStore) -> Result<()> {
    let summaries = store.list().await?;
    if summaries.is_empty() {
        println!("No sessions yet. Create one with `prdgen new`.");
        return Ok(());
    }

    println!(
        "{:<10} {:<28} {:<14} {:<13} {:>8} {:>6}",
        "ID", "NAME", "TYPE", "STATUS", "ANSWERS", "TASKS"
    );
    for s in summaries {
        println!(
            "{:<10} {:<28} {:<14} {:<13} {:>8} {:>6}",
            s.id.to_string(),
            truncate(&s.name, 28),
            s.product_type.to_string(),
            s.status.to_string(),
            s.answers,
            s.tasks
        );
    }
    Ok(())
}

async fn cmd_status(store: &JsonFileStore, engine: &QuestionEngine, id: &str) -> Result<()> {
    let id = parse_session_id(id)?;
    let session = store.load(id).await?;

    let completeness = engine.completeness(&session.context, session.answers());
    let remaining = engine
        .next_questions(&session.context, session.answers())
        .len();

    println!("{}: {}", session.id, session.name);
    println!("  Status:       {}", session.status);
    println!("  Product type: {}", session.context.product_type);
    if let Some(industry) = session.context.industry {
        println!("  Industry:     {}", industry);
    }
    println!("  Complexity:   {}", session.context.complexity);
    println!(
        "  Interview:    {:.0}% complete, {} question(s) remaining",
        completeness * 100.0,
        remaining
    );
    println!("  Documents:    {} version(s)", session.documents().len());
    println!();
    print!("{}", prdgen_graph::summarize(session.tasks()));
    Ok(())
}

async fn cmd_interview(store: &JsonFileStore, engine: &QuestionEngine, id: &str) -> Result<()> {
    let id = parse_session_id(id)?;
    let mut session = store.load(id).await?;

    if matches!(
        session.status,
        SessionStatus::Generating | SessionStatus::Completed
    ) {
        session.reopen()?;
        println!("Reopened {} for editing.\n", session.id);
    }

    println!("Interview for {}: {}\n", session.id, session.name);
    println!("Press Enter without typing to skip a question.\n");

    let mut skipped: Vec<String> = Vec::new();
    loop {
        let next: Vec<QuestionDefinition> = engine
            .next_questions(&session.context, session.answers())
            .into_iter()
            .filter(|q| !skipped.contains(&q.key))
            .cloned()
            .collect();

        let Some(question) = next.first() else {
            break;
        };

        match ask_question(question)? {
            Some(value) => {
                if let Err(e) = session.record_answer(engine.catalog(), &question.key, value) {
                    println!("  {}\n", e);
                }
            }
            None => skipped.push(question.key.clone()),
        }
    }

    store.save(&session).await?;

    if engine.interview_complete(&session.context, session.answers()) {
        println!("\nInterview complete. Run `prdgen generate {}`.", session.id);
    } else {
        println!(
            "\nProgress saved ({:.0}% complete). Run `prdgen interview {}` to continue.",
            engine.completeness(&session.context, session.answers()) * 100.0,
            session.id
        );
    }
    Ok(())
}

/// Prompt for one question; `None` means the user skipped it
fn ask_question(question: &QuestionDefinition) -> Result<Option<AnswerValue>> {
    println!("{}", question.prompt);
    if let Some(help) = &question.help {
        println!("  ({})", help);
    }
    match &question.kind {
        AnswerKind::Choice { options } | AnswerKind::MultiChoice { options } => {
            for (i, option) in options.iter().enumerate() {
                println!("  {}. {}", i + 1, option);
            }
        }
        AnswerKind::Bool => println!("  (y/n)"),
        _ => {}
    }

    loop {
        let line = read_line("> ")?;
        if line.trim().is_empty() {
            return Ok(None);
        }
        match parse_answer(&question.kind, &line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => println!("  {}", e),
        }
    }
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line)
}

/// Parse raw terminal input into a typed answer value
///
/// Choice inputs accept a 1-based index or the literal option text;
/// multi-choice accepts a comma-separated list of either.
fn parse_answer(kind: &AnswerKind, input: &str) -> Result<AnswerValue, String> {
    let input = input.trim();
    match kind {
        AnswerKind::Text => Ok(AnswerValue::Text(input.to_string())),
        AnswerKind::Number => input
            .parse::<f64>()
            .map(AnswerValue::Number)
            .map_err(|_| format!("'{}' is not a number", input)),
        AnswerKind::Bool => match input.to_lowercase().as_str() {
            "y" | "yes" | "true" => Ok(AnswerValue::Bool(true)),
            "n" | "no" | "false" => Ok(AnswerValue::Bool(false)),
            _ => Err(format!("'{}' is not a yes/no answer", input)),
        },
        AnswerKind::Choice { options } => {
            resolve_option(options, input).map(AnswerValue::Choice)
        }
        AnswerKind::MultiChoice { options } => {
            let mut chosen = Vec::new();
            for part in input.split(',') {
                let value = resolve_option(options, part.trim())?;
                if !chosen.contains(&value) {
                    chosen.push(value);
                }
            }
            Ok(AnswerValue::MultiChoice(chosen))
        }
    }
}

fn resolve_option(options: &[String], input: &str) -> Result<String, String> {
    if let Ok(index) = input.parse::<usize>() {
        if index >= 1 && index <= options.len() {
            return Ok(options[index - 1].clone());
        }
        return Err(format!("option {} is out of range", index));
    }
    options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(input))
        .cloned()
        .ok_or_else(|| format!("'{}' is not an option", input))
}

async fn cmd_generate(
    store: &JsonFileStore,
    engine: &QuestionEngine,
    config: &PrdgenConfig,
    id: &str,
    export: Option<String>,
) -> Result<()> {
    let id = parse_session_id(id)?;
    let mut session = store.load(id).await?;

    let document = generate_and_record(&mut session, engine)?;
    store.save(&session).await?;

    println!(
        "Generated document v{} for {} ({:.0}% complete)",
        session.documents().len(),
        session.id,
        document.completeness * 100.0
    );
    for section in &document.sections {
        println!("  - {}", section.heading);
    }

    if let Some(format) = export {
        write_export(config, &session, &format)?;
    }
    Ok(())
}

async fn cmd_export(
    store: &JsonFileStore,
    engine: &QuestionEngine,
    config: &PrdgenConfig,
    id: &str,
    format: &str,
) -> Result<()> {
    let id = parse_session_id(id)?;
    let mut session = store.load(id).await?;

    // Generate on demand if nothing has been generated yet
    if session.latest_document().is_none() {
        generate_and_record(&mut session, engine)?;
        store.save(&session).await?;
    }

    write_export(config, &session, format)
}

fn write_export(config: &PrdgenConfig, session: &Session, format: &str) -> Result<()> {
    let format: ExportFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let Some(document) = session.latest_document() else {
        bail!("session {} has no generated document", session.id);
    };

    let bytes = render(document, format)?;
    std::fs::create_dir_all(&config.exports_dir)?;
    let path = export_path(
        &config.exports_dir,
        session,
        session.documents().len(),
        format.extension(),
    );
    std::fs::write(&path, bytes)?;
    println!("Exported {} to {}", format, path.display());
    Ok(())
}

async fn cmd_task(store: &JsonFileStore, action: TaskCommands) -> Result<()> {
    match action {
        TaskCommands::List { id } => {
            let id = parse_session_id(&id)?;
            let session = store.load(id).await?;
            print!("{}", prdgen_graph::summarize(session.tasks()));
            let ready = session.tasks().ready();
            if !ready.is_empty() {
                println!("Ready to start:");
                for task in ready {
                    println!("  {} {}", task.id, task.title);
                }
            }
            Ok(())
        }
        TaskCommands::Add {
            id,
            title,
            depends_on,
            difficulty,
            estimate,
        } => {
            let id = parse_session_id(&id)?;
            let mut session = store.load(id).await?;

            let difficulty: TaskDifficulty =
                difficulty.parse().map_err(|e| anyhow::anyhow!("{}", e))?;
            let depends_on = depends_on
                .iter()
                .map(|raw| parse_task_id(raw))
                .collect::<Result<Vec<_>>>()?;

            let task_id = session.add_task(title, depends_on, difficulty, estimate)?;
            store.save(&session).await?;
            println!("Added task {}", task_id);
            Ok(())
        }
        TaskCommands::Start { task } => transition(store, &task, TaskStatus::InProgress).await,
        TaskCommands::Done { task, hours } => {
            let task_id = parse_task_id(&task)?;
            let mut session = store.load(task_id.session).await?;
            session.transition_task(task_id, TaskStatus::Completed)?;
            if let Some(hours) = hours {
                session.record_actual_hours(task_id, hours)?;
            }
            store.save(&session).await?;
            println!("Completed {}", task_id);
            Ok(())
        }
        TaskCommands::Block { task } => transition(store, &task, TaskStatus::Blocked).await,
        TaskCommands::Unblock { task } => transition(store, &task, TaskStatus::Pending).await,
    }
}

async fn transition(store: &JsonFileStore, task: &str, status: TaskStatus) -> Result<()> {
    let task_id = parse_task_id(task)?;
    let mut session = store.load(task_id.session).await?;
    let task = session.transition_task(task_id, status)?;
    store.save(&session).await?;
    println!("{} is now {}", task.id, task.status);
    Ok(())
}

async fn cmd_delete(store: &JsonFileStore, id: &str) -> Result<()> {
    let id = parse_session_id(id)?;
    store.delete(id).await?;
    info!("Deleted session {}", id);
    println!("Deleted {}", id);
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["iOS".to_string(), "Android".to_string()]
    }

    #[test]
    fn test_parse_bool_answers() {
        assert_eq!(
            parse_answer(&AnswerKind::Bool, "yes").unwrap(),
            AnswerValue::Bool(true)
        );
        assert_eq!(
            parse_answer(&AnswerKind::Bool, "N").unwrap(),
            AnswerValue::Bool(false)
        );
        assert!(parse_answer(&AnswerKind::Bool, "maybe").is_err());
    }

    #[test]
    fn test_parse_choice_by_index_and_text() {
        let kind = AnswerKind::Choice { options: options() };
        assert_eq!(
            parse_answer(&kind, "1").unwrap(),
            AnswerValue::Choice("iOS".to_string())
        );
        assert_eq!(
            parse_answer(&kind, "android").unwrap(),
            AnswerValue::Choice("Android".to_string())
        );
        assert!(parse_answer(&kind, "3").is_err());
        assert!(parse_answer(&kind, "Windows").is_err());
    }

    #[test]
    fn test_parse_multi_choice_dedupes() {
        let kind = AnswerKind::MultiChoice { options: options() };
        assert_eq!(
            parse_answer(&kind, "1, android, iOS").unwrap(),
            AnswerValue::MultiChoice(vec!["iOS".to_string(), "Android".to_string()])
        );
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(
            parse_answer(&AnswerKind::Number, "3").unwrap(),
            AnswerValue::Number(3.0)
        );
        assert!(parse_answer(&AnswerKind::Number, "three").is_err());
    }

    #[test]
    fn test_truncate_long_names() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long session name", 10), "a very lo…");
    }
}
