//! Quizform CLI — drive the question-generation service from a terminal.
//!
//! Mirrors the original application's command-line mode: feed it a
//! paragraph, answer the generated question, get the expected answer
//! back. Form state lives in the session store between invocations, so
//! `generate`, `answer`, and `show` compose across separate runs.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use quizform::api::{ApiConfig, ApiError, HttpApi};
use quizform::services::form::{FormData, FormStore, SessionStore};
use quizform::services::qg;
use quizform::ui;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("could not read input: {0}")]
    Input(#[from] std::io::Error),
    #[error("empty paragraph; provide some text to generate a question from")]
    EmptyContext,
    #[error("no question stored yet; run `quizform generate` first")]
    NoStoredQuestion,
    #[error("could not render form state: {0}")]
    Render(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "quizform", about = "Knowledge Verificator quiz client")]
struct Cli {
    /// Base URL of the question-generation service.
    #[arg(long, env = "API_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Directory holding session form state. Defaults to a session
    /// directory under the OS temp dir.
    #[arg(long, env = "QUIZFORM_STATE_DIR")]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive round: paragraph in, question out, answer checked.
    Quiz,
    /// Generate a question for the given context passage.
    Generate { context: Vec<String> },
    /// Record your answer to the stored question.
    Answer { text: Vec<String> },
    /// Print the stored form state as JSON.
    Show,
    /// Clear the stored form state.
    Reset,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::show_error_message(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let store = match &cli.state_dir {
        Some(dir) => SessionStore::new(dir.clone()),
        None => SessionStore::session_default(),
    };

    match cli.command {
        Command::Quiz => run_quiz(&cli.base_url, &store).await,
        Command::Generate { context } => run_generate(&cli.base_url, &store, &context.join(" ")).await,
        Command::Answer { text } => run_answer(&store, &text.join(" ")),
        Command::Show => run_show(&store),
        Command::Reset => {
            store.save(&FormData::default());
            Ok(())
        }
    }
}

async fn run_generate(base_url: &str, store: &SessionStore, context: &str) -> Result<(), CliError> {
    if context.trim().is_empty() {
        return Err(CliError::EmptyContext);
    }
    let api = HttpApi::new(&ApiConfig::new(base_url))?;
    let data = qg::generate_question(&api, store, context.trim()).await?;
    println!("{}", data.question);
    Ok(())
}

fn run_answer(store: &SessionStore, text: &str) -> Result<(), CliError> {
    let mut data = store.load();
    if data.question.is_empty() {
        return Err(CliError::NoStoredQuestion);
    }
    data.user_answer = text.trim().to_string();
    store.save(&data);
    print_verdict(&data);
    Ok(())
}

fn run_show(store: &SessionStore) -> Result<(), CliError> {
    let data = store.load();
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

async fn run_quiz(base_url: &str, store: &SessionStore) -> Result<(), CliError> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Enter a paragraph you would like to learn:");
    let paragraph = read_line(&mut lines)?;
    if paragraph.is_empty() {
        return Err(CliError::EmptyContext);
    }

    let api = HttpApi::new(&ApiConfig::new(base_url))?;
    let mut data = qg::generate_question(&api, store, &paragraph).await?;

    println!("Answer the question with a full sentence. {}", data.question);
    print!("Your answer: ");
    let _ = std::io::stdout().flush();
    data.user_answer = read_line(&mut lines)?;
    store.save(&data);
    print_verdict(&data);
    Ok(())
}

fn read_line(lines: &mut impl Iterator<Item = std::io::Result<String>>) -> Result<String, CliError> {
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Ok(String::new()),
    }
}

fn print_verdict(data: &FormData) {
    if data.user_answer.eq_ignore_ascii_case(&data.correct_answer) {
        println!("Your answer is correct.");
    } else {
        println!("Expected answer: {}", data.correct_answer);
    }
}
