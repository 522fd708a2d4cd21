use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use multiquiz::{Evaluation, JsonFileSource, Quiz, QuizError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, env = "MULTIQUIZ_QUESTIONS")]
    questions: PathBuf,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Write the last submitted results to this file as JSON on exit
    #[arg(long)]
    export: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), QuizError> {
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let mut quiz = Quiz::load(&JsonFileSource::new(&args.questions)).await;
    quiz.run()?;

    if let (Some(path), Some(evaluation)) = (&args.export, quiz.evaluation()) {
        export(path, evaluation)?;
    }

    Ok(())
}

/// The terminal UI owns stdout and stderr, so logs only go to a file.
fn init_logging(path: &Path) -> Result<(), QuizError> {
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("multiquiz=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn export(path: &Path, evaluation: &Evaluation) -> Result<(), QuizError> {
    let json = serde_json::to_string_pretty(evaluation)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), "results exported");
    Ok(())
}
