use clap::Parser;
use minirag::cli::commands::{Cli, Commands};
use minirag::cli::shell::ShellCommand;
use minirag::config::RagConfig;
use minirag::domain::error::DomainError;
use minirag::MiniRag;
use serde_json::json;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let rag = match build(cli.recreate_collection).await {
        Ok(rag) => rag,
        Err(e) => {
            eprintln!("Error initializing minirag: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&rag, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn build(recreate_collection: bool) -> Result<MiniRag, DomainError> {
    let mut config = RagConfig::from_env()?;
    config.recreate_collection |= recreate_collection;
    MiniRag::new(config).await
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_command(rag: &MiniRag, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Add { texts } => {
            for text in &texts {
                add(rag, text).await?;
            }
        }
        Commands::Ask { question, docs } => {
            rag.add_documents(&docs).await?;
            ask(rag, &question).await?;
        }
        Commands::Status => status(rag).await?,
        Commands::Shell => shell(rag).await?,
    }
    Ok(())
}

async fn add(rag: &MiniRag, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let id = rag.add_document(text).await?;
    println!("{}", json!({ "id": id, "status": "added" }));
    Ok(())
}

async fn ask(rag: &MiniRag, question: &str) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let result = rag.ask(question).await?;
    let latency = (start.elapsed().as_secs_f64() * 1000.0).round() / 1000.0;
    let out = json!({
        "question": result.question,
        "answer": result.answer,
        "context_used": result.context,
        "latency_sec": latency,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

async fn status(rag: &MiniRag) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(&rag.status().await)?);
    Ok(())
}

/// Line-oriented session over one service, so the in-memory store persists
/// between commands.
async fn shell(rag: &MiniRag) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let cmd = match line.parse::<ShellCommand>() {
            Ok(cmd) => cmd,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };
        let outcome = match cmd {
            ShellCommand::Add(text) => add(rag, &text).await,
            ShellCommand::Ask(question) => ask(rag, &question).await,
            ShellCommand::Status => status(rag).await,
            ShellCommand::Blank => Ok(()),
            ShellCommand::Quit => break,
        };
        if let Err(e) = outcome {
            eprintln!("Error: {e}");
        }
    }
    Ok(())
}
