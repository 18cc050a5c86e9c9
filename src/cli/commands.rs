use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "minirag", about = "Minimal retrieve-then-answer pipeline", version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Drop and recreate the Qdrant collection before running the command
    #[arg(long, global = true)]
    pub recreate_collection: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add one or more documents
    Add {
        /// Document texts
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Ask a question against the stored documents
    Ask {
        question: String,
        /// Documents to add before asking (useful with the in-memory store)
        #[arg(long = "doc")]
        docs: Vec<String>,
    },
    /// Show document count and readiness
    Status,
    /// Read `add <text>`, `ask <question>`, `status` and `quit` lines from stdin
    Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ask_with_docs() {
        let cli = Cli::parse_from(["minirag", "ask", "what?", "--doc", "a", "--doc", "b"]);
        match cli.command {
            Commands::Ask { question, docs } => {
                assert_eq!(question, "what?");
                assert_eq!(docs, vec!["a".to_string(), "b".to_string()]);
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn add_requires_text() {
        assert!(Cli::try_parse_from(["minirag", "add"]).is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::parse_from(["minirag", "status", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn recreate_collection_is_opt_in() {
        let cli = Cli::parse_from(["minirag", "status"]);
        assert!(!cli.recreate_collection);

        let cli = Cli::parse_from(["minirag", "--recreate-collection", "add", "x"]);
        assert!(cli.recreate_collection);
    }
}
