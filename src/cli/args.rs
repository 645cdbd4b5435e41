use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "codechat")]
#[command(about = "AI code assistant for your terminal")]
#[command(version)]
pub struct Args {
    /// Code generation endpoint URL
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Target programming language (e.g., Python, JavaScript, C++)
    #[arg(short = 'l', long, global = true)]
    pub language: Option<String>,

    /// Suppress status messages and spinners
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ask for code once and print the reply
    Ask {
        /// What the code should do
        #[arg(required = true, num_args = 1..)]
        request: Vec<String>,
    },
    /// Configure default endpoint and language
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported programming languages
    Languages,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_chat() {
        let args = Args::try_parse_from(["codechat"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.quiet);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args =
            Args::try_parse_from(["codechat", "ask", "hello", "world", "--language", "Java"])
                .unwrap();
        assert_eq!(args.language.as_deref(), Some("Java"));
        match args.command {
            Some(Command::Ask { request }) => assert_eq!(request, ["hello", "world"]),
            other => panic!("Expected Ask, got {other:?}"),
        }
    }

    #[test]
    fn test_ask_requires_request() {
        assert!(Args::try_parse_from(["codechat", "ask"]).is_err());
    }

    #[test]
    fn test_configure_show() {
        let args = Args::try_parse_from(["codechat", "configure", "--show"]).unwrap();
        assert!(matches!(args.command, Some(Command::Configure { show: true })));
    }
}
