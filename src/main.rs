use anyhow::Result;
use clap::Parser;

use codechat::cli::commands::{ask, chat, configure};
use codechat::cli::{Args, Command};
use codechat::config::ResolveOptions;
use codechat::generation::{Language, print_languages};
use codechat::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    output::init_logging(args.verbose);

    let options = ResolveOptions {
        endpoint: args.endpoint,
        language: args.language,
    };

    match args.command {
        Some(Command::Languages) => {
            print_languages(Language::default(), "default");
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        Some(Command::Ask { request }) => {
            let code = ask::run_ask(&request.join(" "), &options).await?;
            if code != exitcode::OK {
                std::process::exit(code);
            }
        }
        None => {
            chat::run_chat(&options).await?;
        }
    }

    Ok(())
}
