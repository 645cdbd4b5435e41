use anyhow::Result;

use super::load_resolved_config;
use crate::chat::ChatRepl;
use crate::config::ResolveOptions;

pub async fn run_chat(options: &ResolveOptions) -> Result<()> {
    let config = load_resolved_config(options)?;
    tracing::info!(endpoint = %config.endpoint, language = %config.language, "starting chat");

    let mut repl = ChatRepl::new(config.endpoint, config.language);
    repl.run().await
}
