//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::Text;

use crate::config::{ConfigFile, ConfigManager, DEFAULT_ENDPOINT, validate_endpoint};
use crate::generation::Language;
use crate::status;
use crate::ui::{Style, cancellable, pick_language};

/// Runs the configure command.
///
/// With `show`, prints the current defaults; otherwise prompts for the
/// default endpoint and language and saves them.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default()?;
    print_current_defaults(&config, &manager);
    if show {
        return Ok(());
    }

    let Some(endpoint) = prompt_endpoint(config.codechat.endpoint.as_deref())? else {
        return Ok(());
    };
    let current = config
        .codechat
        .language
        .as_deref()
        .and_then(|name| name.parse::<Language>().ok())
        .unwrap_or_default();
    let Some(language) = pick_language("Default language:", current)? else {
        return Ok(());
    };

    config.codechat.endpoint = Some(endpoint);
    config.codechat.language = Some(language.name().to_string());

    manager.save(&config)?;

    status!(
        "\n{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile, manager: &ConfigManager) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        config.codechat.endpoint.as_deref().map_or_else(
            || Style::secondary(format!("{DEFAULT_ENDPOINT} (built-in)")),
            Style::value
        )
    );
    println!(
        "  {}  {}",
        Style::label("language"),
        config.codechat.language.as_deref().map_or_else(
            || Style::secondary(format!("{} (built-in)", Language::default())),
            Style::value
        )
    );
    println!(
        "  {}      {}",
        Style::label("file"),
        Style::secondary(manager.config_path().display())
    );
    println!();
}

fn prompt_endpoint(default: Option<&str>) -> Result<Option<String>> {
    let answer = Text::new("Endpoint URL:")
        .with_default(default.unwrap_or(DEFAULT_ENDPOINT))
        .with_help_message("POST endpoint that accepts {message, language}")
        .prompt();
    let Some(endpoint) = cancellable(answer)? else {
        return Ok(None);
    };

    let endpoint = endpoint.trim().to_string();
    validate_endpoint(&endpoint)?;
    Ok(Some(endpoint))
}
