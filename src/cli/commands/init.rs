use crate::cli::parser::Cli;
use crate::config::{Config, TOKEN_ENV};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and a default configuration file. An existing
/// file is never overwritten.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let existed = Config::config_file().exists();

    println!("⚙️  Initializing transgo-admin…");
    let path = Config::init_all(cli.api_url.as_deref(), cli.test)?;

    if cli.test {
        info(format!("Test mode: configuration not written ({})", path.display()));
        return Ok(());
    }

    if existed {
        info(format!("Config file already present: {}", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }

    info(format!(
        "Set api_token in the config file, pass --token, or export {TOKEN_ENV}."
    ));
    Ok(())
}
