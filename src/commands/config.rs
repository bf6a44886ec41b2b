use anyhow::Result;
use colored::Colorize;
use git_browse::config::Config;

/// Print where the config lives and the settings git-browse will use
pub fn run() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_from(&path)?;

    println!("{}", "Config path:".blue().bold());
    if path.exists() {
        println!("  {}\n", path.display());
    } else {
        println!("  {} {}\n", path.display(), "(not created, using defaults)".yellow());
    }

    println!("{}", "Effective settings:".blue().bold());
    println!("  remote.name       = {}", config.remote.name.cyan());
    println!("  browser.printOnly = {}", config.browser.print_only);

    Ok(())
}
