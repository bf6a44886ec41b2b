use anyhow::Result;
use colored::Colorize;
use git_browse::{browser, BrowseOptions};

/// Open the repository's remote in the default browser
pub fn run(options: &BrowseOptions, print_only: bool) -> Result<()> {
    let url = git_browse::browser_url(options)?;

    if print_only {
        println!("{}", url);
        return Ok(());
    }

    println!("Opening {} in browser...", url.cyan());
    browser::open_url(&url)?;

    Ok(())
}
