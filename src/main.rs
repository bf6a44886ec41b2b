mod commands;

use anyhow::Result;
use clap::Parser;
use git_browse::config::Config;
use git_browse::BrowseOptions;
use log::warn;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-browse", version)]
#[command(about = "Open a repository's remote in your web browser", long_about = None)]
struct Cli {
    /// Repository path (defaults to the current directory)
    path: Option<PathBuf>,

    /// Remote to prefer when several are configured
    #[arg(long = "remoteName", visible_alias = "remote-name", value_name = "NAME")]
    remote_name: Option<String>,

    /// Print the URL instead of opening a browser
    #[arg(short, long)]
    print: bool,

    /// Show debug output on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Show config file path and contents
    #[arg(long)]
    show_config: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if cli.show_config {
        return commands::config::run();
    }

    let config = Config::load().unwrap_or_else(|e| {
        warn!("ignoring config: {:#}", e);
        Config::default()
    });
    let options = BrowseOptions {
        path: cli.path.unwrap_or_else(|| PathBuf::from(".")),
        remote_name: config.remote_name(cli.remote_name.as_deref()).to_string(),
    };
    let print_only = cli.print || config.browser.print_only;

    commands::open::run(&options, print_only)
}
