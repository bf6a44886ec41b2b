//! Open a repository's remote in the web browser.
//!
//! The binary in main.rs is a thin clap front-end over this library.

pub mod browser;
pub mod config;
pub mod error;
pub mod git;
pub mod remote;

pub use error::{Error, Result};
pub use remote::{browser_url, resolve_remote, to_browser_url, BrowseOptions, ResolvedRemote};
