use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between locating a repository and
/// handing its URL to the browser.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not in a git repository: {}", .path.display())]
    RepositoryNotFound {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("no remote found")]
    NoRemote,

    #[error("cannot find target remote name: {name}, current remotes: {}", .available.join(", "))]
    RemoteNotFound { name: String, available: Vec<String> },

    #[error("remote '{name}' has no URL configured")]
    RemoteUrlMissing { name: String },

    #[error("cannot parse SSH URL {url:?}: {reason}")]
    Parse { url: String, reason: String },

    #[error("invalid scp-like URL {url:?}: missing ':'")]
    MissingSeparator { url: String },

    #[error("cannot open browser for {url}: {source}")]
    BrowserLaunch {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Git(#[from] git2::Error),
}
