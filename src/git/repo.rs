use crate::error::{Error, Result};
use git2::{ConfigLevel, ErrorCode, Repository};
use std::path::Path;

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open the repository containing `path`, searching parent directories.
    ///
    /// Linked worktrees resolve through their `commondir`, so remotes
    /// configured in the main repository are visible here too.
    pub fn open_at(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|source| Error::RepositoryNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { repo })
    }

    /// Get the .git directory path
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    /// Get all configured remote names, sorted
    pub fn remote_names(&self) -> Result<Vec<String>> {
        let remotes = self.repo.remotes()?;
        let mut names: Vec<String> = remotes.iter().flatten().map(str::to_string).collect();
        names.sort();
        names.dedup();
        Ok(names)
    }

    /// Get the first URL configured for a remote.
    ///
    /// `remote.<name>.url` may be given several times; libgit2 itself keeps
    /// the last value, so the repository's own config file is read first to
    /// find the earliest entry.
    pub fn remote_url(&self, name: &str) -> Result<Option<String>> {
        if let Some(url) = self.first_local_url(name)? {
            return Ok(Some(url));
        }

        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(str::to_string)),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn first_local_url(&self, name: &str) -> Result<Option<String>> {
        let config = self.repo.config()?;
        let local = match config.open_level(ConfigLevel::Local) {
            Ok(local) => local,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let key = format!("remote.{}.url", name);
        let mut entries = match local.multivar(&key, None) {
            Ok(entries) => entries,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match entries.next() {
            Some(entry) => Ok(entry?.value().map(str::to_string)),
            None => Ok(None),
        }
    }
}
