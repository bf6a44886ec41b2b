use crate::error::{Error, Result};
use crate::git::GitRepo;
use log::debug;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_REMOTE_NAME: &str = "origin";

/// Where to look for a repository and which remote to prefer.
#[derive(Debug, Clone)]
pub struct BrowseOptions {
    pub path: PathBuf,
    pub remote_name: String,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            remote_name: DEFAULT_REMOTE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRemote {
    pub name: String,
    pub url: String,
}

/// Pick the remote to browse.
///
/// A sole remote wins regardless of `options.remote_name`; with several,
/// the name must match exactly.
pub fn resolve_remote(options: &BrowseOptions) -> Result<ResolvedRemote> {
    let repo = GitRepo::open_at(&options.path)?;
    debug!("discovered repository at {}", repo.git_dir().display());
    let names = repo.remote_names()?;
    debug!("configured remotes: {:?}", names);

    let name = match names.as_slice() {
        [] => return Err(Error::NoRemote),
        [only] => only.clone(),
        _ => names
            .iter()
            .find(|n| **n == options.remote_name)
            .cloned()
            .ok_or_else(|| Error::RemoteNotFound {
                name: options.remote_name.clone(),
                available: names.clone(),
            })?,
    };

    let url = repo
        .remote_url(&name)?
        .ok_or_else(|| Error::RemoteUrlMissing { name: name.clone() })?;
    debug!("selected remote '{}' -> {}", name, url);

    Ok(ResolvedRemote { name, url })
}

/// Resolve the remote for `options` and convert its URL for the browser.
pub fn browser_url(options: &BrowseOptions) -> Result<String> {
    let remote = resolve_remote(options)?;
    to_browser_url(&remote.url)
}

/// Convert a git remote URL to a browser-accessible HTTPS URL.
///
/// - `ssh://git@github.com/user/repo.git` -> `https://github.com/user/repo`
/// - `git@github.com:user/repo.git` -> `https://github.com/user/repo`
/// - anything else is returned untouched, `.git` suffix included
pub fn to_browser_url(raw: &str) -> Result<String> {
    if raw.starts_with("ssh://") {
        return ssh_to_https(raw);
    }

    if let Some(rest) = scp_like_remainder(raw) {
        let (host, path) = rest.split_once(':').ok_or_else(|| Error::MissingSeparator {
            url: raw.to_string(),
        })?;
        return Ok(format!("https://{}/{}", host, strip_git_suffix(path)));
    }

    Ok(raw.to_string())
}

fn ssh_to_https(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw).map_err(|e| parse_error(raw, e.to_string()))?;
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(parse_error(raw, url::ParseError::EmptyHost.to_string()));
    }

    // Url rewrites dot segments and escapes; slice everything past the
    // userinfo from the input instead.
    let after_scheme = &raw["ssh://".len()..];
    let authority_end = after_scheme
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(after_scheme.len());
    let (authority, rest) = after_scheme.split_at(authority_end);
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

    let path_end = rest.find(|c: char| matches!(c, '?' | '#')).unwrap_or(rest.len());
    let (path, tail) = rest.split_at(path_end);
    check_escapes(raw, path)?;
    if let Some((_, fragment)) = tail.split_once('#') {
        check_escapes(raw, fragment)?;
    }

    Ok(format!(
        "https://{}{}{}",
        host_port,
        strip_git_suffix(path),
        tail
    ))
}

/// Reject `%` not followed by two hex digits.
fn check_escapes(raw: &str, part: &str) -> Result<()> {
    let bytes = part.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'%' {
            continue;
        }
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            let escape: String = part[i..].chars().take(3).collect();
            return Err(parse_error(raw, format!("invalid URL escape {:?}", escape)));
        }
    }
    Ok(())
}

fn parse_error(raw: &str, reason: String) -> Error {
    Error::Parse {
        url: raw.to_string(),
        reason,
    }
}

/// Everything after the `@` of a `user@host:path` remote, or `None` if
/// `raw` isn't shaped like one. A scheme prefix always puts a `/` in the
/// user part, so `https://user@host/...` never matches.
fn scp_like_remainder(raw: &str) -> Option<&str> {
    let at = raw.find('@')?;
    if raw.find(':').is_some_and(|colon| colon < at) {
        return None;
    }
    let user = &raw[..at];
    if user.is_empty() || user.contains('/') {
        return None;
    }
    Some(&raw[at + 1..])
}

fn strip_git_suffix(path: &str) -> &str {
    path.strip_suffix(".git").unwrap_or(path)
}
