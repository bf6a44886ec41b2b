use crate::error::{Error, Result};
use log::debug;

/// Open a URL in the system's default browser without waiting for it.
pub fn open_url(url: &str) -> Result<()> {
    debug!("launching browser for {}", url);
    open::that_detached(url).map_err(|source| Error::BrowserLaunch {
        url: url.to_string(),
        source,
    })
}
