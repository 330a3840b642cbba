//! Opening outbound links (social profiles, storefronts, embeds) in a new
//! browsing context

use anyhow::{bail, Context, Result};

pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands URLs to the desktop's default handler. The launcher runs detached
/// and keeps no reference back to this application.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        let url = web_url(url)?;
        open::that_detached(url).with_context(|| format!("failed to open `{url}`"))?;
        tracing::info!(url, "Opened external link");
        Ok(())
    }
}

/// In-page fragments and other schemes never leave the application.
fn web_url(url: &str) -> Result<&str> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        bail!("refusing to open non-web URL `{url}`");
    }
    Ok(url)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub(crate) struct RecordingOpener {
        pub opened: Mutex<Vec<String>>,
    }

    impl RecordingOpener {
        pub fn opened(&self) -> Vec<String> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn system_opener_refuses_in_page_fragments() {
        let err = SystemOpener.open("#/releases").unwrap_err();
        assert!(err.to_string().contains("non-web URL"));
        assert!(web_url("javascript:alert(1)").is_err());
    }

    #[test]
    fn query_strings_reach_the_launcher_whole() {
        let url = "https://open.spotify.com/embed/album/x?utm_source=generator&theme=0";
        assert_eq!(web_url(url).unwrap(), url);
    }
}
