use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    error::ViewError,
    service::ShortUrlApi,
    types::ShortUrl,
};

use super::{Clipboard, Level, Notifier};

pub const MSG_EMPTY_INPUT: &str = "Enter a valid URL!";
pub const MSG_CREATED: &str = "Short URL created!";
pub const MSG_CREATE_FAILED: &str = "Failed to shorten URL";
pub const MSG_COPIED: &str = "Copied to clipboard!";
pub const MSG_COPY_FAILED: &str = "Failed to copy to clipboard. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
}

#[derive(Debug, Clone)]
pub struct HomeState {
    pub phase: Phase,
    pub input: String,
    pub urls: Vec<ShortUrl>,
    pub latest: Option<ShortUrl>,
    pub creating: bool,
    mounted: bool,
    listing: bool,
}

impl Default for HomeState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            input: String::new(),
            urls: Vec::new(),
            latest: None,
            creating: false,
            mounted: false,
            listing: false,
        }
    }
}

impl HomeState {
    /// `Ready` once neither the list fetch nor a create is pending.
    fn settle(&mut self) {
        if !self.listing && !self.creating {
            self.phase = Phase::Ready;
        }
    }
}

/// The list/create screen.
///
/// Holds the short URLs fetched on mount plus whatever was created since. The
/// list is never re-fetched: after mount it only grows at the front. The state
/// lock is never held across a call to the service, so a pending create does
/// not block reads.
pub struct HomeView {
    api: Arc<dyn ShortUrlApi>,
    notifier: Arc<dyn Notifier>,
    clipboard: Arc<dyn Clipboard>,
    state: Mutex<HomeState>,
}

impl HomeView {
    pub fn new(
        api: Arc<dyn ShortUrlApi>,
        notifier: Arc<dyn Notifier>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            api,
            notifier,
            clipboard,
            state: Mutex::new(HomeState::default()),
        }
    }

    /// Fetches the collection once per view. Returns `false` without touching
    /// the network when the view was already mounted.
    ///
    /// A failed fetch is logged and otherwise ignored; the list stays as it was.
    pub async fn mount(&self) -> bool {
        {
            let mut state = self.state.lock().await;
            if state.mounted {
                return false;
            }
            state.mounted = true;
            state.listing = true;
            state.phase = Phase::Loading;
        }

        let result = self.api.list_urls().await;

        let mut state = self.state.lock().await;
        match result {
            Ok(urls) => state.urls = urls,
            Err(e) => tracing::error!("Error fetching URLs: {}", e),
        }
        state.listing = false;
        state.settle();
        true
    }

    pub async fn set_input(&self, value: impl Into<String>) {
        self.state.lock().await.input = value.into();
    }

    /// Submits the current input.
    ///
    /// Rejected without a request when a create is already pending (the
    /// control is disabled) or when the input is empty. On success the new
    /// record becomes `latest`, lands at the front of the list and the input is
    /// cleared; on failure list and input are left alone. The view reports
    /// `Loading` while the request is pending.
    pub async fn create(&self) -> Result<ShortUrl, ViewError> {
        let url = {
            let mut state = self.state.lock().await;
            if state.creating {
                return Err(ViewError::Busy);
            }
            if state.input.is_empty() {
                self.notifier.notify(Level::Error, MSG_EMPTY_INPUT);
                return Err(ViewError::EmptyInput);
            }
            state.creating = true;
            state.phase = Phase::Loading;
            state.input.clone()
        };

        let result = self.api.create_url(&url).await;

        let mut state = self.state.lock().await;
        state.creating = false;
        state.settle();
        match result {
            Ok(created) => {
                state.latest = Some(created.clone());
                state.urls.insert(0, created.clone());
                state.input.clear();
                self.notifier.notify(Level::Success, MSG_CREATED);
                Ok(created)
            }
            Err(e) => {
                self.notifier.notify(Level::Error, MSG_CREATE_FAILED);
                Err(e.into())
            }
        }
    }

    /// Puts a fully-qualified short link on the clipboard.
    pub async fn copy_to_clipboard(&self, link: &str) -> Result<(), ViewError> {
        match self.clipboard.write_text(link) {
            Ok(()) => {
                self.notifier.notify(Level::Info, MSG_COPIED);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to copy: {}", e);
                self.notifier.notify(Level::Error, MSG_COPY_FAILED);
                Err(e.into())
            }
        }
    }

    pub async fn snapshot(&self) -> HomeState {
        self.state.lock().await.clone()
    }

    pub async fn urls(&self) -> Vec<ShortUrl> {
        self.state.lock().await.urls.clone()
    }

    pub async fn is_creating(&self) -> bool {
        self.state.lock().await.creating
    }
}
