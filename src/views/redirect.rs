use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{error::ViewError, service::ShortUrlApi, types::Resolution};

use super::{Level, Notifier};

pub const MSG_REDIRECT_FAILED: &str = "Failed to redirect. The URL may be invalid or expired.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectState {
    Resolving,
    Failed,
    Done(Resolution),
}

struct Current {
    short_code: String,
    generation: u64,
    state: RedirectState,
}

/// The `/shorten/{shortCode}` screen.
///
/// Resolves the code from the path once. The service does the actual redirect;
/// this view only tracks whether it succeeded.
pub struct RedirectView {
    api: Arc<dyn ShortUrlApi>,
    notifier: Arc<dyn Notifier>,
    current: Mutex<Option<Current>>,
}

impl RedirectView {
    pub fn new(api: Arc<dyn ShortUrlApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            api,
            notifier,
            current: Mutex::new(None),
        }
    }

    /// Points the view at `short_code` and resolves it.
    ///
    /// Calling again with the code that is already current does not issue a
    /// new request: it returns the current state, or
    /// [`ViewError::Unresolved`] when that code failed. A different code starts a new
    /// resolution; when an older one finishes afterwards its result is dropped
    /// with [`ViewError::Superseded`], without touching state or notifying.
    pub async fn activate(&self, short_code: &str) -> Result<RedirectState, ViewError> {
        let generation = {
            let mut current = self.current.lock().await;
            if let Some(c) = current.as_ref() {
                if c.short_code == short_code {
                    return match &c.state {
                        RedirectState::Failed => Err(ViewError::Unresolved(c.short_code.clone())),
                        state => Ok(state.clone()),
                    };
                }
            }
            let generation = current.as_ref().map_or(1, |c| c.generation + 1);
            *current = Some(Current {
                short_code: short_code.to_string(),
                generation,
                state: RedirectState::Resolving,
            });
            generation
        };

        let result = self.api.resolve(short_code).await;

        let mut current = self.current.lock().await;
        let Some(c) = current.as_mut().filter(|c| c.generation == generation) else {
            tracing::debug!("dropping stale resolution for {}", short_code);
            return Err(ViewError::Superseded);
        };

        match result {
            Ok(resolution) => {
                c.state = RedirectState::Done(resolution);
                Ok(c.state.clone())
            }
            Err(e) => {
                c.state = RedirectState::Failed;
                self.notifier.notify(Level::Error, MSG_REDIRECT_FAILED);
                Err(e.into())
            }
        }
    }

    /// State for the current code, `None` before the first activation.
    pub async fn state(&self) -> Option<RedirectState> {
        self.current.lock().await.as_ref().map(|c| c.state.clone())
    }

    pub async fn short_code(&self) -> Option<String> {
        self.current
            .lock()
            .await
            .as_ref()
            .map(|c| c.short_code.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        sync::Mutex as StdMutex,
    };

    use async_trait::async_trait;
    use reqwest::StatusCode;
    use tokio::sync::oneshot;

    use super::*;
    use crate::{
        error::ApiError,
        service::MockShortUrlApi,
        types::ShortUrl,
        views::{CollectingNotifier, MockNotifier, Notification},
    };

    fn not_found(code: &str) -> ApiError {
        ApiError::Status {
            path: format!("/urls/{}", code),
            status: StatusCode::NOT_FOUND,
            payload: Some(serde_json::json!({ "error": "not found" })),
        }
    }

    fn found() -> Resolution {
        Resolution {
            status: 302,
            location: Some("https://example.com".to_string()),
        }
    }

    #[tokio::test]
    async fn test_successful_resolution_ends_done() {
        let mut api = MockShortUrlApi::new();
        api.expect_resolve()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(|_| Ok(found()));

        let notifier = Arc::new(CollectingNotifier::new());
        let view = RedirectView::new(Arc::new(api), notifier.clone());
        assert_eq!(view.state().await, None);

        let state = view.activate("abc123").await.unwrap();

        assert_eq!(state, RedirectState::Done(found()));
        assert_eq!(view.state().await, Some(RedirectState::Done(found())));
        assert!(notifier.take().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_code_fails_with_one_notification() {
        let mut api = MockShortUrlApi::new();
        api.expect_resolve()
            .withf(|code| code == "deadbeef")
            .times(1)
            .returning(|code| Err(not_found(code)));

        let notifier = Arc::new(CollectingNotifier::new());
        let view = RedirectView::new(Arc::new(api), notifier.clone());

        let result = view.activate("deadbeef").await;

        assert!(matches!(result, Err(ViewError::Api(ref e)) if e.is_not_found()));
        assert_eq!(view.state().await, Some(RedirectState::Failed));
        assert_eq!(
            notifier.take(),
            vec![Notification {
                level: Level::Error,
                message: MSG_REDIRECT_FAILED.to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_failure_message_is_generic() {
        let mut api = MockShortUrlApi::new();
        api.expect_resolve().returning(|_| {
            Err(ApiError::Status {
                path: "/urls/gone".to_string(),
                status: StatusCode::GONE,
                payload: Some(serde_json::json!({ "error": "link expired on 2024-01-01" })),
            })
        });

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|level, message| *level == Level::Error && message == MSG_REDIRECT_FAILED)
            .times(1)
            .return_const(());

        let view = RedirectView::new(Arc::new(api), Arc::new(notifier));
        assert!(view.activate("gone").await.is_err());
    }

    #[tokio::test]
    async fn test_same_code_is_not_resolved_twice() {
        let mut api = MockShortUrlApi::new();
        api.expect_resolve().times(1).returning(|_| Ok(found()));

        let view = RedirectView::new(Arc::new(api), Arc::new(CollectingNotifier::new()));
        view.activate("abc123").await.unwrap();
        let again = view.activate("abc123").await.unwrap();

        assert_eq!(again, RedirectState::Done(found()));
    }

    #[tokio::test]
    async fn test_same_failed_code_stays_an_error() {
        let mut api = MockShortUrlApi::new();
        api.expect_resolve()
            .times(1)
            .returning(|code| Err(not_found(code)));

        let notifier = Arc::new(CollectingNotifier::new());
        let view = RedirectView::new(Arc::new(api), notifier.clone());

        assert!(matches!(
            view.activate("deadbeef").await,
            Err(ViewError::Api(_))
        ));
        let again = view.activate("deadbeef").await;

        assert!(matches!(again, Err(ViewError::Unresolved(ref code)) if code == "deadbeef"));
        assert_eq!(view.state().await, Some(RedirectState::Failed));
        assert_eq!(notifier.take().len(), 1);
    }

    #[tokio::test]
    async fn test_code_is_passed_through_unvalidated() {
        let mut api = MockShortUrlApi::new();
        api.expect_resolve()
            .withf(|code| code == "../weird code?")
            .times(1)
            .returning(|_| Ok(found()));

        let view = RedirectView::new(Arc::new(api), Arc::new(CollectingNotifier::new()));
        assert!(view.activate("../weird code?").await.is_ok());
    }

    /// Each resolve parks until the test releases it with a chosen outcome.
    #[derive(Default)]
    struct ParkedApi {
        calls: StdMutex<Vec<String>>,
        pending: StdMutex<HashMap<String, oneshot::Sender<Result<Resolution, ApiError>>>>,
    }

    impl ParkedApi {
        fn release(&self, code: &str, outcome: Result<Resolution, ApiError>) {
            let sender = self.pending.lock().unwrap().remove(code).unwrap();
            sender.send(outcome).unwrap();
        }

        fn is_parked(&self, code: &str) -> bool {
            self.pending.lock().unwrap().contains_key(code)
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ShortUrlApi for ParkedApi {
        async fn list_urls(&self) -> Result<Vec<ShortUrl>, ApiError> {
            Ok(Vec::new())
        }

        async fn create_url(&self, url: &str) -> Result<ShortUrl, ApiError> {
            Err(not_found(url))
        }

        async fn resolve(&self, short_code: &str) -> Result<Resolution, ApiError> {
            let (tx, rx) = oneshot::channel();
            self.calls.lock().unwrap().push(short_code.to_string());
            self.pending
                .lock()
                .unwrap()
                .insert(short_code.to_string(), tx);
            rx.await.unwrap()
        }
    }

    async fn wait_parked(api: &ParkedApi, code: &str) {
        while !api.is_parked(code) {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_stale_failure_does_not_override_newer_code() {
        let api = Arc::new(ParkedApi::default());
        let notifier = Arc::new(CollectingNotifier::new());
        let view = Arc::new(RedirectView::new(api.clone(), notifier.clone()));

        let first = tokio::spawn({
            let view = view.clone();
            async move { view.activate("old").await }
        });
        wait_parked(&api, "old").await;

        let second = tokio::spawn({
            let view = view.clone();
            async move { view.activate("new").await }
        });
        wait_parked(&api, "new").await;

        api.release("new", Ok(found()));
        assert_eq!(second.await.unwrap().unwrap(), RedirectState::Done(found()));

        api.release("old", Err(not_found("old")));
        assert!(matches!(
            first.await.unwrap(),
            Err(ViewError::Superseded)
        ));

        assert_eq!(api.calls(), vec!["old".to_string(), "new".to_string()]);
        assert_eq!(view.short_code().await.as_deref(), Some("new"));
        assert_eq!(view.state().await, Some(RedirectState::Done(found())));
        assert!(notifier.take().is_empty());
    }

    #[tokio::test]
    async fn test_stale_success_does_not_override_newer_failure() {
        let api = Arc::new(ParkedApi::default());
        let notifier = Arc::new(CollectingNotifier::new());
        let view = Arc::new(RedirectView::new(api.clone(), notifier.clone()));

        let first = tokio::spawn({
            let view = view.clone();
            async move { view.activate("old").await }
        });
        wait_parked(&api, "old").await;

        let second = tokio::spawn({
            let view = view.clone();
            async move { view.activate("new").await }
        });
        wait_parked(&api, "new").await;

        api.release("old", Ok(found()));
        assert!(matches!(
            first.await.unwrap(),
            Err(ViewError::Superseded)
        ));
        assert_eq!(view.state().await, Some(RedirectState::Resolving));

        api.release("new", Err(not_found("new")));
        assert!(second.await.unwrap().is_err());

        assert_eq!(api.calls().len(), 2);
        assert_eq!(view.state().await, Some(RedirectState::Failed));
        assert_eq!(notifier.take().len(), 1);
    }
}
