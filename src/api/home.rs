use std::sync::Arc;

use axum::{Extension, Form};
use serde::Deserialize;

use crate::views::{CollectingNotifier, HomeView, SystemClipboard};

use super::{FrontState, page::HomeTemplate};

#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub url: String,
}

pub async fn home(Extension(state): Extension<FrontState>) -> HomeTemplate {
    let notifier = Arc::new(CollectingNotifier::new());
    let view = mounted_view(&state, notifier.clone()).await;
    HomeTemplate::new(view.snapshot().await, notifier.take(), &state.base_url)
}

pub async fn shorten(
    Extension(state): Extension<FrontState>,
    Form(form): Form<ShortenForm>,
) -> HomeTemplate {
    let notifier = Arc::new(CollectingNotifier::new());
    let view = mounted_view(&state, notifier.clone()).await;

    view.set_input(form.url).await;
    // outcome is carried by the view state and its notifications
    let _ = view.create().await;

    HomeTemplate::new(view.snapshot().await, notifier.take(), &state.base_url)
}

async fn mounted_view(state: &FrontState, notifier: Arc<CollectingNotifier>) -> HomeView {
    let view = HomeView::new(state.api.clone(), notifier, Arc::new(SystemClipboard));
    view.mount().await;
    view
}
