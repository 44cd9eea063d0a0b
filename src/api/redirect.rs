use std::sync::Arc;

use axum::{
    Extension,
    extract::Path,
    response::{IntoResponse, Redirect, Response},
};

use crate::views::{CollectingNotifier, RedirectState, RedirectView};

use super::{FrontState, page::RedirectTemplate};

pub async fn redirect(
    Path(short_code): Path<String>,
    Extension(state): Extension<FrontState>,
) -> Response {
    let notifier = Arc::new(CollectingNotifier::new());
    let view = RedirectView::new(state.api.clone(), notifier.clone());

    let (failed, message) = match view.activate(&short_code).await {
        Ok(RedirectState::Done(resolution)) => match resolution.location {
            Some(location) => return Redirect::to(&location).into_response(),
            None => (false, "If you're not redirected, please try again later."),
        },
        Ok(_) => (false, "Redirecting..."),
        Err(_) => (true, ""),
    };

    RedirectTemplate {
        toasts: notifier.take().into_iter().map(Into::into).collect(),
        failed,
        message,
    }
    .into_response()
}
