use std::sync::Arc;

use crate::views::{ConsoleNotifier, HomeView, SystemClipboard};

use super::{connect, print_recent, spinner};

pub async fn list(service_url: &str) {
    let client = connect(service_url);
    let view = HomeView::new(
        client.clone(),
        Arc::new(ConsoleNotifier),
        Arc::new(SystemClipboard),
    );

    let pb = spinner("Fetching short URLs...");
    view.mount().await;
    pb.finish_and_clear();

    print_recent(&view.urls().await, client.base_url());
}
