use std::sync::Arc;

use crate::{
    utils,
    views::{ConsoleNotifier, HomeView, SystemClipboard},
};

use super::connect;

pub async fn copy(service_url: &str, short_code: &str) {
    let client = connect(service_url);
    let link = utils::short_link(client.base_url(), short_code);
    let view = HomeView::new(client, Arc::new(ConsoleNotifier), Arc::new(SystemClipboard));

    if view.copy_to_clipboard(&link).await.is_err() {
        std::process::exit(1);
    }
    println!("{}", link);
}
