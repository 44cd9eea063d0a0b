use std::sync::Arc;

use tabled::Table;

use crate::{
    info, utils,
    views::{ConsoleNotifier, HomeView, SystemClipboard},
};

use super::{connect, print_recent, spinner};

pub async fn shorten(service_url: &str, url: String, copy: bool) {
    let client = connect(service_url);
    let base_url = client.base_url().to_string();
    let view = HomeView::new(client, Arc::new(ConsoleNotifier), Arc::new(SystemClipboard));

    let pb = spinner("Fetching short URLs...");
    view.mount().await;
    pb.set_message("Shortening...");
    view.set_input(url).await;
    let result = view.create().await;
    pb.finish_and_clear();

    let created = match result {
        Ok(created) => created,
        Err(_) => std::process::exit(1),
    };

    info!("Your Shortened URL");
    let card = utils::to_table_rows(std::slice::from_ref(&created), &base_url, chrono::Utc::now());
    println!("{}", Table::new(card));

    if copy {
        let link = utils::short_link(&base_url, &created.short_code);
        // a clipboard failure is already reported and does not undo the create
        let _ = view.copy_to_clipboard(&link).await;
    }

    info!("Recent URLs");
    print_recent(&view.urls().await, &base_url);
}
