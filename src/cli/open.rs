use std::sync::Arc;

use crate::{
    info, success,
    views::{ConsoleNotifier, RedirectState, RedirectView},
    warning,
};

use super::{connect, spinner};

pub async fn open(service_url: &str, short_code: &str, browse: bool) {
    let client = connect(service_url);
    let view = RedirectView::new(client, Arc::new(ConsoleNotifier));

    let pb = spinner("Redirecting...");
    let result = view.activate(short_code).await;
    pb.finish_and_clear();

    let resolution = match result {
        Ok(RedirectState::Done(resolution)) => resolution,
        _ => std::process::exit(1),
    };

    let Some(location) = resolution.location else {
        info!("If you're not redirected, please try again later.");
        return;
    };

    success!("{} -> {}", short_code, location);
    if browse {
        if let Err(e) = webbrowser::open(&location) {
            warning!("Cannot open browser. Err: {}", e);
        }
    }
}
