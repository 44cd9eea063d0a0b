use crate::{api::FrontState, error, info, server};

use super::connect;

pub async fn serve(service_url: &str, addr: &str) {
    let client = connect(service_url);
    let state = FrontState::new(client.clone(), client.base_url());

    info!("Serving front end for {} on http://{}", client.base_url(), addr);
    if let Err(e) = server::start_web_server(addr, state).await {
        error!("Web server stopped. Err: {}", e);
    }
}
