use crate::{config, error, server::{self, AppState}};

pub async fn serve(addr: Option<String>) {
    let addr = addr.unwrap_or_else(config::server_addr);
    let state = AppState::from_config();

    if let Err(e) = server::start_api_server(&addr, state).await {
        error!("Server stopped: {}", e);
    }
}
