use dioxus::prelude::*;
use types::ClientConfig;

mod activation;

pub use activation::{Activate, ActivationClient};

/// Hands the browser the backend location it should call.
#[post("/api/client-config")]
pub async fn client_config() -> ServerFnResult<ClientConfig> {
    Ok(server::client_config()?)
}
