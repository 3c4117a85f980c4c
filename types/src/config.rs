use serde::{Deserialize, Serialize};
use url::Url;

/// Settings the browser needs before it can talk to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the backend API, e.g. `https://api.example.com/v1`.
    pub api_url: Url,
}
