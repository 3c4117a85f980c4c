use eyre::WrapErr;
use reqwest::{Client, Url};
use types::{ActivationToken, Result, err};

/// Something that can activate an account given its token.
///
/// `ActivationClient` is the real implementation; the page only depends on
/// this trait.
#[allow(async_fn_in_trait)]
pub trait Activate {
    async fn activate(&self, token: &ActivationToken) -> Result<()>;
}

/// Talks to the backend's `PUT /users/activate/{token}` endpoint.
#[derive(Clone)]
pub struct ActivationClient {
    client: Client,
    api_url: Url,
}

impl ActivationClient {
    pub fn new(api_url: Url) -> Self {
        Self {
            client: Client::new(),
            api_url,
        }
    }

    /// `{api_url}/users/activate/{token}`, with the token kept as a single
    /// path segment.
    pub fn activation_url(&self, token: &ActivationToken) -> Result<Url> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| err!("api url cannot be used as a base: {}", self.api_url))?
            .pop_if_empty()
            .extend(["users", "activate", token.as_str()]);
        Ok(url)
    }
}

impl Activate for ActivationClient {
    async fn activate(&self, token: &ActivationToken) -> Result<()> {
        let url = self.activation_url(token)?;
        tracing::debug!(%url, "sending activation request");

        let response = self
            .client
            .put(url)
            .send()
            .await
            .wrap_err("activation request failed")?;

        let status = response.status();
        if !status.is_success() {
            return Err(err!("activation rejected with status {}", status).into());
        }

        Ok(())
    }
}
