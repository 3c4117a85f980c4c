use api::Activate;
use types::{ActivationToken, ConfirmOutcome};

pub const FAILURE_MESSAGE: &str = "Failed to confirm";
pub const MISSING_TOKEN_MESSAGE: &str = "This confirmation link is missing its token.";

/// Where user-visible failures go.
pub trait Notify {
    fn notify(&mut self, message: &str);
}

/// Leaves the confirmation page once the account is active.
pub trait Navigate {
    /// Go to the application root, `/`.
    fn home(&self);
}

/// Run one confirmation attempt.
///
/// Makes at most one activation request. On success the user is sent home;
/// on any failure a generic notice is shown and the user stays put.
pub async fn confirm<A, N, V>(
    activator: &A,
    token: Option<&str>,
    notifier: &mut N,
    navigator: &V,
) -> ConfirmOutcome
where
    A: Activate,
    N: Notify,
    V: Navigate,
{
    let Some(token) = ActivationToken::from_route(token) else {
        tracing::warn!("confirmation attempted without a token");
        notifier.notify(MISSING_TOKEN_MESSAGE);
        return ConfirmOutcome::MissingToken;
    };

    match activator.activate(&token).await {
        Ok(()) => {
            tracing::info!("account confirmed");
            navigator.home();
            ConfirmOutcome::Confirmed
        }
        Err(error) => {
            tracing::warn!("account confirmation failed: {error:#}");
            notifier.notify(FAILURE_MESSAGE);
            ConfirmOutcome::Failed
        }
    }
}
