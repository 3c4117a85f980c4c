use api::ActivationClient;
use dioxus::prelude::*;
use types::ConfirmState;
use ui::{Navigate, use_notices};
use url::Url;

use crate::Route;

struct RouterNavigate;

impl Navigate for RouterNavigate {
    fn home(&self) {
        navigator().push(Route::Home {});
    }
}

/// Loads the backend location, then renders the page.
#[component]
pub fn ConfirmationView(token: Option<String>) -> Element {
    let config = use_server_future(api::client_config)?;

    match &*config.read() {
        Some(Ok(config)) => rsx! {
            ConfirmationPage { token: token.clone(), api_url: config.api_url.clone() }
        },
        Some(Err(e)) => {
            tracing::warn!(error = %e, "failed to load client configuration");
            rsx! {
                div { class: "card",
                    div { class: "alert alert-error", "Failed to load configuration" }
                }
            }
        }
        None => rsx! {
            div { class: "card",
                div { class: "loading", "Loading..." }
            }
        },
    }
}

/// Heading plus the confirm button.
///
/// Needs a `Notices` context. The router is only looked up once the
/// account has been confirmed.
#[component]
pub fn ConfirmationPage(token: Option<String>, api_url: Url) -> Element {
    let mut notices = use_notices();
    let mut state = use_signal(ConfirmState::default);

    rsx! {
        div { class: "card",
            h2 { class: "card-title", "Confirmation" }
            ConfirmButton {
                busy: state.read().is_busy(),
                on_confirm: move |_| {
                    if !state.write().begin() {
                        return;
                    }
                    notices.clear();

                    let token = token.clone();
                    let client = ActivationClient::new(api_url.clone());
                    spawn(async move {
                        let outcome =
                            ui::confirm(&client, token.as_deref(), &mut notices, &RouterNavigate)
                                .await;
                        state.write().finish(outcome);
                    });
                },
            }
        }
    }
}

/// Disabled while a confirmation is in flight; the label never changes.
#[component]
fn ConfirmButton(busy: bool, on_confirm: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "btn btn-primary",
            disabled: busy,
            onclick: move |_| on_confirm.call(()),
            "Click to confirm"
        }
    }
}

#[cfg(test)]
mod tests {
    use ui::Notices;

    use super::*;

    #[component]
    fn WithNotices(token: Option<String>) -> Element {
        use_context_provider(Notices::new);

        rsx! {
            ConfirmationPage {
                token: token.clone(),
                api_url: "http://localhost:8080/v1".parse::<Url>().unwrap(),
            }
        }
    }

    fn render_page(token: Option<&str>) -> String {
        let mut dom = VirtualDom::new_with_props(
            WithNotices,
            WithNoticesProps {
                token: token.map(str::to_owned),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_heading_and_button() {
        let html = render_page(Some("T"));

        assert!(html.contains("Confirmation"), "{html}");
        assert!(html.contains("Click to confirm"), "{html}");
        assert!(!html.contains("disabled"), "idle button is enabled: {html}");
    }

    #[test]
    fn renders_without_a_token() {
        let html = render_page(None);

        assert!(html.contains("Confirmation"), "{html}");
        assert!(html.contains("Click to confirm"), "{html}");
    }

    #[component]
    fn BusyButton() -> Element {
        rsx! { ConfirmButton { busy: true, on_confirm: |_| {} } }
    }

    #[test]
    fn busy_button_is_disabled_and_keeps_its_label() {
        let mut dom = VirtualDom::new(BusyButton);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("disabled"), "{html}");
        assert!(html.contains("Click to confirm"), "{html}");
        assert!(!html.contains("Confirming"), "no loading label: {html}");
    }
}
