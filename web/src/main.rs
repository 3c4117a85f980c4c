use dioxus::prelude::*;

mod views;

use ui::{NoticeBanner, Notices};
use views::{ConfirmationView, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PageLayout)]
        #[route("/")]
        Home {},
        #[route("/confirm/:token")]
        Confirm { token: String },
        #[route("/confirm")]
        ConfirmWithoutToken {},
}

#[component]
fn Confirm(token: String) -> Element {
    rsx! { ConfirmationView { token: Some(token) } }
}

#[component]
fn ConfirmWithoutToken() -> Element {
    rsx! { ConfirmationView { token: None } }
}

fn main() {
    #[cfg(feature = "server")]
    {
        if let Err(e) = server::init_tracing() {
            eprintln!("{e}");
        }
        dioxus::serve(|| async move {
            let routes = server::init()?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Confirm your account" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn PageLayout() -> Element {
    use_context_provider(Notices::new);

    rsx! {
        main { class: "page",
            NoticeBanner {}
            Outlet::<Route> {}
        }
    }
}
