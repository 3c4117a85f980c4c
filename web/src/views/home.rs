use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "card",
            h1 { class: "card-title", "Welcome" }
            p { "Your account is ready to use." }
        }
    }
}
