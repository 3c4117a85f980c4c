use dioxus::prelude::*;

use crate::Notify;

/// Page-wide notice state. Provide it once in a layout, read it with
/// `use_notices()`.
#[derive(Clone, Copy)]
pub struct Notices(Signal<Option<String>>);

impl Notices {
    pub fn new() -> Self {
        Self(Signal::new(None))
    }

    pub fn set(&mut self, message: impl Into<String>) {
        self.0.set(Some(message.into()));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}

impl Notify for Notices {
    fn notify(&mut self, message: &str) {
        self.set(message);
    }
}

pub fn use_notices() -> Notices {
    use_context::<Notices>()
}

#[component]
pub fn NoticeBanner() -> Element {
    let mut notices = use_notices();
    let notice = notices.0.read();

    if let Some(message) = notice.as_ref() {
        rsx! {
            div { class: "notice-banner", role: "alert",
                span { class: "notice-banner-message", "{message}" }
                button {
                    class: "notice-banner-close",
                    onclick: move |_| notices.clear(),
                    "×"
                }
            }
        }
    } else {
        rsx! {}
    }
}
