use crate::components::Navbar;
use crate::pages::{Chat, PageNotFound, Settings, Upload};
use crate::state::{use_app_state, AppState};
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Chat {},
        #[route("/upload")]
        Upload {},
        #[route("/settings")]
        Settings {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(AppState::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/styling/output.css") }

        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    let state = use_app_state();

    // Mirror the theme flag onto <html> so Tailwind dark: variants apply.
    use_effect(move || {
        let dark_mode = state.read().dark_mode();

        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(html) = document.document_element() {
                    let class_list = html.class_list();
                    if dark_mode {
                        let _ = class_list.add_1("dark");
                    } else {
                        let _ = class_list.remove_1("dark");
                    }
                }
            }
        }
    });

    rsx! {
        div {
            class: "min-h-screen transition-colors bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-white",

            Navbar {},

            main { class: "container mx-auto px-4 py-8",
                Outlet::<Route> {}
            }
        }
    }
}
