use crate::app::Route;
use crate::components::dark_mode_toggle::DarkModeToggle;
use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "sticky top-0 z-50 shadow-lg transition-colors bg-white dark:bg-gray-800",
            div { class: "container mx-auto px-4",
                div { class: "flex items-center justify-between h-16",
                    div { class: "flex items-center space-x-8",
                        Link { to: Route::Chat {}, class: "flex items-center space-x-2",
                            span { class: "text-xl", "💬" }
                            span { class: "font-semibold", "RAG Chat" }
                        }

                        div { class: "flex space-x-4",
                            NavLink { to: Route::Chat {}, label: "Chat" }
                            NavLink { to: Route::Upload {}, label: "Upload" }
                            NavLink { to: Route::Settings {}, label: "Settings" }
                        }
                    }

                    DarkModeToggle {}
                }
            }
        }
    }
}

#[component]
fn NavLink(to: Route, label: String) -> Element {
    let current = use_route::<Route>();
    let active = current == to;

    rsx! {
        Link {
            to: to.clone(),
            class: if active {
                "px-3 py-2 rounded-lg bg-gray-100 text-gray-900 dark:bg-gray-700 dark:text-white"
            } else {
                "px-3 py-2 rounded-lg transition-colors text-gray-600 hover:text-gray-900 hover:bg-gray-100 dark:text-gray-300 dark:hover:text-white dark:hover:bg-gray-700"
            },
            "{label}"
        }
    }
}
