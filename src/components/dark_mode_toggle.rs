use crate::state::use_app_state;
use dioxus::prelude::*;

#[component]
pub fn DarkModeToggle() -> Element {
    let mut state = use_app_state();

    rsx! {
        button {
            class: "inline-flex items-center justify-center h-8 w-8 text-sm rounded-full transition-all cursor-pointer bg-gray-200 text-gray-800 hover:bg-gray-300 dark:bg-gray-700 dark:text-gray-200 dark:hover:bg-gray-600",
            onclick: move |_| state.write().toggle_dark_mode(),

            if state.read().dark_mode() {
                "☀️"
            } else {
                "🌙"
            }
        }
    }
}
