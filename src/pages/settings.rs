use crate::api;
use crate::state::use_app_state;
use dioxus::prelude::*;
use futures_util::future::join3;

const LOAD_ERROR: &str =
    "Failed to connect to the backend server. Please ensure the server is running and accessible.";

#[component]
pub fn Settings() -> Element {
    let mut state = use_app_state();
    let mut error = use_signal(|| Option::<String>::None);
    let mut reload = use_signal(|| 0usize);

    // The three reads are independent and joined; if any of them fails the
    // banner is shown and none of the results is applied.
    use_effect(move || {
        let _ = reload();
        spawn(async move {
            error.set(None);
            let results = join3(
                api::list_models(),
                api::list_embedding_models(),
                api::get_health(),
            )
            .await;

            match results {
                (Ok(models), Ok(embedding_models), Ok(health)) => {
                    let mut state = state.write();
                    state.set_models(models);
                    state.set_embedding_models(embedding_models);
                    state.set_health(health);
                }
                _ => error.set(Some(LOAD_ERROR.to_string())),
            }
        });
    });

    let models = state.read().models().to_vec();
    let embedding_models = state.read().embedding_models().to_vec();
    let health = state.read().health().clone();
    let selected_model = state.read().selected_model().unwrap_or("").to_string();
    let selected_embedding_model = state
        .read()
        .selected_embedding_model()
        .unwrap_or("")
        .to_string();

    rsx! {
        div { class: "max-w-2xl mx-auto",
            div { class: "rounded-lg shadow-lg p-6 transition-colors bg-white dark:bg-gray-800",
                div { class: "flex items-center justify-between mb-6",
                    h2 { class: "text-2xl font-bold", "Settings" }
                    button {
                        class: "px-3 py-1 text-sm rounded-lg bg-gray-100 hover:bg-gray-200 dark:bg-gray-700 dark:hover:bg-gray-600",
                        onclick: move |_| reload += 1,
                        "Refresh"
                    }
                }

                if let Some(message) = error() {
                    div { class: "mb-6 p-4 rounded-lg bg-red-100 text-red-700 dark:bg-red-900/20 dark:text-red-400",
                        "{message}"
                    }
                }

                div { class: "space-y-6",
                    div { class: "space-y-2",
                        h3 { class: "text-lg font-semibold mb-3", "System Health" }
                        div { class: "grid grid-cols-2 gap-4",
                            HealthIndicator { label: "Ollama", status: health.ollama }
                            HealthIndicator { label: "Qdrant", status: health.qdrant }
                        }
                        if let Some(message) = health.message {
                            p { class: "text-sm text-gray-500 dark:text-gray-400", "{message}" }
                        }
                    }

                    div { class: "space-y-2",
                        h3 { class: "text-lg font-semibold mb-3", "Model Selection" }
                        select {
                            class: "w-full p-2 rounded-lg bg-gray-100 text-gray-900 dark:bg-gray-700 dark:text-white",
                            onchange: move |evt| {
                                let value = evt.value();
                                state
                                    .write()
                                    .set_selected_model(if value.is_empty() { None } else { Some(value) });
                            },
                            option { value: "", selected: selected_model.is_empty(), "Select a model" }
                            for model in models.iter() {
                                option {
                                    key: "{model.name}",
                                    value: "{model.name}",
                                    selected: selected_model == model.name,
                                    if model.is_default {
                                        "{model.name} (Default)"
                                    } else {
                                        "{model.name}"
                                    }
                                }
                            }
                        }
                    }

                    div { class: "space-y-2",
                        h3 { class: "text-lg font-semibold mb-3", "Embedding Model" }
                        select {
                            class: "w-full p-2 rounded-lg bg-gray-100 text-gray-900 dark:bg-gray-700 dark:text-white",
                            onchange: move |evt| {
                                let value = evt.value();
                                state
                                    .write()
                                    .set_selected_embedding_model(
                                        if value.is_empty() { None } else { Some(value) },
                                    );
                            },
                            option {
                                value: "",
                                selected: selected_embedding_model.is_empty(),
                                "Select an embedding model"
                            }
                            for model in embedding_models.iter() {
                                option {
                                    key: "{model.name}",
                                    value: "{model.name}",
                                    selected: selected_embedding_model == model.name,
                                    if model.is_default {
                                        "{model.name} (Default)"
                                    } else {
                                        "{model.name}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HealthIndicator(label: String, status: bool) -> Element {
    rsx! {
        div {
            class: if status {
                "p-4 rounded-lg bg-green-100 dark:bg-green-900/20"
            } else {
                "p-4 rounded-lg bg-red-100 dark:bg-red-900/20"
            },
            div { class: "flex items-center space-x-2",
                span { class: if status { "text-green-500" } else { "text-red-500" },
                    if status { "●" } else { "○" }
                }
                span { class: if status { "text-green-500" } else { "text-red-500" },
                    "{label}"
                }
            }
        }
    }
}
