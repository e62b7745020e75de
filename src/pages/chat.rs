use crate::api::{self, QueryRequest, QueryResponse};
use crate::state::{use_app_state, Message, Role};
use dioxus::prelude::*;

/// Shown when the backend answers with a non-success status.
const APOLOGY_REPLY: &str = "Sorry, I encountered an error processing your request.";
/// Shown when the request never reaches the backend or its body is unreadable.
const CONNECTION_REPLY: &str = "Sorry, there was an error connecting to the server.";

/// A query is submitted trimmed; empty or whitespace-only input is ignored.
fn normalized_query(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn Chat() -> Element {
    let mut state = use_app_state();
    let mut input = use_signal(String::new);
    let mut use_web_search = use_signal(|| true);
    // In-flight request count. The input stays enabled while requests are
    // pending, so several can be in flight at once; each settles on its own.
    let mut pending = use_signal(|| 0usize);

    let mut submit = move || {
        let Some(query) = normalized_query(&input()) else {
            return;
        };

        // User message is appended before the response resolves.
        state.write().add_message(Message::user(query.clone()));
        input.set(String::new());

        let request = QueryRequest {
            query,
            model_name: state.read().selected_model().map(str::to_string),
            use_web_search: Some(use_web_search()),
        };

        pending += 1;
        spawn(async move {
            let reply = match api::submit_query(&request).await {
                Ok(response) if response.ok() => match response.json::<QueryResponse>().await {
                    Ok(data) => data.response,
                    Err(_) => CONNECTION_REPLY.to_string(),
                },
                Ok(_) => APOLOGY_REPLY.to_string(),
                Err(_) => CONNECTION_REPLY.to_string(),
            };
            state.write().add_message(Message::assistant(reply));
            pending -= 1;
        });
    };

    let messages = state.read().messages().to_vec();

    rsx! {
        div { class: "max-w-4xl mx-auto",
            div { class: "rounded-lg shadow-lg p-6 transition-colors bg-white dark:bg-gray-800",

                div { class: "space-y-4 mb-4 h-[60vh] overflow-y-auto",

                    if messages.is_empty() && pending() == 0 {
                        div { class: "flex items-center justify-center h-full",
                            div { class: "text-center",
                                h2 { class: "text-2xl font-bold mb-2", "Welcome to RAG Chat" }
                                p { class: "text-gray-500 dark:text-gray-400",
                                    "Ask a question about your uploaded documents."
                                }
                            }
                        }
                    }

                    for (idx, message) in messages.iter().enumerate() {
                        div {
                            key: "{idx}",
                            class: if message.role == Role::User {
                                "p-4 rounded-lg bg-blue-500 text-white ml-auto max-w-[80%]"
                            } else {
                                "p-4 rounded-lg bg-gray-100 dark:bg-gray-700 max-w-[80%]"
                            },
                            pre { class: "whitespace-pre-wrap font-sans", "{message.content}" }
                        }
                    }

                    if pending() > 0 {
                        div { class: "p-4 rounded-lg bg-gray-100 dark:bg-gray-700 max-w-[80%]",
                            span { class: "animate-pulse", "…" }
                        }
                    }
                }

                div { class: "flex items-center gap-4",
                    div { class: "flex-1 relative",
                        input {
                            class: "w-full p-3 rounded-lg pr-10 bg-gray-100 text-gray-900 placeholder-gray-500 dark:bg-gray-700 dark:text-white dark:placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-blue-500",
                            r#type: "text",
                            placeholder: "Ask a question...",
                            value: "{input}",
                            oninput: move |evt| input.set(evt.value()),
                            onkeypress: move |evt| {
                                if evt.key() == Key::Enter && !evt.modifiers().shift() {
                                    evt.prevent_default();
                                    submit();
                                }
                            },
                        }

                        // Web-augmented retrieval toggle, enabled by default.
                        button {
                            r#type: "button",
                            class: "absolute right-3 top-1/2 -translate-y-1/2 p-1 rounded",
                            class: if use_web_search() {
                                "text-blue-500 dark:text-blue-400"
                            } else {
                                "text-gray-500 dark:text-gray-400"
                            },
                            title: if use_web_search() {
                                "Web search is ON - click to disable"
                            } else {
                                "Web search is OFF - click to enable"
                            },
                            onclick: move |_| use_web_search.set(!use_web_search()),
                            "🔍"
                        }
                    }

                    button {
                        class: "p-3 rounded-lg bg-blue-500 hover:bg-blue-600 text-white",
                        onclick: move |_| submit(),
                        "Send"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_input_is_not_a_query() {
        assert_eq!(normalized_query(""), None);
        assert_eq!(normalized_query("   "), None);
        assert_eq!(normalized_query("\t\n"), None);
    }

    #[test]
    fn query_is_trimmed() {
        assert_eq!(
            normalized_query("  what is RAG?  "),
            Some("what is RAG?".to_string())
        );
    }

    #[test]
    fn settle_messages_are_fixed() {
        assert_eq!(
            APOLOGY_REPLY,
            "Sorry, I encountered an error processing your request."
        );
        assert_eq!(
            CONNECTION_REPLY,
            "Sorry, there was an error connecting to the server."
        );
    }
}
