use std::sync::Arc;

use crate::api::{self, UploadConfig, UploadErrorBody};
use crate::state::use_app_state;
use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;

/// Document types the backend's ingestion pipeline understands.
const SUPPORTED_EXTENSIONS: [&str; 4] = ["txt", "pdf", "doc", "docx"];

const CHUNK_SIZE: usize = 1000;
const CHUNK_OVERLAP: usize = 200;

fn is_supported(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[derive(Clone, PartialEq)]
enum UploadStatus {
    Idle,
    Uploading,
    Success(String),
    Error(String),
}

#[component]
pub fn Upload() -> Element {
    let state = use_app_state();
    let mut status = use_signal(|| UploadStatus::Idle);
    let mut drag_active = use_signal(|| false);

    // One file per drop or selection; extra entries are ignored.
    let mut handle_files = move |file_engine: Arc<dyn FileEngine>| {
        let Some(filename) = file_engine
            .files()
            .into_iter()
            .find(|name| is_supported(name))
        else {
            return;
        };

        let embedding_model = state.read().selected_embedding_model().map(str::to_string);
        status.set(UploadStatus::Uploading);

        spawn(async move {
            let Some(data) = file_engine.read_file(&filename).await else {
                status.set(UploadStatus::Error("Failed to read file".to_string()));
                return;
            };

            let config = UploadConfig {
                chunk_size: CHUNK_SIZE,
                chunk_overlap: CHUNK_OVERLAP,
                embedding_model,
            };

            match api::upload_file(&filename, &data, &config).await {
                Ok(response) if response.ok() => {
                    status.set(UploadStatus::Success(
                        "File uploaded and processed successfully!".to_string(),
                    ));
                }
                Ok(response) => {
                    let body = response.json::<UploadErrorBody>().await.unwrap_or_default();
                    status.set(UploadStatus::Error(body.into_message()));
                }
                Err(_) => {
                    status.set(UploadStatus::Error("Error connecting to server".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "max-w-2xl mx-auto",
            div {
                class: "p-8 rounded-lg shadow-lg text-center border-2 border-dashed transition-colors bg-white dark:bg-gray-800",
                class: if drag_active() {
                    "border-blue-500"
                } else {
                    "border-gray-300 dark:border-gray-600"
                },
                ondragover: move |evt| {
                    evt.prevent_default();
                    drag_active.set(true);
                },
                ondragleave: move |_| drag_active.set(false),
                ondrop: move |evt| {
                    evt.prevent_default();
                    drag_active.set(false);
                    if let Some(file_engine) = evt.files() {
                        handle_files(file_engine);
                    }
                },

                div { class: "text-5xl mb-4", "📄" }
                p { class: "text-gray-600 dark:text-gray-300",
                    if drag_active() {
                        "Drop the file here..."
                    } else {
                        "Drag and drop a file here, or choose one below"
                    }
                }

                input {
                    r#type: "file",
                    class: "mt-4 text-sm text-gray-600 dark:text-gray-300",
                    accept: ".txt,.pdf,.doc,.docx",
                    onchange: move |evt| {
                        if let Some(file_engine) = evt.files() {
                            handle_files(file_engine);
                        }
                    },
                }

                p { class: "text-sm mt-2 text-gray-500 dark:text-gray-400",
                    "Supported formats: .txt, .pdf, .doc, .docx"
                }
            }

            {match status() {
                UploadStatus::Idle => rsx! {},
                UploadStatus::Uploading => rsx! {
                    div { class: "mt-4 p-4 rounded-lg bg-blue-100 text-blue-700 dark:bg-blue-900/20 dark:text-blue-400",
                        "Uploading and processing file..."
                    }
                },
                UploadStatus::Success(message) => rsx! {
                    div { class: "mt-4 p-4 rounded-lg bg-green-100 text-green-700 dark:bg-green-900/20 dark:text-green-400",
                        "{message}"
                    }
                },
                UploadStatus::Error(message) => rsx! {
                    div { class: "mt-4 p-4 rounded-lg bg-red-100 text-red-700 dark:bg-red-900/20 dark:text-red-400",
                        "✕ {message}"
                    }
                },
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_extensions_match_the_accept_list() {
        assert!(is_supported("notes.txt"));
        assert!(is_supported("paper.pdf"));
        assert!(is_supported("contract.doc"));
        assert!(is_supported("report.docx"));
        assert!(is_supported("REPORT.DOCX"));
    }

    #[test]
    fn other_files_are_rejected() {
        assert!(!is_supported("image.png"));
        assert!(!is_supported("archive.tar.gz"));
        assert!(!is_supported("no_extension"));
        assert!(!is_supported("trailing."));
    }
}
