use leptos::ev::DragEvent;
use leptos::html;
use leptos::prelude::*;
use web_sys::{File, FileList, HtmlInputElement};

use super::api;
use super::model::{FileEntry, UploadQueue};
use super::sequencer::submit_files;
use crate::bridge;
use crate::shared::icons::icon;
use crate::shared::number_format::format_file_size;

fn collect_files(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

fn render_entry(entry: &FileEntry) -> impl IntoView {
    view! {
        <div class="file-item">
            <div class="file-info">
                <div class="file-name">{entry.name.clone()}</div>
                <div class="file-size">{format_file_size(entry.size)}</div>
            </div>
            <div class=entry.status.css_class()>{entry.status.label()}</div>
        </div>
    }
}

/// Drop zone, file picker and the list of uploads of this page session
#[component]
#[allow(non_snake_case)]
pub fn UploadPanel(
    /// Called after each file the server accepted
    on_uploaded: Callback<()>,
) -> impl IntoView {
    let queue = RwSignal::new(UploadQueue::default());
    let (drag_over, set_drag_over) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let handle_files = move |files: Vec<File>| {
        if files.is_empty() {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            let result = submit_files(
                &queue,
                files,
                |file| async move { api::upload_file(file).await.map(|_| ()) },
                move || on_uploaded.run(()),
            )
            .await;

            match result {
                Ok(outcome) => log::info!(
                    "Upload batch finished: {} uploaded, {} failed",
                    outcome.uploaded,
                    outcome.failed
                ),
                Err(e) => {
                    log::warn!("Upload batch refused: {}", e);
                    bridge::alert(&e.to_string());
                }
            }
        });
    };

    view! {
        <div class="upload">
            <div
                class=move || if drag_over.get() { "drop-zone drop-zone--active" } else { "drop-zone" }
                on:dragover=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_drag_over.set(true);
                }
                on:dragleave=move |_| set_drag_over.set(false)
                on:drop=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_drag_over.set(false);
                    handle_files(collect_files(ev.data_transfer().and_then(|dt| dt.files())));
                }
            >
                {icon("file")}
                <p>"Drag and drop files here"</p>
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        if let Some(input) = input_ref.get() {
                            input.click();
                        }
                    }
                >
                    {icon("upload")}
                    " Upload"
                </button>
                <input
                    node_ref=input_ref
                    type="file"
                    multiple=true
                    style="display: none;"
                    on:change=move |ev| {
                        let input: HtmlInputElement = event_target(&ev);
                        let files = collect_files(input.files());
                        // allow picking the same file again
                        input.set_value("");
                        handle_files(files);
                    }
                />
            </div>

            <div class="upload-progress">
                {move || queue.with(|q| q.entries().iter().map(render_entry).collect_view())}
            </div>
        </div>
    }
}
