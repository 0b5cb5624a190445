//! Upload queue panel.
//!
//! Lists every file handed to the upload pipeline, keyed by its correlation
//! id, along with the files the drop zone refused.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::types::{format_size, UploadEntry};

/// Request animation frame helper for smooth scrolling
fn request_animation_frame(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(f);
    if window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

/// Queue panel component (display only, entries are written by the upload service)
#[component]
pub fn UploadQueue(
    /// Signal for queue entries
    uploads: ReadSignal<Vec<UploadEntry>>,
    /// Set queue signal (for clearing)
    set_uploads: WriteSignal<Vec<UploadEntry>>,
) -> impl IntoView {
    // Reference to the entries div for auto-scroll
    let entries_container = create_node_ref::<leptos::html::Div>();

    // Auto-scroll to bottom when entries change
    create_effect(move |_| {
        let _ = uploads.get();

        if let Some(container) = entries_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    // Finished entries go, in-flight ones stay
    let clear_finished = move |_| {
        set_uploads.update(|entries| entries.retain(|e| !e.status.is_finished()));
    };

    let pending = move || {
        uploads
            .get()
            .iter()
            .filter(|e| !e.status.is_finished())
            .count()
    };

    view! {
        <Show
            when=move || !uploads.get().is_empty()
            fallback=|| view! { }
        >
            <div class="queue-panel">
                <div class="queue-header">
                    <span class="queue-title">
                        "📋 Uploads " {move || format!("({} pending)", pending())}
                    </span>
                    <button class="queue-clear" on:click=clear_finished>
                        "Clear finished"
                    </button>
                </div>
                <div class="queue-content" node_ref=entries_container>
                    {move || {
                        uploads
                            .get()
                            .into_iter()
                            .map(|entry| {
                                let position = entry
                                    .position
                                    .map(|(n, of)| format!(" [{}/{}]", n, of))
                                    .unwrap_or_default();
                                let title = entry
                                    .correlation
                                    .map(|id| id.to_string())
                                    .unwrap_or_default();

                                view! {
                                    <div class=format!("queue-entry {}", entry.status.css_class()) title=title>
                                        <span class="queue-time">"[" {entry.timestamp.clone()} "] "</span>
                                        {entry.status.emoji()} " "
                                        <span class="queue-name">{entry.name.clone()}</span>
                                        {position}
                                        " · " {format_size(entry.size)}
                                        " · " {entry.status.to_string()}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </Show>
    }
}
