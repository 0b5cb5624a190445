//! Drag & drop target with a hidden file input fallback.
//!
//! Browser events are translated into calls on a
//! [`dropzone_core::InteractionAdapter`]; the border and background are
//! re-rendered from the interaction state it publishes.

use dropzone_core::{
    AcceptPolicy, DragInteractionState, DragItem, DragPayload, DropOutcome, DropzoneConfig, DropzoneStyle,
    FileRejection, InteractionAdapter, Submission,
};
use leptos::*;
use web_sys::{DataTransfer, DragEvent, Event, FileList, HtmlInputElement, MouseEvent};

use crate::types::{AppError, BrowserFile};

/// Snapshot the items of an in-flight drag.
///
/// Some browsers hide the items until the drop while still announcing the
/// `Files` type; such drags are reported as opaque.
fn drag_payload(ev: &DragEvent) -> DragPayload {
    let Some(transfer) = ev.data_transfer() else {
        return DragPayload::Opaque;
    };

    let list = transfer.items();
    let items: Vec<DragItem> = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|item| {
            if item.kind() == "file" {
                DragItem::file(item.type_())
            } else {
                DragItem::string(item.type_())
            }
        })
        .collect();

    if items.is_empty() && announces_files(&transfer) {
        DragPayload::Opaque
    } else {
        DragPayload::Items(items)
    }
}

fn announces_files(transfer: &DataTransfer) -> bool {
    transfer
        .types()
        .iter()
        .any(|t| t.as_string().as_deref() == Some("Files"))
}

fn collect_files(list: &FileList) -> Vec<BrowserFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile::from)
        .collect()
}

fn dropped_files(ev: &DragEvent) -> Vec<BrowserFile> {
    ev.data_transfer()
        .and_then(|transfer| transfer.files())
        .map(|list| collect_files(&list))
        .unwrap_or_default()
}

/// Drop target component.
///
/// Renders `children` unmodified inside the target. Every accepted file is
/// handed to `on_submit` exactly once, in drop order.
#[component]
pub fn Dropzone(
    /// Submission capability, called once per accepted file
    #[prop(into)]
    on_submit: Callback<Submission<BrowserFile>>,
    /// Called with the files the accept policy refused
    #[prop(optional, into)]
    on_reject: Option<Callback<Vec<FileRejection>>>,
    /// Accept patterns, size bounds and interaction switches
    #[prop(optional)]
    config: Option<DropzoneConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let (config, policy) = match config.policy().map_err(AppError::from) {
        Ok(policy) => (config, policy),
        Err(e) => {
            log::error!("❌ Invalid drop zone config, accepting everything: {}", e);
            (DropzoneConfig::default(), AcceptPolicy::accept_all())
        }
    };
    let accept = config.accept_attribute();
    let multiple = config.multiple;

    let (drag_state, set_drag_state) = create_signal(DragInteractionState::Idle);
    let input_ref = create_node_ref::<html::Input>();

    let mut adapter = InteractionAdapter::with_policy(config, policy, move |submission: Submission<BrowserFile>| {
        on_submit.call(submission)
    });
    adapter.subscribe(move |state| set_drag_state.set(*state));
    let adapter = store_value(adapter);

    let report = move |outcome: DropOutcome| {
        if outcome.dispatched() > 0 {
            log::info!("📥 {} file(s) handed to the upload pipeline", outcome.dispatched());
        }
        if !outcome.rejected.is_empty() {
            if let Some(on_reject) = on_reject {
                on_reject.call(outcome.rejected);
            }
        }
    };

    let on_dragenter = move |ev: DragEvent| {
        ev.prevent_default();
        let payload = drag_payload(&ev);
        adapter.update_value(|a| a.drag_enter(&payload));
    };

    // Default must be prevented on every dragover for the drop to be allowed.
    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        let payload = drag_payload(&ev);
        adapter.update_value(|a| a.drag_over(&payload));
    };

    let on_dragleave = move |_: DragEvent| {
        adapter.update_value(|a| a.drag_leave());
    };

    let on_dragend = move |_: DragEvent| {
        adapter.update_value(|a| a.drag_end());
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        let files = dropped_files(&ev);
        let mut outcome = DropOutcome::default();
        adapter.update_value(|a| outcome = a.drop_files(files));
        report(outcome);
    };

    let on_root_click = move |ev: MouseEvent| {
        let disposition = adapter.with_value(|a| a.root_click());
        if disposition.stop_propagation {
            ev.stop_propagation();
        }
        if disposition.open_picker {
            if let Some(input) = input_ref.get() {
                input.click();
            }
        }
    };

    // The synthetic click bubbles back to the root, which must ignore it.
    let on_input_click = move |ev: MouseEvent| {
        ev.stop_propagation();
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = input.files().map(|list| collect_files(&list)).unwrap_or_default();
        // Allow picking the same file again
        input.set_value("");

        let mut outcome = DropOutcome::default();
        adapter.update_value(|a| outcome = a.select_files(files));
        report(outcome);
    };

    view! {
        <div
            class=move || drag_state.get().css_class()
            style=move || DropzoneStyle::for_state(drag_state.get()).to_css()
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:dragend=on_dragend
            on:drop=on_drop
            on:click=on_root_click
        >
            <input
                type="file"
                node_ref=input_ref
                style="display:none"
                accept=accept
                multiple=multiple
                on:click=on_input_click
                on:change=on_file_change
            />
            {children()}
        </div>
    }
}
