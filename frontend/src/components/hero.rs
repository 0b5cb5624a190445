//! Hero section component, rendered inside the drop target

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="upload-icon">"📤"</div>
            <h1>"Drop files to upload"</h1>
            <p class="subtitle">
                "Drag files anywhere on this area, or click to pick them. "
                "Every file is uploaded on its own."
            </p>
        </div>
    }
}
