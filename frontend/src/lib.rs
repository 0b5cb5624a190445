//! Dropzone - Frontend Rust/Leptos Application
//!
//! A WebAssembly page hosting the drop ingestion widget: files dropped on
//! (or picked from) the target are forwarded one by one to an HTTP upload
//! service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                │
//! │  ├── Dropzone (drag & drop target, hidden file input)       │
//! │  │   └── Hero (title, hint)                                 │
//! │  └── UploadQueue (per-file status by correlation id)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Constants and page-provided drop zone configuration
//! - [`types`] - Common types (BrowserFile, UploadEntry, etc.)
//! - [`components`] - UI components (Dropzone, Hero, UploadQueue)
//! - [`services`] - Upload pipeline wired in as the submission capability

use dropzone_core::{FileRejection, Submission};
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    BrowserFile,
    // Uploads
    UploadEntry, UploadStatus,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install panic and console hooks, then mount the application.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Dropzone - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (uploads, set_uploads) = create_signal(Vec::<UploadEntry>::new());

    // The upload pipeline, injected into the drop zone below
    let service = UploadService::new(set_uploads, BACKEND_URL);
    let config = load_dropzone_config();

    view! {
        <div class="container">
            <Dropzone
                config=config
                on_submit={move |submission: Submission<BrowserFile>| service.submit(submission)}
                on_reject={move |rejected: Vec<FileRejection>| service.record_rejections(rejected)}
            >
                <Hero/>
            </Dropzone>

            <UploadQueue uploads=uploads set_uploads=set_uploads/>
        </div>
    }
}
