//! Root application module.
//!
//! Contains the main App component and the AppContext definition.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::models::{FileSelection, RepositoryRef, UserInfo, ViewToggle};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. The editor route is driven entirely by
/// `repository` and `selection`; nothing here lives in the URL.
///
/// `Copy` because every field is a signal.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Signed-in user, once the landing page has loaded it.
    pub session: RwSignal<Option<UserInfo>>,
    /// Repository being browsed.
    pub repository: RwSignal<Option<RepositoryRef>>,
    /// File shown in the editor/preview pane.
    pub selection: RwSignal<Option<FileSelection>>,
    /// Editor or rendered preview.
    pub view_toggle: RwSignal<ViewToggle>,
    /// Chat panel visibility.
    pub chat_open: RwSignal<bool>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            repository: RwSignal::new(None),
            selection: RwSignal::new(None),
            view_toggle: RwSignal::new(ViewToggle::default()),
            chat_open: RwSignal::new(false),
        }
    }

    /// Start browsing `repo`. A different repository drops the file selection.
    pub fn open_repository(&self, repo: RepositoryRef) {
        if self.repository.get_untracked().as_ref() != Some(&repo) {
            self.selection.set(None);
            self.view_toggle.set(ViewToggle::default());
        }
        self.repository.set(Some(repo));
    }

    /// Show `path` of the current repository in the editor pane.
    pub fn select_file(&self, path: &str) {
        if let Some(repo) = self.repository.get_untracked() {
            self.selection.set(Some(FileSelection::new(&repo, path)));
        }
    }

    /// Forget everything tied to the signed-in user.
    pub fn clear_session(&self) {
        self.session.set(None);
        self.repository.set(None);
        self.selection.set(None);
        self.chat_open.set(false);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #1e1e1e;
                    color: #d4d4d4;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #f48771; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a0a0a0; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #252526;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #858585;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #f48771;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #0e639c;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
