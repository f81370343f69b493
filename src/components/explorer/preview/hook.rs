//! Preview loading hook.
//!
//! Follows `AppContext::selection`: fetches the payload, classifies the file
//! and resolves it into displayable content. Only the most recent selection's
//! result is applied.

use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::DEFAULT_SNIFF_POLICY;
use crate::core::navigator::RequestTracker;
use crate::core::{ClassifiedFile, ContentClient, ResolvedContent, classify, resolve_content};
use crate::models::FileSelection;

/// A file ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewFile {
    pub selection: FileSelection,
    pub classified: ClassifiedFile,
    pub content: ResolvedContent,
}

/// What the editor pane shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum PreviewState {
    /// Nothing selected.
    #[default]
    Idle,
    Loading(FileSelection),
    Ready(Arc<PreviewFile>),
    Failed {
        selection: FileSelection,
        message: String,
        /// Raw file, when the payload offered one.
        download_url: Option<String>,
    },
}

impl PreviewState {
    pub fn selection(&self) -> Option<&FileSelection> {
        match self {
            Self::Idle => None,
            Self::Loading(selection) | Self::Failed { selection, .. } => Some(selection),
            Self::Ready(file) => Some(&file.selection),
        }
    }
}

async fn load(selection: &FileSelection) -> PreviewState {
    let failed = |message: String, download_url: Option<String>| PreviewState::Failed {
        selection: selection.clone(),
        message,
        download_url,
    };

    let client = match ContentClient::browser() {
        Ok(client) => client,
        Err(err) => return failed(err.user_message(), None),
    };

    let repo = selection.repository();
    let payload = match client.fetch_file_content(&repo, &selection.file_path).await {
        Ok(payload) => payload,
        Err(err) => {
            tracing::error!(path = %selection.file_path, "file fetch failed: {}", err);
            return failed(err.user_message(), None);
        }
    };

    let classified = classify(&selection.file_name);
    match resolve_content(
        &client,
        &payload,
        &classified,
        &selection.file_name,
        DEFAULT_SNIFF_POLICY,
    )
    .await
    {
        Ok(content) => PreviewState::Ready(Arc::new(PreviewFile {
            selection: selection.clone(),
            classified,
            content,
        })),
        Err(err) => {
            tracing::error!(path = %selection.file_path, "cannot display file: {}", err);
            failed(err.to_string(), payload.download_url)
        }
    }
}

/// Preview state for the current selection.
pub fn use_preview() -> RwSignal<PreviewState> {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let state = RwSignal::new(PreviewState::Idle);
    let tracker = StoredValue::new(RequestTracker::default());

    Effect::new(move |_| {
        let generation = tracker.try_update_value(|t| t.issue());
        let Some(selection) = ctx.selection.get() else {
            state.set(PreviewState::Idle);
            return;
        };
        let Some(generation) = generation else {
            return;
        };

        tracing::debug!(path = %selection.file_path, "loading preview");
        state.set(PreviewState::Loading(selection.clone()));

        spawn_local(async move {
            let next = load(&selection).await;
            if tracker.try_with_value(|t| t.is_current(generation)) == Some(true) {
                let _ = state.try_set(next);
            } else {
                tracing::warn!(path = %selection.file_path, "discarding stale preview");
            }
        });
    });

    state
}
