//! Editor pane: picks a renderer for the loaded file.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_icons::Icon;

use super::document::DocumentViewer;
use super::editor::{MarkdownPreview, TextEditor};
use super::hook::{PreviewFile, PreviewState};
use super::media::{AudioViewer, BinaryPlaceholder, FontViewer, ImageViewer, VideoViewer};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::{Renderer, ResolvedContent, select_renderer};

stylance::import_crate_style!(css, "src/components/explorer/preview/preview.module.css");

#[component]
pub fn PreviewPane(state: RwSignal<PreviewState>) -> impl IntoView {
    view! {
        <section class=css::pane>
            {move || match state.get() {
                PreviewState::Idle => view! {
                    <div class=css::placeholder>
                        <span class=css::placeholderIcon><Icon icon=ic::FILE_CODE /></span>
                        <p>"Select a file from the sidebar to view it."</p>
                    </div>
                }.into_any(),
                PreviewState::Loading(selection) => view! {
                    <p class=css::status>{format!("Loading {}...", selection.file_name)}</p>
                }.into_any(),
                PreviewState::Failed { selection, message, download_url } => view! {
                    <div class=css::failure>
                        <p class=css::error>{format!("Error: {}", message)}</p>
                        {download_url.map(|url| view! {
                            <BinaryPlaceholder url=url file_name=selection.file_name format=None />
                        })}
                    </div>
                }.into_any(),
                PreviewState::Ready(file) => view! { <RenderedFile file=file /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn RenderedFile(file: Arc<PreviewFile>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Edits outlive the editor/preview toggle; they last until another file loads.
    let buffer = RwSignal::new(file.content.as_text().unwrap_or_default().to_string());

    // Notifies only when the toggle swaps renderers.
    let renderer = {
        let file = file.clone();
        Memo::new(move |_| {
            select_renderer(
                &file.classified,
                &file.content,
                ctx.view_toggle.get(),
                &file.selection.file_name,
            )
        })
    };

    move || {
        let name = file.selection.file_name.clone();
        let language = file.classified.language_tag;

        match (renderer.get(), &file.content) {
            (Renderer::TextEditor { read_only }, _) => view! {
                <TextEditor buffer=buffer file_name=name language=language read_only=read_only />
            }.into_any(),
            (Renderer::MarkdownPreview, _) => view! {
                <MarkdownPreview text=buffer />
            }.into_any(),
            (Renderer::ImageViewer, ResolvedContent::Media { url }) => view! {
                <ImageViewer url=url.clone() file_name=name />
            }.into_any(),
            (Renderer::VideoViewer, ResolvedContent::Media { url }) => view! {
                <VideoViewer url=url.clone() />
            }.into_any(),
            (Renderer::AudioViewer, ResolvedContent::Media { url }) => view! {
                <AudioViewer url=url.clone() file_name=name />
            }.into_any(),
            (Renderer::FontViewer, ResolvedContent::Media { url }) => view! {
                <FontViewer url=url.clone() file_name=name />
            }.into_any(),
            (Renderer::DocumentPreview, ResolvedContent::Binary { url }) => view! {
                <DocumentViewer url=url.clone() file_name=name />
            }.into_any(),
            (Renderer::BinaryPlaceholder(format), ResolvedContent::Media { url } | ResolvedContent::Binary { url }) => view! {
                <BinaryPlaceholder url=url.clone() file_name=name format=format />
            }.into_any(),
            (renderer, _) => {
                tracing::warn!(?renderer, "renderer does not match resolved content");
                view! { <p class=css::error>"This file cannot be displayed."</p> }.into_any()
            }
        }
    }
}
