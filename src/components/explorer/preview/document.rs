//! Paginated PDF preview.
//!
//! The file is downloaded once into a blob URL and shown in the browser's
//! built-in viewer. Page and zoom only change the URL fragment.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use super::media::BinaryPlaceholder;
use crate::components::icons as ic;
use crate::core::{ContentClient, DocumentFormat, DocumentState, count_pdf_pages};
use crate::utils::ObjectUrl;

stylance::import_crate_style!(css, "src/components/explorer/preview/preview.module.css");

enum Loaded {
    Pending,
    Ready(ObjectUrl),
    Failed(String),
}

#[component]
pub fn DocumentViewer(url: String, file_name: String) -> impl IntoView {
    let doc = RwSignal::new(DocumentState::default());
    let loaded = RwSignal::new(Loaded::Pending);

    let download_url = url.clone();
    let link_url = url.clone();
    let link_name = file_name.clone();
    spawn_local(async move {
        let bytes = match ContentClient::browser() {
            Ok(client) => client.fetch_bytes(&download_url).await,
            Err(err) => Err(err),
        };
        let next = match bytes {
            Ok(bytes) => {
                let pages = count_pdf_pages(&bytes).unwrap_or(0);
                tracing::debug!(pages, "document loaded");
                let _ = doc.try_update(|d| d.set_total_pages(pages));
                match ObjectUrl::from_bytes(&bytes, "application/pdf") {
                    Some(blob) => Loaded::Ready(blob),
                    None => Loaded::Failed("could not prepare the document".to_string()),
                }
            }
            Err(err) => {
                tracing::error!("document download failed: {}", err);
                Loaded::Failed(err.user_message())
            }
        };
        let _ = loaded.try_set(next);
    });

    let viewer_src = move || {
        let fragment = doc.with(|d| d.viewer_fragment());
        loaded.with(|l| match l {
            Loaded::Ready(blob) => Some(format!("{}{}", blob.as_str(), fragment)),
            _ => None,
        })
    };
    let page_label = move || {
        doc.with(|d| match d.total_pages() {
            0 => format!("Page {}", d.current_page()),
            total => format!("Page {} of {}", d.current_page(), total),
        })
    };

    view! {
        <div class=css::document>
            <div class=css::toolbar>
                <button
                    class=css::toolButton
                    on:click=move |_| doc.update(|d| d.prev_page())
                    disabled=move || !doc.with(|d| d.has_prev())
                    title="Previous page"
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                </button>
                <span class=css::toolLabel>{page_label}</span>
                <button
                    class=css::toolButton
                    on:click=move |_| doc.update(|d| d.next_page())
                    disabled=move || !doc.with(|d| d.has_next())
                    title="Next page"
                >
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
                <span class=css::toolDivider />
                <button class=css::toolButton on:click=move |_| doc.update(|d| d.zoom_out()) title="Zoom out">
                    <Icon icon=ic::ZOOM_OUT />
                </button>
                <span class=css::toolLabel>{move || format!("{}%", doc.with(|d| d.zoom_percent()))}</span>
                <button class=css::toolButton on:click=move |_| doc.update(|d| d.zoom_in()) title="Zoom in">
                    <Icon icon=ic::ZOOM_IN />
                </button>
                <a class=css::toolButton href=link_url download=link_name title="Download">
                    <Icon icon=ic::DOWNLOAD />
                </a>
            </div>

            {move || match viewer_src() {
                Some(src) => view! {
                    <iframe class=css::documentFrame src=src title=file_name.clone() />
                }.into_any(),
                None => loaded.with(|l| match l {
                    Loaded::Failed(message) => view! {
                        <div class=css::failure>
                            <p class=css::error>{format!("Error: {}", message)}</p>
                            <BinaryPlaceholder
                                url=url.clone()
                                file_name=file_name.clone()
                                format=Some(DocumentFormat::Pdf)
                            />
                        </div>
                    }.into_any(),
                    _ => view! { <p class=css::status>"Loading document..."</p> }.into_any(),
                }),
            }}
        </div>
    }
}
