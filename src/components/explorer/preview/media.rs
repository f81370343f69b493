//! Media viewers and the download fallback for everything else.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::DocumentFormat;
use crate::core::classify::font_format;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/explorer/preview/preview.module.css");

const FONT_FAMILY: &str = "genx-font-preview";
const SPECIMEN_SIZES: [u32; 5] = [12, 16, 24, 36, 48];
const PANGRAM: &str = "The quick brown fox jumps over the lazy dog";

#[component]
pub fn ImageViewer(url: String, file_name: String) -> impl IntoView {
    view! {
        <div class=css::media>
            <img class=css::image src=url alt=file_name />
        </div>
    }
}

#[component]
pub fn VideoViewer(url: String) -> impl IntoView {
    view! {
        <div class=css::media>
            <video class=css::video src=url controls=true>
                "Your browser does not support the video tag."
            </video>
        </div>
    }
}

#[component]
pub fn AudioViewer(url: String, file_name: String) -> impl IntoView {
    view! {
        <div class=css::media>
            <span class=css::mediaIcon><Icon icon=ic::FILE_AUDIO /></span>
            <p class=css::mediaName>{file_name}</p>
            <audio src=url controls=true>
                "Your browser does not support the audio element."
            </audio>
        </div>
    }
}

/// `@font-face` rule for the font being previewed.
fn font_face(url: &str, file_name: &str) -> String {
    format!(
        "@font-face {{ font-family: '{}'; src: url('{}') format('{}'); }}",
        FONT_FAMILY,
        url.replace('\'', "%27"),
        font_format(file_name),
    )
}

#[component]
pub fn FontViewer(url: String, file_name: String) -> impl IntoView {
    let rule = font_face(&url, &file_name);
    let family = format!("font-family: '{}', sans-serif", FONT_FAMILY);

    view! {
        <div class=css::font>
            <style>{rule}</style>
            <h3 class=css::fontName>{file_name}</h3>
            <div class=css::specimen style=family>
                <p class=css::glyphs>"ABCDEFGHIJKLMNOPQRSTUVWXYZ"</p>
                <p class=css::glyphs>"abcdefghijklmnopqrstuvwxyz"</p>
                <p class=css::glyphs>"0123456789 !@#$%^&*()"</p>
                {SPECIMEN_SIZES
                    .into_iter()
                    .map(|size| view! {
                        <p class=css::sample style=format!("font-size: {}px", size)>
                            <span class=css::sampleSize>{format!("{}px", size)}</span>
                            {PANGRAM}
                        </p>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Download and open-in-new-tab links for files that are not shown inline.
#[component]
pub fn BinaryPlaceholder(
    url: String,
    file_name: String,
    format: Option<DocumentFormat>,
) -> impl IntoView {
    let icon = match format {
        Some(DocumentFormat::Pdf) => ic::FILE_PDF,
        Some(DocumentFormat::Archive) => ic::FILE_ARCHIVE,
        _ => ic::FILE,
    };
    let label = format
        .map(DocumentFormat::label)
        .unwrap_or("This file cannot be displayed as text");
    let open_url = url.clone();
    let shown_name = file_name.clone();

    view! {
        <div class=css::binary>
            <span class=css::mediaIcon><Icon icon=icon /></span>
            <p class=css::mediaName>{shown_name}</p>
            <p class=css::binaryLabel>{label}</p>
            <div class=css::binaryActions>
                <a class=css::actionButton href=url download=file_name>
                    <Icon icon=ic::DOWNLOAD />
                    "Download"
                </a>
                <button class=css::actionButton on:click=move |_| dom::open_in_new_tab(&open_url)>
                    <Icon icon=ic::EXTERNAL_LINK />
                    "Open in new tab"
                </button>
            </div>
        </div>
    }
}
