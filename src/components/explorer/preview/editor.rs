//! Text editor and markdown preview.
//!
//! Edits stay in the browser; there is no save. Alt+Z toggles word wrap.
//! Read-only code is syntax highlighted when its grammar is known.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::core::classify::DEFAULT_LANGUAGE;
use crate::core::{highlight_html, line_count};
use crate::utils::{ObjectUrl, dom, markdown_to_html};

stylance::import_crate_style!(css, "src/components/explorer/preview/preview.module.css");

fn is_wrap_shortcut(ev: &ev::KeyboardEvent) -> bool {
    ev.alt_key() && !ev.ctrl_key() && !ev.meta_key() && ev.code() == "KeyZ"
}

#[component]
pub fn TextEditor(
    buffer: RwSignal<String>,
    file_name: String,
    language: Option<&'static str>,
    read_only: bool,
) -> impl IntoView {
    let word_wrap = RwSignal::new(false);
    let download = RwSignal::new(None::<ObjectUrl>);

    let handle = window_event_listener(ev::keydown, move |ev| {
        if is_wrap_shortcut(&ev) {
            ev.prevent_default();
            word_wrap.update(|w| *w = !*w);
        }
    });
    on_cleanup(move || handle.remove());

    let lines = Memo::new(move |_| buffer.with(|b| line_count(b)));
    let language = language.unwrap_or(DEFAULT_LANGUAGE);
    let highlighted = Memo::new(move |_| {
        read_only
            .then(|| buffer.with(|b| highlight_html(b, language)))
            .flatten()
    });

    let save_copy = move |_: ev::MouseEvent| {
        let url = buffer.with_untracked(|b| ObjectUrl::from_text(b, "text/plain;charset=utf-8"));
        match url {
            Some(url) => {
                dom::trigger_download(url.as_str(), &file_name);
                // Replacing the previous URL revokes it.
                download.set(Some(url));
            }
            None => tracing::error!("could not create download URL"),
        }
    };

    let textarea_class = move || {
        if word_wrap.get() {
            format!("{} {}", css::textarea, css::wrapped)
        } else {
            css::textarea.to_string()
        }
    };
    let highlighted_class = move || {
        if word_wrap.get() {
            format!("{} {}", css::highlighted, css::wrapped)
        } else {
            css::highlighted.to_string()
        }
    };

    view! {
        <div class=css::editor>
            <div class=css::editorBody>
                <pre class=css::gutter aria-hidden="true">
                    {move || (1..=lines.get()).map(|n| format!("{}\n", n)).collect::<String>()}
                </pre>
                {move || match highlighted.get() {
                    Some(html) => view! {
                        <div class=highlighted_class inner_html=html />
                    }.into_any(),
                    None => view! {
                        <textarea
                            class=textarea_class
                            spellcheck="false"
                            readonly=read_only
                            wrap=move || if word_wrap.get() { "soft" } else { "off" }
                            prop:value=move || buffer.get()
                            on:input=move |ev| buffer.set(event_target_value(&ev))
                        />
                    }.into_any(),
                }}
            </div>
            <footer class=css::statusBar>
                <span>{move || format!("{} lines", lines.get())}</span>
                <span>{language}</span>
                {read_only.then(|| view! { <span>"Read only"</span> })}
                <button
                    class=css::statusButton
                    on:click=move |_| word_wrap.update(|w| *w = !*w)
                    title="Toggle word wrap (Alt+Z)"
                >
                    <Icon icon=ic::WRAP />
                    {move || if word_wrap.get() { "Wrap: on" } else { "Wrap: off" }}
                </button>
                <button class=css::statusButton on:click=save_copy title="Download">
                    <Icon icon=ic::DOWNLOAD />
                    "Download"
                </button>
            </footer>
        </div>
    }
}

/// Rendered markdown of the current buffer.
#[component]
pub fn MarkdownPreview(#[prop(into)] text: Signal<String>) -> impl IntoView {
    let html = move || text.with(|t| markdown_to_html(t));
    view! {
        <div class=css::markdownScroll>
            <article class=css::markdown inner_html=html />
        </div>
    }
}
