//! Editor window layout.
//!
//! ## Layout
//!
//! - **Desktop (> 768px)**: sidebar | editor pane | chat (when open)
//! - **Mobile (< 768px)**: stacked; the sidebar shrinks to a strip above the pane

use leptos::prelude::*;
use leptos_icons::Icon;

use super::file_list::FileList;
use super::hook::use_navigator;
use super::pathbar::PathBar;
use super::preview::{PreviewPane, use_preview};
use crate::app::AppContext;
use crate::components::chat::Chat;
use crate::components::icons as ic;
use crate::components::navbar::{Navbar, SecondaryNavbar};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

#[component]
pub fn EditorWindow() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let has_repository = Signal::derive(move || {
        ctx.repository
            .with(|r| r.as_ref().is_some_and(|r| r.is_complete()))
    });

    view! {
        <div class=css::window>
            <Navbar />
            <Show when=move || has_repository.get() fallback=|| view! { <NoRepository /> }>
                <Workspace />
            </Show>
        </div>
    }
}

#[component]
fn Workspace() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Created once per window, shared with the sidebar and pane.
    let nav = use_navigator();
    let preview = use_preview();

    let body_class = move || {
        if ctx.chat_open.get() {
            format!("{} {}", css::body, css::bodyWithChat)
        } else {
            css::body.to_string()
        }
    };

    view! {
        <SecondaryNavbar />
        <div class=body_class>
            <aside class=css::sidebar aria-label="Repository files">
                <PathBar nav=nav />
                <FileList nav=nav />
            </aside>
            <main class=css::main>
                <PreviewPane state=preview />
            </main>
            <Show when=move || ctx.chat_open.get()>
                <div class=css::chat>
                    <Chat />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn NoRepository() -> impl IntoView {
    view! {
        <div class=css::empty>
            <span class=css::emptyIcon><Icon icon=ic::WARNING /></span>
            <p>"No repository selected: missing owner or repository name."</p>
            <a href=AppRoute::Landing.to_hash() class=css::emptyLink>"Choose a repository"</a>
        </div>
    }
}
