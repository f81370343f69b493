//! Editor window navigation bars.
//!
//! - [`Navbar`] - brand, signed-in user, chat toggle, sign out
//! - [`SecondaryNavbar`] - repository, open file and the editor/preview switch

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::models::{AppRoute, ViewToggle};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let user_label = Signal::derive(move || {
        ctx.session
            .with(|s| s.as_ref().map(|u| u.display_label()))
    });

    let chat_class = move || {
        if ctx.chat_open.get() {
            format!("{} {}", css::navButton, css::navButtonActive)
        } else {
            css::navButton.to_string()
        }
    };

    view! {
        <nav class=css::navbar>
            <a href=AppRoute::Landing.to_hash() class=css::brand>{APP_NAME}</a>

            <div class=css::actions>
                {move || user_label.get().map(|name| view! {
                    <span class=css::user>
                        <Icon icon=ic::USER />
                        <span class=css::userName>{name}</span>
                    </span>
                })}
                <button
                    class=chat_class
                    on:click=move |_| ctx.chat_open.update(|open| *open = !*open)
                    aria-pressed=move || ctx.chat_open.get().to_string()
                >
                    <Icon icon=ic::CHAT />
                    <span class=css::buttonLabel>"AI Assist"</span>
                </button>
                <a href=AppRoute::SignOut.to_hash() class=css::navButton>
                    <Icon icon=ic::SIGN_OUT />
                    <span class=css::buttonLabel>"Sign Out"</span>
                </a>
            </div>
        </nav>
    }
}

#[component]
pub fn SecondaryNavbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let repo_name = Signal::derive(move || {
        ctx.repository
            .with(|r| r.as_ref().map(|r| r.full_name()).unwrap_or_default())
    });
    let file_name = Signal::derive(move || {
        ctx.selection.with(|s| s.as_ref().map(|s| s.file_path.clone()))
    });

    let toggle_button = move |mode: ViewToggle| {
        let icon = match mode {
            ViewToggle::Editor => ic::EDIT,
            ViewToggle::Preview => ic::PREVIEW,
        };
        let class = move || {
            if ctx.view_toggle.get() == mode {
                format!("{} {}", css::toggleButton, css::toggleButtonActive)
            } else {
                css::toggleButton.to_string()
            }
        };
        view! {
            <button
                class=class
                on:click=move |_| ctx.view_toggle.set(mode)
                disabled=move || file_name.with(Option::is_none)
            >
                <Icon icon=icon />
                <span class=css::buttonLabel>{mode.label()}</span>
            </button>
        }
    };

    view! {
        <div class=css::secondary>
            <div class=css::location>
                <a href=AppRoute::Landing.to_hash() class=css::backLink title="Back to repositories">
                    <Icon icon=ic::BACK />
                </a>
                <span class=css::project>{repo_name}</span>
                {move || file_name.get().map(|path| view! {
                    <span class=css::separator><Icon icon=ic::CHEVRON_RIGHT /></span>
                    <span class=css::fileName>{path}</span>
                })}
            </div>
            <div class=css::toggleGroup role="group" aria-label="View mode">
                {toggle_button(ViewToggle::Editor)}
                {toggle_button(ViewToggle::Preview)}
            </div>
        </div>
    }
}
