//! Navigator toolbar: root, back, refresh and breadcrumbs.
//!
//! On narrow viewports long paths collapse to first / ... / last two.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use super::hook::NavigatorHandle;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{BREADCRUMB_COLLAPSE_THRESHOLD, NARROW_VIEWPORT_QUERY};
use crate::core::BreadcrumbItem;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

#[component]
pub fn PathBar(nav: NavigatorHandle) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let is_narrow = use_media_query(NARROW_VIEWPORT_QUERY);

    let repo_label = Signal::derive(move || {
        ctx.repository
            .with(|r| r.as_ref().map(|r| r.repo_name.clone()).unwrap_or_default())
    });
    let is_root = Signal::derive(move || nav.with(|n| n.state().is_root()));
    let can_go_back = Signal::derive(move || nav.with(|n| n.state().can_go_back()));
    let is_loading = Signal::derive(move || nav.with(|n| n.is_loading()));

    let crumbs = Memo::new(move |_| {
        nav.with(|n| {
            if is_narrow.get() {
                n.state().collapsed_breadcrumbs(BREADCRUMB_COLLAPSE_THRESHOLD)
            } else {
                n.state()
                    .breadcrumbs()
                    .into_iter()
                    .map(BreadcrumbItem::Crumb)
                    .collect()
            }
        })
    });

    view! {
        <div class=css::pathbar>
            <div class=css::controls>
                <button
                    class=css::control
                    on:click=move |_| nav.go_to_root()
                    disabled=move || is_root.get()
                    title="Repository root"
                >
                    <Icon icon=ic::HOME />
                </button>
                <button
                    class=css::control
                    on:click=move |_| nav.go_back()
                    disabled=move || !can_go_back.get()
                    title="Back"
                >
                    <Icon icon=ic::BACK />
                </button>
                <button
                    class=css::control
                    on:click=move |_| nav.refresh()
                    disabled=move || is_loading.get()
                    title="Refresh"
                >
                    <Icon icon=ic::REFRESH />
                </button>
            </div>

            <nav class=css::crumbs aria-label="Path">
                <button
                    class=move || segment_class(is_root.get())
                    on:click=move |_| nav.go_to_root()
                    disabled=move || is_root.get()
                >
                    {repo_label}
                </button>
                {move || {
                    let items = crumbs.get();
                    let last = items.len().saturating_sub(1);
                    items
                        .into_iter()
                        .enumerate()
                        .map(|(position, item)| view! {
                            <span class=css::separator><Icon icon=ic::CHEVRON_RIGHT /></span>
                            {match item {
                                BreadcrumbItem::Ellipsis => view! {
                                    <span class=css::ellipsis>"..."</span>
                                }.into_any(),
                                BreadcrumbItem::Crumb(crumb) => {
                                    let current = position == last;
                                    let index = crumb.index;
                                    view! {
                                        <button
                                            class=segment_class(current)
                                            on:click=move |_| nav.jump_to_breadcrumb(index)
                                            disabled=current
                                            title=crumb.path
                                        >
                                            {crumb.label}
                                        </button>
                                    }.into_any()
                                }
                            }}
                        })
                        .collect_view()
                }}
            </nav>
        </div>
    }
}

fn segment_class(current: bool) -> String {
    if current {
        format!("{} {}", css::segment, css::segmentCurrent)
    } else {
        css::segment.to_string()
    }
}
