//! Sidebar listing of the current directory.
//!
//! Directories open in place; files go to the editor pane.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::hook::NavigatorHandle;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::ListingState;
use crate::models::Entry;
use crate::utils::format_size;

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

fn icon_for(entry: &Entry) -> IconData {
    if entry.is_dir() {
        ic::FOLDER
    } else {
        ic::for_file(&entry.name)
    }
}

#[component]
pub fn FileList(nav: NavigatorHandle) -> impl IntoView {
    let list_ref = NodeRef::<leptos::html::Div>::new();

    // Every directory starts scrolled to the top.
    let current_path = Memo::new(move |_| nav.with(|n| n.current_path().to_string()));
    Effect::new(move |_| {
        current_path.track();
        if let Some(list) = list_ref.get() {
            list.set_scroll_top(0);
        }
    });

    let listing = Memo::new(move |_| nav.with(|n| n.listing().clone()));

    view! {
        <div class=css::list node_ref=list_ref role="tree" aria-label="Files">
            {move || match listing.get() {
                ListingState::Loading => view! {
                    <p class=css::status>"Loading..."</p>
                }.into_any(),
                ListingState::Failed(err) => view! {
                    <div class=css::failure>
                        <p class=css::error>{format!("Error: {}", err.user_message())}</p>
                        <button class=css::retry on:click=move |_| nav.refresh()>
                            <Icon icon=ic::REFRESH />
                            "Refresh"
                        </button>
                    </div>
                }.into_any(),
                ListingState::Loaded(dir) if dir.is_empty() => view! {
                    <p class=css::status>"This folder is empty"</p>
                }.into_any(),
                ListingState::Loaded(dir) => {
                    let (dirs, files) = dir.counts();
                    let entries = dir.entries().to_vec();
                    view! {
                        <p class=css::summary>{format!("{} folders, {} files", dirs, files)}</p>
                        <For
                            each=move || entries.clone()
                            key=|entry| entry.path.clone()
                            children=move |entry| view! { <FileListItem entry=entry nav=nav /> }
                        />
                    }.into_any()
                }
            }}
        </div>
    }
}

#[component]
fn FileListItem(entry: Entry, nav: NavigatorHandle) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_dir = entry.is_dir();
    let icon = icon_for(&entry);
    let size = (!is_dir).then(|| format_size(entry.size));
    let path = entry.path.clone();
    let path_for_selected = entry.path.clone();

    let is_selected = Signal::derive(move || {
        ctx.selection
            .with(|s| s.as_ref().is_some_and(|s| s.file_path == path_for_selected))
    });

    let handle_click = move |_: leptos::ev::MouseEvent| {
        if is_dir {
            nav.enter(path.clone());
        } else {
            ctx.select_file(&path);
        }
    };

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::item, css::selected)
        } else {
            css::item.to_string()
        }
    };
    let name_class = if is_dir {
        format!("{} {}", css::name, css::nameDir)
    } else {
        css::name.to_string()
    };
    let aria_label = if is_dir {
        format!("Folder: {}", entry.name)
    } else {
        format!("File: {}", entry.name)
    };

    view! {
        <button
            class=item_class
            on:click=handle_click
            role="treeitem"
            aria-label=aria_label
            aria-selected=move || is_selected.get().to_string()
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class>{entry.name.clone()}</span>
            {size.map(|s| view! { <span class=css::size>{s}</span> })}
            {is_dir.then(|| view! {
                <span class=css::chevron aria-hidden="true"><Icon icon=ic::CHEVRON_RIGHT /></span>
            })}
        </button>
    }
}
