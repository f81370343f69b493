//! Directory navigator hook.
//!
//! Owns the [`Navigator`] for the editor window and performs the listing
//! fetch each transition asks for. Results are handed back to
//! [`Navigator::apply`], which drops anything but the latest answer.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::{ContentClient, FetchTicket, Navigator};
use crate::models::RepositoryRef;

/// Handle to the sidebar navigator. `Copy`, pass it to child components.
#[derive(Clone, Copy)]
pub struct NavigatorHandle {
    navigator: RwSignal<Navigator>,
    repository: RwSignal<Option<RepositoryRef>>,
}

impl NavigatorHandle {
    /// Read the navigator reactively.
    pub fn with<R>(&self, f: impl FnOnce(&Navigator) -> R) -> R {
        self.navigator.with(f)
    }

    pub fn enter(&self, path: String) {
        self.run(move |nav| nav.enter(&path));
    }

    pub fn go_back(&self) {
        self.run(Navigator::go_back);
    }

    pub fn go_to_root(&self) {
        self.run(Navigator::go_to_root);
    }

    pub fn jump_to_breadcrumb(&self, index: usize) {
        self.run(move |nav| nav.jump_to_breadcrumb(index));
    }

    pub fn refresh(&self) {
        self.run(|nav| Some(nav.refresh()));
    }

    fn reset(&self) {
        self.run(|nav| Some(nav.reset()));
    }

    fn run(&self, transition: impl FnOnce(&mut Navigator) -> Option<FetchTicket>) {
        let mut ticket = None;
        self.navigator.update(|nav| ticket = transition(nav));
        if let Some(ticket) = ticket {
            self.fetch(ticket);
        }
    }

    fn fetch(&self, ticket: FetchTicket) {
        let Some(repo) = self.repository.get_untracked() else {
            tracing::warn!("no repository selected, skipping listing fetch");
            return;
        };
        let navigator = self.navigator;

        spawn_local(async move {
            let result = match ContentClient::browser() {
                Ok(client) => client.fetch_directory(&repo, &ticket.path).await,
                Err(err) => Err(err),
            };
            if let Err(err) = &result {
                tracing::error!(path = %ticket.path, "listing failed: {}", err);
            }
            // The editor window may have been closed while the fetch ran.
            navigator.try_update(|nav| nav.apply(&ticket, result));
        });
    }
}

/// Create the navigator and load the repository root whenever the
/// repository changes.
pub fn use_navigator() -> NavigatorHandle {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let handle = NavigatorHandle {
        navigator: RwSignal::new(Navigator::new()),
        repository: ctx.repository,
    };

    Effect::new(move |_| {
        if ctx.repository.with(Option::is_some) {
            handle.reset();
        }
    });

    handle
}
