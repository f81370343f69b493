//! Application router component.
//!
//! Hash-based routing on native `hashchange` events. The URL hash only names
//! the page; which repository and file the editor shows lives in `AppContext`.

use leptos::ev;
use leptos::prelude::*;

use crate::components::auth::{AuthError, AuthSuccess, Login, SignOut};
use crate::components::explorer::EditorWindow;
use crate::components::landing::Landing;
use crate::config::APP_NAME;
use crate::models::AppRoute;
use crate::utils::dom;

/// Current route, provided to every page.
#[derive(Clone, Copy)]
pub struct RouteContext(pub RwSignal<AppRoute>);

/// Main application router.
///
/// - `#/` → Landing (user + repositories)
/// - `#/login` → Login
/// - `#/auth/success`, `#/auth/error` → OAuth callbacks
/// - `#/signout` → Sign out
/// - `#/editor` → Repository browser and editor
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());
    provide_context(RouteContext(route));

    let handle = window_event_listener(ev::hashchange, move |_| {
        let next = AppRoute::current();
        tracing::debug!(?next, "route changed");
        route.set(next);
    });
    on_cleanup(move || handle.remove());

    Effect::new(move |_| {
        let title = match route.get() {
            AppRoute::Editor => format!("Editor - {}", APP_NAME),
            AppRoute::Login => format!("Sign in - {}", APP_NAME),
            _ => APP_NAME.to_string(),
        };
        dom::set_title(&title);
    });

    move || match route.get() {
        AppRoute::Landing => view! { <Landing /> }.into_any(),
        AppRoute::Login => view! { <Login /> }.into_any(),
        AppRoute::AuthSuccess => view! { <AuthSuccess /> }.into_any(),
        AppRoute::AuthError => view! { <AuthError /> }.into_any(),
        AppRoute::SignOut => view! { <SignOut /> }.into_any(),
        AppRoute::Editor => view! { <EditorWindow /> }.into_any(),
    }
}
