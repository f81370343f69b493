//! Sign-in flow pages.
//!
//! - [`Login`] sends the browser to the backend's OAuth entry point
//! - [`AuthSuccess`] / [`AuthError`] are where the backend sends it back
//! - [`SignOut`] ends the backend session

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::router::RouteContext;
use crate::config::{APP_NAME, AUTH_REDIRECT_DELAY_MS, DEFAULT_PROVIDER, api_base_url};
use crate::core::{ContentClient, ContentError, Endpoints};
use crate::models::AppRoute;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/auth/auth.module.css");

/// Login screen with a single "Login with GitHub" action.
#[component]
pub fn Login() -> impl IntoView {
    let authenticating = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let start_login = move |_: leptos::ev::MouseEvent| {
        error.set(None);
        match Endpoints::parse(&api_base_url()) {
            Ok(endpoints) => {
                authenticating.set(true);
                let url = endpoints.login_url(DEFAULT_PROVIDER);
                tracing::info!(%url, "redirecting to OAuth entry point");
                dom::set_location_href(url.as_str());
            }
            Err(err) => {
                tracing::error!("cannot build login URL: {}", err);
                error.set(Some("Failed to connect to authentication server".to_string()));
            }
        }
    };

    view! {
        <div class=css::page>
            <div class=css::card>
                <a href=AppRoute::Landing.to_hash() class=css::brand>{APP_NAME}</a>
                <h2 class=css::title>"Welcome Back"</h2>

                {move || error.get().map(|msg| view! {
                    <div class=css::error>{msg}</div>
                })}

                <button
                    class=css::primaryButton
                    on:click=start_login
                    disabled=move || authenticating.get()
                >
                    <span class=css::buttonIcon><Icon icon=ic::GITHUB /></span>
                    {move || if authenticating.get() {
                        "Authenticating...".to_string()
                    } else {
                        format!("Login with {}", DEFAULT_PROVIDER)
                    }}
                </button>
            </div>
        </div>
    }
}

/// OAuth success callback: greets the user, then moves on to the landing page.
#[component]
pub fn AuthSuccess() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    let user = LocalResource::new(move || async move {
        let client = ContentClient::browser()?;
        client.fetch_user(DEFAULT_PROVIDER).await
    });

    Effect::new(move |_| {
        if let Some(Ok(info)) = user.get() {
            ctx.session.set(Some(info));
        }
    });

    spawn_local(async move {
        TimeoutFuture::new(AUTH_REDIRECT_DELAY_MS).await;
        // Only redirect if the user is still looking at this page.
        if route_ctx.0.get_untracked() == AppRoute::AuthSuccess {
            AppRoute::Landing.push();
        }
    });

    view! {
        <div class=css::page>
            <Suspense fallback=move || view! {
                <p class=css::status>"Loading user data..."</p>
            }>
                {move || user.get().map(|result| match result {
                    Ok(info) => {
                        let greeting = format!("Welcome, {}!", info.display_label());
                        let provider = info.provider.clone().unwrap_or_else(|| DEFAULT_PROVIDER.slug().to_string());
                        view! {
                            <div class=css::card>
                                <h1 class=css::title>{greeting}</h1>
                                {info.avatar_url.clone().map(|src| view! {
                                    <img class=css::avatar src=src alt="Profile" />
                                })}
                                <p class=css::detail><strong>"ID: "</strong>{info.id_label()}</p>
                                <p class=css::detail><strong>"Provider: "</strong>{provider}</p>
                                <p class=css::status>"Taking you to your repositories..."</p>
                                <a href=AppRoute::SignOut.to_hash() class=css::dangerButton>
                                    <span class=css::buttonIcon><Icon icon=ic::SIGN_OUT /></span>
                                    "Sign Out"
                                </a>
                            </div>
                        }.into_any()
                    }
                    Err(err) => view! {
                        <div class=css::card>
                            <p class=css::error>{err.user_message()}</p>
                            <p class=css::status>"Returning to the home page..."</p>
                        </div>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

/// OAuth error callback.
#[component]
pub fn AuthError() -> impl IntoView {
    view! {
        <div class=css::page>
            <div class=css::card>
                <span class=css::warningIcon><Icon icon=ic::WARNING /></span>
                <h1 class=css::errorTitle>{format!("{} Login Failed", DEFAULT_PROVIDER)}</h1>
                <p class=css::detail>"Something went wrong. Please try again later."</p>
                <button
                    class=css::primaryButton
                    on:click=move |_| AppRoute::Login.push()
                >
                    <span class=css::buttonIcon><Icon icon=ic::REFRESH /></span>
                    "Try Again"
                </button>
            </div>
        </div>
    }
}

/// Ends the backend session, clears local state and returns home.
#[component]
pub fn SignOut() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let error = RwSignal::new(None::<ContentError>);

    spawn_local(async move {
        let result = match ContentClient::browser() {
            Ok(client) => client.sign_out(DEFAULT_PROVIDER).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(()) => {
                tracing::info!("signed out");
                ctx.clear_session();
                AppRoute::Landing.push();
            }
            Err(err) => {
                tracing::error!("sign out failed: {}", err);
                let _ = error.try_set(Some(err));
            }
        }
    });

    view! {
        <div class=css::page>
            <div class=css::card>
                {move || match error.get() {
                    None => view! { <p class=css::status>"Signing out..."</p> }.into_any(),
                    Some(err) => view! {
                        <p class=css::error>{format!("Failed to sign out: {}", err.user_message())}</p>
                        <a href=AppRoute::Landing.to_hash() class=css::link>"Back to home"</a>
                    }.into_any(),
                }}
            </div>
        </div>
    }
}
