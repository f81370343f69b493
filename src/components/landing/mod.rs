//! Landing page: signed-in user and their repositories.
//!
//! Picking a repository stores it in `AppContext` and opens the editor.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, DEFAULT_PROVIDER};
use crate::core::{ContentClient, ContentError};
use crate::models::{AppRoute, RepoSummary, UserInfo};
use crate::utils::format_count;

stylance::import_crate_style!(css, "src/components/landing/landing.module.css");

#[component]
pub fn Landing() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let user = LocalResource::new(move || async move {
        let client = ContentClient::browser()?;
        client.fetch_user(DEFAULT_PROVIDER).await
    });

    let signed_in = Signal::derive(move || matches!(user.get(), Some(Ok(_))));

    let repos = LocalResource::new(move || {
        let load = signed_in.get();
        async move {
            if !load {
                return None;
            }
            let result = match ContentClient::browser() {
                Ok(client) => client.fetch_repositories(DEFAULT_PROVIDER).await,
                Err(err) => Err(err),
            };
            Some(result)
        }
    });

    Effect::new(move |_| match user.get() {
        Some(Ok(info)) => ctx.session.set(Some(info)),
        Some(Err(err)) => {
            tracing::info!("no active session: {}", err);
            ctx.session.set(None);
        }
        None => {}
    });

    view! {
        <div class=css::page>
            <header class=css::header>
                <span class=css::brand>{APP_NAME}</span>
                <nav class=css::headerActions>
                    <Show
                        when=move || signed_in.get()
                        fallback=|| view! {
                            <a href=AppRoute::Login.to_hash() class=css::headerLink>"Login"</a>
                        }
                    >
                        <a href=AppRoute::SignOut.to_hash() class=css::headerLink>
                            <Icon icon=ic::SIGN_OUT />
                            "Sign Out"
                        </a>
                    </Show>
                </nav>
            </header>

            <section class=css::hero>
                <h1 class=css::heroTitle>"Browse, preview and edit your code"</h1>
                <p class=css::heroText>
                    "Open any of your repositories, walk its tree, and view source, \
                     images, fonts and documents right in the browser."
                </p>
            </section>

            <main class=css::main>
                <Suspense fallback=move || view! { <p class=css::muted>"Loading..."</p> }>
                    {move || user.get().map(|result| match result {
                        Ok(info) => view! {
                            <UserCard user=info />
                            <RepositoryList repos=repos />
                        }.into_any(),
                        Err(err) => view! { <SignedOut error=err /> }.into_any(),
                    })}
                </Suspense>
            </main>

            <footer class=css::footer>
                <p>{format!("{} - source browser", APP_NAME)}</p>
            </footer>
        </div>
    }
}

#[component]
fn UserCard(user: UserInfo) -> impl IntoView {
    let provider = user
        .provider
        .clone()
        .unwrap_or_else(|| DEFAULT_PROVIDER.slug().to_string());

    view! {
        <section class=css::userCard>
            {match user.avatar_url.clone() {
                Some(src) => view! { <img class=css::avatar src=src alt="Profile" /> }.into_any(),
                None => view! { <span class=css::avatarFallback><Icon icon=ic::USER /></span> }.into_any(),
            }}
            <div class=css::userInfo>
                <h2 class=css::userName>{format!("Welcome, {}!", user.display_label())}</h2>
                <p class=css::muted>{format!("ID: {} · Provider: {}", user.id_label(), provider)}</p>
            </div>
        </section>
    }
}

#[component]
fn SignedOut(error: ContentError) -> impl IntoView {
    let message = match error {
        ContentError::Forbidden | ContentError::NotFound => None,
        ContentError::RemoteError { status: 401, .. } => None,
        other => Some(other.user_message()),
    };

    view! {
        <section class=css::signedOut>
            {message.map(|m| view! { <p class=css::error>{format!("Failed to load user data: {}", m)}</p> })}
            <p>"Sign in to see your repositories."</p>
            <a href=AppRoute::Login.to_hash() class=css::primaryButton>
                <Icon icon=ic::GITHUB />
                {format!("Login with {}", DEFAULT_PROVIDER)}
            </a>
        </section>
    }
}

#[component]
fn RepositoryList(repos: LocalResource<Option<Result<Vec<RepoSummary>, ContentError>>>) -> impl IntoView {
    view! {
        <section class=css::repos>
            <h2 class=css::sectionTitle>{format!("Your {} Repositories", DEFAULT_PROVIDER)}</h2>
            <Suspense fallback=move || view! { <p class=css::muted>"Loading repositories..."</p> }>
                {move || repos.get().flatten().map(|result| match result {
                    Ok(list) if list.is_empty() => view! {
                        <p class=css::muted>"No repositories found."</p>
                    }.into_any(),
                    Ok(list) => view! {
                        <ul class=css::repoGrid>
                            {list.into_iter().map(|repo| view! { <RepositoryCard repo=repo /> }).collect_view()}
                        </ul>
                    }.into_any(),
                    Err(err) => view! {
                        <p class=css::error>{format!("Failed to load repositories: {}", err.user_message())}</p>
                    }.into_any(),
                })}
            </Suspense>
        </section>
    }
}

#[component]
fn RepositoryCard(repo: RepoSummary) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let target = repo.to_repository_ref();
    let available = target.is_some();
    let title = repo.full_name.clone().unwrap_or_else(|| repo.name.clone());
    let description = repo
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "No description".to_string());

    let open = move |_: leptos::ev::MouseEvent| match target.clone() {
        Some(repo_ref) => {
            tracing::info!(repo = %repo_ref.full_name(), "opening repository");
            ctx.open_repository(repo_ref);
            AppRoute::Editor.push();
        }
        None => tracing::warn!("repository has no owner; cannot open"),
    };

    view! {
        <li>
            <button
                class=css::repoCard
                on:click=open
                disabled=!available
                title=if available { "Open in editor" } else { "Owner unknown" }
            >
                <span class=css::repoName>{title}</span>
                <span class=css::repoDescription>{description}</span>
                <span class=css::repoStats>
                    <span class=css::stat><Icon icon=ic::STAR />{format_count(repo.stargazers_count)}</span>
                    <span class=css::stat><Icon icon=ic::FORK />{format_count(repo.forks_count)}</span>
                </span>
            </button>
        </li>
    }
}
