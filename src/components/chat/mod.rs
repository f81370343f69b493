//! Chat side panel.
//!
//! No assistant backend is wired up: messages stay in the panel and every
//! one gets the same placeholder reply.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/chat/chat.module.css");

const PLACEHOLDER_REPLY: &str = "The assistant is not connected yet.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Author {
    User,
    Assistant,
}

#[derive(Clone, Debug)]
struct ChatMessage {
    id: usize,
    author: Author,
    text: String,
}

#[component]
pub fn Chat() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let messages = RwSignal::new(Vec::<ChatMessage>::new());
    let draft = RwSignal::new(String::new());

    let send = move || {
        let text = draft.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }
        messages.update(|list| {
            let next = list.len();
            list.push(ChatMessage { id: next, author: Author::User, text });
            list.push(ChatMessage {
                id: next + 1,
                author: Author::Assistant,
                text: PLACEHOLDER_REPLY.to_string(),
            });
        });
        draft.set(String::new());
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send();
        }
    };

    view! {
        <aside class=css::panel aria-label="Chat">
            <header class=css::header>
                <h2 class=css::title>"Chat"</h2>
                <button
                    class=css::iconButton
                    on:click=move |_| ctx.chat_open.set(false)
                    title="Close chat"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </header>

            <div class=css::messages>
                <Show
                    when=move || messages.with(|m| !m.is_empty())
                    fallback=|| view! { <p class=css::empty>"Chat messages will be displayed here."</p> }
                >
                    <For
                        each=move || messages.get()
                        key=|msg| msg.id
                        children=move |msg| {
                            let class = match msg.author {
                                Author::User => format!("{} {}", css::message, css::fromUser),
                                Author::Assistant => format!("{} {}", css::message, css::fromAssistant),
                            };
                            view! { <p class=class>{msg.text}</p> }
                        }
                    />
                </Show>
            </div>

            <div class=css::composer>
                <textarea
                    class=css::input
                    rows="2"
                    placeholder="Type a message..."
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=handle_keydown
                />
                <button
                    class=css::iconButton
                    on:click=move |_| send()
                    disabled=move || draft.with(|d| d.trim().is_empty())
                    title="Send"
                >
                    <Icon icon=ic::SEND />
                </button>
            </div>
        </aside>
    }
}
