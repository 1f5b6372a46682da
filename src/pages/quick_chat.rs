use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::form::bind;
use crate::components::toast::use_toaster;
use crate::models::GuestChatRequest;
use crate::Route;

const WELCOME: &str = "👋 Welcome to Nyaay Sathi AI Assistant! I can help you understand legal concepts, case procedures, and your rights. How can I assist you today?";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    pub messages: Vec<ChatMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            messages: vec![ChatMessage { speaker: Speaker::Assistant, content: WELCOME.to_string() }],
        }
    }
}

impl Transcript {
    pub fn with(&self, speaker: Speaker, content: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.messages.push(ChatMessage { speaker, content: content.into() });
        next
    }

    /// Drops a trailing user message whose reply never arrived.
    pub fn without_pending(&self) -> Self {
        let mut next = self.clone();
        if matches!(next.messages.last(), Some(m) if m.speaker == Speaker::User) {
            next.messages.pop();
        }
        next
    }
}

pub fn guest_session_id() -> String {
    format!("guest_{}", Uuid::new_v4().simple())
}

#[function_component(QuickChat)]
pub fn quick_chat() -> Html {
    let transcript = use_state(Transcript::default);
    let input = use_state(String::new);
    let loading = use_state(|| false);
    let session_id = use_state(guest_session_id);
    let toaster = use_toaster();

    let onsubmit = {
        let transcript = transcript.clone();
        let input = input.clone();
        let loading = loading.clone();
        let session_id = session_id.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let message = input.trim().to_string();
            if message.is_empty() || *loading {
                return;
            }

            let pending = transcript.with(Speaker::User, message.clone());
            transcript.set(pending.clone());
            input.set(String::new());
            loading.set(true);

            let request = GuestChatRequest { message, session_id: (*session_id).clone() };
            let transcript = transcript.clone();
            let loading = loading.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match api::guest_chat(&request).await {
                    Ok(reply) => transcript.set(pending.with(Speaker::Assistant, reply.response)),
                    Err(e) => {
                        log::warn!("guest chat failed: {}", e);
                        toaster.error("Chat unavailable. Please try again or sign up for full access.");
                        transcript.set(pending.without_pending());
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="page chat-page">
            <div class="chat-header">
                <div>
                    <h1>{"Nyaay Sathi AI Chat"}</h1>
                    <p class="muted">{"Ask any legal question"}</p>
                </div>
                <Link<Route> to={Route::Signup} classes="btn btn-primary">{"Sign Up for Full Access"}</Link<Route>>
            </div>
            <div class="chat-window">
                {
                    transcript.messages.iter().map(|m| {
                        let class = match m.speaker {
                            Speaker::User => "bubble bubble-user",
                            Speaker::Assistant => "bubble bubble-assistant",
                        };
                        html! { <div class={class}>{&m.content}</div> }
                    }).collect::<Html>()
                }
                if *loading {
                    <div class="bubble bubble-assistant typing">{"Thinking..."}</div>
                }
            </div>
            <form class="chat-input" onsubmit={onsubmit}>
                <input
                    type="text"
                    value={(*input).clone()}
                    oninput={bind(&input)}
                    placeholder="Type your legal question..."
                    disabled={*loading}
                />
                <button type="submit" class="btn btn-primary" disabled={*loading || input.trim().is_empty()}>
                    {"Send"}
                </button>
            </form>
            <p class="muted small">{"This assistant gives general information, not legal advice."}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_reply_rolls_back_the_question() {
        let start = Transcript::default();
        let pending = start.with(Speaker::User, "What is bail?");
        assert_eq!(pending.messages.len(), 2);
        assert_eq!(pending.without_pending(), start);
    }

    #[test]
    fn rollback_keeps_answered_turns() {
        let answered = Transcript::default()
            .with(Speaker::User, "Hi")
            .with(Speaker::Assistant, "Hello");
        assert_eq!(answered.without_pending(), answered);
    }

    #[test]
    fn session_ids_are_unique_guest_ids() {
        let a = guest_session_id();
        assert!(a.starts_with("guest_"));
        assert_ne!(a, guest_session_id());
    }
}
