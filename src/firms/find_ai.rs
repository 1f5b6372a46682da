use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::FirmCard;
use crate::components::form::bind;
use crate::config::FINDER_REPLY_DELAY_MS;
use crate::data::firms::LAW_FIRMS;
use crate::matcher::match_firms;
use crate::models::LawFirm;
use crate::Route;

const GREETING: &str = "Hi! Tell me about your legal matter, for example \"divorce and child custody\" or \"GST notice for my company\", and I'll suggest law firms that handle it.";

const SUGGESTIONS: &[&str] = &[
    "I need help with a divorce",
    "Property dispute with my landlord",
    "My startup needs a trademark",
    "Cheque bounce case against a client",
];

#[derive(Clone, Debug, PartialEq)]
enum Turn {
    User(String),
    Assistant { text: String, areas: Vec<&'static str>, firms: Vec<&'static LawFirm> },
}

#[function_component(FindFirmAi)]
pub fn find_firm_ai() -> Html {
    let turns = use_state(|| {
        vec![Turn::Assistant { text: GREETING.to_string(), areas: Vec::new(), firms: Vec::new() }]
    });
    let input = use_state(String::new);
    let thinking = use_state(|| false);

    let ask = {
        let turns = turns.clone();
        let thinking = thinking.clone();
        let input = input.clone();
        Callback::from(move |message: String| {
            let message = message.trim().to_string();
            if message.is_empty() || *thinking {
                return;
            }
            let mut history = (*turns).clone();
            history.push(Turn::User(message.clone()));
            turns.set(history.clone());
            input.set(String::new());
            thinking.set(true);

            let turns = turns.clone();
            let thinking = thinking.clone();
            spawn_local(async move {
                TimeoutFuture::new(FINDER_REPLY_DELAY_MS).await;
                let found = match_firms(&LAW_FIRMS, &message);
                log::info!(
                    "firm match for {:?}: {} firms (fallback: {})",
                    found.specializations,
                    found.firms.len(),
                    found.fallback
                );
                history.push(Turn::Assistant {
                    text: found.reply(),
                    areas: found.specializations.clone(),
                    firms: found.firms,
                });
                turns.set(history);
                thinking.set(false);
            });
        })
    };

    let onsubmit = {
        let ask = ask.clone();
        let input = input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            ask.emit((*input).clone());
        })
    };

    html! {
        <div class="page chat-page">
            <div class="chat-header">
                <div>
                    <h1>{"AI Law Firm Matcher"}</h1>
                    <p class="muted">{"Describe your matter in a sentence."}</p>
                </div>
                <Link<Route> to={Route::BrowseFirms} classes="btn btn-outline">{"Browse All Firms"}</Link<Route>>
            </div>
            <div class="chat-window">
                {
                    turns.iter().map(|turn| match turn {
                        Turn::User(text) => html! { <div class="bubble bubble-user">{text}</div> },
                        Turn::Assistant { text, areas, firms } => html! {
                            <div class="bubble bubble-assistant">
                                <p>{text}</p>
                                if !areas.is_empty() {
                                    <div class="tags">
                                        { for areas.iter().map(|a| html! { <span class="tag">{*a}</span> }) }
                                    </div>
                                }
                                if !firms.is_empty() {
                                    <div class="grid grid-3">
                                        {
                                            firms.iter().map(|f| html! {
                                                <FirmCard key={f.id.clone()} firm={(*f).clone()} />
                                            }).collect::<Html>()
                                        }
                                    </div>
                                }
                            </div>
                        },
                    }).collect::<Html>()
                }
                if *thinking {
                    <div class="bubble bubble-assistant typing">{"Finding firms..."}</div>
                }
            </div>
            <div class="chip-row">
                {
                    SUGGESTIONS.iter().map(|s| {
                        let ask = ask.clone();
                        let text = s.to_string();
                        html! {
                            <button class="chip" disabled={*thinking}
                                onclick={Callback::from(move |_: MouseEvent| ask.emit(text.clone()))}>
                                {*s}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <form class="chat-input" onsubmit={onsubmit}>
                <input
                    type="text"
                    value={(*input).clone()}
                    oninput={bind(&input)}
                    placeholder="e.g. tax notice for my business"
                    disabled={*thinking}
                />
                <button type="submit" class="btn btn-primary" disabled={*thinking || input.trim().is_empty()}>
                    {"Send"}
                </button>
            </form>
        </div>
    }
}
