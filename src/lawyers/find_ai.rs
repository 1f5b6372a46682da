use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::LawyerCard;
use crate::components::form::bind;
use crate::config::FINDER_REPLY_DELAY_MS;
use crate::data::lawyers::LAWYERS;
use crate::matcher::{greeting_cards, LawyerFinder, ReplyCard};
use crate::models::Lawyer;
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    User(String),
    Assistant { cards: Vec<ReplyCard>, lawyers: Vec<&'static Lawyer> },
}

fn opening() -> Vec<Entry> {
    vec![Entry::Assistant { cards: greeting_cards(), lawyers: Vec::new() }]
}

pub fn render_cards(cards: &[ReplyCard]) -> Html {
    cards
        .iter()
        .map(|card| {
            html! {
                <div class={classes!("reply-card", card.kind.class())}>
                    <h4>{&card.title}</h4>
                    {
                        card.content.lines().map(|line| html! { <p>{line}</p> }).collect::<Html>()
                    }
                </div>
            }
        })
        .collect()
}

#[function_component(FindLawyerAi)]
pub fn find_lawyer_ai() -> Html {
    let entries = use_state(opening);
    let finder = use_mut_ref(LawyerFinder::default);
    let input = use_state(String::new);
    let thinking = use_state(|| false);

    let onsubmit = {
        let entries = entries.clone();
        let finder = finder.clone();
        let input = input.clone();
        let thinking = thinking.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let message = input.trim().to_string();
            if message.is_empty() || *thinking {
                return;
            }

            let mut history = (*entries).clone();
            history.push(Entry::User(message.clone()));
            entries.set(history.clone());
            input.set(String::new());
            thinking.set(true);

            let entries = entries.clone();
            let finder = finder.clone();
            let thinking = thinking.clone();
            spawn_local(async move {
                TimeoutFuture::new(FINDER_REPLY_DELAY_MS).await;
                let reply = finder.borrow_mut().respond(&LAWYERS, &message);
                log::info!("finder replied with {} lawyers", reply.lawyers.len());
                history.push(Entry::Assistant { cards: reply.cards, lawyers: reply.lawyers });
                entries.set(history);
                thinking.set(false);
            });
        })
    };

    let on_restart = {
        let entries = entries.clone();
        let finder = finder.clone();
        Callback::from(move |_: MouseEvent| {
            finder.borrow_mut().reset();
            entries.set(opening());
        })
    };

    html! {
        <div class="page chat-page">
            <div class="chat-header">
                <div>
                    <h1>{"AI Lawyer Finder"}</h1>
                    <p class="muted">{"Describe your case and where you are. We'll suggest top-rated lawyers."}</p>
                </div>
                <div class="hero-actions">
                    <button class="btn btn-outline" onclick={on_restart}>{"New Search"}</button>
                    <Link<Route> to={Route::FindLawyer} classes="btn btn-outline">{"Browse Manually"}</Link<Route>>
                </div>
            </div>
            <div class="chat-window">
                {
                    entries.iter().map(|entry| match entry {
                        Entry::User(text) => html! { <div class="bubble bubble-user">{text}</div> },
                        Entry::Assistant { cards, lawyers } => html! {
                            <div class="bubble bubble-assistant">
                                {render_cards(cards)}
                                if !lawyers.is_empty() {
                                    <div class="grid grid-3">
                                        {
                                            lawyers.iter().map(|l| html! {
                                                <LawyerCard key={l.id.clone()} lawyer={(*l).clone()} />
                                            }).collect::<Html>()
                                        }
                                    </div>
                                }
                            </div>
                        },
                    }).collect::<Html>()
                }
                if *thinking {
                    <div class="bubble bubble-assistant typing">{"Analyzing your case..."}</div>
                }
            </div>
            <form class="chat-input" onsubmit={onsubmit}>
                <input
                    type="text"
                    value={(*input).clone()}
                    oninput={bind(&input)}
                    placeholder="e.g. I need a divorce lawyer in Delhi"
                    disabled={*thinking}
                />
                <button type="submit" class="btn btn-primary" disabled={*thinking || input.trim().is_empty()}>
                    {"Send"}
                </button>
            </form>
        </div>
    }
}
