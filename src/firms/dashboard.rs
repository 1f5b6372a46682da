use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::layout::Spinner;
use crate::components::toast::use_toaster;
use crate::data::case_updates::{demo_case_updates, format_update_date};
use crate::models::{CaseUpdate, FirmClient, StoredUser};
use crate::session;
use crate::Route;

/// Client record shown in the header before (or without) the backend lookup.
fn client_from_session(user: &StoredUser) -> FirmClient {
    FirmClient {
        id: user.id.clone(),
        full_name: user.full_name.clone(),
        email: user.email.clone(),
        phone: user.phone.clone(),
        law_firm_id: user.law_firm_id.clone(),
        law_firm_name: user.law_firm_name.clone(),
        ..Default::default()
    }
}

/// Session user, only when a token was stored alongside it.
fn signed_in_client(user: Option<StoredUser>, token: Option<String>) -> Option<StoredUser> {
    user.filter(|_| token.is_some())
}

/// Backend updates, or the demo timeline when the request failed or returned nothing.
fn updates_or_demo(fetched: Option<Vec<CaseUpdate>>) -> Vec<CaseUpdate> {
    match fetched {
        Some(list) if !list.is_empty() => list,
        _ => demo_case_updates(),
    }
}

#[function_component(FirmClientDashboard)]
pub fn firm_client_dashboard() -> Html {
    let navigator = use_navigator();
    let toaster = use_toaster();
    let client = use_state(|| None::<FirmClient>);
    let updates = use_state(Vec::<CaseUpdate>::new);
    let loading = use_state(|| true);

    {
        let navigator = navigator.clone();
        let client = client.clone();
        let updates = updates.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                match signed_in_client(session::stored_user(), session::token()) {
                    None => {
                        log::info!("no firm client session, redirecting to login");
                        loading.set(false);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Some(user) => {
                        client.set(Some(client_from_session(&user)));
                        spawn_local(async move {
                            if user.id.is_empty() {
                                updates.set(demo_case_updates());
                                loading.set(false);
                                return;
                            }
                            match api::fetch_firm_client(&user.id).await {
                                Ok(fetched) => client.set(Some(fetched)),
                                Err(e) => log::warn!("client lookup failed: {}", e),
                            }
                            let fetched = match api::fetch_case_updates(&user.id).await {
                                Ok(list) => Some(list),
                                Err(e) => {
                                    log::warn!("case updates unavailable, showing demo: {}", e);
                                    None
                                }
                            };
                            updates.set(updates_or_demo(fetched));
                            loading.set(false);
                        });
                    }
                }
                || ()
            },
            (),
        );
    }

    let on_logout = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            session::logout();
            toaster.success("Logged out successfully");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    if *loading {
        return html! {
            <div class="page">
                <section class="section narrow">
                    <Spinner label={"Loading..."} />
                </section>
            </div>
        };
    }

    let Some(client) = (*client).clone() else {
        return html! {};
    };
    let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());

    html! {
        <div class="page">
            <section class="section">
                <div class="page-header">
                    <div>
                        <h1>{"Client Portal"}</h1>
                        <p class="muted">{format!("{} · {}", client.full_name, client.email)}</p>
                    </div>
                    <button class="btn btn-outline" onclick={on_logout}>{"Logout"}</button>
                </div>

                <div class="grid grid-4 stats">
                    <div class="card"><strong>{show(&client.status)}</strong><p class="muted">{"Case Status"}</p></div>
                    <div class="card"><strong>{show(&client.payment_status)}</strong><p class="muted">{"Payment"}</p></div>
                    <div class="card"><strong>{show(&client.case_type)}</strong><p class="muted">{"Case Type"}</p></div>
                    <div class="card"><strong>{updates.len()}</strong><p class="muted">{"Updates"}</p></div>
                </div>

                <div class="grid grid-2">
                    <div class="card">
                        <h2>{"Case Updates"}</h2>
                        <ul class="timeline">
                            {
                                updates.iter().map(|u| html! {
                                    <li key={u.id.clone()} class="timeline-item">
                                        <span class="tag">{u.type_label()}</span>
                                        <h3>{&u.title}</h3>
                                        <p>{&u.description}</p>
                                        <p class="muted">{format!("{} · {}", format_update_date(&u.created_at), u.created_by)}</p>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                    <div class="card">
                        <h2>{"Your Case"}</h2>
                        <dl>
                            <dt>{"Law Firm"}</dt><dd>{show(&client.law_firm_name)}</dd>
                            <dt>{"Assigned Lawyer"}</dt><dd>{client.assigned_lawyer_name.clone().unwrap_or_else(|| "Not yet assigned".to_string())}</dd>
                            <dt>{"Phone"}</dt><dd>{show(&client.phone)}</dd>
                            <dt>{"Company"}</dt><dd>{show(&client.company_name)}</dd>
                            <dt>{"Description"}</dt><dd>{show(&client.case_description)}</dd>
                        </dl>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    #[test]
    fn session_user_seeds_the_header() {
        let user = StoredUser {
            id: "fc-1".into(),
            full_name: "Meera Nair".into(),
            email: "meera@nair.in".into(),
            user_type: Some(UserRole::FirmClient),
            law_firm_name: Some("Shah & Associates".into()),
            ..Default::default()
        };
        let client = client_from_session(&user);
        assert_eq!(client.id, "fc-1");
        assert_eq!(client.law_firm_name.as_deref(), Some("Shah & Associates"));
        assert_eq!(client.status, None);
    }

    #[test]
    fn user_without_token_is_sent_to_login() {
        let user = StoredUser { id: "fc-2".into(), ..Default::default() };
        assert_eq!(signed_in_client(Some(user.clone()), None), None);
        assert_eq!(signed_in_client(None, Some("tok".into())), None);
        assert_eq!(signed_in_client(Some(user.clone()), Some("tok".into())), Some(user));
    }

    #[test]
    fn failed_or_empty_fetch_shows_demo_timeline() {
        assert_eq!(updates_or_demo(None), demo_case_updates());
        assert_eq!(updates_or_demo(Some(Vec::new())), demo_case_updates());
    }

    #[test]
    fn fetched_updates_replace_the_demo() {
        let mut fetched = demo_case_updates();
        fetched.truncate(1);
        fetched[0].title = "Hearing adjourned".into();
        assert_eq!(updates_or_demo(Some(fetched.clone())), fetched);
    }
}
