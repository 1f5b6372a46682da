use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::form::bind;
use crate::components::toast::use_toaster;
use crate::models::{FirmClientLoginRequest, LoginRequest, StoredUser, UserRole};
use crate::session;
use crate::validation::{is_blank, ValidationError};
use crate::Route;

const ROLES: [(UserRole, &str); 4] = [
    (UserRole::Client, "Find lawyers and manage your consultations"),
    (UserRole::Lawyer, "Manage your practice and cases"),
    (UserRole::LawFirm, "Manage your firm, lawyers and clients"),
    (UserRole::FirmClient, "Track your case with your law firm"),
];

/// Role is checked before credentials.
fn check_login(role: Option<UserRole>, email: &str, password: &str) -> Result<UserRole, ValidationError> {
    let role = role.ok_or(ValidationError::MissingRole)?;
    if is_blank(email) || is_blank(password) {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(role)
}

fn landing_for(role: UserRole) -> Route {
    match role {
        UserRole::Client => Route::FindLawyer,
        UserRole::FirmClient => Route::FirmClientDashboard,
        UserRole::Lawyer | UserRole::LawFirm => Route::Landing,
    }
}

/// The stored user always carries the role picked on this page.
fn tag_role(mut user: StoredUser, role: UserRole) -> StoredUser {
    user.user_type = Some(role);
    user
}

#[function_component(Login)]
pub fn login() -> Html {
    let role = use_state(|| None::<UserRole>);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);
    let toaster = use_toaster();
    let navigator = use_navigator();

    let onsubmit = {
        let role = role.clone();
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            let picked = match check_login(*role, &email, &password) {
                Ok(r) => r,
                Err(err) => {
                    toaster.error(err.to_string());
                    return;
                }
            };

            loading.set(true);
            let email = email.trim().to_string();
            let password = (*password).clone();
            let loading = loading.clone();
            let toaster = toaster.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let result = match picked {
                    UserRole::FirmClient => {
                        api::firm_client_login(&FirmClientLoginRequest { email, password }).await
                    }
                    other => api::login(&LoginRequest { email, password, user_type: other }).await,
                };
                match result {
                    Ok(resp) => {
                        let user = tag_role(resp.user, picked);
                        session::save_auth(Some(&resp.token), &user, picked);
                        toaster.success("Login successful!");
                        if let Some(navigator) = navigator {
                            navigator.push(&landing_for(picked));
                        }
                    }
                    Err(e) => {
                        log::warn!("login as {} failed: {}", picked, e);
                        toaster.error(e.detail().unwrap_or("Invalid credentials").to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="page">
            <section class="section narrow">
                <h1>{"Welcome Back"}</h1>
                <p class="muted">{"Select your role and login to continue"}</p>
                <div class="grid grid-2 role-grid">
                    {
                        ROLES.iter().map(|(r, blurb)| {
                            let r = *r;
                            let selected = *role == Some(r);
                            let onclick = {
                                let role = role.clone();
                                Callback::from(move |_: MouseEvent| role.set(Some(r)))
                            };
                            html! {
                                <button type="button" key={r.as_str()}
                                    class={classes!("card", "role-card", selected.then_some("selected"))}
                                    onclick={onclick}>
                                    <h3>{format!("Login as {}", r.label())}</h3>
                                    <p class="muted">{*blurb}</p>
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
                <form class="card form" onsubmit={onsubmit}>
                    <label>{"Email"}</label>
                    <input type="email" value={(*email).clone()} oninput={bind(&email)} placeholder="you@example.com" />
                    <label>{"Password"}</label>
                    <input type="password" value={(*password).clone()} oninput={bind(&password)} />
                    <button type="submit" class="btn btn-primary" disabled={*loading}>
                        {if *loading { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="muted">
                    {"New to Nyaay Sathi? "}
                    <Link<Route> to={Route::Signup}>{"Create an account"}</Link<Route>>
                </p>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_is_required_before_credentials() {
        assert_eq!(check_login(None, "", ""), Err(ValidationError::MissingRole));
        assert_eq!(
            check_login(Some(UserRole::Lawyer), "a@b.in", " "),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(check_login(Some(UserRole::Lawyer), "a@b.in", "secret"), Ok(UserRole::Lawyer));
    }

    #[test]
    fn firm_clients_land_on_their_dashboard() {
        assert_eq!(landing_for(UserRole::FirmClient), Route::FirmClientDashboard);
        assert_eq!(landing_for(UserRole::Client), Route::FindLawyer);
    }

    #[test]
    fn stored_user_takes_the_selected_role() {
        let user = StoredUser { user_type: Some(UserRole::Client), ..Default::default() };
        assert_eq!(tag_role(user, UserRole::LawFirm).user_type, Some(UserRole::LawFirm));
    }
}
