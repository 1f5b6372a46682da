use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, ApiError};
use crate::components::form::bind_field;
use crate::components::toast::use_toaster;
use crate::models::{RegisterRequest, UserRole};
use crate::session;
use crate::validation::PersonalInfo;
use crate::Route;

fn signup_request(info: &PersonalInfo) -> RegisterRequest {
    RegisterRequest {
        full_name: info.full_name.trim().to_string(),
        email: info.email.trim().to_string(),
        phone: Some(info.phone.trim().to_string()),
        password: info.password.clone(),
        user_type: UserRole::Client,
    }
}

fn failure_message(err: &ApiError) -> String {
    if err.is_already_exists() {
        return "An account with this email already exists. Please login instead.".to_string();
    }
    err.detail().unwrap_or("Signup failed").to_string()
}

#[function_component(Signup)]
pub fn signup() -> Html {
    let info = use_state(PersonalInfo::default);
    let loading = use_state(|| false);
    let toaster = use_toaster();
    let navigator = use_navigator();

    let onsubmit = {
        let info = info.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            if let Err(err) = info.validate() {
                toaster.error(err.to_string());
                return;
            }

            loading.set(true);
            let request = signup_request(&info);
            let loading = loading.clone();
            let toaster = toaster.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match api::register(&request).await {
                    Ok(resp) => {
                        session::save_auth(Some(&resp.token), &resp.user, UserRole::Client);
                        toaster.success("Account created successfully!");
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::FindLawyer);
                        }
                    }
                    Err(e) => {
                        log::warn!("signup failed: {}", e);
                        toaster.error(failure_message(&e));
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="page">
            <section class="section narrow">
                <h1>{"Create your account"}</h1>
                <p class="muted">{"Book consultations and keep track of your legal matters."}</p>
                <form class="card form" onsubmit={onsubmit}>
                    <label>{"Full Name *"}</label>
                    <input type="text" value={info.full_name.clone()} oninput={bind_field(&info, |i, v| i.full_name = v)} />
                    <label>{"Email *"}</label>
                    <input type="email" value={info.email.clone()} oninput={bind_field(&info, |i, v| i.email = v)} />
                    <label>{"Phone *"}</label>
                    <input type="tel" value={info.phone.clone()} oninput={bind_field(&info, |i, v| i.phone = v)} />
                    <label>{"Password *"}</label>
                    <input type="password" value={info.password.clone()} oninput={bind_field(&info, |i, v| i.password = v)} />
                    <label>{"Confirm Password *"}</label>
                    <input type="password" value={info.confirm_password.clone()}
                        oninput={bind_field(&info, |i, v| i.confirm_password = v)} />
                    <button type="submit" class="btn btn-primary" disabled={*loading}>
                        {if *loading { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <p class="muted">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                </p>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_trimmed_client_signup() {
        let info = PersonalInfo {
            full_name: " Asha Rao ".into(),
            email: "asha@rao.in ".into(),
            phone: "98765 43210".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        };
        let req = signup_request(&info);
        assert_eq!(req.full_name, "Asha Rao");
        assert_eq!(req.email, "asha@rao.in");
        assert_eq!(req.user_type, UserRole::Client);
    }

    #[test]
    fn duplicate_email_gets_its_own_message() {
        let dup = ApiError::AlreadyExists("Email already registered".into());
        assert!(failure_message(&dup).starts_with("An account with this email"));
        let other = ApiError::Server { status: 500, detail: None };
        assert_eq!(failure_message(&other), "Signup failed");
    }
}
