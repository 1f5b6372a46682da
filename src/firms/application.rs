use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::form::{bind_field, bind_select_field, bind_textarea_field, options};
use crate::components::layout::Spinner;
use crate::components::toast::use_toaster;
use crate::data::firms::LAW_FIRMS;
use crate::models::{FirmClientApplicationRequest, PlatformFirm};
use crate::validation::{any_blank, is_blank, validate_email};
use crate::wizard::FIRM_CASE_TYPES;
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
pub struct FirmOption {
    pub id: String,
    pub name: String,
}

/// Registered firms when the backend has any, otherwise the directory listing.
pub fn firm_options(fetched: Option<Vec<PlatformFirm>>) -> Vec<FirmOption> {
    match fetched {
        Some(firms) if !firms.is_empty() => firms
            .into_iter()
            .map(|f| FirmOption { id: f.id, name: f.firm_name })
            .collect(),
        _ => LAW_FIRMS
            .iter()
            .map(|f| FirmOption { id: f.id.clone(), name: f.firm_name.clone() })
            .collect(),
    }
}

#[derive(Clone, Default, PartialEq)]
struct ApplicationForm {
    full_name: String,
    email: String,
    phone: String,
    company_name: String,
    case_type: String,
    case_description: String,
    law_firm_id: String,
}

impl ApplicationForm {
    fn check(&self) -> Result<(), String> {
        if is_blank(&self.law_firm_id) {
            return Err("Please select a law firm".to_string());
        }
        if any_blank(&[&self.full_name, &self.email, &self.phone, &self.case_type, &self.case_description]) {
            return Err("Please fill all required fields".to_string());
        }
        validate_email(&self.email).map_err(|e| e.to_string())
    }

    fn to_request(&self, firms: &[FirmOption]) -> FirmClientApplicationRequest {
        let law_firm_name = firms
            .iter()
            .find(|f| f.id == self.law_firm_id)
            .map(|f| f.name.clone())
            .unwrap_or_default();
        FirmClientApplicationRequest {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            company_name: Some(self.company_name.trim().to_string()).filter(|c| !c.is_empty()),
            case_type: self.case_type.clone(),
            case_description: self.case_description.trim().to_string(),
            law_firm_id: self.law_firm_id.clone(),
            law_firm_name,
        }
    }
}

#[function_component(FirmClientApplication)]
pub fn firm_client_application() -> Html {
    let firms = use_state(Vec::<FirmOption>::new);
    let firms_loading = use_state(|| true);
    let form = use_state(ApplicationForm::default);
    let loading = use_state(|| false);
    let toaster = use_toaster();
    let navigator = use_navigator();

    {
        let firms = firms.clone();
        let firms_loading = firms_loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let fetched = match api::fetch_law_firms().await {
                        Ok(list) => Some(list),
                        Err(e) => {
                            log::warn!("firm list unavailable, using directory: {}", e);
                            None
                        }
                    };
                    firms.set(firm_options(fetched));
                    firms_loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let onsubmit = {
        let form = form.clone();
        let firms = firms.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            if let Err(message) = form.check() {
                toaster.error(message);
                return;
            }

            loading.set(true);
            let request = form.to_request(&firms);
            let loading = loading.clone();
            let toaster = toaster.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match api::submit_firm_client_application(&request).await {
                    Ok(_) => {
                        toaster.success("Application submitted successfully! You will receive an email once approved.");
                        TimeoutFuture::new(2_000).await;
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(e) => {
                        log::warn!("application failed: {}", e);
                        toaster.error(e.detail().unwrap_or("Failed to submit application").to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    let firm_select = if *firms_loading {
        html! { <Spinner label={"Loading law firms..."} /> }
    } else {
        html! {
            <select onchange={bind_select_field(&form, |f, v| f.law_firm_id = v)}>
                <option value="" selected={form.law_firm_id.is_empty()}>{"Select a law firm"}</option>
                {
                    firms.iter().map(|f| html! {
                        <option value={f.id.clone()} selected={f.id == form.law_firm_id}>{&f.name}</option>
                    }).collect::<Html>()
                }
            </select>
        }
    };

    html! {
        <div class="page">
            <section class="section narrow">
                <h1>{"Apply as a Firm Client"}</h1>
                <p class="muted">{"Send your case to a law firm for review. No payment is needed until the firm accepts."}</p>
                <form class="card form" onsubmit={onsubmit}>
                    <label>{"Law Firm *"}</label>
                    {firm_select}
                    <label>{"Full Name *"}</label>
                    <input type="text" value={form.full_name.clone()} oninput={bind_field(&form, |f, v| f.full_name = v)} />
                    <label>{"Email *"}</label>
                    <input type="email" value={form.email.clone()} oninput={bind_field(&form, |f, v| f.email = v)} />
                    <label>{"Phone *"}</label>
                    <input type="tel" value={form.phone.clone()} oninput={bind_field(&form, |f, v| f.phone = v)} />
                    <label>{"Company (optional)"}</label>
                    <input type="text" value={form.company_name.clone()} oninput={bind_field(&form, |f, v| f.company_name = v)} />
                    <label>{"Case Type *"}</label>
                    <select onchange={bind_select_field(&form, |f, v| f.case_type = v)}>
                        {options("Select case type", FIRM_CASE_TYPES, &form.case_type)}
                    </select>
                    <label>{"Case Description *"}</label>
                    <textarea rows="5" value={form.case_description.clone()}
                        oninput={bind_textarea_field(&form, |f, v| f.case_description = v)} />
                    <button type="submit" class="btn btn-primary" disabled={*loading}>
                        {if *loading { "Submitting..." } else { "Submit Application" }}
                    </button>
                </form>
                <p class="muted">
                    {"Already a client? "}
                    <Link<Route> to={Route::Login}>{"Login here"}</Link<Route>>
                </p>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(id: &str, name: &str) -> PlatformFirm {
        PlatformFirm { id: id.into(), firm_name: name.into(), city: None, state: None }
    }

    #[test]
    fn registered_firms_win_over_directory() {
        let options = firm_options(Some(vec![platform("u-1", "Rao Legal")]));
        assert_eq!(options, vec![FirmOption { id: "u-1".into(), name: "Rao Legal".into() }]);
    }

    #[test]
    fn empty_or_failed_fetch_falls_back() {
        assert_eq!(firm_options(None).len(), LAW_FIRMS.len());
        assert_eq!(firm_options(Some(Vec::new())).len(), LAW_FIRMS.len());
    }

    #[test]
    fn firm_is_checked_first_and_name_resolved() {
        let mut form = ApplicationForm::default();
        assert_eq!(form.check(), Err("Please select a law firm".to_string()));

        form.law_firm_id = "u-1".into();
        assert_eq!(form.check(), Err("Please fill all required fields".to_string()));

        form.full_name = "Kabir Das".into();
        form.email = "kabir@das.in".into();
        form.phone = "9999999999".into();
        form.case_type = "Civil Law".into();
        form.case_description = "Boundary wall".into();
        assert_eq!(form.check(), Ok(()));

        let req = form.to_request(&[FirmOption { id: "u-1".into(), name: "Rao Legal".into() }]);
        assert_eq!(req.law_firm_name, "Rao Legal");
        assert_eq!(req.company_name, None);
    }
}
