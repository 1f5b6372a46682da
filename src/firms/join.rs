use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, ApiError};
use crate::components::form::{bind_field, bind_select_field, bind_textarea_field, options};
use crate::components::layout::{Spinner, StepIndicator};
use crate::components::toast::use_toaster;
use crate::config::PAYMENT_DELAY_MS;
use crate::data::firms::find_firm;
use crate::models::{StoredUser, UserRole};
use crate::pages::info::NotFound;
use crate::session;
use crate::wizard::{firm_registration_fee, FirmJoinForm, Step, Wizard, FIRM_CASE_TYPES};
use crate::Route;

#[derive(Debug, PartialEq)]
enum JoinFailure {
    /// Stay on payment and show this message.
    Stay(String),
    /// Treat the payment as done anyway.
    Proceed,
}

fn classify_failure(err: &ApiError) -> JoinFailure {
    match err {
        ApiError::AlreadyExists(_) => JoinFailure::Stay("Email already registered. Please login instead.".to_string()),
        other => match other.detail() {
            Some(detail) => JoinFailure::Stay(detail.to_string()),
            None => JoinFailure::Proceed,
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct JoinFirmProps {
    pub id: String,
}

#[function_component(JoinFirm)]
pub fn join_firm(props: &JoinFirmProps) -> Html {
    let wizard = use_state(Wizard::<FirmJoinForm>::default);
    let processing = use_state(|| false);
    let toaster = use_toaster();

    let Some(firm) = find_firm(&props.id) else {
        return html! { <NotFound /> };
    };
    let fee = firm_registration_fee();

    let on_next = {
        let wizard = wizard.clone();
        let toaster = toaster.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*wizard).clone();
            match next.next() {
                Ok(_) => wizard.set(next),
                Err(err) => toaster.error(err.to_string()),
            }
        })
    };

    let on_back = {
        let wizard = wizard.clone();
        Callback::from(move |_: MouseEvent| {
            let mut prev = (*wizard).clone();
            prev.back();
            wizard.set(prev);
        })
    };

    let on_pay = {
        let wizard = wizard.clone();
        let processing = processing.clone();
        let toaster = toaster.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *processing {
                return;
            }
            if let Err(err) = wizard.validate_current() {
                toaster.error(err.to_string());
                return;
            }

            processing.set(true);
            let wizard = wizard.clone();
            let processing = processing.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                TimeoutFuture::new(PAYMENT_DELAY_MS).await;
                let mut done = (*wizard).clone();
                let request = done.form.register_paid_request(firm, fee.total);
                match api::register_paid_firm_client(&request).await {
                    Ok(resp) => {
                        let user = resp.user.unwrap_or_else(|| StoredUser {
                            full_name: request.full_name.clone(),
                            email: request.email.clone(),
                            phone: Some(request.phone.clone()),
                            user_type: Some(UserRole::FirmClient),
                            law_firm_id: Some(firm.id.clone()),
                            law_firm_name: Some(firm.firm_name.clone()),
                            ..Default::default()
                        });
                        session::save_auth(resp.token.as_deref(), &user, UserRole::FirmClient);
                        toaster.success("Payment successful! Account created.");
                        if done.complete().is_ok() {
                            wizard.set(done);
                        }
                    }
                    Err(e) => {
                        log::warn!("paid signup failed: {}", e);
                        match classify_failure(&e) {
                            JoinFailure::Stay(message) => toaster.error(message),
                            JoinFailure::Proceed => {
                                toaster.success("Payment successful!");
                                if done.complete().is_ok() {
                                    wizard.set(done);
                                }
                            }
                        }
                    }
                }
                processing.set(false);
            });
        })
    };

    let form = &wizard.form;
    let step_body = match wizard.step {
        Step::PersonalInfo => html! {
            <form class="card form" onsubmit={on_next}>
                <h2>{"Your Details"}</h2>
                <label>{"Full Name *"}</label>
                <input type="text" value={form.personal.full_name.clone()}
                    oninput={bind_field(&wizard, |w, v| w.form.personal.full_name = v)} />
                <label>{"Email *"}</label>
                <input type="email" value={form.personal.email.clone()}
                    oninput={bind_field(&wizard, |w, v| w.form.personal.email = v)} />
                <label>{"Phone *"}</label>
                <input type="tel" value={form.personal.phone.clone()}
                    oninput={bind_field(&wizard, |w, v| w.form.personal.phone = v)} />
                <label>{"Company (optional)"}</label>
                <input type="text" value={form.company_name.clone()}
                    oninput={bind_field(&wizard, |w, v| w.form.company_name = v)} />
                <label>{"Password *"}</label>
                <input type="password" value={form.personal.password.clone()}
                    oninput={bind_field(&wizard, |w, v| w.form.personal.password = v)} />
                <label>{"Confirm Password *"}</label>
                <input type="password" value={form.personal.confirm_password.clone()}
                    oninput={bind_field(&wizard, |w, v| w.form.personal.confirm_password = v)} />
                <button type="submit" class="btn btn-primary">{"Continue"}</button>
            </form>
        },
        Step::Details => html! {
            <form class="card form" onsubmit={on_next}>
                <h2>{"Case Details"}</h2>
                <label>{"Case Type *"}</label>
                <select onchange={bind_select_field(&wizard, |w, v| w.form.case_type = v)}>
                    {options("Select case type", FIRM_CASE_TYPES, &form.case_type)}
                </select>
                <label>{"Describe your case *"}</label>
                <textarea rows="5" value={form.case_description.clone()}
                    placeholder="Please describe your legal matter in detail..."
                    oninput={bind_textarea_field(&wizard, |w, v| w.form.case_description = v)} />
                <div class="form-actions">
                    <button type="button" class="btn btn-outline" onclick={on_back.clone()}>{"Back"}</button>
                    <button type="submit" class="btn btn-primary">{"Continue to Payment"}</button>
                </div>
            </form>
        },
        Step::Payment => html! {
            <form class="card form" onsubmit={on_pay}>
                <h2>{"Registration Payment"}</h2>
                <div class="summary-box">
                    <p>{format!("Registration fee: ₹{}", fee.base)}</p>
                    <p>{format!("GST (18%): ₹{}", fee.gst)}</p>
                    <p class="fee">{format!("Total: ₹{}", fee.total)}</p>
                </div>
                <label>{"Card Number *"}</label>
                <input type="text" inputmode="numeric" placeholder="1234 5678 9012 3456"
                    value={form.payment.card_number.clone()}
                    oninput={bind_field(&wizard, |w, v| w.form.payment.card_number = v)} />
                <div class="grid grid-2">
                    <div>
                        <label>{"Expiry *"}</label>
                        <input type="text" placeholder="MM/YY" value={form.payment.card_expiry.clone()}
                            oninput={bind_field(&wizard, |w, v| w.form.payment.card_expiry = v)} />
                    </div>
                    <div>
                        <label>{"CVV *"}</label>
                        <input type="password" placeholder="123" value={form.payment.card_cvv.clone()}
                            oninput={bind_field(&wizard, |w, v| w.form.payment.card_cvv = v)} />
                    </div>
                </div>
                <label>{"Name on Card *"}</label>
                <input type="text" value={form.payment.card_name.clone()}
                    oninput={bind_field(&wizard, |w, v| w.form.payment.card_name = v)} />
                if *processing {
                    <Spinner label={"Processing payment..."} />
                }
                <div class="form-actions">
                    <button type="button" class="btn btn-outline" onclick={on_back.clone()} disabled={*processing}>{"Back"}</button>
                    <button type="submit" class="btn btn-primary" disabled={*processing}>
                        {if *processing { "Processing...".to_string() } else { format!("Pay ₹{}", fee.total) }}
                    </button>
                </div>
            </form>
        },
        Step::Confirmation => html! {
            <div class="card confirmation">
                <h2>{format!("Welcome to {}!", firm.firm_name)}</h2>
                <p>{"Your registration is complete. The firm will assign a lawyer to your case shortly."}</p>
                <dl>
                    <dt>{"Case Type"}</dt><dd>{&form.case_type}</dd>
                    <dt>{"Amount Paid"}</dt><dd>{format!("₹{}", fee.total)}</dd>
                    <dt>{"Card"}</dt><dd>{form.payment.masked()}</dd>
                </dl>
                <div class="form-actions">
                    <Link<Route> to={Route::FirmClientDashboard} classes="btn btn-primary">{"Go to Dashboard"}</Link<Route>>
                    <Link<Route> to={Route::Login} classes="btn btn-outline">{"Login"}</Link<Route>>
                </div>
            </div>
        },
    };

    html! {
        <div class="page">
            <section class="section narrow">
                <Link<Route> to={Route::FirmProfile { id: firm.id.clone() }} classes="back-link">{"← Back to firm"}</Link<Route>>
                <h1>{format!("Join {}", firm.firm_name)}</h1>
                <p class="muted">{format!("{}, {}", firm.city, firm.state)}</p>
                <StepIndicator steps={Wizard::<FirmJoinForm>::labels()} current={wizard.step.number()} />
                {step_body}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_email_stays_on_payment() {
        let err = ApiError::AlreadyExists("Email already exists".into());
        assert_eq!(
            classify_failure(&err),
            JoinFailure::Stay("Email already registered. Please login instead.".into())
        );
    }

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = ApiError::Server { status: 400, detail: Some("Law firm not accepting clients".into()) };
        assert_eq!(classify_failure(&err), JoinFailure::Stay("Law firm not accepting clients".into()));
    }

    #[test]
    fn silent_failures_still_proceed() {
        assert_eq!(classify_failure(&ApiError::Network("offline".into())), JoinFailure::Proceed);
        assert_eq!(classify_failure(&ApiError::Server { status: 500, detail: None }), JoinFailure::Proceed);
    }
}
