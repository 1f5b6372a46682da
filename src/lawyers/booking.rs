use chrono::NaiveDate;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{self, ApiError};
use crate::components::form::{bind_field, bind_textarea_field};
use crate::components::layout::{Spinner, StepIndicator};
use crate::components::toast::use_toaster;
use crate::config::PAYMENT_DELAY_MS;
use crate::data::lawyers::find_lawyer;
use crate::models::{AuthResponse, Lawyer, UserRole};
use crate::pages::info::NotFound;
use crate::session;
use crate::wizard::{available_dates, date_label, time_slots, today_in_india, BookingForm, ConsultationMode, Step, Wizard};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BookLawyerProps {
    pub id: String,
}

#[derive(Debug, PartialEq)]
enum Registration {
    Created,
    /// The email already has an account; the booking still goes through.
    Existing,
    Failed,
}

impl Registration {
    fn from_result(result: &Result<AuthResponse, ApiError>) -> Self {
        match result {
            Ok(_) => Registration::Created,
            Err(ApiError::AlreadyExists(_)) => Registration::Existing,
            Err(_) => Registration::Failed,
        }
    }

    fn proceeds(&self) -> bool {
        !matches!(self, Registration::Failed)
    }

    fn message(&self) -> &'static str {
        match self {
            Registration::Created => "Payment successful! Account created.",
            Registration::Existing => "Payment successful!",
            Registration::Failed => "Account creation failed. Please try again.",
        }
    }
}

/// Registers the client, then records the booking when registration went through.
async fn register_and_book(form: &BookingForm, lawyer: &Lawyer) -> Registration {
    let result = api::register(&form.register_request()).await;
    let outcome = Registration::from_result(&result);
    match result {
        Ok(auth) => session::save_auth(Some(&auth.token), &auth.user, UserRole::Client),
        Err(e) if outcome.proceeds() => log::info!("booking for existing account: {}", e),
        Err(e) => {
            log::warn!("registration before booking failed: {}", e);
            return outcome;
        }
    }

    match api::create_guest_booking(&form.booking_request(&lawyer.id, lawyer.fee_min)).await {
        Ok(resp) => {
            if let Some(id) = resp.id {
                session::remember_booking(&id);
            }
        }
        Err(e) => log::warn!("booking record not saved: {}", e),
    }
    outcome
}

#[function_component(BookLawyer)]
pub fn book_lawyer(props: &BookLawyerProps) -> Html {
    let wizard = use_state(Wizard::<BookingForm>::default);
    let processing = use_state(|| false);
    let toaster = use_toaster();
    let dates = use_memo(|_| available_dates(today_in_india()), ());

    let Some(lawyer) = find_lawyer(&props.id) else {
        return html! { <NotFound /> };
    };

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
                let outcome = register_and_book(&done.form, lawyer).await;
                if !outcome.proceeds() {
                    toaster.error(outcome.message());
                } else if done.complete().is_ok() {
                    toaster.success(outcome.message());
                    wizard.set(done);
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
                <label>{"Password *"}</label>
                <input type="password" value={form.personal.password.clone()}
                    oninput={bind_field(&wizard, |w, v| w.form.personal.password = v)} />
                <label>{"Confirm Password *"}</label>
                <input type="password" value={form.personal.confirm_password.clone()}
                    oninput={bind_field(&wizard, |w, v| w.form.personal.confirm_password = v)} />
                <p class="muted small">{"An account is created so you can manage this booking later."}</p>
                <button type="submit" class="btn btn-primary">{"Continue"}</button>
            </form>
        },
        Step::Details => {
            let pick_date = |date: NaiveDate| {
                let wizard = wizard.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = (*wizard).clone();
                    next.form.date = Some(date);
                    wizard.set(next);
                })
            };
            let pick_time = |slot: String| {
                let wizard = wizard.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = (*wizard).clone();
                    next.form.time = Some(slot.clone());
                    wizard.set(next);
                })
            };
            let pick_mode = |mode: ConsultationMode| {
                let wizard = wizard.clone();
                Callback::from(move |_: MouseEvent| {
                    let mut next = (*wizard).clone();
                    next.form.mode = mode;
                    wizard.set(next);
                })
            };
            html! {
                <form class="card form" onsubmit={on_next}>
                    <h2>{"Choose a Slot"}</h2>
                    <label>{"Consultation Type"}</label>
                    <div class="chip-row">
                        {
                            ConsultationMode::ALL.iter().map(|m| html! {
                                <button type="button"
                                    class={classes!("chip", (form.mode == *m).then(|| "active"))}
                                    onclick={pick_mode(*m)}>
                                    {m.label()}
                                </button>
                            }).collect::<Html>()
                        }
                    </div>
                    <label>{"Date *"}</label>
                    <div class="chip-row">
                        {
                            dates.iter().map(|d| html! {
                                <button type="button"
                                    class={classes!("chip", (form.date == Some(*d)).then(|| "active"))}
                                    onclick={pick_date(*d)}>
                                    {date_label(*d)}
                                </button>
                            }).collect::<Html>()
                        }
                    </div>
                    <label>{"Time *"}</label>
                    <div class="chip-row">
                        {
                            time_slots().into_iter().map(|slot| {
                                let active = form.time.as_deref() == Some(slot.as_str());
                                html! {
                                    <button type="button"
                                        class={classes!("chip", active.then(|| "active"))}
                                        onclick={pick_time(slot.clone())}>
                                        {slot}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    <label>{"Briefly describe your matter"}</label>
                    <textarea rows="3" value={form.case_description.clone()}
                        oninput={bind_textarea_field(&wizard, |w, v| w.form.case_description = v)} />
                    <div class="form-actions">
                        <button type="button" class="btn btn-outline" onclick={on_back.clone()}>{"Back"}</button>
                        <button type="submit" class="btn btn-primary">{"Continue to Payment"}</button>
                    </div>
                </form>
            }
        }
        Step::Payment => html! {
            <form class="card form" onsubmit={on_pay}>
                <h2>{"Payment"}</h2>
                <div class="summary-box">
                    <p>{format!("{} with {}", form.mode.label(), lawyer.name)}</p>
                    <p class="muted">
                        {format!(
                            "{} at {}",
                            form.date.map(date_label).unwrap_or_default(),
                            form.time.clone().unwrap_or_default()
                        )}
                    </p>
                    <p class="fee">{format!("Consultation fee: ₹{}", lawyer.fee_min)}</p>
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
                        {if *processing { "Processing...".to_string() } else { format!("Pay ₹{}", lawyer.fee_min) }}
                    </button>
                </div>
                <p class="muted small">{"Demo checkout. No card is charged."}</p>
            </form>
        },
        Step::Confirmation => html! {
            <div class="card confirmation">
                <h2>{"Booking Confirmed!"}</h2>
                <p>{format!("Your consultation with {} is booked.", lawyer.name)}</p>
                <dl>
                    <dt>{"Date"}</dt><dd>{form.date.map(date_label).unwrap_or_default()}</dd>
                    <dt>{"Time"}</dt><dd>{form.time.clone().unwrap_or_default()}</dd>
                    <dt>{"Mode"}</dt><dd>{form.mode.label()}</dd>
                    <dt>{"Paid with"}</dt><dd>{form.payment.masked()}</dd>
                </dl>
                <p class="muted">{format!("A confirmation has been sent to {}.", form.personal.email)}</p>
                <div class="form-actions">
                    <Link<Route> to={Route::FindLawyer} classes="btn btn-outline">{"Find Another Lawyer"}</Link<Route>>
                    <Link<Route> to={Route::Landing} classes="btn btn-primary">{"Go Home"}</Link<Route>>
                </div>
            </div>
        },
    };

    html! {
        <div class="page">
            <section class="section narrow">
                <Link<Route> to={Route::LawyerProfile { id: lawyer.id.clone() }} classes="back-link">
                    {"← Back to profile"}
                </Link<Route>>
                <h1>{format!("Book a Consultation with {}", lawyer.name)}</h1>
                <p class="muted">{format!("{} · {}", lawyer.specialization, lawyer.location)}</p>
                <StepIndicator steps={Wizard::<BookingForm>::labels()} current={wizard.step.number()} />
                {step_body}
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StoredUser;

    fn failed(err: ApiError) -> Registration {
        Registration::from_result(&Err(err))
    }

    #[test]
    fn new_account_proceeds_to_confirmation() {
        let ok = Ok(AuthResponse { token: "tok".into(), user: StoredUser::default() });
        let outcome = Registration::from_result(&ok);
        assert_eq!(outcome, Registration::Created);
        assert!(outcome.proceeds());
        assert_eq!(outcome.message(), "Payment successful! Account created.");
    }

    #[test]
    fn existing_account_still_books() {
        let outcome = failed(ApiError::AlreadyExists("User with this email already exists".into()));
        assert_eq!(outcome, Registration::Existing);
        assert!(outcome.proceeds());
        assert_eq!(outcome.message(), "Payment successful!");
    }

    #[test]
    fn other_failures_stay_on_payment() {
        let cases = [
            ApiError::Server { status: 400, detail: Some("Invalid phone".into()) },
            ApiError::Network("offline".into()),
            ApiError::Server { status: 500, detail: None },
        ];
        for err in cases {
            let outcome = failed(err);
            assert_eq!(outcome, Registration::Failed);
            assert!(!outcome.proceeds());
            assert_eq!(outcome.message(), "Account creation failed. Please try again.");
        }
    }
}
