use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::components::form::{bind_field, bind_textarea_field};
use crate::components::layout::Footer;
use crate::components::toast::use_toaster;
use crate::models::WaitlistRequest;
use crate::validation::{any_blank, validate_email};

#[derive(Clone, Default, PartialEq)]
struct ContactForm {
    full_name: String,
    email: String,
    message: String,
}

impl ContactForm {
    fn to_request(&self) -> WaitlistRequest {
        WaitlistRequest {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: Some(self.message.trim().to_string()).filter(|m| !m.is_empty()),
        }
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let loading = use_state(|| false);
    let toaster = use_toaster();

    let onsubmit = {
        let form = form.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            if any_blank(&[&form.full_name, &form.email]) {
                toaster.error("Please fill all required fields");
                return;
            }
            if let Err(err) = validate_email(&form.email) {
                toaster.error(err.to_string());
                return;
            }

            loading.set(true);
            let request = form.to_request();
            let form = form.clone();
            let loading = loading.clone();
            let toaster = toaster.clone();
            spawn_local(async move {
                match api::join_waitlist(&request).await {
                    Ok(_) => {
                        toaster.success("Thank you! We'll be in touch soon.");
                        form.set(ContactForm::default());
                    }
                    Err(ApiError::AlreadyExists(_)) => {
                        toaster.error("You're already on our waitlist!");
                    }
                    Err(e) => {
                        log!("waitlist signup failed:", e.to_string());
                        toaster.error("Something went wrong. Please try again.");
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="page">
            <section class="section grid grid-2">
                <div>
                    <h1>{"Get in Touch"}</h1>
                    <p class="lead">{"Join the waitlist or send us a question. We reply within one working day."}</p>
                    <div class="contact-lines">
                        <p><strong>{"Email: "}</strong>{"support@nyaaysathi.com"}</p>
                        <p><strong>{"Office: "}</strong>{"New Delhi, India"}</p>
                    </div>
                </div>
                <form class="card form" onsubmit={onsubmit}>
                    <label>{"Full Name *"}</label>
                    <input
                        type="text"
                        value={form.full_name.clone()}
                        oninput={bind_field(&form, |f, v| f.full_name = v)}
                        placeholder="Your name"
                    />
                    <label>{"Email *"}</label>
                    <input
                        type="email"
                        value={form.email.clone()}
                        oninput={bind_field(&form, |f, v| f.email = v)}
                        placeholder="you@example.com"
                    />
                    <label>{"Message"}</label>
                    <textarea
                        rows="4"
                        value={form.message.clone()}
                        oninput={bind_textarea_field(&form, |f, v| f.message = v)}
                        placeholder="How can we help?"
                    />
                    <button type="submit" class="btn btn-primary" disabled={*loading}>
                        {if *loading { "Sending..." } else { "Join Waitlist" }}
                    </button>
                </form>
            </section>
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_message_is_omitted() {
        let form = ContactForm {
            full_name: " Priya ".into(),
            email: "priya@mail.in".into(),
            message: "   ".into(),
        };
        let req = form.to_request();
        assert_eq!(req.full_name, "Priya");
        assert_eq!(req.message, None);
    }
}
