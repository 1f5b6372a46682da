use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Footer;
use crate::Route;

const FEATURES: &[(&str, &str)] = &[
    ("AI Legal Chatbot", "Get instant answers to your legal questions in simple, structured language. Available 24/7 to guide you through complex legal concepts."),
    ("Case Tracking", "Monitor your case status, stage, and timelines in real-time. Never miss an important update or deadline."),
    ("Document Management", "Securely upload, organize, and access all your legal documents from anywhere."),
    ("Consultation Booking", "Schedule appointments with verified lawyers at your convenience. Manage all consultations in one calendar."),
    ("Client Management", "Lawyers can manage multiple clients, track cases, and maintain professional communication efficiently."),
    ("Automated Updates", "Clients receive notifications about case progress, upcoming hearings, and important deadlines."),
    ("Case Analytics", "Get insights into case progress, success patterns, and recommendations for next steps."),
    ("24/7 Availability", "Access your dashboard, documents, and AI assistant any time, from any device."),
];

const STEPS: &[(&str, &str)] = &[
    ("Create Account", "Sign up in 30 seconds with email or phone"),
    ("Describe Your Case", "Tell us about your legal needs in simple words"),
    ("Get AI Analysis", "Our assistant explains your situation"),
    ("Find Lawyers", "Browse matched lawyers or let AI recommend"),
    ("Book Consultation", "Schedule a video call or in-person meeting"),
    ("Get Representation", "Work with your lawyer to resolve your case"),
];

const ADVANTAGES: &[(&str, &str)] = &[
    ("Verified Lawyers", "All lawyers are bar council verified"),
    ("Data Security", "Your case details stay private"),
    ("24/7 AI Support", "Get answers anytime, anywhere"),
    ("Client First", "Your satisfaction is our priority"),
    ("Fast Response", "Connect with lawyers within hours"),
];

const FAQ: &[(&str, &str)] = &[
    ("Is the AI chat free?", "Yes. Quick questions through the guest chat need no account."),
    ("How are lawyers verified?", "Every lawyer lists a bar council enrolment number that we check before they appear in search."),
    ("Can I join a law firm as a client?", "Yes. Pick a firm, complete the short signup and pay the one-time registration fee to get a case dashboard."),
    ("What does a consultation cost?", "Each lawyer sets a fee range, shown on their profile before you book."),
];

fn titled_grid(items: &[(&str, &str)], numbered: bool) -> Html {
    html! {
        <div class="grid grid-3">
            {
                items.iter().enumerate().map(|(i, (title, body))| html! {
                    <div class="card">
                        if numbered {
                            <span class="step-number">{i + 1}</span>
                        }
                        <h3>{*title}</h3>
                        <p class="muted">{*body}</p>
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page">
            <section class="section narrow">
                <h1>{"About Nyaay Sathi"}</h1>
                <p class="lead">
                    {"Nyaay Sathi (\"companion in justice\") makes legal help in India easier to find. We connect people with verified lawyers and established law firms, and explain legal situations in plain language."}
                </p>
                <h2>{"Our Mission"}</h2>
                <p>
                    {"Legal problems are stressful enough. Finding the right advocate should not be. We bring lawyer profiles, firm practice areas, fees and availability into one place so you can decide quickly and with confidence."}
                </p>
                <h2>{"What We Offer"}</h2>
                <ul>
                    <li>{"Search lawyers by state, city, court, specialization and rating"}</li>
                    <li>{"Compare law firms by practice area and experience"}</li>
                    <li>{"Book consultations by video, phone or in person"}</li>
                    <li>{"Track your case with a firm-client dashboard"}</li>
                </ul>
                <Link<Route> to={Route::Contact} classes="btn btn-primary">{"Get in Touch"}</Link<Route>>
            </section>
            <Footer />
        </div>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <div class="page">
            <section class="section">
                <h1>{"Powerful Features"}</h1>
                <p class="muted">{"Everything you need to manage a legal matter from first question to final hearing."}</p>
                {titled_grid(FEATURES, false)}
            </section>
            <Footer />
        </div>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <div class="page">
            <section class="section">
                <h1>{"How It Works"}</h1>
                <p class="muted">{"Get legal help in 6 simple steps"}</p>
                {titled_grid(STEPS, true)}
            </section>
            <section class="section">
                <h2>{"The Nyaay Sathi Advantage"}</h2>
                {titled_grid(ADVANTAGES, false)}
            </section>
            <section class="section narrow">
                <h2>{"Frequently Asked Questions"}</h2>
                {
                    FAQ.iter().enumerate().map(|(i, (q, a))| {
                        let is_open = *open == Some(i);
                        let toggle = {
                            let open = open.clone();
                            Callback::from(move |_: MouseEvent| {
                                open.set(if is_open { None } else { Some(i) });
                            })
                        };
                        html! {
                            <div class="faq-item">
                                <button class="faq-question" onclick={toggle}>
                                    {*q}
                                    <span>{if is_open { "−" } else { "+" }}</span>
                                </button>
                                if is_open {
                                    <p class="faq-answer muted">{*a}</p>
                                }
                            </div>
                        }
                    }).collect::<Html>()
                }
            </section>
            <section class="section cta">
                <h2>{"Ready to Get Started?"}</h2>
                <div class="hero-actions">
                    <Link<Route> to={Route::FindLawyer} classes="btn btn-primary">{"Find a Lawyer"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="btn btn-outline">{"Need More Help?"}</Link<Route>>
                </div>
            </section>
            <Footer />
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page centered">
            <h1>{"404"}</h1>
            <p class="muted">{"The page you are looking for does not exist."}</p>
            <Link<Route> to={Route::Landing} classes="btn btn-primary">{"Back to Home"}</Link<Route>>
        </div>
    }
}
