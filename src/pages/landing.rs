use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Footer;
use crate::config::{FIRM_COUNT, LAWYER_COUNT};
use crate::Route;

struct Service {
    title: &'static str,
    body: &'static str,
    cta: Option<(&'static str, Route)>,
}

fn services() -> Vec<Service> {
    vec![
        Service {
            title: "AI Legal Assistant",
            body: "Get instant answers to your legal questions in simple language. Structured, easy-to-understand guidance 24/7.",
            cta: Some(("Try AI Chat", Route::QuickChat)),
        },
        Service {
            title: "Book Consultations",
            body: "Schedule appointments with verified lawyers at your convenience. Manage all your consultations in one place.",
            cta: Some(("Book Now", Route::FindLawyer)),
        },
        Service {
            title: "Case Tracking",
            body: "Monitor your case status, timelines, and next steps with an intuitive dashboard.",
            cta: None,
        },
        Service {
            title: "Document Management",
            body: "Keep every filing, notice and agreement for your matter organised and within reach.",
            cta: None,
        },
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="page landing">
            <section class="hero">
                <h1>
                    {"Simplify Your Legal Journey with "}
                    <span class="accent">{"AI-Powered"}</span>
                    {" Guidance"}
                </h1>
                <p class="lead">
                    {"Nyaay Sathi helps you understand your case, track progress, and connect with verified lawyers, all in one platform."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::FindLawyer} classes="btn btn-primary btn-lg">{"Find a Lawyer"}</Link<Route>>
                    <Link<Route> to={Route::BrowseFirms} classes="btn btn-outline btn-lg">{"Browse Law Firms"}</Link<Route>>
                </div>
                <div class="hero-links">
                    <Link<Route> to={Route::FindLawyerAi}>{"Let AI pick a lawyer →"}</Link<Route>>
                    <Link<Route> to={Route::FindFirmAi}>{"Let AI pick a firm →"}</Link<Route>>
                </div>
            </section>

            <section class="section">
                <h2>{"Why Choose Nyaay Sathi?"}</h2>
                <p class="muted">{"Access powerful tools designed to make legal processes simple and transparent"}</p>
                <div class="grid grid-2">
                    {
                        services().into_iter().map(|s| html! {
                            <div class="card">
                                <h3>{s.title}</h3>
                                <p class="muted">{s.body}</p>
                                if let Some((label, to)) = s.cta {
                                    <Link<Route> to={to} classes="btn btn-primary">{label}</Link<Route>>
                                }
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="section stats">
                <div><strong>{format!("{}+", LAWYER_COUNT)}</strong><p class="muted">{"Verified Lawyers"}</p></div>
                <div><strong>{format!("{}+", FIRM_COUNT)}</strong><p class="muted">{"Law Firms"}</p></div>
                <div><strong>{"24/7"}</strong><p class="muted">{"AI Support"}</p></div>
                <div><strong>{"98%"}</strong><p class="muted">{"Satisfaction Rate"}</p></div>
            </section>

            <section class="section cta">
                <h2>{"Ready to Get Started?"}</h2>
                <p class="muted">{"Create a free account or talk to our assistant without signing up."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Signup} classes="btn btn-primary">{"Create Account"}</Link<Route>>
                    <Link<Route> to={Route::QuickChat} classes="btn btn-outline">{"Ask a Quick Question"}</Link<Route>>
                </div>
            </section>
            <Footer />
        </div>
    }
}
