use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <h4>{"Nyaay Sathi"}</h4>
                    <p class="muted">{"Find the right lawyer or law firm across India."}</p>
                </div>
                <div>
                    <h4>{"Clients"}</h4>
                    <Link<Route> to={Route::FindLawyer}>{"Find a Lawyer"}</Link<Route>>
                    <Link<Route> to={Route::BrowseFirms}>{"Browse Law Firms"}</Link<Route>>
                    <Link<Route> to={Route::QuickChat}>{"Quick Legal Chat"}</Link<Route>>
                </div>
                <div>
                    <h4>{"Company"}</h4>
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Features}>{"Features"}</Link<Route>>
                    <Link<Route> to={Route::HowItWorks}>{"How It Works"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
            </div>
            <p class="muted small">{"© 2025 Nyaay Sathi. Information on this site is not legal advice."}</p>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepIndicatorProps {
    pub steps: Vec<(usize, &'static str)>,
    pub current: usize,
}

#[function_component(StepIndicator)]
pub fn step_indicator(props: &StepIndicatorProps) -> Html {
    html! {
        <div class="steps">
            {
                props.steps.iter().map(|(n, label)| {
                    let state = if *n < props.current {
                        "step done"
                    } else if *n == props.current {
                        "step active"
                    } else {
                        "step"
                    };
                    html! {
                        <div class={state}>
                            <span class="step-number">{n}</span>
                            <span class="step-label">{*label}</span>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub label: Option<String>,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="spinner-wrap">
            <span class="loading-spinner"></span>
            if let Some(label) = &props.label {
                <span class="muted">{label}</span>
            }
        </div>
    }
}
