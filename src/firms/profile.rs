use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::rating_badge;
use crate::data::firms::find_firm;
use crate::pages::info::NotFound;
use crate::wizard::firm_registration_fee;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FirmProfileProps {
    pub id: String,
}

#[function_component(FirmProfile)]
pub fn firm_profile(props: &FirmProfileProps) -> Html {
    let Some(firm) = find_firm(&props.id) else {
        log::warn!("no firm with id {}", props.id);
        return html! { <NotFound /> };
    };
    let fee = firm_registration_fee();

    html! {
        <div class="page">
            <section class="section profile">
                <Link<Route> to={Route::BrowseFirms} classes="back-link">{"← All firms"}</Link<Route>>
                <div class="card profile-head">
                    <img class="logo logo-lg" src={firm.logo.clone()} alt={firm.firm_name.clone()} />
                    <div>
                        <h1>
                            {&firm.firm_name}
                            if firm.verified {
                                <span class="badge verified">{"Verified"}</span>
                            }
                        </h1>
                        <p class="muted">{&firm.address}</p>
                        {rating_badge(firm.rating, firm.reviews)}
                    </div>
                    <div class="profile-cta">
                        <p class="fee">{format!("Join for ₹{} + GST", fee.base)}</p>
                        <Link<Route> to={Route::JoinFirm { id: firm.id.clone() }} classes="btn btn-primary btn-lg">
                            {"Join as Client"}
                        </Link<Route>>
                    </div>
                </div>

                <div class="grid grid-4 stats">
                    <div class="card"><strong>{firm.total_lawyers}</strong><p class="muted">{"Lawyers"}</p></div>
                    <div class="card"><strong>{firm.total_staff}</strong><p class="muted">{"Staff"}</p></div>
                    <div class="card"><strong>{firm.cases_handled}</strong><p class="muted">{"Cases Handled"}</p></div>
                    <div class="card"><strong>{firm.established_year}</strong><p class="muted">{"Established"}</p></div>
                </div>

                <div class="grid grid-2">
                    <div class="card">
                        <h2>{"About the Firm"}</h2>
                        <p>{&firm.description}</p>
                        <p class="muted">{&firm.achievements}</p>
                        <h3>{"Practice Areas"}</h3>
                        <div class="tags">
                            { for firm.practice_areas.iter().map(|a| html! { <span class="tag">{a}</span> }) }
                        </div>
                        <h3>{"Services"}</h3>
                        <ul>
                            { for firm.services.iter().map(|s| html! { <li>{s}</li> }) }
                        </ul>
                    </div>
                    <div class="card">
                        <h2>{"Contact"}</h2>
                        <dl>
                            <dt>{"Phone"}</dt><dd>{&firm.phone}</dd>
                            <dt>{"Email"}</dt><dd>{&firm.email}</dd>
                            <dt>{"Website"}</dt><dd>{&firm.website}</dd>
                            <dt>{"Hours"}</dt><dd>{format!("{}, {}", firm.working_days, firm.working_hours)}</dd>
                            <dt>{"Registration"}</dt><dd>{&firm.registration_number}</dd>
                            <dt>{"Consultation"}</dt><dd>{format!("₹{}", firm.consultation_fee)}</dd>
                        </dl>
                    </div>
                </div>
            </section>
        </div>
    }
}
