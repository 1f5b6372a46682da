use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::rating_badge;
use crate::data::lawyers::find_lawyer;
use crate::pages::info::NotFound;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LawyerProfileProps {
    pub id: String,
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        "On request".to_string()
    } else {
        items.join(", ")
    }
}

#[function_component(LawyerProfile)]
pub fn lawyer_profile(props: &LawyerProfileProps) -> Html {
    let Some(lawyer) = find_lawyer(&props.id) else {
        log::warn!("no lawyer with id {}", props.id);
        return html! { <NotFound /> };
    };

    let success_rate = if lawyer.cases_handled == 0 {
        0
    } else {
        lawyer.cases_won * 100 / lawyer.cases_handled
    };

    html! {
        <div class="page">
            <section class="section profile">
                <Link<Route> to={Route::FindLawyer} classes="back-link">{"← Back to search"}</Link<Route>>
                <div class="card profile-head">
                    <img class="avatar avatar-lg" src={lawyer.image.clone()} alt={lawyer.name.clone()} />
                    <div>
                        <h1>
                            {&lawyer.name}
                            if lawyer.verified {
                                <span class="badge verified">{"Verified"}</span>
                            }
                        </h1>
                        <p class="accent">{&lawyer.specialization}</p>
                        <p class="muted">{format!("{} · {}", lawyer.location, lawyer.court)}</p>
                        {rating_badge(lawyer.rating, lawyer.reviews)}
                    </div>
                    <div class="profile-cta">
                        <p class="fee">{lawyer.fee_range()}</p>
                        <Link<Route> to={Route::BookLawyer { id: lawyer.id.clone() }} classes="btn btn-primary btn-lg">
                            {"Book Consultation"}
                        </Link<Route>>
                    </div>
                </div>

                <div class="grid grid-4 stats">
                    <div class="card"><strong>{lawyer.experience}</strong><p class="muted">{"Years Experience"}</p></div>
                    <div class="card"><strong>{lawyer.cases_handled}</strong><p class="muted">{"Cases Handled"}</p></div>
                    <div class="card"><strong>{lawyer.cases_won}</strong><p class="muted">{"Cases Won"}</p></div>
                    <div class="card"><strong>{format!("{}%", success_rate)}</strong><p class="muted">{"Success Rate"}</p></div>
                </div>

                <div class="grid grid-2">
                    <div class="card">
                        <h2>{"About"}</h2>
                        <p>{&lawyer.bio}</p>
                        <h3>{"Education"}</h3>
                        <p class="muted">{&lawyer.education}</p>
                        <h3>{"Also Practices"}</h3>
                        <p class="muted">{list(&lawyer.secondary_specializations)}</p>
                    </div>
                    <div class="card">
                        <h2>{"Details"}</h2>
                        <dl>
                            <dt>{"Bar Council No."}</dt><dd>{&lawyer.bar_council_number}</dd>
                            <dt>{"Languages"}</dt><dd>{list(&lawyer.languages)}</dd>
                            <dt>{"Available"}</dt><dd>{list(&lawyer.availability)}</dd>
                            <dt>{"Consultation"}</dt><dd>{list(&lawyer.consultation_modes)}</dd>
                            <dt>{"Email"}</dt><dd>{&lawyer.email}</dd>
                            <dt>{"Phone"}</dt><dd>{&lawyer.phone}</dd>
                            <dt>{"On platform since"}</dt><dd>{&lawyer.joined_date}</dd>
                        </dl>
                    </div>
                </div>
            </section>
        </div>
    }
}
