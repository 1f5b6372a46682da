use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::{LawFirm, Lawyer};
use crate::Route;

/// "★ 4.6" with review count.
pub fn rating_badge(rating: f32, reviews: u32) -> Html {
    html! {
        <span class="rating">
            {format!("★ {:.1}", rating)}
            <span class="muted">{format!(" ({} reviews)", reviews)}</span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct LawyerCardProps {
    pub lawyer: Lawyer,
}

#[function_component(LawyerCard)]
pub fn lawyer_card(props: &LawyerCardProps) -> Html {
    let lawyer = &props.lawyer;

    html! {
        <div class="card lawyer-card">
            <div class="card-head">
                <img class="avatar" src={lawyer.image.clone()} alt={lawyer.name.clone()} />
                <div>
                    <h3>
                        {&lawyer.name}
                        if lawyer.verified {
                            <span class="badge verified">{"Verified"}</span>
                        }
                    </h3>
                    <p class="accent">{&lawyer.specialization}</p>
                    <p class="muted">{&lawyer.location}</p>
                </div>
            </div>
            <div class="card-stats">
                {rating_badge(lawyer.rating, lawyer.reviews)}
                <span>{format!("{} yrs exp", lawyer.experience)}</span>
                <span>{format!("{} cases won", lawyer.cases_won)}</span>
            </div>
            <p class="muted small">{&lawyer.court}</p>
            <p class="fee">{lawyer.fee_range()}</p>
            <div class="card-actions">
                <Link<Route> to={Route::LawyerProfile { id: lawyer.id.clone() }} classes="btn btn-outline">
                    {"View Profile"}
                </Link<Route>>
                <Link<Route> to={Route::BookLawyer { id: lawyer.id.clone() }} classes="btn btn-primary">
                    {"Book Consultation"}
                </Link<Route>>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FirmCardProps {
    pub firm: LawFirm,
}

#[function_component(FirmCard)]
pub fn firm_card(props: &FirmCardProps) -> Html {
    let firm = &props.firm;
    let areas: Vec<&String> = firm.practice_areas.iter().take(3).collect();
    let more = firm.practice_areas.len().saturating_sub(3);

    html! {
        <div class="card firm-card">
            <div class="card-head">
                <img class="logo" src={firm.logo.clone()} alt={firm.firm_name.clone()} />
                <div>
                    <h3>
                        {&firm.firm_name}
                        if firm.featured {
                            <span class="badge featured">{"Featured"}</span>
                        }
                    </h3>
                    <p class="muted">{format!("{}, {}", firm.city, firm.state)}</p>
                </div>
            </div>
            <div class="tags">
                { for areas.iter().map(|a| html! { <span class="tag">{a.as_str()}</span> }) }
                if more > 0 {
                    <span class="tag muted">{format!("+{} more", more)}</span>
                }
            </div>
            <div class="card-stats">
                {rating_badge(firm.rating, firm.reviews)}
                <span>{format!("{} lawyers", firm.total_lawyers)}</span>
                <span>{format!("Est. {}", firm.established_year)}</span>
            </div>
            <div class="card-actions">
                <Link<Route> to={Route::FirmProfile { id: firm.id.clone() }} classes="btn btn-outline">
                    {"View Firm"}
                </Link<Route>>
                <Link<Route> to={Route::JoinFirm { id: firm.id.clone() }} classes="btn btn-primary">
                    {"Join Firm"}
                </Link<Route>>
            </div>
        </div>
    }
}
