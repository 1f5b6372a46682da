use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::components::cards::LawyerCard;
use crate::components::form::{on_input, on_select, options};
use crate::components::layout::Spinner;
use crate::components::pagination::Pagination;
use crate::config::LAWYERS_PER_PAGE;
use crate::data::lawyers::LAWYERS;
use crate::data::locations::{
    all_courts, cities_for_state, courts_for_state, lawyer_cities, lawyer_states, SPECIALIZATIONS,
};
use crate::models::PlatformLawyer;
use crate::search::{non_empty, parse_rating, search_lawyers, LawyerFilters, Page};
use crate::Route;

const RATING_OPTIONS: &[&str] = &["4.5", "4.0", "3.5"];

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[function_component(FindLawyerManual)]
pub fn find_lawyer_manual() -> Html {
    let initial_query = use_search_param("q".to_string());
    let query = use_state(|| initial_query.clone().unwrap_or_default());
    let filters = use_state(LawyerFilters::default);
    let page_number = use_state(|| 1usize);
    let platform = use_state(Vec::<PlatformLawyer>::new);
    let platform_loading = use_state(|| true);

    {
        let platform = platform.clone();
        let platform_loading = platform_loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match api::fetch_lawyers().await {
                        Ok(list) => {
                            log::info!("loaded {} platform lawyers", list.len());
                            platform.set(list);
                        }
                        Err(e) => log::warn!("platform lawyers unavailable: {}", e),
                    }
                    platform_loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    // Any change to the query or filters starts again from page one.
    let update_filters = {
        let filters = filters.clone();
        let page_number = page_number.clone();
        move |change: Box<dyn Fn(&mut LawyerFilters)>| {
            let mut next = (*filters).clone();
            change(&mut next);
            filters.set(next);
            page_number.set(1);
        }
    };

    let on_query = {
        let query = query.clone();
        let page_number = page_number.clone();
        on_input(move |v| {
            query.set(v);
            page_number.set(1);
        })
    };

    let on_state = {
        let update = update_filters.clone();
        on_select(move |v| update(Box::new(move |f| f.set_state(non_empty(v.clone())))))
    };
    let on_city = {
        let update = update_filters.clone();
        on_select(move |v| update(Box::new(move |f| f.city = non_empty(v.clone()))))
    };
    let on_court = {
        let update = update_filters.clone();
        on_select(move |v| update(Box::new(move |f| f.court = non_empty(v.clone()))))
    };
    let on_specialization = {
        let update = update_filters.clone();
        on_select(move |v| update(Box::new(move |f| f.specialization = non_empty(v.clone()))))
    };
    let on_rating = {
        let update = update_filters.clone();
        on_select(move |v| update(Box::new(move |f| f.min_rating = parse_rating(&v))))
    };

    let on_reset = {
        let query = query.clone();
        let filters = filters.clone();
        let page_number = page_number.clone();
        Callback::from(move |_: MouseEvent| {
            query.set(String::new());
            filters.set(LawyerFilters::default());
            page_number.set(1);
        })
    };

    let on_page = {
        let page_number = page_number.clone();
        Callback::from(move |n: usize| {
            page_number.set(n);
            scroll_to_top();
        })
    };

    let results = search_lawyers(&LAWYERS, &query, &filters);
    let page = Page::new(results.len(), LAWYERS_PER_PAGE, *page_number);

    let state = filters.state.clone().unwrap_or_default();
    let (cities, courts): (Vec<&str>, Vec<&str>) = if state.is_empty() {
        (lawyer_cities(), all_courts())
    } else {
        (cities_for_state(&state).to_vec(), courts_for_state(&state).to_vec())
    };
    let rating_value = filters.min_rating.map(|r| format!("{:.1}", r)).unwrap_or_default();

    html! {
        <div class="page">
            <section class="section">
                <div class="page-header">
                    <div>
                        <h1>{"Find a Lawyer"}</h1>
                        <p class="muted">{"Search verified advocates by location, court and practice area."}</p>
                    </div>
                    <Link<Route> to={Route::FindLawyerAi} classes="btn btn-outline">{"Try AI Finder"}</Link<Route>>
                </div>

                <div class="filters card">
                    <input
                        class="search-input"
                        type="text"
                        value={(*query).clone()}
                        oninput={on_query}
                        placeholder="Search by name, specialization or city"
                    />
                    <div class="filter-row">
                        <select onchange={on_state}>
                            {options("All States", &lawyer_states(), &state)}
                        </select>
                        <select onchange={on_city}>
                            {options("All Cities", &cities, filters.city.as_deref().unwrap_or_default())}
                        </select>
                        <select onchange={on_court}>
                            {options("All Courts", &courts, filters.court.as_deref().unwrap_or_default())}
                        </select>
                        <select onchange={on_specialization}>
                            {options("All Specializations", SPECIALIZATIONS, filters.specialization.as_deref().unwrap_or_default())}
                        </select>
                        <select onchange={on_rating}>
                            {options("Any Rating", RATING_OPTIONS, &rating_value)}
                        </select>
                        <button class="btn btn-outline" onclick={on_reset} disabled={query.is_empty() && filters.is_empty()}>
                            {"Reset"}
                        </button>
                    </div>
                </div>

                <p class="muted result-summary">{page.summary()}</p>

                if results.is_empty() {
                    <div class="empty-state card">
                        <h3>{"No lawyers match these filters"}</h3>
                        <p class="muted">{"Try removing a filter or describe your case to the AI finder."}</p>
                    </div>
                } else {
                    <div class="grid grid-3">
                        {
                            page.slice(&results).iter().map(|lawyer| html! {
                                <LawyerCard key={lawyer.id.clone()} lawyer={(*lawyer).clone()} />
                            }).collect::<Html>()
                        }
                    </div>
                }
                <Pagination page={page} on_change={on_page} />
            </section>

            <section class="section">
                <h2>{"Lawyers on Nyaay Sathi"}</h2>
                <p class="muted">{"Advocates who have registered directly with the platform."}</p>
                if *platform_loading {
                    <Spinner label={"Loading registered lawyers..."} />
                } else if platform.is_empty() {
                    <p class="muted">{"No registered lawyers yet."}</p>
                } else {
                    <div class="grid grid-3">
                        {
                            platform.iter().map(|l| html! {
                                <div key={l.id.clone()} class="card">
                                    <h3>{&l.full_name}</h3>
                                    <p class="accent">{l.specialization.clone().unwrap_or_else(|| "General Practice".to_string())}</p>
                                    if let Some(city) = &l.city {
                                        <p class="muted">{city}</p>
                                    }
                                    <p class="muted small">{&l.email}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                }
            </section>
        </div>
    }
}
