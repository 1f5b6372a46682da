use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::cards::FirmCard;
use crate::components::form::{on_input, on_select, options};
use crate::components::pagination::Pagination;
use crate::config::FIRMS_PER_PAGE;
use crate::data::firms::{firm_cities, firm_states, LAW_FIRMS, PRACTICE_AREAS};
use crate::search::{non_empty, parse_rating, search_firms, FirmFilters, Page};
use crate::Route;

#[function_component(BrowseFirms)]
pub fn browse_firms() -> Html {
    let query = use_state(String::new);
    let filters = use_state(FirmFilters::default);
    let page_number = use_state(|| 1usize);

    let update = {
        let filters = filters.clone();
        let page_number = page_number.clone();
        move |change: Box<dyn Fn(&mut FirmFilters)>| {
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
        let update = update.clone();
        on_select(move |v| update(Box::new(move |f| f.set_state(non_empty(v.clone())))))
    };
    let on_city = {
        let update = update.clone();
        on_select(move |v| update(Box::new(move |f| f.city = non_empty(v.clone()))))
    };
    let on_area = {
        let update = update.clone();
        on_select(move |v| update(Box::new(move |f| f.practice_area = non_empty(v.clone()))))
    };
    let on_rating = on_select(move |v| update(Box::new(move |f| f.min_rating = parse_rating(&v))));

    let on_reset = {
        let query = query.clone();
        let filters = filters.clone();
        let page_number = page_number.clone();
        Callback::from(move |_: MouseEvent| {
            query.set(String::new());
            filters.set(FirmFilters::default());
            page_number.set(1);
        })
    };

    let on_page = {
        let page_number = page_number.clone();
        Callback::from(move |n: usize| page_number.set(n))
    };

    let results = search_firms(&LAW_FIRMS, &query, &filters);
    let page = Page::new(results.len(), FIRMS_PER_PAGE, *page_number);
    let state = filters.state.clone().unwrap_or_default();
    let cities = firm_cities(filters.state.as_deref());
    let rating_value = filters.min_rating.map(|r| format!("{:.1}", r)).unwrap_or_default();

    html! {
        <div class="page">
            <section class="section">
                <div class="page-header">
                    <div>
                        <h1>{"Browse Law Firms"}</h1>
                        <p class="muted">{"Established firms with teams across practice areas."}</p>
                    </div>
                    <div class="hero-actions">
                        <Link<Route> to={Route::FindFirmAi} classes="btn btn-outline">{"Ask AI to Match"}</Link<Route>>
                        <Link<Route> to={Route::FirmClientApplication} classes="btn btn-outline">{"Apply as Client"}</Link<Route>>
                    </div>
                </div>

                <div class="filters card">
                    <input
                        class="search-input"
                        type="text"
                        value={(*query).clone()}
                        oninput={on_query}
                        placeholder="Search firms by name, city or practice area"
                    />
                    <div class="filter-row">
                        <select onchange={on_state}>{options("All States", &firm_states(), &state)}</select>
                        <select onchange={on_city}>
                            {options("All Cities", &cities, filters.city.as_deref().unwrap_or_default())}
                        </select>
                        <select onchange={on_area}>
                            {options("All Practice Areas", PRACTICE_AREAS, filters.practice_area.as_deref().unwrap_or_default())}
                        </select>
                        <select onchange={on_rating}>
                            {options("Any Rating", &["4.5", "4.0", "3.5"], &rating_value)}
                        </select>
                        <button class="btn btn-outline" onclick={on_reset} disabled={query.is_empty() && filters.is_empty()}>
                            {"Reset"}
                        </button>
                    </div>
                </div>

                <p class="muted result-summary">{page.summary()}</p>
                if results.is_empty() {
                    <div class="empty-state card">
                        <h3>{"No firms match your search"}</h3>
                        <p class="muted">{"Clear a filter or try the AI matcher."}</p>
                    </div>
                } else {
                    <div class="grid grid-3">
                        {
                            page.slice(&results).iter().map(|firm| html! {
                                <FirmCard key={firm.id.clone()} firm={(*firm).clone()} />
                            }).collect::<Html>()
                        }
                    </div>
                }
                <Pagination page={page} on_change={on_page} />
            </section>
        </div>
    }
}
