use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod models;
mod validation;
mod search;
mod matcher;
mod wizard;
mod api;
mod session;
mod data {
    pub mod locations;
    pub mod lawyers;
    pub mod firms;
    pub mod case_updates;
}
mod components {
    pub mod toast;
    pub mod cards;
    pub mod pagination;
    pub mod layout;
    pub mod form;
}
mod pages {
    pub mod landing;
    pub mod info;
    pub mod contact;
    pub mod quick_chat;
}
mod lawyers {
    pub mod find_manual;
    pub mod find_ai;
    pub mod profile;
    pub mod booking;
}
mod firms {
    pub mod browse;
    pub mod find_ai;
    pub mod profile;
    pub mod join;
    pub mod application;
    pub mod dashboard;
}
mod auth {
    pub mod login;
    pub mod signup;
}

use pages::{
    landing::Landing,
    info::{About, Features, HowItWorks, NotFound},
    contact::Contact,
    quick_chat::QuickChat,
};
use lawyers::{
    find_manual::FindLawyerManual,
    find_ai::FindLawyerAi,
    profile::LawyerProfile,
    booking::BookLawyer,
};
use firms::{
    browse::BrowseFirms,
    find_ai::FindFirmAi,
    profile::FirmProfile,
    join::JoinFirm,
    application::FirmClientApplication,
    dashboard::FirmClientDashboard,
};
use auth::{login::Login, signup::Signup};
use components::toast::{use_toaster, ToastProvider};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/features")]
    Features,
    #[at("/how-it-works")]
    HowItWorks,
    #[at("/find-lawyer")]
    FindLawyer,
    #[at("/find-lawyer/ai")]
    FindLawyerAi,
    #[at("/lawyer/:id")]
    LawyerProfile { id: String },
    #[at("/book/:id")]
    BookLawyer { id: String },
    #[at("/browse-firms")]
    BrowseFirms,
    #[at("/find-firm/ai")]
    FindFirmAi,
    #[at("/firm/:id")]
    FirmProfile { id: String },
    #[at("/join-firm/:id")]
    JoinFirm { id: String },
    #[at("/firm-client-application")]
    FirmClientApplication,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/firm-client-dashboard")]
    FirmClientDashboard,
    #[at("/quick-chat")]
    QuickChat,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Features => {
            info!("Rendering Features page");
            html! { <Features /> }
        }
        Route::HowItWorks => {
            info!("Rendering How It Works page");
            html! { <HowItWorks /> }
        }
        Route::FindLawyer => {
            info!("Rendering lawyer search");
            html! { <FindLawyerManual /> }
        }
        Route::FindLawyerAi => {
            info!("Rendering AI lawyer finder");
            html! { <FindLawyerAi /> }
        }
        Route::LawyerProfile { id } => {
            info!("Rendering lawyer profile {}", id);
            html! { <LawyerProfile id={id} /> }
        }
        Route::BookLawyer { id } => {
            info!("Rendering booking for lawyer {}", id);
            html! { <BookLawyer id={id} /> }
        }
        Route::BrowseFirms => {
            info!("Rendering firm search");
            html! { <BrowseFirms /> }
        }
        Route::FindFirmAi => {
            info!("Rendering AI firm matcher");
            html! { <FindFirmAi /> }
        }
        Route::FirmProfile { id } => {
            info!("Rendering firm profile {}", id);
            html! { <FirmProfile id={id} /> }
        }
        Route::JoinFirm { id } => {
            info!("Rendering join flow for firm {}", id);
            html! { <JoinFirm id={id} /> }
        }
        Route::FirmClientApplication => {
            info!("Rendering firm client application");
            html! { <FirmClientApplication /> }
        }
        Route::Login => {
            info!("Rendering Login page");
            html! { <Login /> }
        }
        Route::Signup => {
            info!("Rendering Signup page");
            html! { <Signup /> }
        }
        Route::FirmClientDashboard => {
            info!("Rendering firm client dashboard");
            html! { <FirmClientDashboard /> }
        }
        Route::QuickChat => {
            info!("Rendering Quick Chat");
            html! { <QuickChat /> }
        }
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    // Re-render on navigation so the login state is re-read after sign in.
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let toaster = use_toaster();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let logged_in = session::is_logged_in();
    let role = session::role();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.clone().map(|window| {
                    Closure::wrap(Box::new(move || {
                        let scroll_top = window
                            .document()
                            .and_then(|d| d.document_element())
                            .map(|e| e.scroll_top())
                            .unwrap_or(0);
                        is_scrolled.set(scroll_top > 40);
                    }) as Box<dyn FnMut()>)
                });
                if let (Some(window), Some(callback)) = (&window, &listener) {
                    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let handle_logout = {
        let close = close_menu.clone();
        Callback::from(move |e: MouseEvent| {
            close.emit(e);
            session::logout();
            toaster.success("Logged out successfully");
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Landing);
            }
        })
    };

    let menu_class = if *menu_open { "nav-right mobile-menu-open" } else { "nav-right" };
    let on_landing = route == Some(Route::Landing);

    html! {
        <nav class={classes!("top-nav", (*is_scrolled || !on_landing).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Landing} classes="nav-logo">
                    {"Nyaay Sathi"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::FindLawyer} classes="nav-link">{"Find Lawyer"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::BrowseFirms} classes="nav-link">{"Law Firms"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::QuickChat} classes="nav-link">{"Quick Chat"}</Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">{"About"}</Link<Route>>
                    </div>
                    if logged_in {
                        if role == Some(models::UserRole::FirmClient) {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={Route::FirmClientDashboard} classes="nav-profile-link">
                                    {"My Case"}
                                </Link<Route>>
                            </div>
                        }
                        <button onclick={handle_logout} class="nav-logout-button">
                            {"Logout"}
                        </button>
                    } else {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Login} classes="nav-login-button">{"Login"}</Link<Route>>
                        </div>
                        <div onclick={close_menu}>
                            <Link<Route> to={Route::Signup} classes="nav-link">{"Sign Up"}</Link<Route>>
                        </div>
                    }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <Nav />
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting Nyaay Sathi");
    yew::Renderer::<App>::new().render();
}
