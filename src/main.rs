use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod navigation;
mod theme;
mod forms {
    pub mod contact;
    pub mod quote;
    pub mod state;
    pub mod validation;
}
mod email {
    pub mod client;
    pub mod templates;
}
mod modals {
    pub mod contact;
    pub mod quote;
    pub mod shell;
    pub mod success;
}
mod components {
    pub mod dialog;
    pub mod form_field;
    pub mod mode_toggle;
    pub mod toast;
}
mod sections {
    pub mod contact_bar;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod services;
    pub mod team;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            error!("404: unknown route {}", current_path());
            html! { <NotFound /> }
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
