use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod snap {
    pub mod tracker;
    pub mod context;
    pub mod reveal;
    pub mod page;
}
mod form {
    pub mod model;
    pub mod error;
    pub mod validation;
    pub mod wizard;
    pub mod submit;
    pub mod fields;
    pub mod application;
}
mod components {
    pub mod countdown;
    pub mod pricing;
    pub mod gallery;
    pub mod video;
    pub mod carousel;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
        },
        // Single page site, unknown paths land on the home page
        Route::NotFound => {
            info!("Unknown path, rendering Home page");
            html! { <Home /> }
        },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
