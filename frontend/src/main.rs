use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod subscribe;
mod components {
    pub mod anchor;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod language;
    pub mod menu;
    pub mod nav;
    pub mod newsletter;
    pub mod reveal;
}
mod pages {
    pub mod faq;
    pub mod home;
}

use components::{footer::SiteFooter, header::SiteHeader};
use pages::{faq::Faq, home::Home};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/index.html")]
    Index,
    #[at("/faq.html")]
    Faq,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Index => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <section class="not-found">
                    <h1>{"Page not found"}</h1>
                    <a href={config::HOME_PAGE}>{"Back to the home page"}</a>
                </section>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <SiteHeader />
            <main id="main">
                <Switch<Route> render={switch} />
            </main>
            <SiteFooter />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    yew::Renderer::<App>::new().render();
    info!("Omnæs Dæmones website loaded");
}
