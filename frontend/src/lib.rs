pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod utils;

use crate::config::PageConfig;
use crate::pages::landing::Landing;
use yew::prelude::*;
use yew_router::prelude::*;

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
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: PageConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<PageConfig> context={props.config.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<PageConfig>>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let loaded = config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    if let Err(e) = &loaded {
        log::warn!("Falling back to default page config: {}", e);
    }
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
