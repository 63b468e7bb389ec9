use yew::prelude::*;

mod components;
mod config;
mod content;
mod error;
mod pages;
mod sections;
mod state;
mod utils;

use pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Starting {} landing page", config::get_brand_name());
    yew::Renderer::<App>::new().render();
}
