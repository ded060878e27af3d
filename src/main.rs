mod components;
mod config;
mod countdown;
mod error;
mod logging;
mod model;
mod storage;
mod strings;

use components::app::App;

fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
