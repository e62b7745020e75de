mod api;
mod app;
mod components;
mod monitoring;
mod pages;
mod state;

use app::App;

fn main() {
    monitoring::init();
    dioxus::launch(App);
}
