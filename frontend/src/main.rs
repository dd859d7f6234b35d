use crate::app::App;

mod app;
mod components;
mod schema;
mod transport;

fn main() {
    yew::Renderer::<App>::new().render();
}
