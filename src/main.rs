mod components;
mod hooks;
mod model;
mod throttle;
mod util;

use components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
