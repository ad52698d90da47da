use yew::prelude::*;
use yew_router::prelude::*;

use frontend::components::nav::NavBar;
use frontend::routing::{switch, Route};

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-shell">
                <NavBar />
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Livestock monitoring dashboard starting...");
    yew::Renderer::<App>::new().render();
}
