//! Application route definitions, shared by `main.rs` and the
//! integration tests.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{DiseasePage, FeedPage, HomePage, MonitoringPage, VitalsPage};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/monitoring")]
    Monitoring,
    #[at("/feed")]
    Feed,
    #[at("/vitals")]
    Vitals,
    #[at("/disease")]
    Disease,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Monitoring => html! { <MonitoringPage /> },
        Route::Feed => html! { <FeedPage /> },
        Route::Vitals => html! { <VitalsPage /> },
        Route::Disease => html! { <DiseasePage /> },
        Route::NotFound => html! { <h1 class="not-found">{ "404" }</h1> },
    }
}
