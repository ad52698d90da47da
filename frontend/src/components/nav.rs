use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::Route;

const NAV_ITEMS: &[(Route, &str)] = &[
    (Route::Home, "Home"),
    (Route::Monitoring, "Monitoring"),
    (Route::Feed, "Live Feed"),
    (Route::Disease, "Disease Detection"),
    (Route::Vitals, "Vitals"),
];

/// Floating navigation bar with an active-route highlight and a toggled
/// menu on small screens.
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let open = use_state(|| false);
    let current = use_route::<Route>();

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    let link_for = |route: &Route, label: &str, onclick: Option<Callback<MouseEvent>>| {
        let active = current.as_ref() == Some(route);
        let classes = classes!("nav-link", active.then_some("nav-link-active"));
        match onclick {
            Some(onclick) => html! {
                <Link<Route> to={route.clone()} classes={classes}>
                    <span {onclick}>{ label }</span>
                </Link<Route>>
            },
            None => html! {
                <Link<Route> to={route.clone()} classes={classes}>{ label }</Link<Route>>
            },
        }
    };

    html! {
        <nav class="nav-floating">
            <div class="nav-inner">
                <Link<Route> to={Route::Home} classes="nav-brand">
                    { "LiveStock Monitoring System" }
                </Link<Route>>

                <div class="nav-links-desktop">
                    { for NAV_ITEMS.iter().map(|item| link_for(&item.0, item.1, None)) }
                </div>

                <button class="nav-menu-toggle" onclick={toggle}>
                    { if *open { "✕" } else { "☰" } }
                </button>
            </div>

            { if *open {
                html! {
                    <div class="nav-links-mobile">
                        { for NAV_ITEMS.iter().map(|item| {
                            link_for(&item.0, item.1, Some(close.clone()))
                        }) }
                    </div>
                }
            } else {
                html! {}
            }}
        </nav>
    }
}
