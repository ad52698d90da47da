use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::Route;

struct Feature {
    route: Route,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        route: Route::Monitoring,
        title: "Environmental Monitoring",
        description: "Temperature, humidity and pressure trends from the barn sensors.",
    },
    Feature {
        route: Route::Feed,
        title: "Live Feed",
        description: "Camera stream with AI detection overlay and vehicle controls.",
    },
    Feature {
        route: Route::Disease,
        title: "Disease Detection",
        description: "Symptom-based health assessment across four ML models.",
    },
    Feature {
        route: Route::Vitals,
        title: "Vitals",
        description: "Heart rate and SpO\u{2082} from the wearable sensor collar.",
    },
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <div class="page landing-page">
            <section class="hero">
                <h1>{ "Smart Livestock Monitoring" }</h1>
                <p class="hero-subtitle">
                    { "Real-time herd health, environment and camera feeds in one place." }
                </p>
                <Link<Route> to={Route::Monitoring} classes="btn-primary">
                    { "Open Dashboard" }
                </Link<Route>>
            </section>

            <section class="feature-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <Link<Route> to={feature.route.clone()} classes="feature-card">
                        <h3>{ feature.title }</h3>
                        <p>{ feature.description }</p>
                    </Link<Route>>
                }) }
            </section>
        </div>
    }
}
