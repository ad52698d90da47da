use yew::prelude::*;

pub const CHART_WIDTH: f64 = 300.0;
pub const CHART_HEIGHT: f64 = 120.0;

#[derive(Properties, PartialEq)]
pub struct ChartCardProps {
    pub title: AttrValue,
    pub unit: AttrValue,
    /// SVG stroke/fill colour.
    pub color: AttrValue,
    pub values: Vec<f64>,
}

/// Trend card rendering one metric's history as an SVG area chart.
#[function_component(ChartCard)]
pub fn chart_card(props: &ChartCardProps) -> Html {
    let body = if props.values.len() < 2 {
        html! { <p class="chart-empty">{ "Waiting for data..." }</p> }
    } else {
        let (min, max) = value_domain(&props.values);
        html! {
            <svg
                class="chart-svg"
                viewBox={format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")}
                preserveAspectRatio="none"
            >
                <polygon
                    points={area_points(&props.values, min, max)}
                    fill={props.color.clone()}
                    fill-opacity="0.15"
                />
                <polyline
                    points={polyline_points(&props.values, min, max)}
                    fill="none"
                    stroke={props.color.clone()}
                    stroke-width="2"
                />
            </svg>
        }
    };

    html! {
        <div class="chart-card">
            <div class="chart-header">
                <h3>{ props.title.clone() }</h3>
                <span class="chart-unit">{ props.unit.clone() }</span>
            </div>
            { body }
        </div>
    }
}

/// Value domain with 10% headroom; a flat series gets a unit band so the
/// line sits mid-chart instead of dividing by zero.
fn value_domain(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < f64::EPSILON {
        (min - 1.0, max + 1.0)
    } else {
        let pad = (max - min) * 0.1;
        (min - pad, max + pad)
    }
}

/// `points` attribute for an SVG polyline over a fixed value domain.
pub fn polyline_points(values: &[f64], min: f64, max: f64) -> String {
    let span = (max - min).max(f64::EPSILON);
    let step = if values.len() > 1 {
        CHART_WIDTH / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 * step;
            let y = CHART_HEIGHT - ((v - min) / span).clamp(0.0, 1.0) * CHART_HEIGHT;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Polyline closed down to the baseline, for the filled area.
fn area_points(values: &[f64], min: f64, max: f64) -> String {
    format!(
        "0,{CHART_HEIGHT} {} {CHART_WIDTH},{CHART_HEIGHT}",
        polyline_points(values, min, max)
    )
}
