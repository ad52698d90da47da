use gloo_console::error;
use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Interval;
use shared::telemetry::ReadingStatus;
use shared::{SensorHistory, SensorReport, TelemetrySample};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::chart::{polyline_points, ChartCard, CHART_HEIGHT, CHART_WIDTH};
use crate::config::{AppConfig, SENSOR_HISTORY_KEY, SENSOR_POLL_MS};

#[derive(Properties, PartialEq, Default)]
pub struct MonitoringProps {
    #[prop_or_default]
    pub config: AppConfig,
}

pub enum Msg {
    Poll,
    Sample(TelemetrySample),
    PollFailed(String),
}

/// Environmental telemetry page: polls the sensor endpoint every 5 s,
/// keeps the bounded history mirrored to local storage, and charts it.
pub struct MonitoringPage {
    history: SensorHistory,
    connected: bool,
    poll_interval: Option<Interval>,
}

impl Component for MonitoringPage {
    type Message = Msg;
    type Properties = MonitoringProps;

    fn create(ctx: &Context<Self>) -> Self {
        // Rehydrate before the first poll fires.
        let history = LocalStorage::get::<Vec<TelemetrySample>>(SENSOR_HISTORY_KEY)
            .map(SensorHistory::from_samples)
            .unwrap_or_default();

        let link = ctx.link().clone();
        let poll_interval = Interval::new(SENSOR_POLL_MS, move || link.send_message(Msg::Poll));

        Self {
            history,
            connected: false,
            poll_interval: Some(poll_interval),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Poll => {
                let url = ctx.props().config.sensor_url.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match Request::get(&url).send().await {
                        Ok(response) if response.ok() => {
                            match response.json::<SensorReport>().await {
                                Ok(report) => {
                                    let timestamp = String::from(
                                        js_sys::Date::new_0().to_locale_time_string("en-US"),
                                    );
                                    link.send_message(Msg::Sample(TelemetrySample::from_report(
                                        report, timestamp,
                                    )));
                                }
                                Err(e) => link.send_message(Msg::PollFailed(format!(
                                    "Failed to parse sensor response: {e}"
                                ))),
                            }
                        }
                        Ok(response) => link.send_message(Msg::PollFailed(format!(
                            "Sensor error: HTTP {}",
                            response.status()
                        ))),
                        Err(e) => {
                            link.send_message(Msg::PollFailed(format!("Network error: {e}")))
                        }
                    }
                });
                false
            }
            Msg::Sample(sample) => {
                self.history.push(sample);
                if let Err(e) = LocalStorage::set(SENSOR_HISTORY_KEY, self.history.samples()) {
                    error!(format!("Failed to persist sensor history: {e}"));
                }
                self.connected = true;
                true
            }
            Msg::PollFailed(message) => {
                // History stays untouched; the status chip is the only signal.
                error!(message);
                self.connected = false;
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.poll_interval.take();
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let current = self.history.latest();
        let last_updated = current
            .map(|s| s.timestamp.clone())
            .unwrap_or_else(|| "Never".to_string());

        html! {
            <div class="page monitoring-page">
                <header class="page-header">
                    <h1>{ "Environmental Monitoring" }</h1>
                    <div class="status-row">
                        { connection_chip(self.connected) }
                        <span class="last-updated">{ format!("Last updated: {last_updated}") }</span>
                    </div>
                </header>

                <div class="reading-cards">
                    { self.render_temperature_card(current) }
                    { self.render_humidity_card(current) }
                    { self.render_pressure_card(current) }
                </div>

                <div class="chart-grid">
                    <ChartCard
                        title="Temperature Trend"
                        unit="°C"
                        color="#dc2626"
                        values={self.metric(|s| s.temperature)}
                    />
                    <ChartCard
                        title="Humidity Trend"
                        unit="%"
                        color="#2563eb"
                        values={self.metric(|s| s.humidity)}
                    />
                    <ChartCard
                        title="Pressure Trend"
                        unit="hPa"
                        color="#f59e0b"
                        values={self.metric(|s| s.pressure)}
                    />
                    { self.render_combined_chart() }
                </div>
            </div>
        }
    }
}

impl MonitoringPage {
    fn metric(&self, f: impl Fn(&TelemetrySample) -> f64) -> Vec<f64> {
        self.history.iter().map(f).collect()
    }

    fn render_temperature_card(&self, current: Option<&TelemetrySample>) -> Html {
        let value = current
            .map(|s| format!("{}°C", s.temperature))
            .unwrap_or_else(|| "--".to_string());
        let status = current.map(TelemetrySample::temperature_status);
        reading_card("Temperature", &value, "Optimal range: 18-28°C", status)
    }

    fn render_humidity_card(&self, current: Option<&TelemetrySample>) -> Html {
        let value = current
            .map(|s| format!("{}%", s.humidity))
            .unwrap_or_else(|| "--".to_string());
        let status = current.map(TelemetrySample::humidity_status);
        reading_card("Humidity", &value, "Optimal range: 30-70%", status)
    }

    fn render_pressure_card(&self, current: Option<&TelemetrySample>) -> Html {
        let value = current
            .map(|s| format!("{} hPa", s.pressure))
            .unwrap_or_else(|| "--".to_string());
        reading_card("Pressure", &value, "Typical range: 980-1050 hPa", None)
    }

    /// All three metrics on a common 0-100 scale in one chart.
    fn render_combined_chart(&self) -> Html {
        let samples: Vec<_> = self.history.iter().map(TelemetrySample::normalized).collect();
        if samples.len() < 2 {
            return html! {
                <div class="chart-card">
                    <div class="chart-header">
                        <h3>{ "All Parameters Overview" }</h3>
                        <span class="chart-unit">{ "normalized 0-100" }</span>
                    </div>
                    <p class="chart-empty">{ "Waiting for data..." }</p>
                </div>
            };
        }

        let series = |f: fn(&(f64, f64, f64)) -> f64, color: &str| {
            let values: Vec<f64> = samples.iter().map(f).collect();
            html! {
                <polyline
                    points={polyline_points(&values, 0.0, 100.0)}
                    fill="none"
                    stroke={color.to_string()}
                    stroke-width="2"
                />
            }
        };

        html! {
            <div class="chart-card">
                <div class="chart-header">
                    <h3>{ "All Parameters Overview" }</h3>
                    <span class="chart-unit">{ "normalized 0-100" }</span>
                </div>
                <svg
                    class="chart-svg"
                    viewBox={format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")}
                    preserveAspectRatio="none"
                >
                    { series(|v| v.0, "#dc2626") }
                    { series(|v| v.1, "#2563eb") }
                    { series(|v| v.2, "#f59e0b") }
                </svg>
                <div class="chart-legend">
                    <span class="legend-temp">{ "Temp" }</span>
                    <span class="legend-humidity">{ "Humidity" }</span>
                    <span class="legend-pressure">{ "Pressure" }</span>
                </div>
            </div>
        }
    }
}

fn connection_chip(connected: bool) -> Html {
    let (class, label) = if connected {
        ("status-chip status-chip-ok", "Connected")
    } else {
        ("status-chip status-chip-err", "Disconnected")
    };
    html! { <span {class}>{ label }</span> }
}

fn reading_card(title: &str, value: &str, range: &str, status: Option<ReadingStatus>) -> Html {
    html! {
        <div class="reading-card">
            <div class="reading-card-header">
                <h3>{ title }</h3>
                { match status {
                    Some(status) => html! {
                        <span class={format!("reading-status reading-status-{}", status.label())}>
                            { status.label() }
                        </span>
                    },
                    None => html! {},
                }}
            </div>
            <div class="reading-value">{ value }</div>
            <p class="reading-range">{ range }</p>
        </div>
    }
}
