use gloo_console::error;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use shared::{VitalReading, VitalsDisplay, VitalsOutcome};
use wasm_bindgen_futures::spawn_local;
use web_sys::AbortController;
use yew::prelude::*;

use crate::config::{AppConfig, VITALS_REPOLL_MS, VITALS_TIMEOUT_MS};

#[derive(Properties, PartialEq, Default)]
pub struct VitalsProps {
    #[prop_or_default]
    pub config: AppConfig,
}

pub enum Msg {
    Poll,
    Settled(VitalsOutcome),
}

/// Heart-rate/SpO2 page. Self-rescheduling poll loop: one attempt with a
/// hard 2.5 s abort deadline, then a 2 s pause after the attempt settles
/// before the next one. Never overlaps attempts.
pub struct VitalsPage {
    display: VitalsDisplay,
    next_poll: Option<Timeout>,
}

impl Component for VitalsPage {
    type Message = Msg;
    type Properties = VitalsProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Poll);
        Self {
            display: VitalsDisplay::default(),
            next_poll: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Poll => {
                self.next_poll = None;
                let url = ctx.props().config.vitals_url.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = attempt(&url).await;
                    link.send_message(Msg::Settled(outcome));
                });
                false
            }
            Msg::Settled(outcome) => {
                self.display.apply(outcome);

                // Schedule the next attempt only after this one settled.
                let link = ctx.link().clone();
                self.next_poll = Some(Timeout::new(VITALS_REPOLL_MS, move || {
                    link.send_message(Msg::Poll)
                }));
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Dropping the pending timeout stops the loop; the in-flight
        // attempt, if any, settles into a dead component link.
        self.next_poll.take();
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page vitals-page">
                <h2>{ "🫀 Health Monitor" }</h2>

                <div class="vitals-card">
                    <p><b>{ "Status: " }</b>{ &self.display.status }</p>
                    <p><b>{ "Heart Rate: " }</b>{ format!("{} bpm", self.display.heart_rate) }</p>
                    <p><b>{ "SpO₂: " }</b>{ format!("{} %", self.display.spo2) }</p>
                </div>

                <div class="vitals-connection">
                    { "Sensor link: " }
                    <span class={if self.display.connected { "connected" } else { "disconnected" }}>
                        { if self.display.connected { "Connected" } else { "Disconnected" } }
                    </span>
                </div>
            </div>
        }
    }
}

/// One poll attempt, abandoned past the 2.5 s deadline.
async fn attempt(url: &str) -> VitalsOutcome {
    let controller = match AbortController::new() {
        Ok(controller) => controller,
        Err(_) => return VitalsOutcome::Offline,
    };
    let signal = controller.signal();

    // Owned deadline: dropping it after the attempt settles disarms it.
    let deadline = Timeout::new(VITALS_TIMEOUT_MS, move || controller.abort());

    let result = Request::get(url).abort_signal(Some(&signal)).send().await;
    drop(deadline);

    match result {
        Ok(response) => {
            let status = response.status();
            let body = if response.ok() && status != 204 {
                response.json::<VitalReading>().await.ok()
            } else {
                None
            };
            VitalsOutcome::classify(status, body)
        }
        Err(e) => {
            error!(format!("Vitals fetch error: {e}"));
            VitalsOutcome::Offline
        }
    }
}
