use anyhow::Error;
use gloo_console::error;
use gloo_file::{Blob, ObjectUrl};
use gloo_net::http::Request;
use shared::{ControlCommand, Detection, DetectionResponse, Direction, FrameSampler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};
use yew::prelude::*;
use yew_websocket::websocket::{Binary, WebSocketService, WebSocketStatus, WebSocketTask};

use crate::components::control_pad::{ArrowControlPad, ControlPad};
use crate::config::AppConfig;

/// Inbound websocket payload: one unframed JPEG per message.
pub struct FramePayload(pub Result<Vec<u8>, Error>);

impl From<Binary> for FramePayload {
    fn from(bytes: Binary) -> Self {
        Self(bytes)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ControlStyle {
    Text,
    Arrows,
}

#[derive(Properties, PartialEq, Default)]
pub struct FeedProps {
    #[prop_or_default]
    pub config: AppConfig,
}

pub enum Msg {
    FrameBytes(Vec<u8>),
    FrameLoaded(HtmlImageElement),
    SocketStatus(WebSocketStatus),
    Detections(Vec<Detection>),
    DetectionFailed(String),
    SendDirection(Direction),
    SetControlStyle(ControlStyle),
}

/// Live feed page: relays streamed JPEG frames onto two canvases (raw and
/// annotated), submits every 30th frame for detection, and hosts the
/// vehicle control pad.
pub struct FeedPage {
    socket: Option<WebSocketTask>,
    live_canvas: NodeRef,
    result_canvas: NodeRef,
    sampler: FrameSampler,
    frame_count: u32,
    connected: bool,
    socket_status: String,
    detection_status: String,
    direction: Option<Direction>,
    control_style: ControlStyle,
}

impl Component for FeedPage {
    type Message = Msg;
    type Properties = FeedProps;

    fn create(ctx: &Context<Self>) -> Self {
        let on_frame = ctx.link().callback(|payload: FramePayload| match payload.0 {
            Ok(bytes) => Msg::FrameBytes(bytes),
            Err(e) => {
                error!(format!("Frame read error: {e}"));
                Msg::SocketStatus(WebSocketStatus::Error)
            }
        });
        let notification = ctx.link().callback(Msg::SocketStatus);

        let mut socket_status = "Connecting...".to_string();
        let socket = match WebSocketService::connect_binary(
            &ctx.props().config.stream_url,
            on_frame,
            notification,
        ) {
            Ok(task) => Some(task),
            Err(e) => {
                error!(format!("WebSocket connect failed: {e}"));
                socket_status = "Error connecting to camera".to_string();
                None
            }
        };

        Self {
            socket,
            live_canvas: NodeRef::default(),
            result_canvas: NodeRef::default(),
            sampler: FrameSampler::default(),
            frame_count: 0,
            connected: false,
            socket_status,
            detection_status: "Initializing AI detection system...".to_string(),
            direction: None,
            control_style: ControlStyle::Text,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FrameBytes(bytes) => {
                self.decode_frame(ctx, bytes);
                false
            }
            Msg::FrameLoaded(image) => self.draw_frame(ctx, &image),
            Msg::SocketStatus(status) => match status {
                WebSocketStatus::Opened => false,
                WebSocketStatus::Closed => {
                    self.connected = false;
                    self.socket_status = "Disconnected from camera".to_string();
                    true
                }
                WebSocketStatus::Error => {
                    self.connected = false;
                    self.socket_status = "Error connecting to camera".to_string();
                    true
                }
            },
            Msg::Detections(detections) => {
                self.detection_status = format!("{} persons detected", detections.len());
                self.draw_overlay(&detections);
                true
            }
            Msg::DetectionFailed(message) => {
                // Previous overlay stays in place.
                error!(message);
                self.detection_status = "Detection failed".to_string();
                true
            }
            Msg::SendDirection(direction) => {
                // Optimistic display; the POST is fire-and-forget.
                self.direction = Some(direction);
                let url = ctx.props().config.control_url.clone();
                spawn_local(async move {
                    match Request::post(&url).json(&ControlCommand::new(direction)) {
                        Ok(request) => match request.send().await {
                            Ok(response) => {
                                let body = response.text().await.unwrap_or_default();
                                log::debug!("Control response: {body}");
                            }
                            Err(e) => error!(format!("Error sending control command: {e}")),
                        },
                        Err(e) => error!(format!("Error encoding control command: {e}")),
                    }
                });
                true
            }
            Msg::SetControlStyle(style) => {
                if self.control_style == style {
                    false
                } else {
                    self.control_style = style;
                    true
                }
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Dropping the task closes the socket.
        self.socket.take();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_direction = link.callback(Msg::SendDirection);

        html! {
            <div class="page feed-page">
                <header class="page-header">
                    <h1>{ "Live Feed Monitoring" }</h1>
                    <div class="status-row">
                        <span class={if self.connected {
                            "status-chip status-chip-ok"
                        } else {
                            "status-chip status-chip-err"
                        }}>
                            { format!("WebSocket: {}", self.socket_status) }
                        </span>
                        <span class="status-chip">{ "AI Detection Active" }</span>
                    </div>
                </header>

                <div class="feed-grid">
                    <div class="feed-card">
                        <div class="feed-card-header">
                            <h3>{ "📹 Live Camera Feed" }</h3>
                            { self.render_style_toggle(ctx) }
                        </div>

                        <div class="canvas-wrap">
                            <canvas ref={self.live_canvas.clone()} width="640" height="480" />
                            <span class={if self.connected { "live-badge live" } else { "live-badge" }}>
                                { if self.connected { "LIVE" } else { "OFFLINE" } }
                            </span>
                        </div>

                        <div class="feed-meta">
                            <span>{ "Streaming • AI Analysis Active" }</span>
                            <span>{ format!("Frames: {}", self.frame_count) }</span>
                        </div>

                        { match self.control_style {
                            ControlStyle::Text => html! {
                                <ControlPad on_direction={on_direction} current={self.direction} />
                            },
                            ControlStyle::Arrows => html! {
                                <ArrowControlPad on_direction={on_direction} current={self.direction} />
                            },
                        }}
                    </div>

                    <div class="feed-card">
                        <div class="feed-card-header">
                            <h3>{ "🧠 Detection Results" }</h3>
                        </div>

                        <div class="canvas-wrap">
                            <canvas ref={self.result_canvas.clone()} width="640" height="480" />
                        </div>

                        <div class="feed-meta detection-status">
                            <span>{ "Detection Status:" }</span>
                            <span>{ &self.detection_status }</span>
                        </div>
                    </div>
                </div>
            </div>
        }
    }
}

impl FeedPage {
    /// Turn raw JPEG bytes into an image element; the load handler hands
    /// the decoded image back to the component.
    fn decode_frame(&self, ctx: &Context<Self>, bytes: Vec<u8>) {
        let blob = Blob::new_with_options(bytes.as_slice(), Some("image/jpeg"));
        let url = ObjectUrl::from(blob);
        let src = url.to_string();

        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(e) => {
                error!(format!("Failed to create frame image: {e:?}"));
                return;
            }
        };

        let link = ctx.link().clone();
        let loaded = image.clone();
        let onload = Closure::once_into_js(move || {
            // The object URL must outlive the decode; dropping it here
            // revokes it.
            let _url = url;
            link.send_message(Msg::FrameLoaded(loaded));
        });
        image.set_onload(Some(onload.unchecked_ref()));
        image.set_src(&src);
    }

    /// Mirror the decoded frame onto both canvases and run the sampler.
    fn draw_frame(&mut self, ctx: &Context<Self>, image: &HtmlImageElement) -> bool {
        let (Some(live), Some(result)) = (
            self.live_canvas.cast::<HtmlCanvasElement>(),
            self.result_canvas.cast::<HtmlCanvasElement>(),
        ) else {
            return false;
        };
        let (Some(live_ctx), Some(result_ctx)) = (context_2d(&live), context_2d(&result)) else {
            return false;
        };

        live.set_width(image.width());
        live.set_height(image.height());
        result.set_width(image.width());
        result.set_height(image.height());

        if live_ctx
            .draw_image_with_html_image_element(image, 0.0, 0.0)
            .is_err()
        {
            return false;
        }
        let _ = result_ctx.draw_image_with_html_image_element(image, 0.0, 0.0);

        self.frame_count += 1;
        self.connected = true;
        self.socket_status = "Connected".to_string();

        if self.sampler.record() {
            self.submit_frame(ctx, &live);
        }
        true
    }

    /// Re-encode the live canvas and post it to the detection service.
    /// Does not block later frames; the overlay is last-write-wins.
    fn submit_frame(&self, ctx: &Context<Self>, canvas: &HtmlCanvasElement) {
        let data_url = match canvas.to_data_url_with_type("image/jpeg") {
            Ok(data_url) => data_url,
            Err(e) => {
                error!(format!("Failed to encode frame: {e:?}"));
                return;
            }
        };
        let Some(base64) = data_url.split(',').nth(1).map(str::to_string) else {
            return;
        };

        let config = ctx.props().config.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            let url = format!(
                "{}?api_key={}",
                config.detection_url, config.detection_api_key
            );
            let request = Request::post(&url)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(base64);

            match request {
                Ok(request) => match request.send().await {
                    Ok(response) if response.ok() => {
                        match response.json::<DetectionResponse>().await {
                            Ok(result) => link.send_message(Msg::Detections(result.predictions)),
                            Err(e) => link.send_message(Msg::DetectionFailed(format!(
                                "Failed to parse detection response: {e}"
                            ))),
                        }
                    }
                    Ok(response) => link.send_message(Msg::DetectionFailed(format!(
                        "Detection error: HTTP {}",
                        response.status()
                    ))),
                    Err(e) => {
                        link.send_message(Msg::DetectionFailed(format!("Network error: {e}")))
                    }
                },
                Err(e) => {
                    link.send_message(Msg::DetectionFailed(format!("Request error: {e}")))
                }
            }
        });
    }

    fn draw_overlay(&self, detections: &[Detection]) {
        let Some(canvas) = self.result_canvas.cast::<HtmlCanvasElement>() else {
            return;
        };
        let Some(ctx2d) = context_2d(&canvas) else {
            return;
        };

        ctx2d.set_stroke_style_str("lime");
        ctx2d.set_fill_style_str("lime");
        ctx2d.set_line_width(2.0);

        for detection in detections {
            ctx2d.stroke_rect(
                detection.left(),
                detection.top(),
                detection.width,
                detection.height,
            );
            let _ = ctx2d.fill_text(
                &detection.confidence_label(),
                detection.left(),
                detection.top() - 5.0,
            );
        }
    }

    fn render_style_toggle(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let button = |style: ControlStyle, label: &str| {
            let class = classes!(
                "toggle-btn",
                (self.control_style == style).then_some("toggle-btn-active"),
            );
            html! {
                <button {class} onclick={link.callback(move |_| Msg::SetControlStyle(style))}>
                    { label }
                </button>
            }
        };

        html! {
            <div class="style-toggle">
                { button(ControlStyle::Text, "Text") }
                { button(ControlStyle::Arrows, "Arrows") }
            </div>
        }
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}
