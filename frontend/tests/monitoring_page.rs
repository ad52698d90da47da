// Component tests for the telemetry monitoring page.
//
// The page's messages are public, so the tests drive the mounted
// component directly instead of standing up a fake sensor endpoint.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use std::time::Duration;

use gloo_storage::{LocalStorage, Storage};
use shared::TelemetrySample;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

use frontend::config::SENSOR_HISTORY_KEY;
use frontend::pages::monitoring::{MonitoringPage, Msg};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

fn sample(timestamp: &str) -> TelemetrySample {
    TelemetrySample {
        temperature: 24.0,
        humidity: 55.0,
        pressure: 1005.0,
        timestamp: timestamp.to_string(),
    }
}

fn chip_text(mount: &web_sys::Element) -> String {
    mount
        .query_selector(".status-chip")
        .unwrap()
        .expect("connection chip should render")
        .text_content()
        .unwrap()
}

fn last_updated_text(mount: &web_sys::Element) -> String {
    mount
        .query_selector(".last-updated")
        .unwrap()
        .expect("last-updated label should render")
        .text_content()
        .unwrap()
}

#[wasm_bindgen_test]
async fn failed_poll_leaves_history_and_flips_the_chip() {
    LocalStorage::delete(SENSOR_HISTORY_KEY);
    let mount = create_mount_point();
    let app = yew::Renderer::<MonitoringPage>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    app.send_message(Msg::Sample(sample("10:15:02 AM")));
    sleep(Duration::ZERO).await;
    assert_eq!(chip_text(&mount), "Connected");
    assert!(last_updated_text(&mount).contains("10:15:02 AM"));

    app.send_message(Msg::PollFailed("sensor unreachable".to_string()));
    sleep(Duration::ZERO).await;

    assert_eq!(chip_text(&mount), "Disconnected");
    assert!(last_updated_text(&mount).contains("10:15:02 AM"));

    let value = mount
        .query_selector(".reading-value")
        .unwrap()
        .expect("reading card should keep its last value")
        .text_content()
        .unwrap();
    assert_eq!(value, "24°C");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn failed_poll_with_no_history_shows_placeholders() {
    LocalStorage::delete(SENSOR_HISTORY_KEY);
    let mount = create_mount_point();
    let app = yew::Renderer::<MonitoringPage>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    app.send_message(Msg::PollFailed("network error".to_string()));
    sleep(Duration::ZERO).await;

    assert_eq!(chip_text(&mount), "Disconnected");
    assert!(last_updated_text(&mount).contains("Never"));

    cleanup(&mount);
}
