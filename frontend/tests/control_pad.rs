// Component tests for the vehicle control pads.
//
// Same pattern as the Yew framework's own test suite: mount a div, render
// the component into it, yield to the scheduler, then assert on the DOM.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use shared::Direction;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use frontend::components::control_pad::{ArrowControlPad, ControlPad};

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

#[wasm_bindgen_test]
async fn control_pad_renders_all_five_directions() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <ControlPad on_direction={Callback::noop()} /> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let buttons = mount.query_selector_all(".direction-btn").unwrap();
    assert_eq!(buttons.length(), 5);

    let stop = mount
        .query_selector(".direction-btn-danger")
        .unwrap()
        .expect("stop button should carry the danger class");
    assert!(stop.text_content().unwrap().contains("Stop"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn clicking_forward_emits_the_forward_direction() {
    let received: Rc<RefCell<Option<Direction>>> = Rc::new(RefCell::new(None));

    #[derive(Properties, PartialEq)]
    struct WrapperProps {
        on_direction: Callback<Direction>,
    }

    #[function_component(Wrapper)]
    fn wrapper(props: &WrapperProps) -> Html {
        html! { <ControlPad on_direction={props.on_direction.clone()} /> }
    }

    let sink = received.clone();
    let on_direction = Callback::from(move |direction| {
        *sink.borrow_mut() = Some(direction);
    });

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root_and_props(mount.clone(), WrapperProps { on_direction })
        .render();
    sleep(Duration::ZERO).await;

    let forward = mount
        .query_selector(".direction-btn")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    assert!(forward.text_content().unwrap().contains("Forward"));
    forward.click();
    sleep(Duration::ZERO).await;

    assert_eq!(*received.borrow(), Some(Direction::Forward));
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn current_direction_badge_shows_the_active_token() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <ControlPad
                on_direction={Callback::noop()}
                current={Some(Direction::Forward)}
            />
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let badge = mount
        .query_selector(".direction-badge")
        .unwrap()
        .expect("badge should render when a direction is active");
    assert!(badge.text_content().unwrap().contains("Moving: F"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn arrow_pad_highlights_the_active_direction() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! {
            <ArrowControlPad
                on_direction={Callback::noop()}
                current={Some(Direction::Left)}
            />
        }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let active = mount
        .query_selector(".arrow-btn-active")
        .unwrap()
        .expect("one arrow should be highlighted");
    assert_eq!(active.text_content().unwrap(), "←");

    cleanup(&mount);
}
