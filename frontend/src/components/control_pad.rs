use shared::Direction;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ControlPadProps {
    pub on_direction: Callback<Direction>,
    #[prop_or_default]
    pub current: Option<Direction>,
}

#[derive(Properties, PartialEq)]
struct DirectionButtonProps {
    direction: Direction,
    on_click: Callback<Direction>,
    #[prop_or_default]
    danger: bool,
    children: Children,
}

#[function_component(DirectionButton)]
fn direction_button(props: &DirectionButtonProps) -> Html {
    let direction = props.direction;
    let on_click = props.on_click.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_click.emit(direction));
    let class = if props.danger {
        "direction-btn direction-btn-danger"
    } else {
        "direction-btn"
    };

    html! {
        <button {class} {onclick}>{ props.children.clone() }</button>
    }
}

/// Labelled 3x3 control grid.
#[function_component(ControlPad)]
pub fn control_pad(props: &ControlPadProps) -> Html {
    let on = &props.on_direction;

    html! {
        <div class="control-pad">
            <h4>{ "Vehicle Controls" }</h4>
            <div class="control-grid">
                <div></div>
                <DirectionButton direction={Direction::Forward} on_click={on.clone()}>
                    { "↑ Forward" }
                </DirectionButton>
                <div></div>

                <DirectionButton direction={Direction::Left} on_click={on.clone()}>
                    { "← Left" }
                </DirectionButton>
                <DirectionButton direction={Direction::Stop} on_click={on.clone()} danger=true>
                    { "⏹ Stop" }
                </DirectionButton>
                <DirectionButton direction={Direction::Right} on_click={on.clone()}>
                    { "→ Right" }
                </DirectionButton>

                <div></div>
                <DirectionButton direction={Direction::Backward} on_click={on.clone()}>
                    { "↓ Backward" }
                </DirectionButton>
                <div></div>
            </div>

            { current_direction_badge(props.current) }
        </div>
    }
}

/// Icon-only variant of the control grid; the active direction is
/// highlighted instead of labelled.
#[function_component(ArrowControlPad)]
pub fn arrow_control_pad(props: &ControlPadProps) -> Html {
    let arrow = |direction: Direction, glyph: &str| {
        let on_click = props.on_direction.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_click.emit(direction));
        let active = props.current == Some(direction);
        let class = classes!(
            "arrow-btn",
            active.then_some("arrow-btn-active"),
            (direction == Direction::Stop).then_some("arrow-btn-stop"),
        );
        html! { <button {class} {onclick}>{ glyph }</button> }
    };

    html! {
        <div class="control-pad control-pad-arrows">
            <h4>{ "Arrow Controls" }</h4>
            <div class="control-grid">
                <div></div>
                { arrow(Direction::Forward, "↑") }
                <div></div>

                { arrow(Direction::Left, "←") }
                { arrow(Direction::Stop, "■") }
                { arrow(Direction::Right, "→") }

                <div></div>
                { arrow(Direction::Backward, "↓") }
                <div></div>
            </div>
        </div>
    }
}

fn current_direction_badge(current: Option<Direction>) -> Html {
    match current {
        Some(direction) => html! {
            <div class="direction-badge">
                <span class="pulse-dot"></span>
                <span>{ format!("Moving: {}", direction.to_string().to_uppercase()) }</span>
            </div>
        },
        None => html! {},
    }
}
