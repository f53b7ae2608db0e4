//! Main module for the countdown timer application using Yew.
//! Wires UI components, the countdown state hook, and the entry point.

use yew::prelude::*;

mod components;
mod config;
mod hooks;

use components::{Controls, DurationInputs, PresetButtons, TimerDisplay};
use hooks::use_countdown;

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    let countdown = use_countdown();

    html! {
        <div class="container">
            <h1>{ "Countdown Timer" }</h1>

            <TimerDisplay clock={countdown.clock.clone()} />

            <div class="controls">
                <DurationInputs
                    minutes={countdown.minutes_text.clone()}
                    seconds={countdown.seconds_text.clone()}
                    disabled={countdown.inputs_disabled}
                    on_minutes_input={countdown.on_minutes_input.clone()}
                    on_seconds_input={countdown.on_seconds_input.clone()}
                />

                <Controls
                    running={countdown.running}
                    on_toggle={countdown.on_toggle.clone()}
                    on_reset={countdown.on_reset.clone()}
                />

                <PresetButtons on_preset={countdown.on_preset.clone()} />
            </div>

            <p class="note">{ "Tip: edit minutes/seconds then press Start." }</p>
        </div>
    }
}

/// App wrapper; kept as its own component so the root stays stable.
#[function_component]
pub fn App() -> Html {
    html! {
        <Main />
    }
}

/// Entry point: installs the panic hook and starts the Yew renderer.
fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
