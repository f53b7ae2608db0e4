//! Pure Yew view components for the countdown timer UI.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use yew::prelude::*;

use crate::config::PRESETS;

/// Shows the formatted remaining time.
#[derive(Properties, PartialEq)]
pub struct TimerDisplayProps {
    /// Remaining time, already formatted as `MM:SS`.
    pub clock: String,
}

#[function_component(TimerDisplay)]
pub fn timer_display(props: &TimerDisplayProps) -> Html {
    html! {
        <div class="display" aria-live="polite">
            { &props.clock }
        </div>
    }
}

/// Minutes and seconds input fields, disabled while the countdown runs.
#[derive(Properties, PartialEq)]
pub struct DurationInputsProps {
    pub minutes: String,
    pub seconds: String,
    pub disabled: bool,
    pub on_minutes_input: Callback<InputEvent>,
    pub on_seconds_input: Callback<InputEvent>,
}

#[function_component(DurationInputs)]
pub fn duration_inputs(props: &DurationInputsProps) -> Html {
    html! {
        <div class="inputs">
            <label>
                { "Minutes" }
                <input type="number"
                    min="0"
                    value={props.minutes.clone()}
                    oninput={props.on_minutes_input.clone()}
                    disabled={props.disabled}
                />
            </label>
            <label>
                { "Seconds" }
                // The 0-59 range is a UI hint only; the controller accepts
                // any non-negative value typed here.
                <input type="number"
                    min="0"
                    max="59"
                    value={props.seconds.clone()}
                    oninput={props.on_seconds_input.clone()}
                    disabled={props.disabled}
                />
            </label>
        </div>
    }
}

/// Start/Pause and Reset buttons.
#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub running: bool,
    pub on_toggle: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
}

#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    html! {
        <div class="buttons">
            <button class="primary" onclick={props.on_toggle.clone()}>
                { if props.running { "Pause" } else { "Start" } }
            </button>
            <button onclick={props.on_reset.clone()}>{ "Reset" }</button>
        </div>
    }
}

/// One button per preset duration; each overrides the current state.
#[derive(Properties, PartialEq)]
pub struct PresetButtonsProps {
    pub on_preset: Callback<u32>,
}

#[function_component(PresetButtons)]
pub fn preset_buttons(props: &PresetButtonsProps) -> Html {
    html! {
        <div class="quick">
            { PRESETS.iter().map(|&(label, total_secs)| {
                let on_preset = props.on_preset.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_preset.emit(total_secs));
                html! { <button {onclick}>{ label }</button> }
            }).collect::<Html>() }
        </div>
    }
}
