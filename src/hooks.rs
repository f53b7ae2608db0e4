use std::rc::Rc;
use yew::prelude::*;
use web_sys::HtmlInputElement;

use countdown_timer::{format_secs_to_minsec, Countdown, CountdownAction};

use crate::config::TICK_INTERVAL_MS;
use gloo_timers::callback::Interval;

/// Reducer wrapper so the pure controller can live in Yew state.
#[derive(PartialEq)]
struct CountdownState {
    inner: Countdown,
}

impl Default for CountdownState {
    fn default() -> Self {
        Self {
            inner: Countdown::new(),
        }
    }
}

impl Reducible for CountdownState {
    type Action = CountdownAction;

    fn reduce(self: Rc<Self>, action: CountdownAction) -> Rc<Self> {
        let mut next = self.inner.clone();
        next.apply(action);
        Rc::new(Self { inner: next })
    }
}

/// Snapshot of the countdown plus the callbacks the view wires to it.
pub struct CountdownHandle {
    /// Remaining time, already formatted as `MM:SS`.
    pub clock: String,
    /// Verbatim contents of the minutes input field.
    pub minutes_text: String,
    /// Verbatim contents of the seconds input field.
    pub seconds_text: String,
    /// Whether the countdown is actively ticking (picks the Start/Pause label).
    pub running: bool,
    /// Disabled flag for both input fields; true exactly while running.
    pub inputs_disabled: bool,
    /// Callback for the minutes input's `oninput` event.
    pub on_minutes_input: Callback<InputEvent>,
    /// Callback for the seconds input's `oninput` event.
    pub on_seconds_input: Callback<InputEvent>,
    /// Start/Pause button handler.
    pub on_toggle: Callback<MouseEvent>,
    /// Reset button handler.
    pub on_reset: Callback<MouseEvent>,
    /// Preset button handler; takes the preset's total seconds.
    pub on_preset: Callback<u32>,
}

/// Custom hook owning the countdown state and its tick source.
///
/// The `gloo` [`Interval`] is the tick handle: the effect below constructs
/// it on the transition into running and drops it, which cancels the
/// callback, on every transition out of running and at unmount. Keying the
/// effect on the running flag means at most one interval can exist at a
/// time. Each fire dispatches one `Tick` into the reducer, so every state
/// change is a bounded synchronous transition.
#[hook]
pub fn use_countdown() -> CountdownHandle {
    let state = use_reducer(CountdownState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.inner.is_running(), move |running: &bool| {
            let ticker = running.then(|| {
                Interval::new(TICK_INTERVAL_MS, move || {
                    dispatcher.dispatch(CountdownAction::Tick);
                })
            });
            move || drop(ticker)
        });
    }

    let on_minutes_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(CountdownAction::EditMinutes(input.value()));
        })
    };

    let on_seconds_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(CountdownAction::EditSeconds(input.value()));
        })
    };

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(CountdownAction::ToggleStartPause);
        })
    };

    let on_reset = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(CountdownAction::Reset);
        })
    };

    let on_preset = {
        let dispatcher = state.dispatcher();
        Callback::from(move |total_secs: u32| {
            dispatcher.dispatch(CountdownAction::ApplyPreset(total_secs));
        })
    };

    CountdownHandle {
        clock: format_secs_to_minsec(state.inner.remaining_secs()),
        minutes_text: state.inner.minutes_text().to_string(),
        seconds_text: state.inner.seconds_text().to_string(),
        running: state.inner.is_running(),
        inputs_disabled: state.inner.inputs_disabled(),
        on_minutes_input,
        on_seconds_input,
        on_toggle,
        on_reset,
        on_preset,
    }
}
