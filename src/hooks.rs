use log::debug;
use stack_calculator::calculator::{CalculatorAction, CalculatorState};
use stack_calculator::slots::IconKind;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Holds the calculator state and the callbacks that drive it.
#[derive(Clone)]
pub struct StackCalculatorHandle {
    pub state: UseReducerHandle<CalculatorState>,
    /// Callback for the amount input's `oninput` event. Stores the raw text and hides the result.
    pub on_input: Callback<InputEvent>,
    /// Callback for the form's `onsubmit` event. Validates and decomposes the current text.
    pub on_submit: Callback<SubmitEvent>,
    /// Marks an icon slot as loaded so it fades in.
    pub on_icon_load: Callback<(IconKind, usize)>,
}

/// Custom hook owning one calculator instance.
#[hook]
pub fn use_stack_calculator() -> StackCalculatorHandle {
    let state = use_reducer(CalculatorState::default);

    let on_input = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(CalculatorAction::Edit(input.value()));
        })
    };

    let on_submit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(CalculatorAction::Submit);
        })
    };

    let on_icon_load = {
        let dispatcher = state.dispatcher();
        Callback::from(move |(kind, index): (IconKind, usize)| {
            debug!("icon {:?} #{} loaded", kind, index);
            dispatcher.dispatch(CalculatorAction::IconLoaded { kind, index });
        })
    };

    StackCalculatorHandle {
        state,
        on_input,
        on_submit,
        on_icon_load,
    }
}
