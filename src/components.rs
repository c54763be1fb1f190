//! Pure Yew view components for the Stack Calculator UI.
//!
//! These components render from props only; all state lives in
//! `hooks::use_stack_calculator`.

use stack_calculator::calculator::Phase;
use stack_calculator::config::INPUT_PLACEHOLDER;
use stack_calculator::slots::{IconKind, SlotDescriptor, SlotGrid};
use yew::prelude::*;

/// Amount input and submit button.
///
/// The field is a text input so half-typed values like "5." or "1e" survive
/// the controlled `value` round trip; a number input would report them as "".
#[derive(Properties, PartialEq)]
pub struct AmountFormProps {
    pub value: AttrValue,
    pub oninput: Callback<InputEvent>,
    pub onsubmit: Callback<SubmitEvent>,
}

#[function_component(AmountForm)]
pub fn amount_form(props: &AmountFormProps) -> Html {
    html! {
        <form class="amount-form" onsubmit={props.onsubmit.clone()}>
            <label for="amount_input">{ "Amount:" }</label>
            <input
                type="text"
                inputmode="decimal"
                id="amount_input"
                value={props.value.clone()}
                placeholder={INPUT_PLACEHOLDER}
                oninput={props.oninput.clone()}
            />
            <button type="submit" class="btn-primary">{ "Calculate" }</button>
        </form>
    }
}

/// One grid of icon slots with its overflow line.
#[derive(Properties, PartialEq)]
pub struct SlotGridViewProps {
    pub grid: SlotGrid,
    pub src: AttrValue,
    pub onload: Callback<(IconKind, usize)>,
    /// Present only when the hover sound is enabled.
    #[prop_or_default]
    pub onhover: Option<Callback<()>>,
}

#[function_component(SlotGridView)]
pub fn slot_grid_view(props: &SlotGridViewProps) -> Html {
    html! {
        <div class="slot-grid">
            { props.grid.slots.iter().map(|slot| {
                render_slot(slot, &props.src, &props.onload, props.onhover.as_ref())
            }).collect::<Html>() }
            if let Some(label) = props.grid.overflow_label() {
                <p class="slot-overflow">{ label }</p>
            }
        </div>
    }
}

fn render_slot(
    slot: &SlotDescriptor,
    src: &AttrValue,
    onload: &Callback<(IconKind, usize)>,
    onhover: Option<&Callback<()>>,
) -> Html {
    let key = (slot.kind, slot.index);
    let onload = onload.reform(move |_: Event| key);
    let onmouseenter = onhover.map(|cb| cb.reform(|_: MouseEvent| ()));

    html! {
        <div key={slot.index} class="slot" style={slot.box_style()}>
            <img
                src={src.clone()}
                alt="block"
                loading="lazy"
                style={slot.image_style()}
                {onload}
                {onmouseenter}
            />
        </div>
    }
}

/// Result text plus both icon grids.
#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub phase: Phase,
    pub message: AttrValue,
    pub full_stacks: SlotGrid,
    pub leftover: SlotGrid,
    pub full_stack_icon: AttrValue,
    pub leftover_icon: AttrValue,
    pub onload: Callback<(IconKind, usize)>,
    #[prop_or_default]
    pub onhover: Option<Callback<()>>,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    html! {
        <div class={props.phase.css_class()}>
            <p class="result-message" aria-live="polite">{ props.message.clone() }</p>
            <SlotGridView
                grid={props.full_stacks.clone()}
                src={props.full_stack_icon.clone()}
                onload={props.onload.clone()}
                onhover={props.onhover.clone()}
            />
            <SlotGridView
                grid={props.leftover.clone()}
                src={props.leftover_icon.clone()}
                onload={props.onload.clone()}
                onhover={props.onhover.clone()}
            />
        </div>
    }
}
