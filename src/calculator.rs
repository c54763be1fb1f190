//! State owned by one calculator instance and the transitions between its phases.
//!
//! ```text
//! Idle --submit(invalid)--> ShowingError  --edit--> Idle
//! Idle --submit(valid)----> ShowingResult --edit--> Idle
//! ```
//!
//! Returning to `Idle` hides the last result without discarding it.

use crate::load_state::IconLoadState;
use crate::slots::{render_slots, IconKind, SlotGrid};
use crate::{format_result_message, validate_amount, Decomposition, InvalidAmount};
use log::debug;
use std::rc::Rc;
use yew::functional::Reducible;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    ShowingError,
    ShowingResult,
}

impl Phase {
    /// Class for the result region, so errors can be styled apart from results.
    pub fn css_class(self) -> &'static str {
        match self {
            Phase::Idle => "result-panel",
            Phase::ShowingError => "result-panel result-panel--error",
            Phase::ShowingResult => "result-panel result-panel--result",
        }
    }
}

/// What the result region shows after a submit.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub result_message: String,
    pub visuals: Decomposition,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorAction {
    /// The input text changed to this value.
    Edit(String),
    Submit,
    IconLoaded { kind: IconKind, index: usize },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorState {
    raw_input: String,
    display: Option<DisplayState>,
    phase: Phase,
    icons: IconLoadState,
}

impl CalculatorState {
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last submit outcome, shown or not.
    pub fn display(&self) -> Option<&DisplayState> {
        self.display.as_ref()
    }

    pub fn visible_display(&self) -> Option<&DisplayState> {
        self.display.as_ref().filter(|d| d.visible)
    }

    pub fn edit(&mut self, text: String) {
        self.raw_input = text;
        if let Some(display) = self.display.as_mut() {
            display.visible = false;
        }
        self.phase = Phase::Idle;
    }

    pub fn submit(&mut self) -> Result<Decomposition, InvalidAmount> {
        let outcome = validate_amount(&self.raw_input);
        match &outcome {
            Ok(visuals) => {
                debug!("submit '{}' -> {:?}", self.raw_input, visuals);
                self.display = Some(DisplayState {
                    result_message: format_result_message(visuals),
                    visuals: *visuals,
                    visible: true,
                });
                self.raw_input.clear();
                self.phase = Phase::ShowingResult;
            }
            Err(reason) => {
                debug!("submit '{}' rejected: {}", self.raw_input, reason);
                self.display = Some(DisplayState {
                    result_message: reason.user_message().to_string(),
                    visuals: Decomposition::default(),
                    visible: true,
                });
                self.phase = Phase::ShowingError;
            }
        }
        outcome
    }

    /// Returns `false` if the slot was already marked.
    pub fn icon_loaded(&mut self, kind: IconKind, index: usize) -> bool {
        self.icons.mark_loaded(kind, index)
    }

    pub fn slots(&self, kind: IconKind) -> SlotGrid {
        let visuals = self.display.as_ref().map(|d| d.visuals).unwrap_or_default();
        let count = match kind {
            IconKind::FullStack => visuals.full_stacks,
            IconKind::Leftover => visuals.leftover as f64,
        };
        render_slots(count, kind, kind.default_size(), &self.icons)
    }

    fn apply(&mut self, action: CalculatorAction) {
        match action {
            CalculatorAction::Edit(text) => self.edit(text),
            CalculatorAction::Submit => {
                let _ = self.submit();
            }
            CalculatorAction::IconLoaded { kind, index } => {
                self.icon_loaded(kind, index);
            }
        }
    }
}

impl Reducible for CalculatorState {
    type Action = CalculatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        // A repeated load event must not trigger a re-render.
        if let CalculatorAction::IconLoaded { kind, index } = action {
            if self.icons.is_loaded(kind, index) {
                return self;
            }
        }
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
