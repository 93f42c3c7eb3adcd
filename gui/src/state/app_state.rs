// Global application state for the GUI.
// Provided once at the root via context; components pick it up with
// `use_context::<AppState>()`. Each piece is its own signal so that writing
// the rendered result does not re-trigger evaluation of the form.
use dioxus::prelude::*;
use engine::services::Presentation;
use engine::{assess, AdvisorEngine, BudgetForm};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub theme: Signal<Theme>,
    /// Raw field text, written on every keystroke.
    pub form: Signal<BudgetForm>,
    /// Last evaluated result; later evaluations replace it wholesale.
    pub presentation: Signal<Presentation>,
}

impl AppState {
    /// Must be called from a component (creates signals).
    pub fn new(theme: Theme, engine: &AdvisorEngine) -> Self {
        let form = BudgetForm::new();
        let initial = assess(engine, &form);
        Self {
            theme: Signal::new(theme),
            form: Signal::new(form),
            presentation: Signal::new(initial),
        }
    }
}
