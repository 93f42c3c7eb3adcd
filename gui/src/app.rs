#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::services::Debouncer;
use engine::{assess, AdvisorEngine};
use std::rc::Rc;

use crate::components::advisory_list::AdvisoryList;
use crate::components::balance_banner::BalanceBanner;
use crate::components::budget_form::{ExpenseSection, HouseholdSection, IncomeSection};
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    let engine = use_context_provider(|| Rc::new(AdvisorEngine::with_settings(config.advisor.clone())));
    let debouncer = use_hook(|| Debouncer::new(engine.settings().debounce_window()));
    let state = use_context_provider(|| AppState::new(config.app.theme(), &engine));

    // Re-runs whenever the form signal changes. Keystroke bursts collapse
    // into a single evaluation once typing pauses for the quiet window.
    use_effect(move || {
        let form = state.form.read().clone();
        let engine = Rc::clone(&engine);
        let debouncer = debouncer.clone();
        let mut presentation = state.presentation;
        spawn(async move {
            debouncer
                .run(move || async move { presentation.set(assess(&engine, &form)) })
                .await;
        });
    });

    let mut theme = state.theme;
    let palette = ThemePalette::for_theme(&theme());

    rsx! {
        div {
            class: "budget-app",
            style: "min-height: 100vh; padding: 24px; font-family: sans-serif; background-color: {palette.background}; color: {palette.foreground};",
            header {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                h1 { style: "margin: 0; font-size: 1.6em;", "{config.app.title}" }
                button {
                    style: "padding: 6px 12px; border: 1px solid {palette.border}; background-color: {palette.surface}; color: {palette.foreground}; border-radius: 4px; cursor: pointer;",
                    onclick: move |_| {
                        let next = theme().toggled();
                        theme.set(next);
                    },
                    "Alternar tema"
                }
            }
            BalanceBanner {}
            div {
                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-top: 16px;",
                IncomeSection {}
                ExpenseSection {}
            }
            HouseholdSection {}
            AdvisoryList {}
        }
    }
}
