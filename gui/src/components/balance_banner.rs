#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;

#[component]
pub fn BalanceBanner() -> Element {
    let state = use_context::<AppState>();
    let palette = ThemePalette::for_theme(&(state.theme)());
    let balance = state.presentation.read().balance.clone();
    let color = palette.tone_color(balance.tone).to_string();

    rsx! {
        div {
            class: "balance {balance.tone.css_class()}",
            style: "padding: 16px; border-radius: 8px; border: 1px solid {palette.border}; background-color: {palette.surface};",
            span { style: "font-size: 0.9em;", "Saldo restante" }
            div {
                style: "font-size: 2em; font-weight: bold; color: {color};",
                "{balance.text}"
            }
        }
    }
}
