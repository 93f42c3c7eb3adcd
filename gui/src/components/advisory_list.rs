// Renders the advisories in evaluation order, or nothing at all when the
// engine asks for the panel to be cleared.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::services::AdvisoryPanel;

use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;

#[component]
pub fn AdvisoryList() -> Element {
    let state = use_context::<AppState>();
    let palette = ThemePalette::for_theme(&(state.theme)());
    let panel = state.presentation.read().advisories.clone();

    let advisories = match panel {
        AdvisoryPanel::Clear => return None,
        AdvisoryPanel::Show(advisories) => advisories,
    };

    let items: Vec<(String, String, String)> = advisories
        .into_iter()
        .map(|advisory| {
            (
                advisory.kind.as_str().to_string(),
                palette.kind_color(advisory.kind).to_string(),
                advisory.text,
            )
        })
        .collect();

    rsx! {
        section {
            class: "advisories",
            style: "margin-top: 16px;",
            h2 { style: "font-size: 1.1em;", "Dicas" }
            ul {
                style: "list-style: none; padding: 0; margin: 0;",
                for (idx, (kind, color, text)) in items.into_iter().enumerate() {
                    li {
                        key: "{idx}",
                        class: "advisory advisory-{kind}",
                        style: "padding: 10px 12px; margin-bottom: 8px; border-left: 4px solid {color}; background-color: {palette.surface}; border-radius: 3px;",
                        "{text}"
                    }
                }
            }
        }
    }
}
