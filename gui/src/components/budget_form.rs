// Form sections: income sources, expense categories, household and region.
#![allow(non_snake_case)]
use dioxus::prelude::*;
use engine::data::{format_currency, tidy_amount_input};
use engine::models::{ExpenseCategory, IncomeSource};
use engine::AdvisorEngine;
use std::rc::Rc;

use crate::components::region_picker::RegionPicker;
use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;

/// Text input for an amount. A comma marks the cents and dots group
/// thousands ("1.000,00"); without a comma a dot is read as the decimal
/// point, so "1.000" means one real. On blur the text is rewritten to the
/// value that is actually counted.
#[component]
pub fn MoneyField(label: &'static str, value: String, on_change: EventHandler<String>) -> Element {
    let typed = value.clone();
    rsx! {
        label {
            style: "display: flex; justify-content: space-between; align-items: center; margin: 6px 0;",
            span { "{label}" }
            input {
                r#type: "text",
                inputmode: "decimal",
                placeholder: "0,00",
                title: "Use vírgula para os centavos, ex.: 1.000,00",
                value: "{value}",
                style: "width: 140px; padding: 6px; text-align: right;",
                oninput: move |evt| on_change.call(evt.value()),
                onblur: move |_| {
                    let tidy = tidy_amount_input(&typed);
                    if tidy != typed {
                        on_change.call(tidy);
                    }
                },
            }
        }
    }
}

#[component]
fn Section(title: &'static str, children: Element) -> Element {
    let state = use_context::<AppState>();
    let palette = ThemePalette::for_theme(&(state.theme)());
    rsx! {
        section {
            style: "padding: 12px 16px; border: 1px solid {palette.border}; border-radius: 8px; background-color: {palette.surface};",
            h2 { style: "margin-top: 0; font-size: 1.1em;", "{title}" }
            {children}
        }
    }
}

#[component]
pub fn IncomeSection() -> Element {
    let state = use_context::<AppState>();
    let mut form = state.form;

    rsx! {
        Section {
            title: "Receitas",
            for source in IncomeSource::ALL {
                MoneyField {
                    key: "{source.label()}",
                    label: source.label(),
                    value: form.read().income_raw(source).to_string(),
                    on_change: move |raw: String| form.write().set_income(source, raw),
                }
            }
        }
    }
}

#[component]
pub fn ExpenseSection() -> Element {
    let state = use_context::<AppState>();
    let mut form = state.form;

    rsx! {
        Section {
            title: "Despesas",
            for category in ExpenseCategory::ALL {
                MoneyField {
                    key: "{category.label()}",
                    label: category.label(),
                    value: form.read().expense_raw(category).to_string(),
                    on_change: move |raw: String| form.write().set_expense(category, raw),
                }
            }
        }
    }
}

#[component]
pub fn HouseholdSection() -> Element {
    let state = use_context::<AppState>();
    let engine = use_context::<Rc<AdvisorEngine>>();
    let mut form = state.form;
    let household = form.read().household_size.clone();
    let selected = form.read().region();

    let table = engine.basket_table();
    let basket_note = selected.and_then(|region| {
        table.cost_for(region).map(|cost| match table.reference_label() {
            Some(month) => format!("Cesta básica em {}: {} (referência {})", region.name(), format_currency(cost), month),
            None => format!("Cesta básica em {}: {}", region.name(), format_currency(cost)),
        })
    });

    rsx! {
        div {
            style: "margin-top: 16px;",
            Section {
                title: "Família e região",
                label {
                    style: "display: flex; justify-content: space-between; align-items: center; margin: 6px 0;",
                    span { "Pessoas na casa" }
                    input {
                        r#type: "number",
                        min: "1",
                        step: "1",
                        value: "{household}",
                        style: "width: 80px; padding: 6px; text-align: right;",
                        oninput: move |evt| form.write().household_size = evt.value(),
                    }
                }
                RegionPicker {
                    selected,
                    on_select: move |region: Option<shared::Region>| {
                        form.write().region = region.map(|r| r.code().to_string()).unwrap_or_default();
                    },
                }
                {basket_note.map(|note| rsx! {
                    p { style: "margin: 8px 0 0; font-size: 0.9em; opacity: 0.8;", "{note}" }
                })}
            }
        }
    }
}
