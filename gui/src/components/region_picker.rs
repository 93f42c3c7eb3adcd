// Region picker with fuzzy search over code and name ("sp", "sao paulo", "gran norte").
#![allow(non_snake_case)]
use dioxus::prelude::*;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use shared::Region;

/// Regions matching `query`, best match first. An empty query lists all
/// regions in their usual order.
pub fn filter_regions(matcher: &SkimMatcherV2, query: &str) -> Vec<Region> {
    let query = query.trim();
    if query.is_empty() {
        return Region::ALL.to_vec();
    }

    let mut scored: Vec<(i64, Region)> = Region::ALL
        .iter()
        .filter_map(|region| {
            let haystack = format!("{} {}", region.code(), region.name());
            matcher.fuzzy_match(&haystack, query).map(|score| (score, *region))
        })
        .collect();

    // Stable sort keeps the listing order among equal scores
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, region)| region).collect()
}

#[component]
pub fn RegionPicker(selected: Option<Region>, on_select: EventHandler<Option<Region>>) -> Element {
    let mut filter_text = use_signal(String::new);
    let matcher = use_hook(|| std::rc::Rc::new(SkimMatcherV2::default()));

    let filtered = filter_regions(&matcher, &filter_text.read());
    let items: Vec<(Region, &'static str)> = filtered
        .iter()
        .map(|region| {
            let style = if Some(*region) == selected {
                "padding: 6px; cursor: pointer; font-weight: bold;"
            } else {
                "padding: 6px; cursor: pointer;"
            };
            (*region, style)
        })
        .collect();
    let selected_label = match selected {
        Some(region) => format!("{} ({})", region.name(), region.code()),
        None => "Nenhuma".to_string(),
    };

    rsx! {
        div {
            class: "region-picker",
            style: "margin-top: 8px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                span { "Estado: {selected_label}" }
                if selected.is_some() {
                    button {
                        style: "padding: 2px 8px; cursor: pointer;",
                        onclick: move |_| on_select.call(None),
                        "Limpar"
                    }
                }
            }
            input {
                r#type: "text",
                value: "{filter_text}",
                placeholder: "Buscar estado...",
                style: "width: calc(100% - 16px); padding: 6px; margin: 6px 0;",
                oninput: move |evt| filter_text.set(evt.value()),
            }
            ul {
                style: "list-style: none; padding: 0; margin: 0; max-height: 180px; overflow-y: auto;",
                if filtered.is_empty() {
                    li { style: "padding: 6px; color: #888;", "Nenhum estado encontrado." }
                }
                for (region, item_style) in items {
                    li {
                        key: "{region.code()}",
                        style: item_style,
                        onclick: move |_| {
                            on_select.call(Some(region));
                            filter_text.set(String::new());
                        },
                        "{region.name()} ({region.code()})"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_lists_all() {
        let matcher = SkimMatcherV2::default();
        assert_eq!(filter_regions(&matcher, "  "), Region::ALL.to_vec());
    }

    #[test]
    fn test_query_by_code_and_name() {
        let matcher = SkimMatcherV2::default();
        assert_eq!(filter_regions(&matcher, "SP").first(), Some(&Region::SaoPaulo));
        let results = filter_regions(&matcher, "rio grande");
        assert!(results.contains(&Region::RioGrandeDoSul));
        assert!(results.contains(&Region::RioGrandeDoNorte));
        assert!(!results.contains(&Region::Bahia));
    }

    #[test]
    fn test_no_match() {
        let matcher = SkimMatcherV2::default();
        assert!(filter_regions(&matcher, "zzzz").is_empty());
    }
}
