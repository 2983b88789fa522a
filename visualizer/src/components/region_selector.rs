// Dropdown choosing which region the chart shows
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::RegionFilter;

use crate::state::app_state::selector_options;

/// DOM id of the region dropdown.
pub const REGION_SELECTOR_ID: &str = "region_selector";

#[component]
pub fn RegionSelector(selected: RegionFilter, on_select: EventHandler<String>) -> Element {
    let options = selector_options();

    rsx! {
        div {
            class: "region-selector",
            style: "text-align: center; margin: 12px 0;",
            span { "Region: " }
            select {
                id: REGION_SELECTOR_ID,
                value: "{selected}",
                onchange: move |evt: FormEvent| on_select.call(evt.value()),
                for opt in options {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
