use dioxus::prelude::*;

use crate::models::CreationRecord;

/// Renders a single creation record.
#[component]
pub fn CreationItem(item: CreationRecord) -> Element {
    let created_label = item
        .created_at
        .map(|created_at| created_at.format("%b %e, %Y").to_string());

    rsx! {
        div { class: "p-4 bg-white rounded-xl border border-gray-200",
            div { class: "flex justify-between items-start gap-4",
                div {
                    h3 { class: "font-medium text-slate-700", "{item.prompt}" }
                    if let Some(created) = created_label {
                        p { class: "text-gray-400 text-xs mt-1", "{created}" }
                    }
                }
                span { class: "bg-blue-50 text-blue-600 px-4 py-1 rounded-full text-xs", "{item.kind}" }
            }
            p { class: "mt-3 text-sm text-gray-600", "{item.content}" }
        }
    }
}
