use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::debug;

use crate::dashboard::{load_dashboard, DashboardState};
use crate::models::{CreationRecord, Plan};
use crate::ui::app_context::AppContext;
use crate::ui::components::creation_item::CreationItem;
use crate::ui::components::toast_context::ToastContext;

/// Dashboard page: summary cards plus the signed-in user's recent
/// creations, fetched once on mount.
#[component]
pub fn Dashboard() -> Element {
    debug!("Component rendering");
    let app = use_context::<AppContext>();
    let toast = use_context::<ToastContext>();
    let session = app.session.clone();

    // Core view state. The loader only gets a weak handle, so an unmounted
    // view is dropped, not mutated; the signals below are the render
    // projection of the settled state.
    let model = use_hook(|| Rc::new(RefCell::new(DashboardState::new())));
    let mut creations = use_signal(Vec::<CreationRecord>::new);
    let mut loading = use_signal(|| true);

    // Run the one-shot fetch on component mount.
    {
        let session = session.clone();
        use_effect(move || {
            let view = Rc::downgrade(&model);
            let session = session.clone();
            let api = app.creations.clone();
            let toast = toast.clone();
            spawn(async move {
                load_dashboard(view.clone(), session.as_ref(), api.as_ref(), &toast).await;
                if let Some(model) = view.upgrade() {
                    let settled = model.borrow();
                    creations.set(settled.creations().to_vec());
                    loading.set(settled.is_loading());
                }
            });
        });
    }

    let plan = session
        .current_profile()
        .map(|profile| profile.plan())
        .unwrap_or(Plan::Free);

    rsx! {
        div { class: "h-full overflow-y-auto p-6",
            if loading() {
                div { class: "flex justify-center items-center py-12",
                    div { class: "animate-spin rounded-full h-11 w-11 border-[3px] border-purple-500 border-t-transparent" }
                }
            } else {
                div { class: "flex flex-wrap gap-4",
                    SummaryCard {
                        title: "Total Creations".to_string(),
                        value: creations().len().to_string(),
                    }
                    SummaryCard {
                        title: "Active Plan".to_string(),
                        value: plan.label().to_string(),
                    }
                }

                div { class: "space-y-3",
                    p { class: "mt-6 mb-4 text-lg font-medium text-gray-700", "Recent Creations" }
                    if creations().is_empty() {
                        p { class: "text-gray-500 text-sm", "No creations found." }
                    } else {
                        for item in creations() {
                            CreationItem { key: "{item.id}", item }
                        }
                    }
                }
            }
        }
    }
}

/// One stat card in the summary row.
#[component]
fn SummaryCard(title: String, value: String) -> Element {
    rsx! {
        div { class: "flex justify-between items-center w-72 p-4 px-6 bg-white rounded-xl border border-gray-200",
            div { class: "text-slate-600",
                p { class: "text-sm", "{title}" }
                h2 { class: "text-xl font-semibold", "{value}" }
            }
        }
    }
}
