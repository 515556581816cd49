use dioxus::prelude::*;

use crate::ui::components::toast_context::ToastContext;

/// Dismissible error toast, mounted once at the app root.
#[component]
pub fn ToastHost() -> Element {
    let toast = use_context::<ToastContext>();
    let on_dismiss = toast.clone();

    rsx! {
        if *toast.is_open.read() {
            div {
                class: "fixed bottom-4 right-4 bg-red-600 text-white px-6 py-4 rounded-lg shadow-lg z-50 max-w-md",
                div {
                    class: "flex items-center justify-between gap-4",
                    span { {toast.message()} }
                    button {
                        class: "text-white hover:text-gray-200",
                        onclick: move |_| on_dismiss.dismiss(),
                        "✕"
                    }
                }
            }
        }
    }
}
