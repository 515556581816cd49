use dioxus::prelude::*;

use crate::ui::Route;

/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "bg-gray-800 text-white p-4 flex space-x-6",
            Link {
                to: Route::Dashboard {},
                class: "hover:text-blue-300 transition-colors",
                "Dashboard"
            }
            Link {
                to: Route::Account {},
                class: "hover:text-blue-300 transition-colors",
                "Account"
            }
        }

        Outlet::<Route> {}
    }
}
