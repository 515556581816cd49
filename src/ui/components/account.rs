use dioxus::prelude::*;
use tracing::warn;

use crate::ui::app_context::AppContext;

/// Account page: manage the session token that signs this client in.
#[component]
pub fn Account() -> Element {
    let app = use_context::<AppContext>();
    let mut token_input = use_signal(String::new);
    let mut is_saving = use_signal(|| false);
    let mut status_message = use_signal(|| None::<String>);
    let mut has_token = use_signal(|| false);

    // Check sign-in state on component load
    {
        let session = app.session.clone();
        use_effect(move || {
            has_token.set(session.has_session_token());
        });
    }

    let save_session = app.session.clone();
    let mut save_token_action = move || {
        let token = token_input.read().clone();
        if token.trim().is_empty() {
            status_message.set(Some("Please enter a session token".to_string()));
            return;
        }

        let session = save_session.clone();
        spawn(async move {
            is_saving.set(true);
            status_message.set(None);

            match session.set_and_validate_session_token(&token).await {
                Ok(()) => {
                    status_message.set(Some("Signed in successfully".to_string()));
                    has_token.set(true);
                    token_input.set(String::new()); // Clear the input for security
                    if let Err(e) = session.refresh_profile().await {
                        warn!("profile refresh failed: {}", e);
                    }
                }
                Err(e) => {
                    status_message.set(Some(format!("Error: {}", e)));
                }
            }

            is_saving.set(false);
        });
    };

    let clear_session = app.session.clone();
    let mut sign_out_action = move || match clear_session.clear_session_token() {
        Ok(()) => {
            status_message.set(Some("Signed out".to_string()));
            has_token.set(false);
        }
        Err(e) => {
            status_message.set(Some(format!("Error signing out: {}", e)));
        }
    };

    rsx! {
        div {
            class: "container mx-auto p-6 max-w-2xl",
            h1 {
                class: "text-3xl font-bold mb-6",
                "Account"
            }

            div {
                class: "bg-white rounded-lg shadow-md p-6 mb-6",
                h2 {
                    class: "text-xl font-bold mb-4",
                    "Session"
                }

                if has_token() {
                    div {
                        class: "flex items-center justify-between bg-green-50 border border-green-200 rounded p-4 mb-4",
                        span {
                            class: "text-green-600 font-medium",
                            "✓ Signed in"
                        }
                        button {
                            class: "bg-red-500 text-white px-4 py-2 rounded hover:bg-red-600 transition-colors",
                            onclick: move |_| sign_out_action(),
                            "Sign Out"
                        }
                    }
                } else {
                    div {
                        class: "space-y-4",
                        div {
                            label {
                                class: "block text-sm font-medium text-gray-700 mb-2",
                                "Session Token"
                            }
                            input {
                                r#type: "password",
                                class: "w-full p-3 border border-gray-300 rounded-lg",
                                placeholder: "Paste your session token",
                                value: "{token_input}",
                                oninput: move |event| {
                                    token_input.set(event.value());
                                    status_message.set(None);
                                }
                            }
                        }

                        button {
                            class: "bg-blue-500 text-white px-6 py-2 rounded-lg hover:bg-blue-600 transition-colors disabled:bg-gray-400",
                            disabled: is_saving(),
                            onclick: move |_| save_token_action(),
                            if is_saving() {
                                "Validating..."
                            } else {
                                "Save & Validate"
                            }
                        }
                    }
                }

                if let Some(message) = status_message() {
                    div {
                        class: if message.starts_with("Error") {
                            "mt-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded"
                        } else {
                            "mt-4 p-3 bg-green-100 border border-green-400 text-green-700 rounded"
                        },
                        "{message}"
                    }
                }
            }
        }
    }
}
