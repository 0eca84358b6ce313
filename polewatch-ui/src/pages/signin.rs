//! Sign-In Page
//!
//! Credentials form; stores token and role and moves on to the dashboard.

use leptos::*;
use leptos_router::*;

use crate::api::{self, SignInError};
use crate::state::global::GlobalState;
use crate::state::session;

const MSG_FILL_ALL_FIELDS: &str = "Please fill in all fields";
const MSG_LOGIN_SUCCESS: &str = "Login successful!";
const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";
const MSG_SOMETHING_WENT_WRONG: &str = "Something went wrong. Please try again.";

/// Sign-in page component
#[component]
pub fn SignIn() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (is_loading, set_is_loading) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let email = email.get();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            state.show_error(MSG_FILL_ALL_FIELDS);
            return;
        }

        set_is_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::sign_in(&email, &password).await {
                Ok(response) => match session::store_credentials(&response.token, &response.role) {
                    Ok(()) => {
                        state.show_success(response.message.as_deref().unwrap_or(MSG_LOGIN_SUCCESS));
                        navigate("/dashboard", Default::default());
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("Signin error: {}", e).into());
                        state.show_error(MSG_SOMETHING_WENT_WRONG);
                    }
                },
                Err(SignInError::Rejected(message)) => {
                    state.show_error(message.as_deref().unwrap_or(MSG_INVALID_CREDENTIALS));
                }
                Err(SignInError::Failed(e)) => {
                    web_sys::console::error_1(&format!("Signin error: {}", e).into());
                    state.show_error(MSG_SOMETHING_WENT_WRONG);
                }
            }
            set_is_loading.try_set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-[70vh]">
            <div class="w-full max-w-md bg-[#1e1e1e] border border-gray-800 rounded-xl p-8">
                <div class="text-center mb-6">
                    <h1 class="text-2xl font-bold">"Welcome Back"</h1>
                    <p class="text-gray-400 mt-1">"Sign in to access your dashboard"</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div class="space-y-2">
                        <label for="email" class="block text-sm text-gray-400">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full bg-gray-800 rounded-lg px-4 py-3 border border-gray-700
                                   focus:border-emerald-500 focus:outline-none"
                        />
                    </div>

                    <div class="space-y-2">
                        <label for="password" class="block text-sm text-gray-400">"Password"</label>
                        <input
                            id="password"
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-800 rounded-lg px-4 py-3 border border-gray-700
                                   focus:border-emerald-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || is_loading.get()
                        class="w-full py-3 bg-emerald-700 hover:bg-emerald-600 disabled:bg-gray-700
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if is_loading.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
