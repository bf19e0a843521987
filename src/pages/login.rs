//! Login Page
//!
//! User-code/password form against `POST /login`. A successful login
//! is persisted through the session provider; the navbar picks it up
//! from the store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiError};
use crate::session::Session;
use crate::store::{store_set_session_user, use_app_store};

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_app_store();
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let (usercode, set_usercode) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (message, set_message) = signal(None::<String>);

    let signup_nav = navigate.clone();
    let on_signup = move |_| signup_nav("/UserRegister", Default::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        set_message.set(None);

        let code = usercode.get_untracked();
        let pass = password.get_untracked();
        if code.trim().is_empty() || pass.trim().is_empty() {
            set_message.set(Some(
                "Please fill in both User Code and Password.".to_string(),
            ));
            return;
        }

        set_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&code, &pass).await {
                Ok(login) => {
                    session.store(&login);
                    store_set_session_user(&store, Some(login));
                    set_loading.set(false);
                    navigate("/", Default::default());
                }
                Err(ApiError::Rejected(msg)) => {
                    set_loading.set(false);
                    set_message.set(Some(msg));
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("Login error: {}", err).into());
                    set_loading.set(false);
                    set_message.set(Some(
                        "A network error occurred. Please try again later.".to_string(),
                    ));
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-visual">
                <h1>"REAL ESTATE"</h1>
                <p>"Your trusted platform for property management and rental discovery."</p>
            </div>

            <div class="login-panel">
                <h2>"Welcome Back"</h2>
                <p class="login-subtitle">"Log in to manage your properties or find your next home."</p>

                {move || message.get().map(|text| view! {
                    <div class="message-banner error">
                        <span>{text}</span>
                        <button class="banner-close" on:click=move |_| set_message.set(None)>
                            "×"
                        </button>
                    </div>
                })}

                <form on:submit=on_submit>
                    <label>
                        "Username"
                        <input
                            type="text"
                            placeholder="Enter your username"
                            prop:value=move || usercode.get()
                            on:input=move |ev| set_usercode.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </label>

                    <button type="submit" class="login-submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <p class="login-footer">
                    "Don't have an account? "
                    <a class="signup-link" on:click=on_signup>"Sign Up Now"</a>
                </p>
            </div>
        </div>
    }
}
