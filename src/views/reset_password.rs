use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::ApiClient;

#[derive(Clone, Copy, PartialEq)]
enum Step {
    Request,
    Reset,
}

/// Recuperación de contraseña en dos pasos: pedir código + resetear con él.
#[function_component(ResetPasswordView)]
pub fn reset_password_view() -> Html {
    let email = use_state(String::new);
    let code = use_state(String::new);
    let new_password = use_state(String::new);
    let step = use_state(|| Step::Request);
    let message = use_state(String::new);
    let message_type = use_state(String::new);
    let navigator = use_navigator().expect("ResetPasswordView fuera del router");

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_request = {
        let email = email.clone();
        let step = step.clone();
        let message = message.clone();
        let message_type = message_type.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_val = (*email).clone();
            if email_val.trim().is_empty() {
                message.set("Please enter your email".to_string());
                message_type.set("error".to_string());
                return;
            }

            let step = step.clone();
            let message = message.clone();
            let message_type = message_type.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.forgot_password(email_val.trim()).await {
                    Ok(()) => {
                        message.set(
                            "✅ If the email exists, a password reset code has been sent. Please enter it below."
                                .to_string(),
                        );
                        message_type.set("success".to_string());
                        step.set(Step::Reset);
                    }
                    Err(e) => {
                        log::error!("❌ forgot-password falló: {}", e);
                        message.set(e.user_message());
                        message_type.set("error".to_string());
                    }
                }
            });
        })
    };

    let on_reset = {
        let code = code.clone();
        let new_password = new_password.clone();
        let message = message.clone();
        let message_type = message_type.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let code_val = (*code).clone();
            let password_val = (*new_password).clone();
            if code_val.trim().is_empty() || password_val.is_empty() {
                message.set("Please fill in all fields".to_string());
                message_type.set("error".to_string());
                return;
            }

            let message = message.clone();
            let message_type = message_type.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.reset_password(code_val.trim(), &password_val).await {
                    Ok(()) => {
                        message
                            .set("🎉 Password reset successfully! Redirecting to login...".to_string());
                        message_type.set("success".to_string());
                        gloo_timers::callback::Timeout::new(1500, move || {
                            navigator.push(&Route::Login);
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("❌ reset-password falló: {}", e);
                        message.set(e.user_message());
                        message_type.set("error".to_string());
                    }
                }
            });
        })
    };

    html! {
        <div class="login-page">
            <div class="login-container">
                <h1>{"Reset Password"}</h1>
                <br />
                if *step == Step::Request {
                    <form onsubmit={on_request}>
                        <input
                            type="email"
                            placeholder="Enter your email"
                            value={(*email).clone()}
                            oninput={bind(&email)}
                            required=true
                        />
                        <button type="submit">{"Send Reset Code"}</button>
                    </form>
                } else {
                    <form onsubmit={on_reset}>
                        <input
                            type="text"
                            placeholder="Enter 6-digit reset code"
                            value={(*code).clone()}
                            oninput={bind(&code)}
                            required=true
                        />
                        <input
                            type="password"
                            placeholder="Enter new password"
                            value={(*new_password).clone()}
                            oninput={bind(&new_password)}
                            required=true
                        />
                        <button type="submit">{"Reset Password"}</button>
                    </form>
                }

                if !message.is_empty() {
                    <p class={classes!("message", (*message_type).clone())}>{(*message).clone()}</p>
                }

                <p class="register-link">
                    {"Remember your password? "}
                    <Link<Route> classes="register" to={Route::Login}>{"Back to login"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
