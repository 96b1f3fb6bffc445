use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::services::ApiClient;

#[derive(Clone, Copy, PartialEq)]
enum Step {
    Register,
    Verify,
}

/// Registro en dos pasos: alta pendiente + código de verificación por email.
#[function_component(RegisterView)]
pub fn register_view() -> Html {
    let company_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let code = use_state(String::new);
    let step = use_state(|| Step::Register);
    let message = use_state(String::new);
    let message_type = use_state(String::new);
    let navigator = use_navigator().expect("RegisterView fuera del router");

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_register = {
        let company_name = company_name.clone();
        let email = email.clone();
        let password = password.clone();
        let step = step.clone();
        let message = message.clone();
        let message_type = message_type.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let company_val = (*company_name).clone();
            let email_val = (*email).clone();
            let password_val = (*password).clone();

            if company_val.trim().is_empty() || email_val.trim().is_empty() || password_val.is_empty()
            {
                message.set("Please fill in all fields".to_string());
                message_type.set("error".to_string());
                return;
            }

            let step = step.clone();
            let message = message.clone();
            let message_type = message_type.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api
                    .register(company_val.trim(), email_val.trim(), &password_val)
                    .await
                {
                    Ok(()) => {
                        message.set(
                            "✅ Verification code sent to your email. Please enter it below."
                                .to_string(),
                        );
                        message_type.set("success".to_string());
                        step.set(Step::Verify);
                    }
                    Err(e) => {
                        log::error!("❌ Registro falló: {}", e);
                        message.set(e.user_message());
                        message_type.set("error".to_string());
                    }
                }
            });
        })
    };

    let on_verify = {
        let code = code.clone();
        let message = message.clone();
        let message_type = message_type.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let code_val = (*code).clone();
            if code_val.trim().is_empty() {
                message.set("Please enter the verification code".to_string());
                message_type.set("error".to_string());
                return;
            }

            let message = message.clone();
            let message_type = message_type.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.verify_registration(code_val.trim()).await {
                    Ok(()) => {
                        message.set("🎉 Verification successful! Redirecting to login...".to_string());
                        message_type.set("success".to_string());
                        gloo_timers::callback::Timeout::new(1500, move || {
                            navigator.push(&Route::Login);
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("❌ Verificación falló: {}", e);
                        message.set(e.user_message());
                        message_type.set("error".to_string());
                    }
                }
            });
        })
    };

    let on_google = Callback::from(move |_| {
        let api = ApiClient::new();
        if let Some(window) = web_sys::window() {
            let origin = window.location().origin().unwrap_or_default();
            let _ = window.location().set_href(&api.google_login_url(&origin));
        }
    });

    html! {
        <div class="register-page">
            <div class="register-container">
                if *step == Step::Register {
                    <h1>{"Register"}</h1>
                    <form onsubmit={on_register}>
                        <input
                            type="text"
                            placeholder="Company Name"
                            value={(*company_name).clone()}
                            oninput={bind(&company_name)}
                            required=true
                        />
                        <input
                            type="email"
                            placeholder="Email"
                            value={(*email).clone()}
                            oninput={bind(&email)}
                            required=true
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            value={(*password).clone()}
                            oninput={bind(&password)}
                            required=true
                        />
                        <button type="submit">{"Register"}</button>
                    </form>

                    <div class="divider"><span>{"OR"}</span></div>

                    <button type="button" class="google-signin-btn" onclick={on_google}>
                        {"Continue with Google"}
                    </button>
                } else {
                    <h1>{"Email Verification"}</h1>
                    <form onsubmit={on_verify}>
                        <input
                            type="text"
                            placeholder="Enter 6-digit code"
                            value={(*code).clone()}
                            oninput={bind(&code)}
                            required=true
                        />
                        <button type="submit">{"Verify"}</button>
                    </form>
                }

                if !message.is_empty() {
                    <p class={classes!("message", (*message_type).clone())}>{(*message).clone()}</p>
                }

                if *step == Step::Register {
                    <p class="register-link">
                        {"Already have an account? "}
                        <Link<Route> to={Route::Login}>{"Login here"}</Link<Route>>
                    </p>
                }
            </div>
        </div>
    }
}
