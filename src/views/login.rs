use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::{use_session, SessionAction};
use crate::models::UserProfile;
use crate::services::ApiClient;

/// Pantalla de login. En éxito guarda el perfil en el session store y navega
/// a Profile con un pequeño delay para dejar propagar el estado.
#[function_component(LoginView)]
pub fn login_view() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let message = use_state(String::new);
    let session = use_session();
    let navigator = use_navigator().expect("LoginView fuera del router");

    // Completar handoff pendiente de Google OAuth al montar
    {
        let session = session.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.google_check().await {
                    Ok(check) if check.success => {
                        if let (Some(email), Some(company_name)) = (check.email, check.company_name)
                        {
                            log::info!("✅ Login via Google: {}", email);
                            session.dispatch(SessionAction::LoggedIn(UserProfile {
                                email,
                                company_name,
                            }));
                            navigator.replace(&Route::Profile);
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        // Sin handoff pendiente; no es un error de usuario
                        log::debug!("google/check: {}", e);
                    }
                }
            });
            || ()
        });
    }

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let message = message.clone();
        let session = session.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_val = (*email).clone();
            let password_val = (*password).clone();

            // Validación local antes de tocar la red
            if email_val.trim().is_empty() || password_val.is_empty() {
                message.set("Please fill in all fields".to_string());
                return;
            }

            let message = message.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.login(email_val.trim(), &password_val).await {
                    Ok(profile) => {
                        log::info!("✅ Logged in as: {}", profile.email);
                        session.dispatch(SessionAction::LoggedIn(profile));
                        // Pequeño delay para que el contexto propague antes de navegar
                        let navigator = navigator.clone();
                        Timeout::new(200, move || navigator.replace(&Route::Profile)).forget();
                    }
                    Err(e) => {
                        log::error!("❌ Login falló: {}", e);
                        message.set(e.user_message());
                    }
                }
            });
        })
    };

    html! {
        <div class="login-page">
            <div class="login-container">
                <h1>{"Login"}</h1>
                <br />
                <form onsubmit={on_submit}>
                    <input
                        type="email"
                        placeholder="Username"
                        value={(*email).clone()}
                        oninput={on_email_change}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password_change}
                    />
                    <button type="submit">{"LOGIN"}</button>
                </form>
                <p>{(*message).clone()}</p>
                <p class="register-link">
                    {"Don't have an account? "}
                    <Link<Route> classes="register" to={Route::Register}>
                        {"Sign up to register"}
                    </Link<Route>>
                </p>
                <p class="register-link">
                    {"Forgot your password? "}
                    <Link<Route> classes="register" to={Route::ResetPassword}>
                        {"Reset it here"}
                    </Link<Route>>
                </p>
            </div>
        </div>
    }
}
