use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::{use_session, SessionAction};
use crate::services::ApiClient;

/// Barra de navegación siempre visible; los enlaces dependen del estado
/// de sesión y el logout resetea el session store.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let session = use_session();
    let navigator = use_navigator().expect("Navbar fuera del router");
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };

    let on_logout = {
        let session = session.clone();
        let navigator = navigator.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_| {
            let session = session.clone();
            let navigator = navigator.clone();
            menu_open.set(false);
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.logout().await {
                    Ok(()) => {
                        session.dispatch(SessionAction::LoggedOut);
                        navigator.push(&Route::Login);
                    }
                    Err(e) => {
                        log::error!("❌ Logout falló: {}", e);
                    }
                }
            });
        })
    };

    let links_class = if *menu_open {
        "navbar-links show"
    } else {
        "navbar-links"
    };
    let toggle_class = if *menu_open {
        "navbar-toggle open"
    } else {
        "navbar-toggle"
    };

    html! {
        <header class="navbar">
            <div class="navbar-container">
                <div class="navbar-logo">
                    <Link<Route> classes="title" to={Route::Profile}>{"Blue Point"}</Link<Route>>
                </div>

                <div class={toggle_class} onclick={toggle_menu}>
                    <span /><span /><span />
                </div>

                <nav>
                    <ul class={links_class}>
                        if !session.authenticated {
                            <li onclick={close_menu.clone()}>
                                <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                            </li>
                            <li onclick={close_menu.clone()}>
                                <Link<Route> to={Route::Register}>{"Register"}</Link<Route>>
                            </li>
                        } else {
                            <li onclick={close_menu.clone()}>
                                <Link<Route> to={Route::Profile}>{"Profile"}</Link<Route>>
                            </li>
                            <li onclick={close_menu.clone()}>
                                <Link<Route> to={Route::Dashboard}>{"Reward Dashboard"}</Link<Route>>
                            </li>
                            <li onclick={close_menu}>
                                <Link<Route> to={Route::Menu}>{"Menu"}</Link<Route>>
                            </li>
                            <li class="logout-button" onclick={on_logout}>{"Logout"}</li>
                        }
                    </ul>
                </nav>
            </div>
        </header>
    }
}
