use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::ConfirmationModal;
use crate::hooks::{use_session, SessionAction};
use crate::models::Customer;
use crate::services::ApiClient;

/// Dashboard de perfil: datos del comercio (desde el session store), lista
/// de clientes y contador. Cada montaje re-consulta al servidor; no hay
/// caché compartida con otras vistas.
#[function_component(ProfileView)]
pub fn profile_view() -> Html {
    let session = use_session();
    let customers = use_state(Vec::<Customer>::new);
    let customer_count = use_state(|| None::<i64>);
    let error = use_state(|| None::<String>);
    let pending_delete = use_state(|| None::<String>);
    let editing = use_state(|| false);
    let company_input = use_state(String::new);

    {
        let customers = customers.clone();
        let customer_count = customer_count.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.customers().await {
                    Ok(list) => customers.set(list),
                    Err(e) => {
                        log::error!("❌ Error cargando clientes: {}", e);
                        error.set(Some("Failed to fetch customers".to_string()));
                    }
                }
                match api.customer_count().await {
                    Ok(count) => customer_count.set(Some(count)),
                    Err(e) => {
                        log::error!("❌ Error cargando contador: {}", e);
                        error.set(Some("Unable to fetch customer count".to_string()));
                    }
                }
            });
            || ()
        });
    }

    let request_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |email: String| pending_delete.set(Some(email)))
    };

    let close_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let confirm_delete = {
        let customers = customers.clone();
        let customer_count = customer_count.clone();
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| {
            let Some(email) = (*pending_delete).clone() else {
                return;
            };
            let customers = customers.clone();
            let customer_count = customer_count.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.delete_customer(&email).await {
                    Ok(()) => {
                        // Quitamos al cliente de la lista local; el servidor ya lo borró
                        let remaining: Vec<Customer> = customers
                            .iter()
                            .filter(|c| c.email != email)
                            .cloned()
                            .collect();
                        customers.set(remaining);
                        customer_count.set((*customer_count).map(|n| n - 1));
                    }
                    Err(e) => {
                        log::error!("❌ Borrado falló: {}", e);
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(&e.user_message());
                        }
                    }
                }
            });
        })
    };

    let start_edit = {
        let editing = editing.clone();
        let company_input = company_input.clone();
        let session = session.clone();
        Callback::from(move |_| {
            let current = session
                .user
                .as_ref()
                .map(|u| u.company_name.clone())
                .unwrap_or_default();
            company_input.set(current);
            editing.set(true);
        })
    };

    let cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(false))
    };

    let on_company_input = {
        let company_input = company_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            company_input.set(input.value());
        })
    };

    let save_company = {
        let editing = editing.clone();
        let company_input = company_input.clone();
        let session = session.clone();
        Callback::from(move |_| {
            let name = (*company_input).trim().to_string();
            if name.is_empty() {
                return;
            }
            let editing = editing.clone();
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.update_company(&name).await {
                    Ok(profile) => {
                        // Solo mutamos el estado local con la respuesta del servidor
                        session.dispatch(SessionAction::ProfileUpdated(profile));
                        editing.set(false);
                    }
                    Err(e) => {
                        log::error!("❌ Edición de comercio falló: {}", e);
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(&e.user_message());
                        }
                    }
                }
            });
        })
    };

    html! {
        <div class="profile-page">
            <div class="profile-container">
                <div class="top-profile">
                    <div class="company-info">
                        if let Some(msg) = (*error).clone() {
                            <p class="error-message">{msg}</p>
                        }

                        if let Some(user) = session.user.clone() {
                            <div class="company-info">
                                if *editing {
                                    <div class="company-edit">
                                        <input
                                            type="text"
                                            value={(*company_input).clone()}
                                            oninput={on_company_input}
                                        />
                                        <button onclick={save_company}>{"Save"}</button>
                                        <button onclick={cancel_edit}>{"Cancel"}</button>
                                    </div>
                                } else {
                                    <p class="company-name">
                                        <strong>{"Company: "}</strong>{user.company_name}
                                        {" "}
                                        <button class="edit-company" onclick={start_edit}>{"Edit"}</button>
                                    </p>
                                }
                                <p class="email">
                                    <strong>{"Email: "}</strong>{user.email}
                                </p>
                                if let Some(count) = *customer_count {
                                    <p class="customers">
                                        <strong>{"Total Customers: "}</strong>{count}
                                    </p>
                                }
                            </div>
                        } else {
                            // Sesión degradada: autenticado pero /me falló
                            <p>{"Loading user..."}</p>
                        }

                        <br />
                        <h2 class="welcome-text">{"Welcome to your dashboard."}</h2>
                        <p>
                            <strong>{"Getting Started:"}</strong><br />
                            {"Manage your customers' emails directly from this Profile page."}
                        </p>
                    </div>

                    <div class="programs-section">
                        <h2>{"Our Reward Programs"}</h2>
                        <ul>
                            <li>
                                <strong>{"Loyalty Program: "}</strong>
                                {"Earn 1 point each time a returning customer makes a purchase."}
                            </li>
                            <li>
                                <strong>{"Referral Program: "}</strong>
                                {"Earn 2 points whenever a customer you referred brings in a new customer."}
                            </li>
                            <li>
                                <strong>{"Reward Dashboard: "}</strong>
                                {"Manage customers, update points, and remove accounts when needed."}
                            </li>
                            <li>
                                <strong>{"Menu Page: "}</strong>
                                {"Create and display a list of services or items customers can redeem with their points."}
                            </li>
                        </ul>
                    </div>
                </div>

                <div class="customer-list">
                    <h2 class="customer-title">{"Customer List"}</h2>
                    <ul>
                        { for customers.iter().map(|customer| {
                            let email = customer.email.clone();
                            let request_delete = request_delete.clone();
                            html! {
                                <li key={customer.id}>
                                    {&customer.email}
                                    <button onclick={Callback::from(move |_| request_delete.emit(email.clone()))}>
                                        {"Delete"}
                                    </button>
                                </li>
                            }
                        }) }
                    </ul>
                </div>
            </div>

            <ConfirmationModal
                open={pending_delete.is_some()}
                title="Delete customer"
                message={format!(
                    "Remove {} and their points? This cannot be undone.",
                    (*pending_delete).clone().unwrap_or_default()
                )}
                on_confirm={confirm_delete}
                on_close={close_delete}
            />
        </div>
    }
}
