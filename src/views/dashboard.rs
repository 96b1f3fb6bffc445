use futures::future::join_all;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::PointsModal;
use crate::hooks::use_session;
use crate::models::{with_server_points, Customer, MenuItem};
use crate::services::api_client::SendEmailRequest;
use crate::services::ApiClient;
use crate::utils::{normalized_email, points_notification};

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Reward Dashboard: gestión de puntos de clientes.
///
/// Los puntos se consultan cliente a cliente en un batch concurrente; si un
/// lookup falla, solo ese cliente se muestra con el placeholder y el resto
/// del batch sigue. Los totales que se aplican tras premiar o canjear son
/// siempre los que devuelve el servidor.
#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let session = use_session();
    let customers = use_state(Vec::<Customer>::new);
    let items = use_state(Vec::<MenuItem>::new);
    let error = use_state(|| None::<String>);
    let new_email = use_state(String::new);
    let search = use_state(String::new);
    let selected_customer = use_state(|| None::<Customer>);
    let sending = use_state(|| false);

    let fetch_customers = {
        let customers = customers.clone();
        let error = error.clone();
        move || {
            let customers = customers.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.customers().await {
                    Ok(list) => {
                        // Batch concurrente de lookups de puntos; cada fallo
                        // degrada solo a su cliente, nunca aborta el batch
                        let enriched = join_all(list.into_iter().map(|customer| {
                            let api = api.clone();
                            async move {
                                let points = api.customer_points(customer.id).await.ok();
                                Customer { points, ..customer }
                            }
                        }))
                        .await;
                        log::info!("✅ Clientes cargados: {}", enriched.len());
                        customers.set(enriched);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando clientes: {}", e);
                        error.set(Some("Failed to fetch customers".to_string()));
                    }
                }
            });
        }
    };

    {
        let fetch_customers = fetch_customers.clone();
        let items = items.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            fetch_customers();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.list_menu().await {
                    Ok(list) => items.set(list),
                    Err(e) => {
                        log::error!("❌ Error cargando menú: {}", e);
                        error.set(Some("Failed to fetch menu items".to_string()));
                    }
                }
            });
            || ()
        });
    }

    let on_email_input = {
        let new_email = new_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_email.set(input.value());
        })
    };

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let on_add_customer = {
        let new_email = new_email.clone();
        let error = error.clone();
        let fetch_customers = fetch_customers.clone();

        Callback::from(move |_| {
            // Un email vacío o inválido nunca llega a la red
            let Some(email) = normalized_email(&new_email) else {
                error.set(Some("Please enter a valid customer email".to_string()));
                return;
            };

            let new_email = new_email.clone();
            let error = error.clone();
            let fetch_customers = fetch_customers.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.add_customer(&email).await {
                    Ok(()) => {
                        new_email.set(String::new());
                        error.set(None);
                        fetch_customers();
                    }
                    Err(e) => {
                        log::error!("❌ Alta de cliente falló: {}", e);
                        alert(&e.user_message());
                    }
                }
            });
        })
    };

    // Premiar puntos: Loyalty (+1) o Referral (+2), vía email de notificación
    let on_award = {
        let customers = customers.clone();
        let sending = sending.clone();
        let session = session.clone();

        Callback::from(move |(customer, delta): (Customer, i64)| {
            if *sending {
                return; // bloquear doble click mientras hay un envío en vuelo
            }
            sending.set(true);

            let company_name = session
                .user
                .as_ref()
                .map(|u| u.company_name.clone())
                .unwrap_or_default();
            let customers = customers.clone();
            let sending = sending.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let result = async {
                    let user_id = api.session_user_id().await?;
                    let current_points = customer.points.unwrap_or(0);
                    let request = SendEmailRequest {
                        to: customer.email.clone(),
                        subject: format!("From: {}", company_name),
                        body: points_notification(&company_name, current_points, delta),
                        user_id,
                        customer_id: customer.id,
                        point: delta,
                    };
                    api.send_points_email(&request).await
                }
                .await;

                match result {
                    Ok(response) => {
                        // El total autoritativo viene del servidor
                        if let Some(points) = response.points {
                            customers.set(with_server_points(&customers, customer.id, points));
                            alert(&format!(
                                "{} points have been sent to {}",
                                delta, customer.email
                            ));
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Envío de puntos falló: {}", e);
                        alert("Error sending email.");
                    }
                }
                sending.set(false);
            });
        })
    };

    let open_redeem = {
        let selected_customer = selected_customer.clone();
        Callback::from(move |customer: Customer| selected_customer.set(Some(customer)))
    };

    let close_redeem = {
        let selected_customer = selected_customer.clone();
        Callback::from(move |_| selected_customer.set(None))
    };

    let on_redeem = {
        let customers = customers.clone();
        let selected_customer = selected_customer.clone();

        Callback::from(move |item: MenuItem| {
            let Some(customer) = (*selected_customer).clone() else {
                return;
            };
            let customers = customers.clone();
            let selected_customer = selected_customer.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.redeem_item(customer.id, item.id).await {
                    Ok(response) => {
                        // Aplicar el total devuelto, no uno calculado en local
                        customers.set(with_server_points(
                            &customers,
                            customer.id,
                            response.points,
                        ));
                        alert(&response.message.unwrap_or_else(|| {
                            format!("Redeemed {} for {} points!", item.name, item.required_points)
                        }));
                    }
                    Err(e) => {
                        log::error!("❌ Canje falló: {}", e);
                        alert(&e.user_message());
                    }
                }
                selected_customer.set(None);
            });
        })
    };

    let needle = search.trim().to_lowercase();
    let visible: Vec<Customer> = customers
        .iter()
        .filter(|c| needle.is_empty() || c.email.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    html! {
        <div class="functionality-page">
            <div class="functionality-container">
                <h1>{"Reward Dashboard"}</h1>

                if let Some(msg) = (*error).clone() {
                    <p class="error-message">{msg}</p>
                }

                <div class="add-customer">
                    <div class="add-customer-form">
                        <input
                            type="email"
                            placeholder="Enter customer email to add"
                            value={(*new_email).clone()}
                            oninput={on_email_input}
                        />
                        <button onclick={on_add_customer}>{"Add"}</button>
                    </div>
                    <input
                        class="customer-search"
                        type="text"
                        placeholder="Search customers"
                        value={(*search).clone()}
                        oninput={on_search_input}
                    />
                </div>

                <ul class="customer-list">
                    { for visible.iter().map(|customer| {
                        let loyalty_customer = customer.clone();
                        let referral_customer = customer.clone();
                        let redeem_customer = customer.clone();
                        let on_award_loyalty = on_award.clone();
                        let on_award_referral = on_award.clone();
                        let open_redeem = open_redeem.clone();
                        html! {
                            <li key={customer.id} class="customer-item">
                                <div class="customer-info">
                                    <span class="customer-email">{&customer.email}</span>
                                    <span class="customer-points">
                                        {format!("{} pts", customer.points_label())}
                                    </span>
                                </div>
                                <div class="customer-actions">
                                    <button
                                        disabled={*sending}
                                        title="Award 1 point for a returning customer purchase"
                                        onclick={Callback::from(move |_| {
                                            on_award_loyalty.emit((loyalty_customer.clone(), 1))
                                        })}
                                    >
                                        {"Loyalty"}
                                    </button>
                                    <button
                                        disabled={*sending}
                                        title="Award 2 points when this customer refers a new customer"
                                        onclick={Callback::from(move |_| {
                                            on_award_referral.emit((referral_customer.clone(), 2))
                                        })}
                                    >
                                        {"Referral"}
                                    </button>
                                    <button
                                        title="Allow customer to redeem points for menu items"
                                        onclick={Callback::from(move |_| {
                                            open_redeem.emit(redeem_customer.clone())
                                        })}
                                    >
                                        {"Redeem"}
                                    </button>
                                </div>
                            </li>
                        }
                    }) }
                </ul>

                <div class="menu-items-section">
                    <h2 class="menu-items-title">{format!("Menu Items ({})", items.len())}</h2>
                    if !items.is_empty() {
                        <ul class="menu-items-list">
                            { for items.iter().map(|item| html! {
                                <li key={item.id} class="menu-item-card">
                                    <div class="menu-item-info">
                                        <h4 class="item-name">{&item.name}</h4>
                                        <div class="item-details">
                                            <div class="detail-badge price-badge">
                                                <span class="detail-label">{"Price"}</span>
                                                <span class="detail-value">{format!("${:.2}", item.price)}</span>
                                            </div>
                                            <div class="detail-badge points-badge">
                                                <span class="detail-label">{"Points"}</span>
                                                <span class="detail-value">{item.required_points}</span>
                                            </div>
                                        </div>
                                    </div>
                                </li>
                            }) }
                        </ul>
                    } else {
                        <div class="no-items">
                            <p>{"No menu items available. Add items from the Menu page."}</p>
                        </div>
                    }
                </div>

                if let Some(customer) = (*selected_customer).clone() {
                    <PointsModal
                        customer={customer}
                        items={(*items).clone()}
                        on_redeem={on_redeem.clone()}
                        on_close={close_redeem.clone()}
                    />
                }
            </div>
        </div>
    }
}
