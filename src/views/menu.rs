use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::ConfirmationModal;
use crate::models::{MenuItem, MenuItemPayload};
use crate::services::ApiClient;

/// Copia editable de un item para el popup de edición (strings crudos de
/// los inputs hasta que se guarda).
#[derive(Clone, PartialEq)]
struct EditingItem {
    id: i64,
    name: String,
    price: String,
    required_points: String,
}

/// Página de menú: alta, edición (popup) y borrado de items canjeables.
#[function_component(MenuView)]
pub fn menu_view() -> Html {
    let items = use_state(Vec::<MenuItem>::new);
    let form_name = use_state(String::new);
    let form_price = use_state(String::new);
    let form_points = use_state(String::new);
    let editing_item = use_state(|| None::<EditingItem>);
    let pending_delete = use_state(|| None::<MenuItem>);
    let message = use_state(String::new);

    let fetch_menu = {
        let items = items.clone();
        let message = message.clone();
        move || {
            let items = items.clone();
            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.list_menu().await {
                    Ok(list) => items.set(list),
                    Err(e) => {
                        log::error!("❌ Error cargando menú: {}", e);
                        message.set("Failed to fetch menu items".to_string());
                    }
                }
            });
        }
    };

    {
        let fetch_menu = fetch_menu.clone();
        use_effect_with((), move |_| {
            fetch_menu();
            || ()
        });
    }

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_create = {
        let form_name = form_name.clone();
        let form_price = form_price.clone();
        let form_points = form_points.clone();
        let message = message.clone();
        let fetch_menu = fetch_menu.clone();

        Callback::from(move |_| {
            let name = (*form_name).trim().to_string();
            let Ok(price) = (*form_price).trim().parse::<f64>() else {
                message.set("Price must be a number".to_string());
                return;
            };
            let Ok(required_points) = (*form_points).trim().parse::<i64>() else {
                message.set("Points must be a whole number".to_string());
                return;
            };
            if name.is_empty() {
                message.set("Item name is required".to_string());
                return;
            }

            let payload = MenuItemPayload {
                item: name,
                price,
                required_points,
            };

            let form_name = form_name.clone();
            let form_price = form_price.clone();
            let form_points = form_points.clone();
            let message = message.clone();
            let fetch_menu = fetch_menu.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.create_menu_item(&payload).await {
                    Ok(()) => {
                        form_name.set(String::new());
                        form_price.set(String::new());
                        form_points.set(String::new());
                        message.set(String::new());
                        fetch_menu();
                    }
                    Err(e) => {
                        log::error!("❌ Alta de item falló: {}", e);
                        message.set(e.user_message());
                    }
                }
            });
        })
    };

    let open_edit = {
        let editing_item = editing_item.clone();
        Callback::from(move |item: MenuItem| {
            editing_item.set(Some(EditingItem {
                id: item.id,
                name: item.name,
                price: item.price.to_string(),
                required_points: item.required_points.to_string(),
            }));
        })
    };

    let close_edit = {
        let editing_item = editing_item.clone();
        Callback::from(move |_| editing_item.set(None))
    };

    let edit_field = |field: fn(&mut EditingItem, String)| {
        let editing_item = editing_item.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(mut item) = (*editing_item).clone() {
                field(&mut item, input.value());
                editing_item.set(Some(item));
            }
        })
    };

    let save_edit = {
        let editing_item = editing_item.clone();
        let message = message.clone();
        let fetch_menu = fetch_menu.clone();

        Callback::from(move |_| {
            let Some(edit) = (*editing_item).clone() else {
                return;
            };
            let Ok(price) = edit.price.trim().parse::<f64>() else {
                message.set("Price must be a number".to_string());
                return;
            };
            let Ok(required_points) = edit.required_points.trim().parse::<i64>() else {
                message.set("Points must be a whole number".to_string());
                return;
            };

            let payload = MenuItemPayload {
                item: edit.name.trim().to_string(),
                price,
                required_points,
            };

            let editing_item = editing_item.clone();
            let message = message.clone();
            let fetch_menu = fetch_menu.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.update_menu_item(edit.id, &payload).await {
                    Ok(()) => {
                        editing_item.set(None);
                        message.set(String::new());
                        fetch_menu();
                    }
                    Err(e) => {
                        log::error!("❌ Edición de item falló: {}", e);
                        message.set(e.user_message());
                    }
                }
            });
        })
    };

    let request_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |item: MenuItem| pending_delete.set(Some(item)))
    };

    let close_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let confirm_delete = {
        let pending_delete = pending_delete.clone();
        let message = message.clone();
        let fetch_menu = fetch_menu.clone();
        Callback::from(move |_| {
            let Some(item) = (*pending_delete).clone() else {
                return;
            };
            let message = message.clone();
            let fetch_menu = fetch_menu.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.delete_menu_item(item.id).await {
                    Ok(()) => fetch_menu(),
                    Err(e) => {
                        log::error!("❌ Borrado de item falló: {}", e);
                        message.set(e.user_message());
                    }
                }
            });
        })
    };

    html! {
        <div class="menu-page">
            <div class="menu-container">
                <h3>{"Add item to the menu"}</h3>
                <div class="menu-form">
                    <input
                        placeholder="Item"
                        value={(*form_name).clone()}
                        oninput={bind(&form_name)}
                    />
                    <input
                        placeholder="Price"
                        value={(*form_price).clone()}
                        oninput={bind(&form_price)}
                    />
                    <input
                        placeholder="Points (0-100)"
                        value={(*form_points).clone()}
                        oninput={bind(&form_points)}
                    />
                    <button onclick={on_create}>{"Add"}</button>
                </div>

                if !message.is_empty() {
                    <p class="error-message">{(*message).clone()}</p>
                }

                if !items.is_empty() {
                    <ul class="menu-list">
                        { for items.iter().map(|item| {
                            let edit_item = item.clone();
                            let delete_item = item.clone();
                            let open_edit = open_edit.clone();
                            let request_delete = request_delete.clone();
                            html! {
                                <li key={item.id}>
                                    <span class="menu-item">
                                        <strong>{&item.name}</strong>{" | "}
                                        <span class="price">{format!("${:.2}", item.price)}</span>{" | "}
                                        <span class="points">
                                            <strong>{"Required Points: "}</strong>{item.required_points}
                                        </span>
                                    </span>
                                    <div>
                                        <button onclick={Callback::from(move |_| open_edit.emit(edit_item.clone()))}>
                                            {"Edit"}
                                        </button>
                                        <button onclick={Callback::from(move |_| request_delete.emit(delete_item.clone()))}>
                                            {"Delete"}
                                        </button>
                                    </div>
                                </li>
                            }
                        }) }
                    </ul>
                } else {
                    <p class="no-items">{"No items to show."}</p>
                }
            </div>

            if let Some(edit) = (*editing_item).clone() {
                <div class="popup-overlay">
                    <div class="popup">
                        <h3>{"Edit Menu Item"}</h3>
                        <input
                            placeholder="Item Name"
                            value={edit.name.clone()}
                            oninput={edit_field(|item, v| item.name = v)}
                        />
                        <input
                            placeholder="Price"
                            value={edit.price.clone()}
                            oninput={edit_field(|item, v| item.price = v)}
                        />
                        <input
                            placeholder="Required Points"
                            value={edit.required_points.clone()}
                            oninput={edit_field(|item, v| item.required_points = v)}
                        />
                        <div class="popup-buttons">
                            <button class="save" onclick={save_edit}>{"Save"}</button>
                            <button class="cancel" onclick={close_edit}>{"Cancel"}</button>
                        </div>
                    </div>
                </div>
            }

            <ConfirmationModal
                open={pending_delete.is_some()}
                title="Delete menu item"
                message={format!(
                    "Remove \"{}\" from the menu?",
                    (*pending_delete).clone().map(|i| i.name).unwrap_or_default()
                )}
                on_confirm={confirm_delete}
                on_close={close_delete}
            />
        </div>
    }
}
