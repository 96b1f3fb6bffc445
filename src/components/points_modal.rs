use yew::prelude::*;

use crate::models::{affordable_items, Customer, MenuItem};

/// Selector de canje: enseña solo los items que el cliente puede pagar con
/// sus puntos actuales. La única memoria propia es la selección transitoria
/// y el candado contra doble submit.
#[derive(Properties, PartialEq)]
pub struct PointsModalProps {
    pub customer: Customer,
    pub items: Vec<MenuItem>,
    pub on_redeem: Callback<MenuItem>,
    pub on_close: Callback<()>,
}

#[function_component(PointsModal)]
pub fn points_modal(props: &PointsModalProps) -> Html {
    let selected_id = use_state(|| None::<i64>);
    let submitting = use_state(|| false);

    let affordable = affordable_items(&props.items, props.customer.points);

    let on_submit = {
        let selected_id = selected_id.clone();
        let submitting = submitting.clone();
        let affordable = affordable.clone();
        let on_redeem = props.on_redeem.clone();
        Callback::from(move |_| {
            if *submitting {
                return;
            }
            let Some(id) = *selected_id else {
                return;
            };
            if let Some(item) = affordable.iter().find(|item| item.id == id) {
                submitting.set(true);
                on_redeem.emit(item.clone());
            }
        })
    };

    html! {
        <>
            <div class="points-modal">
                <h3>{format!("Use Points for {}", props.customer.email)}</h3>
                <p>{format!("Current Points: {}", props.customer.points_label())}</p>

                <h4>{"Select an item to redeem:"}</h4>
                if !affordable.is_empty() {
                    <ul class="points-modal-items">
                        { for affordable.iter().map(|item| {
                            let item_id = item.id;
                            let checked = *selected_id == Some(item_id);
                            let onchange = {
                                let selected_id = selected_id.clone();
                                Callback::from(move |_| selected_id.set(Some(item_id)))
                            };
                            html! {
                                <li key={item.id}>
                                    <label>
                                        <input
                                            type="radio"
                                            name="redeemItem"
                                            checked={checked}
                                            onchange={onchange}
                                        />
                                        {format!(" {} — Required Points: {}", item.name, item.required_points)}
                                    </label>
                                </li>
                            }
                        }) }
                    </ul>
                } else {
                    <p>{"No items available within your points."}</p>
                }

                <button
                    onclick={on_submit}
                    disabled={selected_id.is_none() || *submitting}
                >
                    { if *submitting { "Submitting..." } else { "Submit" } }
                </button>
                {" "}
                <button onclick={props.on_close.reform(|_| ())}>{"Close"}</button>
            </div>

            <div class="points-modal-overlay" onclick={props.on_close.reform(|_| ())} />
        </>
    }
}
