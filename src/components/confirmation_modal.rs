use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    Danger,
    Info,
}

/// Modal de confirmación genérico, parametrizado solo por callbacks.
/// No tiene estado propio: el padre decide cuándo existe.
#[derive(Properties, PartialEq)]
pub struct ConfirmationModalProps {
    pub open: bool,
    pub title: String,
    pub message: String,
    #[prop_or_else(|| "Delete".to_string())]
    pub confirm_text: String,
    #[prop_or_else(|| "Cancel".to_string())]
    pub cancel_text: String,
    #[prop_or(ModalKind::Danger)]
    pub kind: ModalKind,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(ConfirmationModal)]
pub fn confirmation_modal(props: &ConfirmationModalProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            on_confirm.emit(());
            on_close.emit(());
        })
    };

    let (icon_class, icon, confirm_class) = match props.kind {
        ModalKind::Danger => (
            "confirmation-modal-icon confirmation-modal-icon-danger",
            "⚠",
            "confirmation-modal-btn confirmation-modal-btn-danger",
        ),
        ModalKind::Info => (
            "confirmation-modal-icon confirmation-modal-icon-info",
            "ℹ",
            "confirmation-modal-btn confirmation-modal-btn-primary",
        ),
    };

    html! {
        <>
            <div class="confirmation-modal-overlay" onclick={props.on_close.reform(|_| ())} />
            <div class="confirmation-modal-container">
                <div class="confirmation-modal-header">
                    <div class={icon_class}>{icon}</div>
                    <button
                        class="confirmation-modal-close-btn"
                        aria-label="Close"
                        onclick={props.on_close.reform(|_| ())}
                    >
                        {"×"}
                    </button>
                </div>

                <div class="confirmation-modal-body">
                    <h3 class="confirmation-modal-title">{&props.title}</h3>
                    <p class="confirmation-modal-message">{&props.message}</p>
                </div>

                <div class="confirmation-modal-footer">
                    <button
                        class="confirmation-modal-btn confirmation-modal-btn-secondary"
                        onclick={props.on_close.reform(|_| ())}
                    >
                        {&props.cancel_text}
                    </button>
                    <button class={confirm_class} onclick={on_confirm}>
                        {&props.confirm_text}
                    </button>
                </div>
            </div>
        </>
    }
}
