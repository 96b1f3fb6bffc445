// ============================================================================
// SESSION CONTEXT - Compartir estado de sesión entre componentes
// ============================================================================
// Usa Context API de Yew para que navbar, guard y vistas lean el mismo
// estado. El provider lanza el sondeo de sesión una sola vez al montar.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{resolve_session, Session, SessionHandle};
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app y proporciona el estado de sesión
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(Session::default);

    // Sondeo inicial contra el servidor, una sola vez
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                session.dispatch(resolve_session(&api).await);
            });
            || ()
        });
    }

    html! {
        <ContextProvider<SessionHandle> context={session}>
            {props.children.clone()}
        </ContextProvider<SessionHandle>>
    }
}
