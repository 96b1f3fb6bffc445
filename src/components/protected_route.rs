// ============================================================================
// ROUTE GUARD - Acceso a vistas protegidas
// ============================================================================
// Decide entre dejar pasar, redirigir a login, o esperar a que termine el
// sondeo de sesión. Mientras el sondeo no resuelve se enseña un placeholder
// neutro: una vista protegida nunca debe renderizarse como "no logueado"
// solo porque el sondeo sigue en vuelo.
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::hooks::{use_session, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect,
    Pending,
}

/// Decisión pura: depende solo de `loading` y `authenticated`
pub fn evaluate(session: &Session) -> GuardDecision {
    if session.loading {
        GuardDecision::Pending
    } else if !session.authenticated {
        GuardDecision::Redirect
    } else {
        GuardDecision::Allow
    }
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let session = use_session();

    match evaluate(&session) {
        GuardDecision::Pending => html! {
            <div class="route-loading">{"Loading..."}</div>
        },
        GuardDecision::Redirect => html! {
            <Redirect<Route> to={Route::Login} />
        },
        GuardDecision::Allow => html! {
            <>{ props.children.clone() }</>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;

    fn session(authenticated: bool, user: bool, loading: bool) -> Session {
        Session {
            authenticated,
            user: user.then(|| UserProfile {
                email: "a@b.com".to_string(),
                company_name: "Acme".to_string(),
            }),
            loading,
        }
    }

    #[test]
    fn never_allows_while_loading() {
        for authenticated in [false, true] {
            for user in [false, true] {
                let decision = evaluate(&session(authenticated, user, true));
                assert_eq!(decision, GuardDecision::Pending);
            }
        }
    }

    #[test]
    fn redirects_once_resolved_unauthenticated() {
        assert_eq!(
            evaluate(&session(false, false, false)),
            GuardDecision::Redirect
        );
    }

    #[test]
    fn allows_authenticated_sessions_even_without_profile() {
        assert_eq!(evaluate(&session(true, true, false)), GuardDecision::Allow);
        // Sesión degradada: cookie válida pero /me falló
        assert_eq!(evaluate(&session(true, false, false)), GuardDecision::Allow);
    }
}
