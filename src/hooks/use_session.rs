// ============================================================================
// SESSION STORE - Estado global de sesión
// ============================================================================
// Única fuente de verdad sobre si el navegador tiene cookie de sesión
// válida. Se resuelve una sola vez al arrancar (sondeo /logged + /me) y
// después solo cambia por login/logout explícitos o ediciones de perfil.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::UserProfile;
use crate::services::api_client::LoggedResponse;
use crate::services::{ApiClient, ApiError};

/// Estado de sesión compartido por toda la app.
///
/// `loading=true` solo durante el sondeo inicial; pasa a `false` exactamente
/// una vez y no vuelve atrás. `authenticated=true` con `user=None` es un
/// estado válido: la cookie existe pero `/me` falló (sesión degradada).
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub authenticated: bool,
    pub user: Option<UserProfile>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            authenticated: false,
            user: None,
            loading: true,
        }
    }
}

pub enum SessionAction {
    /// Resultado del sondeo inicial; paso terminal de `loading`
    Resolved {
        authenticated: bool,
        user: Option<UserProfile>,
    },
    /// Login correcto con el perfil que devolvió el servidor
    LoggedIn(UserProfile),
    /// Logout explícito; limpia el perfil sin importar su contenido previo
    LoggedOut,
    /// El servidor aceptó una edición de perfil
    ProfileUpdated(UserProfile),
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        match action {
            SessionAction::Resolved {
                authenticated,
                user,
            } => Rc::new(Session {
                authenticated,
                user,
                loading: false,
            }),
            SessionAction::LoggedIn(profile) => Rc::new(Session {
                authenticated: true,
                user: Some(profile),
                loading: false,
            }),
            SessionAction::LoggedOut => Rc::new(Session {
                authenticated: false,
                user: None,
                loading: false,
            }),
            SessionAction::ProfileUpdated(profile) => Rc::new(Session {
                user: Some(profile),
                ..(*self).clone()
            }),
        }
    }
}

pub type SessionHandle = UseReducerHandle<Session>;

/// Acceso al estado de sesión desde cualquier componente bajo el provider
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("use_session fuera de <SessionProvider>")
}

/// Sondeo de arranque: decide el estado de sesión contra el servidor.
///
/// Cualquier fallo de red se trata igual que "no logueado" (fail-closed) y
/// siempre se produce una acción `Resolved`, nunca un error fatal.
pub async fn resolve_session(api: &ApiClient) -> SessionAction {
    let logged = api.check_logged_in().await;
    // /me solo se consulta con indicador positivo
    let profile = match &logged {
        Ok(status) if status.logged_in => Some(api.me().await),
        _ => None,
    };
    probe_outcome(logged, profile)
}

/// Mapeo puro de las respuestas del sondeo al estado de sesión.
///
/// `profile` es `None` cuando `/me` ni siquiera se llegó a consultar.
pub fn probe_outcome(
    logged: Result<LoggedResponse, ApiError>,
    profile: Option<Result<UserProfile, ApiError>>,
) -> SessionAction {
    match logged {
        Ok(status) if status.logged_in => match profile {
            Some(Ok(profile)) => {
                log::info!("✅ Sesión activa: {}", profile.email);
                SessionAction::Resolved {
                    authenticated: true,
                    user: Some(profile),
                }
            }
            _ => {
                // Cookie válida pero /me falló: sesión degradada sin perfil
                log::warn!("⚠️ /me falló con sesión activa");
                SessionAction::Resolved {
                    authenticated: true,
                    user: None,
                }
            }
        },
        Ok(_) => {
            log::info!("ℹ️ Sin sesión activa");
            SessionAction::Resolved {
                authenticated: false,
                user: None,
            }
        }
        Err(e) => {
            log::error!("❌ Sondeo de sesión falló: {}", e);
            SessionAction::Resolved {
                authenticated: false,
                user: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            email: "a@b.com".to_string(),
            company_name: "Acme".to_string(),
        }
    }

    fn reduce(session: Session, action: SessionAction) -> Session {
        (*Rc::new(session).reduce(action)).clone()
    }

    #[test]
    fn starts_loading_and_unauthenticated() {
        let session = Session::default();
        assert!(session.loading);
        assert!(!session.authenticated);
        assert!(session.user.is_none());
    }

    #[test]
    fn positive_probe_with_profile_resolves_authenticated() {
        let session = reduce(
            Session::default(),
            SessionAction::Resolved {
                authenticated: true,
                user: Some(profile()),
            },
        );
        assert!(session.authenticated);
        assert_eq!(session.user, Some(profile()));
        assert!(!session.loading);
    }

    #[test]
    fn positive_probe_without_profile_is_a_valid_degraded_state() {
        // /logged dijo que sí pero /me falló
        let session = reduce(
            Session::default(),
            SessionAction::Resolved {
                authenticated: true,
                user: None,
            },
        );
        assert!(session.authenticated);
        assert!(session.user.is_none());
        assert!(!session.loading);
    }

    #[test]
    fn negative_probe_resolves_unauthenticated_with_no_profile() {
        let session = reduce(
            Session::default(),
            SessionAction::Resolved {
                authenticated: false,
                user: None,
            },
        );
        assert!(!session.authenticated);
        assert!(session.user.is_none());
        assert!(!session.loading);
    }

    #[test]
    fn logout_clears_everything_regardless_of_prior_profile() {
        let logged_in = reduce(Session::default(), SessionAction::LoggedIn(profile()));
        assert!(logged_in.authenticated);

        let session = reduce(logged_in, SessionAction::LoggedOut);
        assert!(!session.authenticated);
        assert!(session.user.is_none());
        assert!(!session.loading);
    }

    #[test]
    fn profile_update_keeps_authentication_and_loading() {
        let logged_in = reduce(Session::default(), SessionAction::LoggedIn(profile()));

        let renamed = UserProfile {
            email: "a@b.com".to_string(),
            company_name: "Acme Rewards".to_string(),
        };
        let session = reduce(logged_in, SessionAction::ProfileUpdated(renamed.clone()));
        assert!(session.authenticated);
        assert_eq!(session.user, Some(renamed));
        assert!(!session.loading);
    }

    fn logged(logged_in: bool) -> Result<LoggedResponse, ApiError> {
        Ok(LoggedResponse { logged_in })
    }

    fn apply_probe(
        logged: Result<LoggedResponse, ApiError>,
        profile: Option<Result<UserProfile, ApiError>>,
    ) -> Session {
        reduce(Session::default(), probe_outcome(logged, profile))
    }

    #[test]
    fn probe_positive_with_profile_authenticates_with_user() {
        let session = apply_probe(logged(true), Some(Ok(profile())));
        assert!(session.authenticated);
        assert_eq!(session.user, Some(profile()));
        assert!(!session.loading);
    }

    #[test]
    fn probe_positive_with_failed_me_keeps_the_session_without_profile() {
        let me_failed = Err(ApiError::Http {
            status: 500,
            message: "boom".to_string(),
        });
        let session = apply_probe(logged(true), Some(me_failed));
        assert!(session.authenticated);
        assert!(session.user.is_none());
        assert!(!session.loading);
    }

    #[test]
    fn probe_negative_resolves_unauthenticated() {
        let session = apply_probe(logged(false), None);
        assert!(!session.authenticated);
        assert!(session.user.is_none());
        assert!(!session.loading);
    }

    #[test]
    fn probe_network_failure_fails_closed() {
        let session = apply_probe(
            Err(ApiError::Network("failed to fetch".to_string())),
            None,
        );
        assert!(!session.authenticated);
        assert!(session.user.is_none());
        assert!(!session.loading);
    }

    #[test]
    fn loading_never_comes_back_after_resolution() {
        let mut session = reduce(
            Session::default(),
            SessionAction::Resolved {
                authenticated: false,
                user: None,
            },
        );
        for action in [
            SessionAction::LoggedIn(profile()),
            SessionAction::ProfileUpdated(profile()),
            SessionAction::LoggedOut,
        ] {
            session = reduce(session, action);
            assert!(!session.loading);
        }
    }
}
