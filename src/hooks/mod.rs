pub mod session_context;
pub mod use_session;

pub use session_context::SessionProvider;
pub use use_session::{
    probe_outcome, resolve_session, use_session, Session, SessionAction, SessionHandle,
};
