use serde::{Deserialize, Serialize};

/// Perfil del comercio autenticado, tal como lo devuelve el backend
/// (`/me`, `/login`, `/update-company`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    pub company_name: String,
}
