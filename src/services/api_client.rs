// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP. Todas las llamadas
// van con la cookie de sesión (credentials: include); es el único punto
// del frontend que habla con el backend.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::config::CONFIG;
use crate::models::{Customer, MenuItem, MenuItemPayload, UserProfile};
use crate::services::ApiError;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str) -> RequestBuilder {
        Request::get(&self.url(path)).credentials(RequestCredentials::Include)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        Request::post(&self.url(path)).credentials(RequestCredentials::Include)
    }

    fn put(&self, path: &str) -> RequestBuilder {
        Request::put(&self.url(path)).credentials(RequestCredentials::Include)
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        Request::delete(&self.url(path)).credentials(RequestCredentials::Include)
    }

    // ------------------------------------------------------------------
    // Sesión / autenticación
    // ------------------------------------------------------------------

    /// Sondeo de sesión al arrancar: ¿hay cookie válida?
    pub async fn check_logged_in(&self) -> Result<LoggedResponse, ApiError> {
        let response = send(self.get("/logged")).await?;
        decode(expect_success(response).await?).await
    }

    /// Perfil completo del usuario autenticado
    pub async fn me(&self) -> Result<UserProfile, ApiError> {
        let response = send(self.get("/me")).await?;
        decode(expect_success(response).await?).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile, ApiError> {
        log::info!("🔐 Login para: {}", email);
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = send_json(self.post("/login"), &request).await?;
        decode(expect_success(response).await?).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        log::info!("👋 Logout");
        let response = send(self.post("/logout")).await?;
        expect_success(response).await?;
        Ok(())
    }

    /// Metadata de sesión (`/session`), usada para el user_id al enviar emails
    pub async fn session_user_id(&self) -> Result<i64, ApiError> {
        let response = send(self.get("/session")).await?;
        let session: SessionResponse = decode(expect_success(response).await?).await?;
        Ok(session.user_id)
    }

    // ------------------------------------------------------------------
    // Registro / recuperación de contraseña
    // ------------------------------------------------------------------

    pub async fn register(
        &self,
        company_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        log::info!("📝 Registro de comercio: {}", company_name);
        let request = RegisterRequest {
            company_name: company_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = send_json(self.post("/register"), &request).await?;
        expect_success(response).await?;
        Ok(())
    }

    pub async fn verify_registration(&self, code: &str) -> Result<(), ApiError> {
        let request = VerifyRegistrationRequest {
            code: code.to_string(),
        };
        let response = send_json(self.post("/verify-registration"), &request).await?;
        expect_success(response).await?;
        Ok(())
    }

    pub async fn forgot_password(&self, email: &str) -> Result<(), ApiError> {
        let request = ForgotPasswordRequest {
            email: email.to_string(),
        };
        let response = send_json(self.post("/forgot-password"), &request).await?;
        expect_success(response).await?;
        Ok(())
    }

    pub async fn reset_password(&self, code: &str, new_password: &str) -> Result<(), ApiError> {
        let request = ResetPasswordRequest {
            code: code.to_string(),
            new_password: new_password.to_string(),
        };
        let response = send_json(self.post("/reset-password"), &request).await?;
        expect_success(response).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // OAuth (Google)
    // ------------------------------------------------------------------

    /// URL de handoff hacia el login de Google (navegación completa, no fetch)
    pub fn google_login_url(&self, origin: &str) -> String {
        format!("{}/google/login?origin={}", self.base_url, encode_origin(origin))
    }

    /// Comprueba si hay un handoff de Google pendiente de completar
    pub async fn google_check(&self) -> Result<GoogleCheckResponse, ApiError> {
        let response = send(self.get("/google/check")).await?;
        decode(expect_success(response).await?).await
    }

    // ------------------------------------------------------------------
    // Clientes y puntos
    // ------------------------------------------------------------------

    pub async fn customers(&self) -> Result<Vec<Customer>, ApiError> {
        let response = send(self.get("/customers")).await?;
        decode(expect_success(response).await?).await
    }

    /// Puntos de un cliente concreto. El servidor es la autoridad.
    pub async fn customer_points(&self, customer_id: i64) -> Result<i64, ApiError> {
        let response = send(self.get(&format!("/customer_point/{}", customer_id))).await?;
        let points: PointsResponse = decode(expect_success(response).await?).await?;
        Ok(points.points)
    }

    pub async fn add_customer(&self, email: &str) -> Result<(), ApiError> {
        log::info!("➕ Añadiendo cliente: {}", email);
        let request = CustomerEmailRequest {
            email: email.to_string(),
        };
        let response = send_json(self.post("/add-customer"), &request).await?;
        expect_success(response).await?;
        Ok(())
    }

    /// El borrado va por email, no por id (así lo espera el backend)
    pub async fn delete_customer(&self, email: &str) -> Result<(), ApiError> {
        log::info!("🗑️ Borrando cliente: {}", email);
        let request = CustomerEmailRequest {
            email: email.to_string(),
        };
        let response = send_json(self.delete("/delete-customer"), &request).await?;
        expect_success(response).await?;
        Ok(())
    }

    pub async fn customer_count(&self) -> Result<i64, ApiError> {
        let response = send(self.get("/customer-count")).await?;
        let count: CustomerCountResponse = decode(expect_success(response).await?).await?;
        Ok(count.customer_count)
    }

    /// Canjea un item: el total nuevo de puntos viene del servidor
    pub async fn redeem_item(
        &self,
        customer_id: i64,
        item_id: i64,
    ) -> Result<RedeemResponse, ApiError> {
        log::info!("🎁 Canje: cliente {} item {}", customer_id, item_id);
        let response = send(
            self.get(&format!("/deduct_point/{}/{}", customer_id, item_id)),
        )
        .await?;
        decode(expect_success(response).await?).await
    }

    /// Notifica puntos por email y actualiza el total en el servidor
    pub async fn send_points_email(
        &self,
        request: &SendEmailRequest,
    ) -> Result<SendEmailResponse, ApiError> {
        log::info!(
            "📧 Enviando {} punto(s) a {} (cliente {})",
            request.point,
            request.to,
            request.customer_id
        );
        let response = send_json(self.post("/send-test-email"), request).await?;
        decode(expect_success(response).await?).await
    }

    // ------------------------------------------------------------------
    // Perfil
    // ------------------------------------------------------------------

    /// Edita el nombre del comercio; el estado local solo se actualiza
    /// con el perfil que devuelve el servidor
    pub async fn update_company(&self, company_name: &str) -> Result<UserProfile, ApiError> {
        log::info!("✏️ Actualizando nombre de comercio: {}", company_name);
        let request = UpdateCompanyRequest {
            company_name: company_name.to_string(),
        };
        let response = send_json(self.put("/update-company"), &request).await?;
        decode(expect_success(response).await?).await
    }

    // ------------------------------------------------------------------
    // Menú
    // ------------------------------------------------------------------

    pub async fn list_menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        let response = send(self.get("/list_menu")).await?;
        decode(expect_success(response).await?).await
    }

    pub async fn create_menu_item(&self, payload: &MenuItemPayload) -> Result<(), ApiError> {
        log::info!("🧾 Creando item de menú: {}", payload.item);
        let response = send_json(self.post("/menu"), payload).await?;
        expect_success(response).await?;
        Ok(())
    }

    pub async fn update_menu_item(
        &self,
        item_id: i64,
        payload: &MenuItemPayload,
    ) -> Result<(), ApiError> {
        let response =
            send_json(self.put(&format!("/update_menu/{}", item_id)), payload).await?;
        expect_success(response).await?;
        Ok(())
    }

    pub async fn delete_menu_item(&self, item_id: i64) -> Result<(), ApiError> {
        let response = send(self.delete(&format!("/delete_item/{}", item_id))).await?;
        expect_success(response).await?;
        Ok(())
    }
}

// ------------------------------------------------------------------
// Helpers compartidos por todas las llamadas
// ------------------------------------------------------------------

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn send_json<B: serde::Serialize>(
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    builder
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn expect_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    // El backend manda { "error": "..." } en los fallos de aplicación
    let message = match response.json::<ServerErrorBody>().await {
        Ok(body) => body.error.unwrap_or_else(|| response.status_text()),
        Err(_) => response.status_text(),
    };
    Err(ApiError::Http { status, message })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// encodeURIComponent mínimo para el parámetro `origin`
fn encode_origin(origin: &str) -> String {
    let mut encoded = String::with_capacity(origin.len());
    for byte in origin.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

// ------------------------------------------------------------------
// Tipos de request/response del wire
// ------------------------------------------------------------------

#[derive(serde::Serialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(serde::Serialize)]
struct RegisterRequest {
    company_name: String,
    email: String,
    password: String,
}

#[derive(serde::Serialize)]
struct VerifyRegistrationRequest {
    code: String,
}

#[derive(serde::Serialize)]
struct ForgotPasswordRequest {
    email: String,
}

#[derive(serde::Serialize)]
struct ResetPasswordRequest {
    code: String,
    new_password: String,
}

#[derive(serde::Serialize)]
struct CustomerEmailRequest {
    email: String,
}

#[derive(serde::Serialize)]
struct UpdateCompanyRequest {
    company_name: String,
}

#[derive(serde::Deserialize)]
pub struct LoggedResponse {
    pub logged_in: bool,
}

#[derive(serde::Deserialize)]
struct SessionResponse {
    user_id: i64,
}

#[derive(serde::Deserialize)]
struct PointsResponse {
    points: i64,
}

#[derive(serde::Deserialize)]
struct CustomerCountResponse {
    customer_count: i64,
}

#[derive(serde::Deserialize)]
pub struct RedeemResponse {
    pub points: i64,
    pub message: Option<String>,
}

#[derive(serde::Serialize)]
pub struct SendEmailRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub user_id: i64,
    pub customer_id: i64,
    pub point: i64,
}

#[derive(serde::Deserialize)]
pub struct SendEmailResponse {
    pub points: Option<i64>,
}

#[derive(serde::Deserialize)]
pub struct GoogleCheckResponse {
    pub success: bool,
    pub email: Option<String>,
    pub company_name: Option<String>,
}

#[derive(serde::Deserialize)]
struct ServerErrorBody {
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_base_and_path() {
        let api = ApiClient::with_base_url("https://api.bluepoint.click");
        assert_eq!(
            api.url("/customer_point/7"),
            "https://api.bluepoint.click/customer_point/7"
        );
    }

    #[test]
    fn google_login_url_encodes_the_origin() {
        let api = ApiClient::with_base_url("https://api.bluepoint.click");
        assert_eq!(
            api.google_login_url("https://app.bluepoint.click"),
            "https://api.bluepoint.click/google/login?origin=https%3A%2F%2Fapp.bluepoint.click"
        );
    }
}
