use std::fmt;

/// Fallos de una llamada al backend, normalizados en el gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Fallo de red/conectividad: la petición nunca obtuvo respuesta
    Network(String),
    /// Respuesta no-2xx; `message` es el `error` que manda el servidor
    /// cuando hay uno, o el status text si el body no se pudo leer
    Http { status: u16, message: String },
    /// Respuesta 2xx con body que no se pudo deserializar
    Decode(String),
}

impl ApiError {
    /// Mensaje para enseñar al usuario tal cual
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Error connecting to server".to_string(),
            ApiError::Http { message, .. } => message.clone(),
            ApiError::Decode(_) => "Unexpected server response".to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            ApiError::Decode(e) => write!(f, "Parse error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_surface_the_server_message() {
        let err = ApiError::Http {
            status: 400,
            message: "Customer already exists".to_string(),
        };
        assert_eq!(err.user_message(), "Customer already exists");
        assert_eq!(err.to_string(), "HTTP 400: Customer already exists");
    }

    #[test]
    fn network_errors_get_a_generic_user_message() {
        let err = ApiError::Network("failed to fetch".to_string());
        assert_eq!(err.user_message(), "Error connecting to server");
    }
}
