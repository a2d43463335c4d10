/*
[INPUT]:  Adapter errors from Task Service calls
[OUTPUT]: Classified failures and the user-facing message for each
[POS]:    Controller layer - shared error resolution policy
[UPDATE]: When adding failure classes or changing message wording
*/

use housekeeping_adapter::HousekeepingError;

pub const UNAUTHORIZED_MESSAGE: &str = "No autorizado. Verifica el token de acceso.";
pub const GENERIC_ERROR_MESSAGE: &str = "Ocurrió un error en la solicitud.";
pub const TOKEN_REQUIRED_MESSAGE: &str = "Debes ingresar un token de acceso.";

/// Failure of one Task Service call, reduced to what the UI needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceFailure {
    /// No response at all (connect refused, DNS, timeout)
    Unreachable,
    /// 401 from the service
    Unauthorized,
    /// Non-success status, with the message found in the body if any
    Rejected { status: u16, message: Option<String> },
    /// Anything else (undecodable body, client misconfiguration)
    Other { detail: String },
}

impl From<&HousekeepingError> for ServiceFailure {
    fn from(err: &HousekeepingError) -> Self {
        match err {
            HousekeepingError::Unreachable(_) => ServiceFailure::Unreachable,
            HousekeepingError::Http(inner) if inner.is_connect() || inner.is_timeout() => {
                ServiceFailure::Unreachable
            }
            HousekeepingError::Unauthorized => ServiceFailure::Unauthorized,
            HousekeepingError::Api { status, body } => ServiceFailure::Rejected {
                status: *status,
                message: body.message().map(str::to_string),
            },
            other => ServiceFailure::Other {
                detail: other.to_string(),
            },
        }
    }
}

impl From<HousekeepingError> for ServiceFailure {
    fn from(err: HousekeepingError) -> Self {
        ServiceFailure::from(&err)
    }
}

/// Message shown when the service cannot be reached
pub fn service_unavailable_message(port: Option<u16>) -> String {
    match port {
        Some(port) => format!(
            "No fue posible conectar con el servicio. Asegúrate de que esté disponible en el puerto {port}."
        ),
        None => "No fue posible conectar con el servicio. Asegúrate de que esté disponible.".to_string(),
    }
}

/// Resolve a failure into the message shown inline next to the failed operation.
///
/// Priority: unreachable, unauthorized, server-supplied text, generic fallback.
pub fn resolve_error_message(failure: &ServiceFailure, service_port: Option<u16>) -> String {
    match failure {
        ServiceFailure::Unreachable => service_unavailable_message(service_port),
        ServiceFailure::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
        ServiceFailure::Rejected {
            message: Some(message),
            ..
        } => message.clone(),
        ServiceFailure::Rejected { message: None, .. } | ServiceFailure::Other { .. } => {
            GENERIC_ERROR_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use housekeeping_adapter::ApiErrorBody;
    use rstest::rstest;

    #[rstest]
    #[case(ServiceFailure::Unreachable, "No fue posible conectar con el servicio. Asegúrate de que esté disponible en el puerto 8081.")]
    #[case(ServiceFailure::Unauthorized, UNAUTHORIZED_MESSAGE)]
    #[case(ServiceFailure::Rejected { status: 409, message: Some("La tarea ya existe".to_string()) }, "La tarea ya existe")]
    #[case(ServiceFailure::Rejected { status: 500, message: None }, GENERIC_ERROR_MESSAGE)]
    #[case(ServiceFailure::Other { detail: "expected value".to_string() }, GENERIC_ERROR_MESSAGE)]
    fn test_resolution_priority(#[case] failure: ServiceFailure, #[case] expected: &str) {
        assert_eq!(resolve_error_message(&failure, Some(8081)), expected);
    }

    #[test]
    fn test_api_error_classification_uses_body() {
        let err = HousekeepingError::Api {
            status: 400,
            body: ApiErrorBody::Structured {
                message: None,
                error: Some("Bad Request".to_string()),
            },
        };
        assert_eq!(
            ServiceFailure::from(&err),
            ServiceFailure::Rejected {
                status: 400,
                message: Some("Bad Request".to_string()),
            }
        );
    }

    #[test]
    fn test_unauthorized_classification() {
        assert_eq!(
            ServiceFailure::from(HousekeepingError::Unauthorized),
            ServiceFailure::Unauthorized
        );
    }

    #[test]
    fn test_unknown_port_message() {
        assert!(!service_unavailable_message(None).contains("puerto"));
    }
}
