pub use http::StatusCode;
use kube::Error;

/// Exposes the HTTP status of a failed Kubernetes API call.
pub trait HttpStatusCode {
    fn status_code(&self) -> Option<StatusCode>;

    fn is_status_code(&self, status_code: StatusCode) -> bool {
        self.status_code()
            .map(|some| some == status_code)
            .unwrap_or_default()
    }

    fn is_not_found(&self) -> bool {
        self.is_status_code(StatusCode::NOT_FOUND)
    }
}

impl HttpStatusCode for kube::Error {
    fn status_code(&self) -> Option<StatusCode> {
        if let Error::Api(error_response) = self {
            StatusCode::from_u16(error_response.code).ok()
        } else {
            None
        }
    }
}

impl<T, E> HttpStatusCode for std::result::Result<T, E>
where
    E: HttpStatusCode,
{
    fn status_code(&self) -> Option<StatusCode> {
        self.as_ref().err().and_then(|e| e.status_code())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use kube::core::ErrorResponse;

    fn api_error(code: u16) -> kube::Error {
        kube::Error::Api(ErrorResponse {
            status: "Failure".to_string(),
            message: "virtualservices.gateway.solo.io \"petstore\" not found".to_string(),
            reason: "NotFound".to_string(),
            code,
        })
    }

    #[test]
    fn api_errors_carry_status() {
        assert!(api_error(404).is_not_found());
        assert!(api_error(403).is_status_code(StatusCode::FORBIDDEN));
        assert!(!api_error(403).is_not_found());
    }

    #[test]
    fn results_carry_status() {
        let result: Result<(), kube::Error> = Err(api_error(404));
        assert!(result.is_not_found());
        let result: Result<(), kube::Error> = Ok(());
        assert_eq!(result.status_code(), None);
    }
}
