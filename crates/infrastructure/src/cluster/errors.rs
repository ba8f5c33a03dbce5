use trainingportal_janitor_domain::DomainError;

/// Maps API status codes onto domain errors; anything else goes through `fallback`.
pub fn map_kube_error(
    err: kube::Error,
    subject: &str,
    fallback: impl FnOnce(String) -> DomainError,
) -> DomainError {
    match &err {
        kube::Error::Api(response) => match response.code {
            404 => DomainError::NotFound(subject.to_string()),
            409 => DomainError::Conflict(subject.to_string()),
            401 | 403 => DomainError::Forbidden(format!("{}: {}", subject, response.message)),
            _ => fallback(err.to_string()),
        },
        kube::Error::HyperError(_) | kube::Error::Service(_) => {
            DomainError::ConnectionFailed(err.to_string())
        }
        _ => fallback(err.to_string()),
    }
}
