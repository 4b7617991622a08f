// Authorization header providers

/// Supplies the `Authorization` header value for each request.
///
/// Called once per request, so implementations may rotate tokens.
/// Returning `None` sends the request without the header.
pub trait CredentialProvider: Send + Sync {
    fn authorization(&self) -> Option<String>;
}

/// Fixed bearer token
#[derive(Clone)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

impl CredentialProvider for BearerToken {
    fn authorization(&self) -> Option<String> {
        if self.0.trim().is_empty() {
            None
        } else {
            Some(format!("Bearer {}", self.0.trim()))
        }
    }
}

impl<F> CredentialProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn authorization(&self) -> Option<String> {
        self()
    }
}
