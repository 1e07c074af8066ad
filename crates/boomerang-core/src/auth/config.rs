//! Configuration consumed by the outbound HTTP layer.

/// How the session token is attached to authenticated requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthConfig {
    /// Name of the header carrying the token.
    pub header_name: &'static str,
    /// Scheme placed before the token in the header value.
    pub header_prefix: &'static str,
    /// Durable storage key the token is read from.
    pub token_name: &'static str,
    /// Send requests unauthenticated instead of failing when no live token
    /// is stored.
    pub no_jwt_error: bool,
}

const AUTH_CONFIG: AuthConfig = AuthConfig {
    header_name: "Authorization",
    header_prefix: "JWT",
    token_name: super::session::TOKEN_KEY,
    no_jwt_error: false,
};

/// The process-wide authentication configuration.
pub const fn auth_config() -> AuthConfig {
    AUTH_CONFIG
}

impl AuthConfig {
    /// Format the header value for `token`, e.g. `JWT eyJ...`.
    pub fn header_value(&self, token: &str) -> String {
        format!("{} {}", self.header_prefix, token)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        auth_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_prefix_is_jwt() {
        let config = auth_config();
        assert_eq!(config.header_prefix, "JWT");
        assert_eq!(config.header_name, "Authorization");
        assert_eq!(config.token_name, "token");
        assert_eq!(config.header_value("abc.def.ghi"), "JWT abc.def.ghi");
    }
}
