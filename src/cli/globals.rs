use secrecy::SecretString;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub session_secret: SecretString,
    pub session_ttl: i64,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(secret: SecretString, ttl: i64) -> Self {
        Self {
            session_secret: secret,
            session_ttl: ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(SecretString::from("sekret".to_string()), 3600);
        assert_eq!(args.session_secret.expose_secret(), "sekret");
        assert_eq!(args.session_ttl, 3600);
    }
}
