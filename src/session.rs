use std::sync::RwLock;

/// Source of the bearer token attached to authenticated requests. The
/// token itself is opaque to the client; the backend mints and validates
/// it.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Process-local session state, the counterpart of the browser's stored
/// auth token. Interior mutability so one shared session can be updated
/// from a sign-in flow while API calls read it.
#[derive(Debug, Default)]
pub struct SessionStore {
    token: RwLock<Option<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn login(&self, token: impl Into<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.into());
    }

    pub fn logout(&self) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl TokenProvider for SessionStore {
    fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
