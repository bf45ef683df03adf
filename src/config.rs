use std::env;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Where the Villa Perez backend lives. Read once at startup; everything
/// downstream takes the config by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Reads `VILLA_API_URL`, falling back to the local dev backend.
    pub fn from_env() -> Self {
        if cfg!(debug_assertions) {
            dotenv::dotenv().ok();
        }

        let base_url = env::var("VILLA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}
