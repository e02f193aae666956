//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Supabase project URL
    /// Example: https://abcdefghijkl.supabase.co
    pub supabase_url: Option<String>,

    /// Public (anon) API key of the Supabase project
    pub supabase_anon_key: Option<String>,

    /// Run a connection check against the contact table at startup
    pub check_connection_on_start: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            supabase_url: non_empty_var("SUPABASE_URL"),
            supabase_anon_key: non_empty_var("SUPABASE_ANON_KEY"),
            check_connection_on_start: std::env::var("AUTOFLOW_CHECK_DB")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    /// Check if the Supabase URL is configured
    pub fn has_supabase_url(&self) -> bool {
        self.supabase_url.is_some()
    }

    /// Check if the Supabase API key is configured
    pub fn has_supabase_key(&self) -> bool {
        self.supabase_anon_key.is_some()
    }

    /// Names of required variables that are not set
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.has_supabase_url() {
            missing.push("SUPABASE_URL");
        }
        if !self.has_supabase_key() {
            missing.push("SUPABASE_ANON_KEY");
        }
        missing
    }

    /// Whether contact submissions can reach the backend
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("supabase_url", &self.supabase_url)
            .field("has_supabase_key", &self.has_supabase_key())
            .field("check_connection_on_start", &self.check_connection_on_start)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
