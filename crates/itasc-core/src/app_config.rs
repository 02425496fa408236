/// Runtime configuration for the ingest binary, read from the environment.
///
/// The FTC API key is carried here and handed to the client at construction
/// time; nothing else in the workspace reads it from the process environment.
#[derive(Clone)]
pub struct AppConfig {
    pub ftc_api_key: String,
    pub ftc_base_url: String,
    pub ftc_request_timeout_secs: u64,
    /// Upper bound on page requests per run. Zero disables fetching entirely.
    pub ftc_max_pages: usize,
    pub user_agent: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("ftc_api_key", &"[redacted]")
            .field("ftc_base_url", &self.ftc_base_url)
            .field("ftc_request_timeout_secs", &self.ftc_request_timeout_secs)
            .field("ftc_max_pages", &self.ftc_max_pages)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
