use serde::Deserialize;

use ecourse_core::config::Config;

/// Courses service configuration loaded from environment variables.
#[derive(Deserialize)]
pub struct CoursesConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `COURSES_PORT`.
    #[serde(default = "default_courses_port")]
    pub courses_port: u16,
    /// HS256 secret shared with the OAuth2 provider that signs access tokens.
    pub access_token_secret: String,
    /// Origin prepended to static image paths (default `http://localhost:3114`).
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    pub oauth2_client_id: String,
    pub oauth2_client_secret: String,
}

impl Config for CoursesConfig {}

fn default_courses_port() -> u16 {
    3114
}

fn default_public_base_url() -> String {
    "http://localhost:3114".to_owned()
}
