//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob passed to Tera, e.g. `templates/**/*.html`.
    pub templates_dir: String,
    /// Directory served under `/assets`.
    pub assets_dir: String,
    /// JSON fixture holding the skill listings.
    pub skills_path: String,
}
