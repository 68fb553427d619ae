//! Database Config

use clap::Args;

/// Document store settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `MongoDB` connection string
    #[arg(long, env = "MONGODB_URI")]
    pub database_url: String,

    /// Database holding the storefront collections
    #[arg(long, env = "MONGODB_DATABASE", default_value = "storefront")]
    pub database_name: String,

    /// Database username (overrides any credential embedded in the URI)
    #[arg(long, env = "DB_USER")]
    pub database_user: Option<String>,

    /// Database password
    #[arg(long, env = "DB_USER_PASSWORD")]
    pub database_password: Option<String>,
}
