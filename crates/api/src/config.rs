/// Server configuration loaded from environment variables.
///
/// All fields except the admin credentials have sensible defaults suitable
/// for local development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Root directory for uploaded files, relative to the working directory.
    pub upload_dir: String,
    /// Maximum accepted request body size in bytes, uploads included.
    pub max_upload_bytes: usize,
    /// Admin session lifetime in hours.
    pub session_expiry_hours: i64,
    /// The single shared admin credential pair.
    pub admin: AdminCredentials,
}

/// The out-of-band admin secrets. When either is unconfigured, login can
/// never succeed.
#[derive(Debug, Clone, Default)]
pub struct AdminCredentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl AdminCredentials {
    /// Compare a submitted credential pair against the configured secrets.
    ///
    /// Opaque plain-string equality. No hashing and no constant-time
    /// comparison is performed; this mirrors the documented behaviour and
    /// is a known gap, not an oversight.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => u == username && p == password,
            _ => false,
        }
    }
}

/// Default maximum upload size: 5 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Default admin session lifetime in hours.
const DEFAULT_SESSION_EXPIRY_HOURS: i64 = 12;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `UPLOAD_DIR`            | `static/uploads`        |
    /// | `MAX_UPLOAD_BYTES`      | `5242880` (5 MiB)       |
    /// | `SESSION_EXPIRY_HOURS`  | `12`                    |
    /// | `ADMIN_USERNAME`        | unset (login disabled)  |
    /// | `ADMIN_PASSWORD`        | unset (login disabled)  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_dir =
            std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "static/uploads".into());

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let session_expiry_hours: i64 = std::env::var("SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_SESSION_EXPIRY_HOURS.to_string())
            .parse()
            .expect("SESSION_EXPIRY_HOURS must be a valid i64");

        let admin = AdminCredentials {
            username: std::env::var("ADMIN_USERNAME").ok(),
            password: std::env::var("ADMIN_PASSWORD").ok(),
        };

        if admin.username.is_none() || admin.password.is_none() {
            tracing::warn!("ADMIN_USERNAME/ADMIN_PASSWORD not set; admin login is disabled");
        }

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            upload_dir,
            max_upload_bytes,
            session_expiry_hours,
            admin,
        }
    }
}
