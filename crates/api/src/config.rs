use ecobin_db::models::status::RequestStatus;

/// Which external classification service answers `/recycling/analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisionProvider {
    Gemini,
    Imagga,
}

impl std::str::FromStr for VisionProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gemini" => Ok(Self::Gemini),
            "imagga" => Ok(Self::Imagga),
            other => Err(format!("Unknown recycling provider: {other}")),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
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
    /// Initial status assigned to new pickup requests.
    pub default_request_status: RequestStatus,
    /// Classification service backing `/recycling/analyze`.
    pub recycling_provider: VisionProvider,
    /// Gemini API key.
    pub gemini_api_key: String,
    /// Imagga API key and secret.
    pub imagga_api_key: String,
    pub imagga_api_secret: String,
    /// Base URL overrides for the vision APIs (tests and proxies); the
    /// providers' production URLs when unset.
    pub gemini_api_url: Option<String>,
    pub imagga_api_url: Option<String>,
    /// Credentials for the seeded admin account.
    pub admin_email: String,
    pub admin_password: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                 |
    /// |--------------------------|-------------------------|
    /// | `HOST`                   | `0.0.0.0`               |
    /// | `PORT`                   | `3000`                  |
    /// | `CORS_ORIGINS`           | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                    |
    /// | `DEFAULT_REQUEST_STATUS` | `PENDING`               |
    /// | `RECYCLING_PROVIDER`     | `gemini`                |
    /// | `GEMINI_API_KEY`         | (empty)                 |
    /// | `IMAGGA_API_KEY`         | (empty)                 |
    /// | `IMAGGA_API_SECRET`      | (empty)                 |
    /// | `GEMINI_API_URL`         | (provider default)      |
    /// | `IMAGGA_API_URL`         | (provider default)      |
    /// | `ADMIN_EMAIL`            | `admin@ecobin.local`    |
    /// | `ADMIN_PASSWORD`         | `change-me-on-boot`     |
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

        let default_request_status: RequestStatus = std::env::var("DEFAULT_REQUEST_STATUS")
            .unwrap_or_else(|_| "PENDING".into())
            .parse()
            .expect("DEFAULT_REQUEST_STATUS must be a valid request status");

        let recycling_provider: VisionProvider = std::env::var("RECYCLING_PROVIDER")
            .unwrap_or_else(|_| "gemini".into())
            .parse()
            .expect("RECYCLING_PROVIDER must be 'gemini' or 'imagga'");

        let gemini_api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let imagga_api_key = std::env::var("IMAGGA_API_KEY").unwrap_or_default();
        let imagga_api_secret = std::env::var("IMAGGA_API_SECRET").unwrap_or_default();
        let gemini_api_url = std::env::var("GEMINI_API_URL").ok();
        let imagga_api_url = std::env::var("IMAGGA_API_URL").ok();

        let admin_email =
            std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@ecobin.local".into());
        let admin_password =
            std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "change-me-on-boot".into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            default_request_status,
            recycling_provider,
            gemini_api_key,
            imagga_api_key,
            imagga_api_secret,
            gemini_api_url,
            imagga_api_url,
            admin_email,
            admin_password,
        }
    }
}
