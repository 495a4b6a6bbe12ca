use crate::errors::{ServiceError, ServiceResult};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub cors_permissive: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            cors_permissive: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> ServiceResult<Self> {
        dotenvy::dotenv().ok();

        let server_port = env_var_or("SERVER_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ServiceError::Config(format!("SERVER_PORT: {e}")))?;

        let cors_permissive = env_var_or("CORS_PERMISSIVE", "true")
            .parse::<bool>()
            .map_err(|e| ServiceError::Config(format!("CORS_PERMISSIVE: {e}")))?;

        Ok(Self {
            server_host: env_var_or("SERVER_HOST", "0.0.0.0"),
            server_port,
            cors_permissive,
        })
    }

    #[inline]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
