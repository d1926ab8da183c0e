// 환경 변수 기반 설정
// Configuration loaded from the environment (and an optional .env file)
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

/// 설정 에러
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("JWT_SECRET and JWT_REFRESH_SECRET must be different")]
    SharedSecret,

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

/// 서명 키 (Access / Refresh 각각 별도)
#[derive(Clone, PartialEq, Eq)]
pub struct JwtSecrets {
    pub access: String,
    pub refresh: String,
}

// 비밀 값은 로그에 남지 않도록
impl std::fmt::Debug for JwtSecrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSecrets")
            .field("access", &"***")
            .field("refresh", &"***")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtSecrets,
    pub port: u16,
    pub store: StoreBackend,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정 로드
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::dotenv().is_ok() {
            tracing::debug!("loaded variables from .env");
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 임의의 조회 함수로 설정 구성 (테스트에서 환경 변수를 건드리지 않기 위함)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let access = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let refresh = get("JWT_REFRESH_SECRET").ok_or(ConfigError::Missing("JWT_REFRESH_SECRET"))?;
        if access == refresh {
            return Err(ConfigError::SharedSecret);
        }

        let port = match get("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let store = match get("STORE").as_deref() {
            None | Some("postgres") => StoreBackend::Postgres,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "STORE",
                    value: other.to_string(),
                })
            }
        };

        let database_url = get("DATABASE_URL").unwrap_or_else(|| {
            let host = get("DB_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = get("DB_PORT").unwrap_or_else(|| "5432".to_string());
            let user = get("DB_USER").unwrap_or_else(|| "root".to_string());
            let name = get("DB_NAME").unwrap_or_else(|| "auth_db".to_string());

            match get("DB_PASSWORD") {
                Some(password) => format!("postgresql://{}:{}@{}:{}/{}", user, password, host, port, name),
                None => format!("postgresql://{}@{}:{}/{}", user, host, port, name),
            }
        });

        Ok(Self {
            database_url,
            jwt: JwtSecrets { access, refresh },
            port,
            store,
        })
    }
}
