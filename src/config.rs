use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub contract: ContractConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// development 下才开放 mock 合约调试接口
    pub environment: Environment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// Mock 彩票合约参数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractConfig {
    /// 可选号码下界 (含)
    pub min_number: u32,
    /// 可选号码上界 (含)
    pub max_number: u32,
    /// 单注票价 (美分)
    pub ticket_price_cents: i64,
    /// 捐赠比例 (basis points: 100% = 10000)
    pub donation_bp: i64,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            min_number: 0,
            max_number: 99,
            ticket_price_cents: 100,
            donation_bp: 1500,
        }
    }
}

impl Config {
    pub fn from_toml() -> anyhow::Result<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 尝试读取配置文件，如果不存在则完全依赖环境变量
        let config_result = std::fs::read_to_string(&config_path);

        let mut config: Config = match config_result {
            Ok(config_str) => {
                // 有配置文件：先解析再用环境变量覆盖
                toml::from_str(&config_str)
                    .map_err(|e| anyhow::anyhow!("Failed to parse config file: {e}"))?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                // 无配置文件：使用环境变量与默认值构建
                fn get_env(name: &str) -> Option<String> {
                    env::var(name).ok()
                }
                fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
                    env::var(name)
                        .ok()
                        .and_then(|v| v.parse::<T>().ok())
                        .unwrap_or(default)
                }

                // 数据库 URL 在无配置文件时必须提供
                let database_url = get_env("DATABASE_URL").ok_or_else(|| {
                    anyhow::anyhow!("DATABASE_URL is not set and no config.toml was found")
                })?;

                Config {
                    server: ServerConfig {
                        host: get_env("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                        port: get_env_parse("SERVER_PORT", 8080u16),
                        environment: match get_env("APP_ENV").as_deref() {
                            Some("production") => Environment::Production,
                            _ => Environment::Development,
                        },
                    },
                    database: DatabaseConfig {
                        url: database_url,
                        max_connections: get_env_parse("DB_MAX_CONNECTIONS", 10u32),
                    },
                    contract: ContractConfig {
                        min_number: get_env_parse("CONTRACT_MIN_NUMBER", 0u32),
                        max_number: get_env_parse("CONTRACT_MAX_NUMBER", 99u32),
                        ticket_price_cents: get_env_parse("CONTRACT_TICKET_PRICE_CENTS", 100i64),
                        donation_bp: get_env_parse("CONTRACT_DONATION_BP", 1500i64),
                    },
                }
            }
            Err(e) => {
                return Err(anyhow::anyhow!("Failed to read config file {config_path}: {e}"));
            }
        };

        // 环境变量覆盖（即便文件存在时也覆盖）
        if let Ok(v) = env::var("SERVER_HOST") {
            config.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            config.server.port = p;
        }
        if let Ok(v) = env::var("APP_ENV") {
            config.server.environment = match v.as_str() {
                "production" => Environment::Production,
                _ => Environment::Development,
            };
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            config.database.url = v;
        }
        if let Ok(v) = env::var("DB_MAX_CONNECTIONS")
            && let Ok(mc) = v.parse()
        {
            config.database.max_connections = mc;
        }
        if let Ok(v) = env::var("CONTRACT_MIN_NUMBER")
            && let Ok(n) = v.parse()
        {
            config.contract.min_number = n;
        }
        if let Ok(v) = env::var("CONTRACT_MAX_NUMBER")
            && let Ok(n) = v.parse()
        {
            config.contract.max_number = n;
        }
        if let Ok(v) = env::var("CONTRACT_TICKET_PRICE_CENTS")
            && let Ok(n) = v.parse()
        {
            config.contract.ticket_price_cents = n;
        }
        if let Ok(v) = env::var("CONTRACT_DONATION_BP")
            && let Ok(n) = v.parse()
        {
            config.contract.donation_bp = n;
        }

        if config.contract.min_number > config.contract.max_number {
            return Err(anyhow::anyhow!(
                "contract.min_number must not exceed contract.max_number"
            ));
        }

        Ok(config)
    }
}
