use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// 会话有效期（小时）
    #[serde(default = "default_session_expires_hours")]
    pub session_expires_hours: i64,
    /// 连续失败多少次后锁定账户
    #[serde(default = "default_max_login_attempts")]
    pub max_login_attempts: i32,
    /// 锁定时长（分钟）
    #[serde(default = "default_lockout_minutes")]
    pub lockout_minutes: i64,
}

fn default_session_expires_hours() -> i64 {
    24
}

fn default_max_login_attempts() -> i32 {
    3
}

fn default_lockout_minutes() -> i64 {
    30
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_expires_hours: default_session_expires_hours(),
            max_login_attempts: default_max_login_attempts(),
            lockout_minutes: default_lockout_minutes(),
        }
    }
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 尝试读取配置文件，如果不存在则完全依赖环境变量
        let config_result = std::fs::read_to_string(&config_path);

        let mut config: Config = match config_result {
            Ok(config_str) => {
                // 有配置文件：先解析再用环境变量覆盖
                toml::from_str(&config_str).map_err(|e| format!("解析配置文件失败: {e}"))?
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
                let database_url = get_env("DATABASE_URL")
                    .ok_or("缺少 DATABASE_URL 环境变量，且未找到配置文件 config.toml")?;

                Config {
                    server: ServerConfig {
                        host: get_env("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                        port: get_env_parse("SERVER_PORT", 8080u16),
                    },
                    database: DatabaseConfig {
                        url: database_url,
                        max_connections: get_env_parse("DB_MAX_CONNECTIONS", 10u32),
                    },
                    auth: AuthConfig {
                        session_expires_hours: get_env_parse("SESSION_EXPIRES_HOURS", 24i64),
                        max_login_attempts: get_env_parse("MAX_LOGIN_ATTEMPTS", 3i32),
                        lockout_minutes: get_env_parse("LOCKOUT_MINUTES", 30i64),
                    },
                }
            }
            Err(e) => {
                return Err(format!("无法读取配置文件 {config_path}: {e}").into());
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
        if let Ok(v) = env::var("DATABASE_URL") {
            config.database.url = v;
        }
        if let Ok(v) = env::var("DB_MAX_CONNECTIONS")
            && let Ok(mc) = v.parse()
        {
            config.database.max_connections = mc;
        }
        if let Ok(v) = env::var("SESSION_EXPIRES_HOURS")
            && let Ok(n) = v.parse()
        {
            config.auth.session_expires_hours = n;
        }
        if let Ok(v) = env::var("MAX_LOGIN_ATTEMPTS")
            && let Ok(n) = v.parse()
        {
            config.auth.max_login_attempts = n;
        }
        if let Ok(v) = env::var("LOCKOUT_MINUTES")
            && let Ok(n) = v.parse()
        {
            config.auth.lockout_minutes = n;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 3000

            [database]
            url = "postgres://localhost/recycling_db"
            max_connections = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.auth.session_expires_hours, 24);
        assert_eq!(config.auth.max_login_attempts, 3);
        assert_eq!(config.auth.lockout_minutes, 30);
    }
}
