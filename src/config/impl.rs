use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    ///
    /// 优先级（从低到高）：内置默认值 < config 文件 < config.{APP_ENV} 文件
    /// < EMS_ 前缀环境变量 < 常用环境变量覆盖
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，保证无配置文件也能启动
            .set_default("app.system_name", "Edu-Mentor Services")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.unix_socket_path", "")?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 16)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 30)?
            .set_default("server.limits.max_payload_size", 262_144)?
            .set_default("jwt.secret", "edu_mentor_secret_key_2024")?
            .set_default("jwt.access_token_expiry", 30)?
            .set_default("database.url", "sqlite://edu_mentor.db?mode=rwc")?
            .set_default("database.pool_size", 10)?
            .set_default("database.timeout", 5)?
            .set_default("cors.allowed_origins", vec!["*".to_string()])?
            .set_default("cors.max_age", 3600)?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖，嵌套键用双下划线分隔
            // 例如 EMS_SERVER__MAX_WORKERS 对应 server.max_workers
            .add_source(
                Environment::with_prefix("EMS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从常用环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option(
                "cors.allowed_origins",
                std::env::var("CORS_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(|o| o.trim().to_string()).collect::<Vec<_>>()),
            )?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 检查是否允许任意来源跨域
    pub fn cors_allow_any_origin(&self) -> bool {
        self.cors.allowed_origins.iter().any(|o| o == "*")
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_with_defaults() {
        let config = AppConfig::load().expect("default config should load");
        assert_eq!(config.jwt.access_token_expiry, 30);
        assert!(config.server.workers > 0);
        assert!(!config.database.url.is_empty());
    }

    #[test]
    fn test_nested_env_override_with_double_underscore() {
        unsafe { std::env::set_var("EMS_SERVER__MAX_WORKERS", "64") };
        let config = AppConfig::load().expect("config with env override should load");
        unsafe { std::env::remove_var("EMS_SERVER__MAX_WORKERS") };
        assert_eq!(config.server.max_workers, 64);
    }

    #[test]
    fn test_bind_address_format() {
        let config = AppConfig::load().expect("default config should load");
        let addr = config.server_bind_address();
        assert!(addr.contains(':'));
    }
}
