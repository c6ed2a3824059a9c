use std::env;
use std::path::PathBuf;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub environment: String,
    pub weights_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            environment: "development".to_string(),
            weights_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let config = Config {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            environment: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            weights_file: env::var("PRICING_WEIGHTS_FILE")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(anyhow::anyhow!(
                "LOG_LEVEL must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        if let Some(path) = &self.weights_file {
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                return Err(anyhow::anyhow!(
                    "PRICING_WEIGHTS_FILE must point to a .json file, got '{}'",
                    path.display()
                ));
            }
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
