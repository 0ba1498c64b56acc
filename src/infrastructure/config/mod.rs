use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    // Azure Speech
    pub speech_key: String,
    pub speech_region: String,
    pub speech_endpoint: Option<String>,
    // Azure Text Analytics
    pub language_key: String,
    pub language_endpoint: String,
    pub environment: Environment,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            speech_key: env::var("SPEECH_KEY")?,
            speech_region: env::var("SPEECH_REGION").unwrap_or_else(|_| "eastus".to_string()),
            speech_endpoint: env::var("SPEECH_ENDPOINT").ok(),
            language_key: env::var("AI_SERVICE_KEY")?,
            language_endpoint: env::var("AI_SERVICE_ENDPOINT")?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Full URL of the speech synthesis endpoint.
    ///
    /// Derived from the region unless SPEECH_ENDPOINT overrides it (the
    /// override is what the e2e suite uses to point at a local server).
    pub fn speech_synthesis_url(&self) -> String {
        match &self.speech_endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!(
                "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
                self.speech_region
            ),
        }
    }

    /// Full URL of the sentiment analysis endpoint.
    pub fn sentiment_url(&self) -> String {
        format!(
            "{}/text/analytics/v3.1/sentiment",
            self.language_endpoint.trim_end_matches('/')
        )
    }
}
