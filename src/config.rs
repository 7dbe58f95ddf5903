use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub channel_access_token: String,
    pub channel_secret: String,
    pub gemini_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let channel_access_token = env::var("CHANNEL_ACCESS_TOKEN")
            .map_err(|_| "CHANNEL_ACCESS_TOKEN must be set in environment")?;

        let channel_secret = env::var("CHANNEL_SECRET")
            .map_err(|_| "CHANNEL_SECRET must be set in environment")?;

        let gemini_api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| "GEMINI_API_KEY must be set in environment")?;

        Ok(Self {
            channel_access_token,
            channel_secret,
            gemini_api_key,
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.channel_access_token.is_empty() {
            return Err("CHANNEL_ACCESS_TOKEN must not be empty".to_string());
        }

        if self.channel_secret.is_empty() {
            return Err("CHANNEL_SECRET must not be empty".to_string());
        }

        if self.gemini_api_key.is_empty() {
            return Err("GEMINI_API_KEY must not be empty".to_string());
        }

        Ok(())
    }
}
