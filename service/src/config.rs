use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;

/// Default Groq API base URL used when `GROQ_BASE_URL` is not set.
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Model identifier requested from the completion provider on every call.
pub const DEFAULT_GROQ_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// A list of full CORS origin URLs that allowed to receive server responses.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "http://localhost:3000,https://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// The base URL of the Groq OpenAI-compatible completion API.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_GROQ_BASE_URL)]
    groq_base_url: String,

    /// The API key to use when calling the Groq completion API. When absent
    /// the summarization endpoint fails closed with a configuration error.
    #[arg(long, env)]
    groq_api_key: Option<String>,

    /// The model identifier to request completions from.
    #[arg(long, env, default_value = DEFAULT_GROQ_MODEL)]
    groq_model: String,

    /// Upper bound on the number of tokens the provider may generate per summary.
    #[arg(long, env, default_value_t = 1000)]
    pub max_completion_tokens: u32,

    /// Milliseconds the share endpoint sleeps to simulate email delivery.
    /// Delivery is a stub; no email is transmitted.
    #[arg(long, env, default_value_t = 1500)]
    pub share_delay_ms: u64,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: String,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 4000)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Returns the Groq API base URL.
    pub fn groq_base_url(&self) -> &str {
        &self.groq_base_url
    }

    /// Returns the Groq API key, if configured.
    pub fn groq_api_key(&self) -> Option<String> {
        self.groq_api_key.clone()
    }

    /// Returns the model identifier sent with completion requests.
    pub fn groq_model(&self) -> &str {
        &self.groq_model
    }
}
