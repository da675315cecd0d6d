use clap::{Parser, Subcommand};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::faq::DEFAULT_THRESHOLD;

/// Prefix of environment overrides, e.g. `FAQ_CHAT_SERVER__PORT=8000`.
pub const ENV_PREFIX: &str = "FAQ_CHAT";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE", global = true)]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "BIND_HOST", global = true)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT", global = true)]
    pub port: Option<u16>,

    /// FAQ corpus file (JSON or YAML)
    #[arg(long, env = "FAQ_PATH", global = true)]
    pub faq_path: Option<String>,

    /// Minimum similarity for an FAQ match
    #[arg(long, env = "FAQ_THRESHOLD", global = true)]
    pub threshold: Option<f64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the chat page and the /ask endpoint (default)
    Serve,
    /// Chat with a running server from the terminal
    Chat {
        /// Base URL of the server
        #[arg(long, env = "FAQ_CHAT_URL", default_value = "http://127.0.0.1:5000")]
        url: String,
    },
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub faq: FaqConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FaqConfig {
    /// Corpus file; format follows the extension.
    pub path: String,
    pub threshold: f64,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Self::from_cli(&cli)
    }

    /// Build the configuration. Priority: CLI flag (or its env var) >
    /// `FAQ_CHAT_*` env > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("faq.path", "faq_questions.json")?
            .set_default("faq.threshold", DEFAULT_THRESHOLD)?;

        // An explicit file must exist; ./config.yaml is picked up if present.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::new(path, FileFormat::Yaml)),
            None => builder.add_source(File::new("config.yaml", FileFormat::Yaml).required(false)),
        };

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = &cli.host {
            builder = builder.set_override("server.host", host.as_str())?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(path) = &cli.faq_path {
            builder = builder.set_override("faq.path", path.as_str())?;
        }
        if let Some(threshold) = cli.threshold {
            builder = builder.set_override("faq.threshold", threshold)?;
        }

        builder.build()?.try_deserialize()
    }
}
