use std::{
    env,
    error::Error,
    fmt::{self, Display},
    num::ParseIntError,
    path::PathBuf,
};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MODEL_DIR: &str = "artifacts";

/// A setting that was present in the environment but could not be used.
#[derive(Debug)]
pub enum ConfigErr {
    InvalidPort { value: String, source: ParseIntError },
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::InvalidPort { value, source } => {
                write!(f, "invalid PORT '{value}': {source}")
            }
        }
    }
}

impl Error for ConfigErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigErr::InvalidPort { source, .. } => Some(source),
        }
    }
}

/// Where the server listens and where it reads its artifacts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    pub host: String,
    pub port: u16,
    pub model_dir: PathBuf,
}

impl ServeConfig {
    /// Reads `HOST`, `PORT` and `MODEL_DIR`, falling back to the defaults for unset variables.
    ///
    /// # Errors
    /// `InvalidPort` if `PORT` is set but is not a port number.
    pub fn from_env() -> Result<Self, ConfigErr> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigErr>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigErr::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            model_dir: lookup("MODEL_DIR")
                .unwrap_or_else(|| DEFAULT_MODEL_DIR.to_string())
                .into(),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
