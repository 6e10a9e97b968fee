use crate::error::Error;
use crate::seed::Seed;
use crate::word_store::IndexPolicy;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub type SharedConfig = Arc<Config>;

/// Default port of the HTTP listener. The listener binds all interfaces.
pub const DEFAULT_PORT: u16 = 5000;

#[serde_as]
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub bind_addr: SocketAddr,
    #[serde_as(as = "DurationSeconds<u64>")]
    pub api_timeout: Duration,
    pub index_policy: IndexPolicy,
    pub allow_append: bool,
    pub seed: Seed,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            api_timeout: Duration::from_secs(30),
            index_policy: IndexPolicy::default(),
            allow_append: true,
            seed: Seed::default(),
        }
    }
}

impl Config {
    /// Load a [`Config`] from the JSON file at the given path. Omitted fields take their default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the path can't be opened, [`Error::InvalidJSON`] if its content
    /// isn't a valid config, or [`Error::EmptySeed`] if the configured seed produces no words.
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        conf.seed.validate()?;
        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, DEFAULT_PORT};
    use crate::error::Error;
    use crate::seed::Seed;
    use crate::word_store::IndexPolicy;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut f = tempfile::Builder::new()
            .prefix("wordhoard")
            .suffix(".json")
            .tempfile()
            .unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn defaults() {
        let conf = Config::default();
        assert!(conf.bind_addr.ip().is_unspecified());
        assert_eq!(conf.bind_addr.port(), DEFAULT_PORT);
        assert_eq!(conf.index_policy, IndexPolicy::Strict);
        assert!(conf.allow_append);
        assert_eq!(conf.seed, Seed::default());
    }

    #[test]
    fn empty_object_is_default() {
        let file = write_config("{}");
        let conf = Config::try_from_file(file.path()).unwrap();
        assert_eq!(conf, Config::default());
    }

    #[test]
    fn wraparound_read_only() {
        let file = write_config(
            r#"{
                "bind_addr": "127.0.0.1:8080",
                "api_timeout": 5,
                "index_policy": "wraparound",
                "allow_append": false,
                "seed": { "fixed": ["a", "b", "c"] }
            }"#,
        );
        let conf = Config::try_from_file(file.path()).unwrap();
        assert_eq!(conf.bind_addr.port(), 8080);
        assert_eq!(conf.api_timeout, Duration::from_secs(5));
        assert_eq!(conf.index_policy, IndexPolicy::Wraparound);
        assert!(!conf.allow_append);
        assert_eq!(conf.seed.words(), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_seed_is_rejected() {
        let file = write_config(r#"{ "seed": { "fixed": [] } }"#);
        assert!(matches!(
            Config::try_from_file(file.path()),
            Err(Error::EmptySeed)
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let file = write_config(r#"{ "port": 80 }"#);
        assert!(matches!(
            Config::try_from_file(file.path()),
            Err(Error::InvalidJSON(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Config::try_from_file("/nonexistent/wordhoard.json"),
            Err(Error::IO(_))
        ));
    }
}
