use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use super::error::{Error, Result};

const DEFAULT_PORT: &str = "1234";
const DEFAULT_LISTEN_IP: &str = "127.0.0.1";
const DEFAULT_DATABASE_URL: &str = "./static/BeerSchema.db";
const DEFAULT_POOL_SIZE: &str = "4";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub database_url: String,
    pub pool_size: u32,
}

impl Config {
    /// Reads `PORT`, `LISTEN_IP`, `DATABASE_URL` and `DATABASE_POOL_SIZE`.
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.into());

        let port = parse::<u16>("PORT", &var("PORT", DEFAULT_PORT))?;
        let ip = parse::<IpAddr>("LISTEN_IP", &var("LISTEN_IP", DEFAULT_LISTEN_IP))?;

        let pool_size = parse::<u32>("DATABASE_POOL_SIZE", &var("DATABASE_POOL_SIZE", DEFAULT_POOL_SIZE))?;
        if pool_size == 0 {
            return Err(Error::Config("DATABASE_POOL_SIZE must be at least 1".into()));
        }

        Ok(Config {
            listen_addr: SocketAddr::new(ip, port),
            database_url: var("DATABASE_URL", DEFAULT_DATABASE_URL),
            pool_size,
        })
    }
}

fn parse<T: FromStr>(name: &str, value: &str) -> Result<T> {
    T::from_str(value).map_err(|_| Error::Config(format!("Failed to parse ${}: {:?}", name, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:1234".parse().unwrap());
        assert_eq!(config.database_url, "./static/BeerSchema.db");
        assert_eq!(config.pool_size, 4);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("LISTEN_IP", "0.0.0.0"),
            ("DATABASE_URL", "/tmp/beers.db"),
            ("DATABASE_POOL_SIZE", "1"),
        ])
        .unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.database_url, "/tmp/beers.db");
        assert_eq!(config.pool_size, 1);
    }

    #[test]
    fn bad_values_name_the_variable() {
        match config_from(&[("PORT", "eighty")]) {
            Err(Error::Config(msg)) => assert!(msg.contains("$PORT")),
            other => panic!("unexpected {:?}", other),
        }

        assert!(config_from(&[("LISTEN_IP", "localhost")]).is_err());
        assert!(config_from(&[("DATABASE_POOL_SIZE", "0")]).is_err());
    }
}
