use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// When set, plain-HTTP requests are redirected to this HTTPS port.
    pub https_port: Option<u16>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            https_port: lookup("HTTPS_PORT")
                .map(|p| p.parse::<u16>())
                .transpose()
                .context("HTTPS_PORT must be a valid number")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.https_port, None);
    }

    #[test]
    fn reads_all_variables() {
        let config =
            config_from(&[("HOST", "0.0.0.0"), ("PORT", "8080"), ("HTTPS_PORT", "8443")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.https_port, Some(8443));
    }

    #[test]
    fn rejects_bad_ports() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("HTTPS_PORT", "70000")]).is_err());
    }
}
