use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, info, instrument, warn};

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

// where the webapp finds its settings at startup, relative to the origin it was served from
pub const CONFIG_PATH: &str = "/config.toml";

// frontend configuration
//
// read once at startup so that the same build can be pointed at a different catalog
// by swapping the file next to index.html
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CatalogConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_owned()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            api_url: default_api_url(),
        }
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: CatalogConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<CatalogConfig> {
    debug!("parsing config file");

    let data: TomlConfigFile = toml::from_str(doc)?;

    Ok(data.config)
}

// fetch the config file from the server that served the app
//
// a missing or broken file is not fatal, the defaults point at a catalog running locally
pub async fn load_config() -> CatalogConfig {
    match fetch_config().await {
        Ok(config) => {
            info!(api_url = %config.api_url, "loaded config");
            config
        }
        Err(err) => {
            warn!("failed to load {CONFIG_PATH}, using defaults: {err}");
            CatalogConfig::default()
        }
    }
}

async fn fetch_config() -> anyhow::Result<CatalogConfig> {
    let resp = Request::get(CONFIG_PATH).send().await?;

    if !resp.ok() {
        return Err(anyhow::Error::msg(format!(
            "server returned {} {}",
            resp.status(),
            resp.status_text()
        )));
    }

    parse_config(&resp.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = parse_config(
            r#"
            [config]
            api_url = "https://catalog.example.org"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_url, "https://catalog.example.org");
    }

    #[test]
    fn test_missing_key_uses_default() {
        let config = parse_config("[config]\n").unwrap();
        assert_eq!(config, CatalogConfig::default());

        let config = parse_config("").unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_malformed_config() {
        assert!(parse_config("[config\napi_url = ").is_err());
        assert!(parse_config("[config]\napi_url = 5000").is_err());
    }
}
