//! Configuration for the inventory HTTP server.

use std::time::Duration;

use clap::Parser;

use crate::metadata::LookupConfig;
use crate::service::ServiceConfig;

/// CLI arguments for the inventory server. Every flag can also be set from
/// the environment.
#[derive(Debug, Parser)]
#[command(name = "gamepub_inventory")]
#[command(about = "Game inventory HTTP service")]
pub struct CliArgs {
    /// HTTP server port.
    #[arg(long, env = "INVENTORY_PORT", default_value = "8000")]
    pub port: u16,

    /// Mailbox size of the inventory collection actor.
    #[arg(long, env = "INVENTORY_CHANNEL_CAPACITY", default_value = "32")]
    pub channel_capacity: usize,

    /// Reject malformed price/quantity/in_stock values instead of defaulting them.
    #[arg(long, env = "INVENTORY_STRICT_PARAMS", default_value = "false")]
    pub strict_params: bool,

    /// IGDB games endpoint.
    #[arg(long, env = "IGDB_URL", default_value = "https://api.igdb.com/v4/games")]
    pub igdb_url: String,

    /// IGDB client id. Metadata lookup is disabled unless this and the token are set.
    #[arg(long, env = "IGDB_CLIENT_ID")]
    pub igdb_client_id: Option<String>,

    /// IGDB bearer token.
    #[arg(long, env = "IGDB_ACCESS_TOKEN")]
    pub igdb_access_token: Option<String>,

    /// Timeout for a single metadata request, in seconds.
    #[arg(long, env = "INVENTORY_LOOKUP_TIMEOUT_SECS", default_value = "10")]
    pub lookup_timeout_secs: u64,
}

impl CliArgs {
    /// Lookup settings, or `None` when credentials are missing.
    pub fn to_lookup_config(&self) -> Option<LookupConfig> {
        let client_id = self.igdb_client_id.clone()?;
        let access_token = self.igdb_access_token.clone()?;
        Some(LookupConfig {
            url: self.igdb_url.clone(),
            client_id,
            access_token,
            timeout: Duration::from_secs(self.lookup_timeout_secs),
        })
    }

    pub fn to_service_config(&self) -> ServiceConfig {
        ServiceConfig {
            strict_params: self.strict_params,
        }
    }
}

/// Configuration for the inventory HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP server port.
    pub port: u16,
    /// Collection actor mailbox size.
    pub channel_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            channel_capacity: 32,
        }
    }
}

impl From<&CliArgs> for ServerConfig {
    fn from(args: &CliArgs) -> Self {
        Self {
            port: args.port,
            channel_capacity: args.channel_capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_use_defaults_without_flags() {
        // given/when
        let args = CliArgs::try_parse_from(["gamepub_inventory"]).unwrap();

        // then
        let config = ServerConfig::from(&args);
        assert_eq!(config.port, 8000);
        assert_eq!(config.channel_capacity, 32);
        assert!(!args.to_service_config().strict_params);
        assert_eq!(args.igdb_url, "https://api.igdb.com/v4/games");
    }

    #[test]
    fn test_disable_lookup_without_both_credentials() {
        // given
        let args = CliArgs::try_parse_from([
            "gamepub_inventory",
            "--igdb-client-id",
            "abc",
        ])
        .unwrap();

        // when/then
        assert!(args.to_lookup_config().is_none());
    }

    #[test]
    fn test_build_lookup_config_from_flags() {
        // given
        let args = CliArgs::try_parse_from([
            "gamepub_inventory",
            "--port",
            "9090",
            "--strict-params",
            "--igdb-client-id",
            "abc",
            "--igdb-access-token",
            "xyz",
            "--lookup-timeout-secs",
            "3",
        ])
        .unwrap();

        // when
        let lookup = args.to_lookup_config().unwrap();

        // then
        assert_eq!(ServerConfig::from(&args).port, 9090);
        assert!(args.to_service_config().strict_params);
        assert_eq!(lookup.client_id, "abc");
        assert_eq!(lookup.access_token, "xyz");
        assert_eq!(lookup.timeout, Duration::from_secs(3));
    }
}
