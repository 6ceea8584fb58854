use std::env;
use anyhow::{Context, Result};

use crate::models::InstanceMetadata;

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_addr: String,
    pub port: u16,
    pub metadata: InstanceMetadata,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let redis_addr = env::var("REDIS_ADDR")
            .unwrap_or_else(|_| "localhost:6379".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let metadata = InstanceMetadata {
            app_id: env_or_empty("BUNNYNET_MC_APPID"),
            pod_id: env_or_empty("BUNNYNET_MC_PODID"),
            region: env_or_empty("BUNNYNET_MC_REGION"),
            zone: env_or_empty("BUNNYNET_MC_ZONE"),
            public_endpoints: env_or_empty("BUNNYNET_MC_PUBLIC_ENDPOINTS"),
            pod_ip: env_or_empty("BUNNYNET_MC_PODIP"),
            host_ip: env_or_empty("BUNNYNET_MC_HOSTIP"),
        };

        Ok(Config {
            redis_addr,
            port,
            metadata,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Redis address: {}", self.redis_addr);
        tracing::info!("  Listen port: {}", self.port);
        tracing::info!(
            "  Instance app id: {}",
            if self.metadata.app_id.is_empty() {
                "(unset)"
            } else {
                self.metadata.app_id.as_str()
            }
        );
    }
}

// Metadata variables are optional and default to empty strings.
fn env_or_empty(name: &str) -> String {
    env::var(name).unwrap_or_default()
}
