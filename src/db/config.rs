use thiserror::Error;

/// Cluster connection parameters. Auth is attempted only when both username
/// and password are non-empty; an empty keyspace means none is selected at
/// connect time.
#[derive(Debug, Clone, Default)]
pub struct ClusterConfig {
    pub contact_points: Vec<String>,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub keyspace: String,
}

impl ClusterConfig {
    /// Reads the CASSANDRA_* environment. An empty host list is allowed here:
    /// the service boots unconfigured and waits for the config endpoint.
    pub fn from_env() -> Self {
        let hosts = std::env::var("CASSANDRA_HOSTS").unwrap_or_else(|_| "cassandra".to_string());

        Self {
            contact_points: split_hosts(&hosts),
            port: env_u16("CASSANDRA_PORT", 9042),
            username: std::env::var("CASSANDRA_USER").unwrap_or_default(),
            password: std::env::var("CASSANDRA_PASSWORD").unwrap_or_default(),
            keyspace: std::env::var("CASSANDRA_KEYSPACE").unwrap_or_default(),
        }
    }

    /// Builds a config from user-supplied values. Unlike `from_env`, an empty
    /// host list is rejected.
    pub fn parse(
        hosts: &str,
        port: u16,
        username: &str,
        password: &str,
        keyspace: &str,
    ) -> Result<Self, ClusterConfigError> {
        let contact_points = split_hosts(hosts);
        if contact_points.is_empty() {
            return Err(ClusterConfigError::NoContactPoints);
        }

        Ok(Self {
            contact_points,
            port,
            username: username.trim().to_string(),
            password: password.to_string(),
            keyspace: keyspace.trim().to_string(),
        })
    }
}

#[derive(Debug, Error)]
pub enum ClusterConfigError {
    #[error("at least one contact point is required")]
    NoContactPoints,
}

fn split_hosts(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(str::to_string)
        .collect()
}

fn env_u16(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hosts_are_split_and_trimmed() {
        let config = ClusterConfig::parse(" cassandra , cassandra-dc2-1 ,,", 9042, "", "", "").unwrap();
        assert_eq!(config.contact_points, vec!["cassandra", "cassandra-dc2-1"]);
    }

    #[test]
    fn empty_host_list_is_rejected() {
        let err = ClusterConfig::parse("  , ", 9042, "", "", "").unwrap_err();
        assert!(matches!(err, ClusterConfigError::NoContactPoints));
    }
}
