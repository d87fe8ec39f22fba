use std::time::Duration;

/// How the per-key footprint is obtained from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EstimateMode {
    /// `serializedlength` field of `DEBUG OBJECT`.
    #[default]
    SerializedLength,
    /// `MEMORY USAGE`, which includes allocator overhead.
    MemoryUsage,
}

/// Connection parameters for one store instance.
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
    /// Full `redis://` URL; takes precedence over host, port and password.
    pub url: Option<String>,
    pub read_timeout: Duration,
    /// Fixed `COUNT` for every `SCAN` call instead of one derived from the key count.
    pub scan_count: Option<u64>,
    pub estimate: EstimateMode,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 6379,
            password: None,
            url: None,
            read_timeout: Duration::from_secs(60),
            scan_count: None,
            estimate: EstimateMode::default(),
        }
    }
}

impl ConnectionSettings {
    /// `host:port` as shown to the user.
    pub fn address(&self) -> String {
        match &self.url {
            Some(url) => redact_url(url),
            None => format!("{}:{}", self.host, self.port),
        }
    }

    /// Instance label safe to embed in a file name.
    pub fn instance_label(&self) -> String {
        let raw = match &self.url {
            Some(url) => {
                let without_scheme = url.split_once("://").map_or(url.as_str(), |(_, rest)| rest);
                let without_auth = without_scheme.rsplit_once('@').map_or(without_scheme, |(_, rest)| rest);
                without_auth.split('/').next().unwrap_or(without_auth).to_string()
            }
            None => format!("{}:{}", self.host, self.port),
        };
        raw.chars().map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '-' }).collect()
    }
}

fn redact_url(url: &str) -> String {
    match (url.split_once("://"), url.rsplit_once('@')) {
        (Some((scheme, _)), Some((_, host))) => format!("{scheme}://***@{host}"),
        _ => url.to_string(),
    }
}
