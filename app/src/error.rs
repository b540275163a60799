use thiserror::Error;

/// The humanize request never produced a usable JSON body.
#[derive(Debug, Error)]
pub enum HumanizeError {
    #[error("request to {endpoint} failed: {source}")]
    Send {
        endpoint: String,
        #[source]
        source: gloo_net::Error,
    },
    #[error("response from {endpoint} was not JSON: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: gloo_net::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not fetch {path}: {source}")]
    Fetch {
        path: &'static str,
        #[source]
        source: gloo_net::Error,
    },
    #[error("{path} answered with HTTP {status}")]
    Status { path: &'static str, status: u16 },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
