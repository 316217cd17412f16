use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Timeout: no response from {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("Malformed response from {server}: {reason}")]
    MalformedResponse { server: String, reason: String },

    #[error("Unmatched transaction from {server}: expected id {expected}, got {received}")]
    TransactionMismatch {
        server: String,
        expected: u16,
        received: u16,
    },

    #[error("Query to {server} failed: {rcode}")]
    ServerError { server: String, rcode: String },

    #[error("No delegation found for {zone}: {reason}")]
    NoDelegation { zone: String, reason: String },

    #[error("Failed to resolve {domain}: {reason}")]
    NoAnswer { domain: String, reason: String },

    #[error("Too many redirects for {domain}")]
    TooManyRedirects { domain: String },

    #[error("Invalid cache command: {0}")]
    InvalidCacheCommand(String),

    #[error("Cache entry {index} not found (entries: {len})")]
    CacheEntryNotFound { index: usize, len: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// Errors raised while talking to a single server. Resolution moves on to
    /// the next candidate server after one of these; any other error aborts
    /// the current step.
    pub fn is_query_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportError { .. }
                | DomainError::MalformedResponse { .. }
                | DomainError::TransactionMismatch { .. }
                | DomainError::ServerError { .. }
        )
    }
}
