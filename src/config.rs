use crate::domain::error::DomainError;
use crate::domain::values::provider_kind::ProviderKind;
use std::time::Duration;

pub const DEFAULT_VECTOR_SIZE: usize = 384;
pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6334";
pub const DEFAULT_COLLECTION: &str = "documents";
pub const DEFAULT_RETRIEVAL_LIMIT: usize = 2;
pub const DEFAULT_EXCERPT_CHARS: usize = 100;
pub const DEFAULT_QDRANT_TIMEOUT_SECS: u64 = 10;

/// Process-wide settings, fixed at startup and passed to every constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct RagConfig {
    pub vector_size: usize,
    /// `None` disables the remote index and goes straight to the in-memory store.
    pub qdrant_url: Option<String>,
    pub collection: String,
    pub qdrant_timeout: Duration,
    /// Drop and recreate the collection at startup instead of creating it
    /// only when missing.
    pub recreate_collection: bool,
    pub retrieval_limit: usize,
    pub excerpt_chars: usize,
    pub embedding_provider: ProviderKind,
    pub embedding_api_key: String,
    pub embedding_model: Option<String>,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            vector_size: DEFAULT_VECTOR_SIZE,
            qdrant_url: Some(DEFAULT_QDRANT_URL.to_string()),
            collection: DEFAULT_COLLECTION.to_string(),
            qdrant_timeout: Duration::from_secs(DEFAULT_QDRANT_TIMEOUT_SECS),
            recreate_collection: false,
            retrieval_limit: DEFAULT_RETRIEVAL_LIMIT,
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            embedding_provider: ProviderKind::Hash,
            embedding_api_key: String::new(),
            embedding_model: None,
        }
    }
}

impl RagConfig {
    /// In-memory only; handy for tests and local runs without a vector database.
    pub fn in_memory() -> Self {
        Self {
            qdrant_url: None,
            ..Self::default()
        }
    }

    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from `MINIRAG_*` keys resolved through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let vector_size = parse_positive(&lookup, "MINIRAG_VECTOR_SIZE", defaults.vector_size)?;
        let retrieval_limit =
            parse_positive(&lookup, "MINIRAG_RETRIEVAL_LIMIT", defaults.retrieval_limit)?;
        let excerpt_chars = parse_positive(&lookup, "MINIRAG_EXCERPT_CHARS", defaults.excerpt_chars)?;
        let timeout_secs =
            parse_positive(&lookup, "MINIRAG_QDRANT_TIMEOUT_SECS", DEFAULT_QDRANT_TIMEOUT_SECS as usize)?;

        let qdrant_url = match lookup("MINIRAG_QDRANT_URL") {
            Some(url) if url.trim().is_empty() => None,
            Some(url) => Some(url.trim().trim_end_matches('/').to_string()),
            None => defaults.qdrant_url,
        };

        let collection = lookup("MINIRAG_COLLECTION")
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(defaults.collection);

        let recreate_collection = match lookup("MINIRAG_QDRANT_RECREATE") {
            None => defaults.recreate_collection,
            Some(v) => parse_bool(&v)
                .ok_or_else(|| DomainError::Config(format!("MINIRAG_QDRANT_RECREATE: expected a boolean, got '{v}'")))?,
        };

        let embedding_provider = match lookup("MINIRAG_EMBEDDING_PROVIDER") {
            None => defaults.embedding_provider,
            Some(p) => p.parse().map_err(DomainError::Config)?,
        };

        Ok(Self {
            vector_size,
            qdrant_url,
            collection,
            qdrant_timeout: Duration::from_secs(timeout_secs as u64),
            recreate_collection,
            retrieval_limit,
            excerpt_chars,
            embedding_provider,
            embedding_api_key: lookup("MINIRAG_EMBEDDING_API_KEY").unwrap_or_default(),
            embedding_model: lookup("MINIRAG_EMBEDDING_MODEL").filter(|m| !m.is_empty()),
        })
    }
}

fn parse_positive<F>(lookup: &F, key: &str, default: usize) -> Result<usize, DomainError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(DomainError::Config(format!("{key} must be positive"))),
        Ok(n) => Ok(n),
        Err(e) => Err(DomainError::Config(format!("{key}: {e} (got '{raw}')"))),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = RagConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, RagConfig::default());
        assert_eq!(cfg.retrieval_limit, 2);
        assert_eq!(cfg.vector_size, 384);
        assert!(!cfg.recreate_collection);
    }

    #[test]
    fn reads_overrides() {
        let cfg = RagConfig::from_lookup(lookup_from(&[
            ("MINIRAG_VECTOR_SIZE", "16"),
            ("MINIRAG_QDRANT_URL", "http://qdrant:6334/"),
            ("MINIRAG_COLLECTION", "notes"),
            ("MINIRAG_RETRIEVAL_LIMIT", "5"),
            ("MINIRAG_QDRANT_RECREATE", "yes"),
            ("MINIRAG_EMBEDDING_PROVIDER", "openai"),
        ]))
        .unwrap();

        assert_eq!(cfg.vector_size, 16);
        assert_eq!(cfg.qdrant_url.as_deref(), Some("http://qdrant:6334"));
        assert_eq!(cfg.collection, "notes");
        assert_eq!(cfg.retrieval_limit, 5);
        assert!(cfg.recreate_collection);
        assert_eq!(cfg.embedding_provider, ProviderKind::OpenAi);
    }

    #[test]
    fn empty_url_disables_remote_index() {
        let cfg = RagConfig::from_lookup(lookup_from(&[("MINIRAG_QDRANT_URL", "")])).unwrap();
        assert!(cfg.qdrant_url.is_none());
    }

    #[test]
    fn rejects_zero_vector_size() {
        let err = RagConfig::from_lookup(lookup_from(&[("MINIRAG_VECTOR_SIZE", "0")])).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }

    #[test]
    fn rejects_non_numeric_limit() {
        let err =
            RagConfig::from_lookup(lookup_from(&[("MINIRAG_RETRIEVAL_LIMIT", "two")])).unwrap_err();
        assert!(err.to_string().contains("MINIRAG_RETRIEVAL_LIMIT"));
    }

    #[test]
    fn rejects_unknown_provider() {
        let err =
            RagConfig::from_lookup(lookup_from(&[("MINIRAG_EMBEDDING_PROVIDER", "bert")])).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }
}
