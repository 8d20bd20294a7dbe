//! Browsing configuration (page sizes, currency, facet options).

use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult};

pub const ENV_PAGE_SIZES: &str = "SHOPFRONT_PAGE_SIZES";
pub const ENV_DEFAULT_PAGE_SIZE: &str = "SHOPFRONT_DEFAULT_PAGE_SIZE";
pub const ENV_CURRENCY: &str = "SHOPFRONT_CURRENCY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Page sizes offered in the "items per page" selector, in display order.
    pub allowed_page_sizes: Vec<usize>,
    pub default_page_size: usize,
    pub currency: String,
    /// Checkbox options for the category facet, in display order.
    pub categories: Vec<String>,
    /// Checkbox options for the subcategory facet, in display order.
    pub sub_categories: Vec<String>,
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            allowed_page_sizes: vec![8, 16, 32, 48],
            default_page_size: 8,
            currency: "$".to_string(),
            categories: ["Men", "Women", "Kids"].map(String::from).to_vec(),
            sub_categories: ["Topwear", "Bottomwear", "Winterwear"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl BrowseConfig {
    /// Defaults overridden by `SHOPFRONT_*` environment variables.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for the `SHOPFRONT_*` keys.
    ///
    /// Values that fail to parse are logged and ignored; the merged result must
    /// still pass [`BrowseConfig::validate`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_PAGE_SIZES) {
            match parse_size_list(&raw) {
                Some(sizes) => config.allowed_page_sizes = sizes,
                None => {
                    tracing::warn!("{ENV_PAGE_SIZES}={raw:?} is not a size list; using defaults")
                }
            }
        }

        if let Some(raw) = lookup(ENV_DEFAULT_PAGE_SIZE) {
            match raw.trim().parse::<usize>() {
                Ok(size) => config.default_page_size = size,
                Err(e) => tracing::warn!("{ENV_DEFAULT_PAGE_SIZE}={raw:?} ignored: {e}"),
            }
        }

        if let Some(raw) = lookup(ENV_CURRENCY) {
            config.currency = raw;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.allowed_page_sizes.is_empty() {
            return Err(DomainError::validation("at least one page size must be allowed"));
        }
        if self.allowed_page_sizes.contains(&0) {
            return Err(DomainError::validation("page sizes must be positive"));
        }
        if !self.is_allowed_page_size(self.default_page_size) {
            return Err(DomainError::validation(format!(
                "default page size {} is not one of {:?}",
                self.default_page_size, self.allowed_page_sizes
            )));
        }
        Ok(())
    }

    pub fn is_allowed_page_size(&self, size: usize) -> bool {
        self.allowed_page_sizes.contains(&size)
    }
}

fn parse_size_list(raw: &str) -> Option<Vec<usize>> {
    let sizes = raw
        .split(',')
        .map(|part| part.trim().parse::<usize>().ok())
        .collect::<Option<Vec<_>>>()?;
    (!sizes.is_empty()).then_some(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_storefront() {
        let config = BrowseConfig::default();
        assert_eq!(config.allowed_page_sizes, [8, 16, 32, 48]);
        assert_eq!(config.default_page_size, 8);
        assert_eq!(config.currency, "$");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_overrides_apply() {
        let config = BrowseConfig::from_lookup(lookup(&[
            (ENV_PAGE_SIZES, "10, 20"),
            (ENV_DEFAULT_PAGE_SIZE, "20"),
            (ENV_CURRENCY, "€"),
        ]))
        .unwrap();
        assert_eq!(config.allowed_page_sizes, [10, 20]);
        assert_eq!(config.default_page_size, 20);
        assert_eq!(config.currency, "€");
    }

    #[test]
    fn unparsable_values_fall_back_to_defaults() {
        let config = BrowseConfig::from_lookup(lookup(&[
            (ENV_PAGE_SIZES, "ten,twenty"),
            (ENV_DEFAULT_PAGE_SIZE, "lots"),
        ]))
        .unwrap();
        assert_eq!(config, BrowseConfig::default());
    }

    #[test]
    fn default_size_must_be_allowed() {
        let err = BrowseConfig::from_lookup(lookup(&[(ENV_DEFAULT_PAGE_SIZE, "12")])).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let config = BrowseConfig {
            allowed_page_sizes: vec![0, 8],
            ..BrowseConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
