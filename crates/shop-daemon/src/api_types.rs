//! Request and response types for shop-daemon HTTP endpoints that are not
//! domain records. Carts and orders travel as `shop_schemas` types.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// /health
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub service: String,
    pub version: String,
}

// ---------------------------------------------------------------------------
// /cart query string
// ---------------------------------------------------------------------------

/// Query parameters of `/cart`.
///
/// Decoded from the raw pair list so a repeated `user_id` resolves to its
/// first value instead of failing the whole query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartQuery {
    pub user_id: Option<String>,
}

impl CartQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let user_id = pairs
            .iter()
            .find(|(k, _)| k == "user_id")
            .map(|(_, v)| v.clone())
            .filter(|v| !v.is_empty());
        Self { user_id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_user_id_wins() {
        let q = CartQuery::from_pairs(&pairs(&[("user_id", "alice"), ("user_id", "bob")]));
        assert_eq!(q.user_id.as_deref(), Some("alice"));
    }

    #[test]
    fn empty_user_id_counts_as_missing() {
        let q = CartQuery::from_pairs(&pairs(&[("user_id", "")]));
        assert_eq!(q.user_id, None);
    }

    #[test]
    fn other_keys_are_not_user_ids() {
        let q = CartQuery::from_pairs(&pairs(&[("userId", "alice")]));
        assert_eq!(q, CartQuery::default());
    }
}
