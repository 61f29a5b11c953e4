//! Supported coin table

use crate::utils::DashboardError;

/// CoinGecko id -> display symbol, in menu order
const SUPPORTED_COINS: [(&str, &str); 6] = [
    ("bitcoin", "BTC"),
    ("ethereum", "ETH"),
    ("dogecoin", "DOGE"),
    ("pi-network", "PI"),
    ("litecoin", "LTC"),
    ("solana", "SOL"),
];

/// A supported asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coin {
    /// CoinGecko coin id, used in API paths
    pub id: &'static str,
    pub symbol: &'static str,
}

impl Coin {
    /// Header text for the coin, e.g. `BITCOIN`
    pub fn display_name(&self) -> String {
        self.id.to_uppercase()
    }
}

/// Resolve a coin id against the supported table (exact match)
pub fn lookup_coin(id: &str) -> Result<Coin, DashboardError> {
    SUPPORTED_COINS
        .iter()
        .find(|&&(known, _)| known == id)
        .map(|&(id, symbol)| Coin { id, symbol })
        .ok_or_else(|| DashboardError::UnknownAsset(id.to_string()))
}

/// All supported coins in menu order
pub fn supported_coins() -> Vec<Coin> {
    SUPPORTED_COINS
        .iter()
        .map(|&(id, symbol)| Coin { id, symbol })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_coins() {
        assert_eq!(lookup_coin("bitcoin").unwrap().symbol, "BTC");
        assert_eq!(lookup_coin("pi-network").unwrap().symbol, "PI");
        assert_eq!(lookup_coin("solana").unwrap().display_name(), "SOLANA");
    }

    #[test]
    fn test_lookup_unknown_coin() {
        match lookup_coin("BITCOIN") {
            Err(DashboardError::UnknownAsset(id)) => assert_eq!(id, "BITCOIN"),
            other => panic!("expected UnknownAsset, got {:?}", other),
        }
    }

    #[test]
    fn test_supported_coins_order() {
        let ids: Vec<&str> = supported_coins().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["bitcoin", "ethereum", "dogecoin", "pi-network", "litecoin", "solana"]);
    }
}
