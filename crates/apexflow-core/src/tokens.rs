//! Static token directory with placeholder fallback.
//!
//! The builtin table is compile-time demo data; lookups are case-insensitive
//! and never mutate it. Unlisted tickers get a fabricated record whose
//! address is deterministic but whose market figures are random per call.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::address::listing_placeholder_address;
use crate::decimal::{Price, Volume};
use crate::error::{CoreError, Result};
use crate::token::{TokenInfo, TrendingCoin};

/// Longest ticker accepted by `validate_symbol`.
const MAX_SYMBOL_LEN: usize = 16;

static BUILTIN: Lazy<TokenTable> = Lazy::new(|| {
    TokenTable::new(vec![
        listed("WIRE", "Wire Protocol", "0x0b3A...AeE0", dec!(0.0234), dec!(-12.5), dec!(1250000)),
        listed("APEX", "ApexFlow Token", "0x4A7E...B2F1", dec!(0.156), dec!(5.3), dec!(3200000)),
        listed("FACY", "Facy Token", "0x8C9D...E3F4", dec!(0.0045), dec!(-8.2), dec!(890000)),
        listed("BEAST", "Beast Token", "0x2F5A...C1D2", dec!(0.633), dec!(2419.37), dec!(2840000)),
        listed("PRXVT", "Private Token", "0x6B8E...F4A5", dec!(0.0073), dec!(-1.2), dec!(845000)),
        listed("BGLD", "BGold Token", "0x9C1F...D5B6", dec!(0.0002), dec!(104.05), dec!(81500)),
        listed(
            "SOL",
            "Solana",
            "So11111111111111111111111111111111111111112",
            dec!(145.23),
            dec!(2.1),
            dec!(1250000000),
        ),
        listed(
            "USDC",
            "USD Coin",
            "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
            dec!(1.0),
            dec!(0.01),
            dec!(5000000000),
        ),
        listed(
            "WETH",
            "Wrapped Ethereum",
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
            dec!(3245.67),
            dec!(1.8),
            dec!(890000000),
        ),
    ])
});

static TRENDING: Lazy<Vec<TrendingCoin>> = Lazy::new(|| {
    vec![
        trending(1, "beast", "BEAST", "Beast Token", dec!(0.633382), dec!(2419.37), dec!(2836236.69), dec!(6334000)),
        trending(2, "prxvt", "PRXVT", "Private Token", dec!(0.007335), dec!(-1.20), dec!(844887.84), dec!(7340000)),
        trending(3, "bgld", "BGLD", "BGold Token", dec!(0.000225), dec!(104.05), dec!(81528.89), dec!(212280)),
        trending(4, "wire", "WIRE", "Wire Protocol", dec!(0.0234), dec!(-12.5), dec!(1250000), dec!(2340000)),
        trending(5, "apex", "APEX", "ApexFlow Token", dec!(0.156), dec!(5.3), dec!(3200000), dec!(15600000)),
    ]
});

fn listed(
    symbol: &str,
    name: &str,
    address: &str,
    price: Decimal,
    change_24h: Decimal,
    volume_24h: Decimal,
) -> TokenInfo {
    TokenInfo {
        symbol: symbol.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        price: Price::new(price),
        change_24h,
        volume_24h: Volume::new(volume_24h),
    }
}

#[allow(clippy::too_many_arguments)]
fn trending(
    rank: u32,
    id: &str,
    symbol: &str,
    name: &str,
    price: Decimal,
    change_24h: Decimal,
    volume_24h: Decimal,
    market_cap: Decimal,
) -> TrendingCoin {
    TrendingCoin {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
        price: Price::new(price),
        change_24h,
        volume_24h: Volume::new(volume_24h),
        market_cap: Volume::new(market_cap),
        rank,
    }
}

/// Trending-coins leaderboard, in rank order.
pub fn trending_coins() -> &'static [TrendingCoin] {
    &TRENDING
}

/// Immutable ticker -> `TokenInfo` map.
#[derive(Debug, Clone, Default)]
pub struct TokenTable {
    tokens: HashMap<String, TokenInfo>,
}

impl TokenTable {
    /// Build a table keyed by the uppercased symbol of each record.
    pub fn new(tokens: Vec<TokenInfo>) -> Self {
        let tokens = tokens
            .into_iter()
            .map(|info| (info.symbol.to_uppercase(), info))
            .collect();
        Self { tokens }
    }

    /// The demo token table shipped with the application.
    pub fn builtin() -> &'static TokenTable {
        &BUILTIN
    }

    /// Stored record for `symbol` (case-insensitive).
    pub fn get(&self, symbol: &str) -> Option<&TokenInfo> {
        self.tokens.get(&symbol.to_uppercase())
    }

    pub fn is_listed(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    /// Listed symbols, sorted.
    pub fn symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self.tokens.keys().map(String::as_str).collect();
        symbols.sort_unstable();
        symbols
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Stored record, or a fabricated one for unlisted tickers.
    ///
    /// Fabricated records are randomized per call; only the address is
    /// stable for a given symbol.
    pub fn token_info(&self, symbol: &str) -> TokenInfo {
        self.token_info_with(symbol, &mut rand::thread_rng())
    }

    /// Same as `token_info`, drawing fabricated figures from `rng`.
    pub fn token_info_with<R: Rng + ?Sized>(&self, symbol: &str, rng: &mut R) -> TokenInfo {
        match self.get(symbol) {
            Some(info) => info.clone(),
            None => fabricate(symbol, rng),
        }
    }
}

/// Random but well-formed record for an unlisted ticker.
fn fabricate<R: Rng + ?Sized>(symbol: &str, rng: &mut R) -> TokenInfo {
    let symbol = symbol.to_uppercase();
    let price = rng.gen::<f64>() * 10.0;
    let change = (rng.gen::<f64>() - 0.5) * 20.0;
    let volume = rng.gen::<f64>() * 5_000_000.0;

    TokenInfo {
        name: format!("{symbol} Token"),
        address: listing_placeholder_address(&symbol),
        price: Price::from_f64_rounded(price, 6),
        change_24h: Decimal::from_f64(change)
            .map(|d| d.round_dp(2))
            .unwrap_or(Decimal::ZERO),
        volume_24h: Volume::from_f64_rounded(volume, 2),
        symbol,
    }
}

/// Normalize a user-supplied ticker for lookup.
///
/// Accepts 1 to 16 ASCII alphanumeric characters (surrounding whitespace
/// ignored) and returns the uppercased symbol.
pub fn validate_symbol(symbol: &str) -> Result<String> {
    let trimmed = symbol.trim();
    if trimmed.is_empty()
        || trimmed.len() > MAX_SYMBOL_LEN
        || !trimmed.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return Err(CoreError::InvalidSymbol(symbol.to_string()));
    }
    Ok(trimmed.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_table_contents() {
        let table = TokenTable::builtin();
        assert_eq!(table.len(), 9);
        assert_eq!(
            table.symbols(),
            vec!["APEX", "BEAST", "BGLD", "FACY", "PRXVT", "SOL", "USDC", "WETH", "WIRE"]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = TokenTable::builtin();
        let wire = table.get("wire").unwrap();
        assert_eq!(wire.symbol, "WIRE");
        assert_eq!(wire.address, "0x0b3A...AeE0");
        assert_eq!(wire.change_24h, dec!(-12.5));
        assert!(table.is_listed("Sol"));
        assert!(!table.is_listed("XYZ"));
    }

    #[test]
    fn test_listed_token_info_is_exact_record() {
        let table = TokenTable::builtin();
        let first = table.token_info("APEX");
        let second = table.token_info("apex");
        assert_eq!(&first, table.get("APEX").unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn test_unlisted_token_info_shape() {
        let table = TokenTable::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let info = table.token_info_with("xyz", &mut rng);

        assert_eq!(info.symbol, "XYZ");
        assert_eq!(info.name, "XYZ Token");
        assert_eq!(info.address, listing_placeholder_address("XYZ"));
        assert!(info.price.inner() >= Decimal::ZERO && info.price.inner() < dec!(10));
        assert!(info.change_24h >= dec!(-10) && info.change_24h <= dec!(10));
        assert!(info.volume_24h.inner() >= Decimal::ZERO);
        assert!(info.volume_24h.inner() <= dec!(5000000));
    }

    #[test]
    fn test_unlisted_address_stable_across_calls() {
        let table = TokenTable::builtin();
        let a = table.token_info("NEWCOIN");
        let b = table.token_info("NEWCOIN");
        assert_eq!(a.address, b.address);
        assert_eq!(a.name, b.name);
    }

    #[test]
    fn test_custom_table_uppercases_keys() {
        let table = TokenTable::new(vec![listed(
            "abc",
            "Abc Token",
            "0xabc",
            dec!(1),
            dec!(0),
            dec!(1),
        )]);
        assert!(table.is_listed("ABC"));
        assert!(!table.is_empty());
    }

    #[test]
    fn test_trending_coins_rank_order() {
        let coins = trending_coins();
        assert_eq!(coins.len(), 5);
        assert!(coins.windows(2).all(|w| w[0].rank < w[1].rank));
        assert_eq!(coins[0].symbol, "BEAST");
        assert_eq!(coins[4].market_cap.inner(), dec!(15600000));
    }

    #[test]
    fn test_validate_symbol() {
        assert_eq!(validate_symbol(" sol ").unwrap(), "SOL");
        assert!(validate_symbol("").is_err());
        assert!(validate_symbol("BAD-TICKER").is_err());
        assert!(validate_symbol("ABCDEFGHIJKLMNOPQ").is_err());
    }
}
