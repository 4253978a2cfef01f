//! Deterministic placeholder addresses for unlisted tickers.
//!
//! Both formats hash a ticker by summing its UTF-16 code units, so the same
//! symbol always yields the same address. They are display placeholders,
//! not chain addresses.

/// Fixed suffix appended to every placeholder address.
const ADDRESS_SUFFIX: &str = "AeE0";

/// Sum of the UTF-16 code units of `symbol`.
fn code_unit_sum(symbol: &str) -> u64 {
    symbol.encode_utf16().map(u64::from).sum()
}

/// Placeholder used by the automation parser for tickers missing from the
/// token table.
///
/// Format: `0x{sum:08x}...{LAST4}AeE0`, where `LAST4` is the last four hex
/// digits of the padded sum, uppercased.
pub fn placeholder_address(symbol: &str) -> String {
    let hex = format!("{:08x}", code_unit_sum(symbol));
    let tail = hex[hex.len() - 4..].to_uppercase();
    format!("0x{hex}...{tail}{ADDRESS_SUFFIX}")
}

/// Placeholder used when fabricating a `TokenInfo` for an unlisted ticker.
///
/// Format: `0x{sum:08x}...{sum*7:04X}AeE0`.
pub fn listing_placeholder_address(symbol: &str) -> String {
    let sum = code_unit_sum(symbol);
    format!(
        "0x{sum:08x}...{tail:04X}{ADDRESS_SUFFIX}",
        tail = sum.wrapping_mul(7)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_address_format() {
        // X=88, Y=89, Z=90 -> 267 = 0x10b
        assert_eq!(placeholder_address("XYZ"), "0x0000010b...010BAeE0");
    }

    #[test]
    fn test_placeholder_address_is_deterministic() {
        assert_eq!(placeholder_address("XYZ"), placeholder_address("XYZ"));
        assert_ne!(placeholder_address("XYZ"), placeholder_address("ABC"));
    }

    #[test]
    fn test_placeholder_for_unknown_literal() {
        // U N K N O W N = 85+78+75+78+79+87+78 = 560 = 0x230
        assert_eq!(placeholder_address("UNKNOWN"), "0x00000230...0230AeE0");
    }

    #[test]
    fn test_listing_placeholder_address_format() {
        // 267 * 7 = 1869 = 0x74d
        assert_eq!(listing_placeholder_address("XYZ"), "0x0000010b...074DAeE0");
    }

    #[test]
    fn test_empty_symbol() {
        assert_eq!(placeholder_address(""), "0x00000000...0000AeE0");
        assert_eq!(listing_placeholder_address(""), "0x00000000...0000AeE0");
    }
}
