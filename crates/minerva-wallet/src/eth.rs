//! Ether amount helpers
//!
//! Payments are denominated in wei on the wire; catalog prices are small
//! fixed ETH amounts.

/// Wei per ETH (18 decimals)
pub const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Convert a human ETH amount to wei
pub fn to_wei(eth: f64) -> u128 {
    (eth * WEI_PER_ETH as f64).round() as u128
}

/// Convert wei to a human ETH amount
pub fn from_wei(wei: u128) -> f64 {
    wei as f64 / WEI_PER_ETH as f64
}

/// Shorten an address for display: `0x742d…f44e`
pub fn shorten(address: &str) -> String {
    let count = address.chars().count();
    if count <= 10 {
        return address.to_string();
    }
    let head: String = address.chars().take(6).collect();
    let tail: String = address.chars().skip(count - 4).collect();
    format!("{head}…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wei_conversions() {
        assert_eq!(to_wei(1.0), WEI_PER_ETH);
        assert_eq!(to_wei(0.01), 10_000_000_000_000_000);
        assert_eq!(from_wei(WEI_PER_ETH), 1.0);
        assert_eq!(from_wei(to_wei(0.01)), 0.01);
    }

    #[test]
    fn test_shorten() {
        assert_eq!(
            shorten("0x742d35Cc6634C0532925a3b844Bc454e4438f44e"),
            "0x742d…f44e"
        );
        assert_eq!(shorten("0xABC"), "0xABC");
        // Display helper stays total on non-ASCII input
        assert_eq!(shorten("0xähnlich-längere-kennung"), "0xähnl…nung");
    }
}
