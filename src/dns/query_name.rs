//! Reversed-octet query names for list lookups.

use std::net::{Ipv4Addr, Ipv6Addr};

use crate::error_handling::QueryNameError;

/// Builds the name to look up on `list_domain` for `address`.
///
/// `192.0.2.1` on `zen.spamhaus.org` becomes `1.2.0.192.zen.spamhaus.org`.
/// Values that are not dotted quads (a fallback host name, say) are reversed
/// label by label without validation; such names simply do not resolve.
///
/// # Errors
///
/// Returns `QueryNameError::UnsupportedAddress` for IPv6 literals, which
/// reversed-octet lists cannot express.
pub fn build_query_name(address: &str, list_domain: &str) -> Result<String, QueryNameError> {
    if let Ok(ipv4) = address.parse::<Ipv4Addr>() {
        let [a, b, c, d] = ipv4.octets();
        return Ok(format!("{d}.{c}.{b}.{a}.{list_domain}"));
    }
    if address.parse::<Ipv6Addr>().is_ok() {
        return Err(QueryNameError::UnsupportedAddress(address.to_string()));
    }

    let reversed: Vec<&str> = address.split('.').rev().collect();
    Ok(format!("{}.{list_domain}", reversed.join(".")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverses_dotted_quad() {
        assert_eq!(
            build_query_name("192.0.2.1", "zen.spamhaus.org").unwrap(),
            "1.2.0.192.zen.spamhaus.org"
        );
        assert_eq!(
            build_query_name("127.0.0.2", "bl.example").unwrap(),
            "2.0.0.127.bl.example"
        );
    }

    #[test]
    fn test_reversal_holds_for_many_addresses() {
        for (a, b, c, d) in [(10, 20, 30, 40), (0, 0, 0, 0), (255, 254, 1, 9)] {
            let address = format!("{a}.{b}.{c}.{d}");
            assert_eq!(
                build_query_name(&address, "list.example").unwrap(),
                format!("{d}.{c}.{b}.{a}.list.example")
            );
        }
    }

    #[test]
    fn test_non_numeric_value_passes_through_reversed() {
        assert_eq!(
            build_query_name("mail.example.invalid", "bl.example").unwrap(),
            "invalid.example.mail.bl.example"
        );
        assert_eq!(
            build_query_name("localhost", "bl.example").unwrap(),
            "localhost.bl.example"
        );
    }

    #[test]
    fn test_ipv6_is_rejected() {
        assert_eq!(
            build_query_name("2001:db8::1", "bl.example"),
            Err(QueryNameError::UnsupportedAddress("2001:db8::1".to_string()))
        );
    }
}
