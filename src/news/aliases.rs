//! Token-name to CoinTelegraph tag slug normalization.
//!
//! The alias table is an ordered policy: rules are checked top to bottom
//! and the first substring containment wins. Order is part of the
//! contract — "Tether" normalizes to `tether`, which contains `eth`, so
//! rule 3 maps it to `ethereum` before the `usdt` rule is ever reached.
//! Change the table deliberately.

/// Ordered `(substring, canonical tag)` rules. First match wins.
const TAG_ALIASES: &[(&str, &str)] = &[
    ("btc", "bitcoin"),
    ("bitcoin", "bitcoin"),
    ("eth", "ethereum"),
    ("ethereum", "ethereum"),
    ("usdc", "usd-coin"),
    ("usdt", "tether"),
];

/// Derive the tag slug for a token name.
///
/// Lowercases, replaces spaces with hyphens, then applies the alias
/// table. A name matching no rule is used as-is: "Wrapped Sol" becomes
/// `wrapped-sol`.
pub fn search_term(token_name: &str) -> String {
    let slug = token_name.to_lowercase().replace(' ', "-");

    for (needle, canonical) in TAG_ALIASES {
        if slug.contains(needle) {
            return (*canonical).to_string();
        }
    }

    slug
}
