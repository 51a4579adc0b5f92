//! Local network gateway rule tables.

use block_validation::{validators, Rule, RuleTable};

/// Rules for the optional BGP session block. Every field may be omitted.
pub fn bgp_settings_validations() -> RuleTable {
    RuleTable::new()
        .field("asn", Rule::optional(validators::FINITE_INTEGER))
        .field("bgpPeeringAddress", Rule::optional(validators::NOT_NULL_OR_WHITESPACE))
        .field("peerWeight", Rule::optional(validators::FINITE_INTEGER))
}

/// Rules a merged local network gateway must satisfy.
pub fn validations() -> RuleTable {
    RuleTable::new()
        .field("name", validators::NOT_NULL_OR_WHITESPACE)
        .field("addressPrefixes", Rule::each(validators::CIDR))
        .field("ipAddress", validators::IP_ADDRESS)
        .field("bgpSettings", Rule::optional(bgp_settings_validations()))
}
