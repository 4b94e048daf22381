//! Registry referral parsing.

/// Root server that maps TLDs to their registry WHOIS servers.
pub const IANA_WHOIS_SERVER: &str = "whois.iana.org";

/// Well-known WHOIS TCP port.
pub const WHOIS_PORT: u16 = 43;

const REFERRAL_PREFIX: &str = "whois:";

/// Extracts the registry server from a root server reply.
///
/// Scans lines (split on `\n`) for the first one starting with `whois:`,
/// splits it on `:` and returns the second field trimmed. A value containing
/// further colons is cut at the next colon.
///
/// Returns `None` when no line carries the prefix.
pub fn parse_registry_server(reply: &str) -> Option<String> {
    reply
        .split('\n')
        .find(|line| line.starts_with(REFERRAL_PREFIX))
        .and_then(|line| line.split(':').nth(1))
        .map(|server| server.trim().to_string())
}
