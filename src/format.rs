// Display derivations for device rows: external URL and last-seen label.
// Pure functions; the record is never mutated.

use chrono::{DateTime, TimeZone};

use crate::models::Domain;

/// Canonical default port for a web protocol; omitted from display when matched.
fn default_port(protocol: &str) -> u16 {
    if protocol.eq_ignore_ascii_case("https") {
        443
    } else {
        80
    }
}

/// Host the device is reached at: the LAN address when `map_local_address`
/// is set, the public IPv4 otherwise. IPv6 is used only when no IPv4 is
/// available (it arrives bracket-wrapped on the wire).
fn access_host(domain: &Domain) -> &str {
    let ipv4 = if domain.map_local_address {
        domain.local_ip.as_deref().or(domain.ip.as_deref())
    } else {
        domain.ip.as_deref().or(domain.local_ip.as_deref())
    };
    ipv4.or(domain.ipv6.as_deref()).unwrap_or_default()
}

/// Externally reachable URL for a device.
///
/// Port selection follows the address preference: `web_local_port` when
/// `map_local_address` is set, `web_port` otherwise. `0`, a missing port,
/// or the protocol default is omitted; anything else renders as `:{port}`.
pub fn device_url(domain: &Domain) -> String {
    let protocol = domain.web_protocol.as_deref().unwrap_or("https");
    let host = access_host(domain);
    let port = if domain.map_local_address {
        domain.web_local_port
    } else {
        domain.web_port
    };
    match port {
        Some(port) if port != 0 && port != default_port(protocol) => {
            format!("{}://{}:{}", protocol, host, port)
        }
        _ => format!("{}://{}", protocol, host),
    }
}

/// IPv6 cell text; devices without one show a placeholder.
pub fn ipv6_label(domain: &Domain) -> &str {
    domain.ipv6.as_deref().unwrap_or("not provided")
}

/// Human label for an RFC-1123 `last_update` value: `"Today HH:MM"` when the
/// timestamp falls on the same calendar day as `now` (in `now`'s timezone),
/// `"Nov 2, 2020"` style otherwise.
///
/// `now` comes from the caller so the result stays deterministic under test.
/// An unparseable value echoes through unchanged.
pub fn last_update_label<Tz: TimeZone>(last_update: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let Ok(parsed) = DateTime::parse_from_rfc2822(last_update) else {
        return last_update.to_string();
    };
    let parsed = parsed.with_timezone(&now.timezone());
    if parsed.date_naive() == now.date_naive() {
        format!("Today {}", parsed.format("%H:%M"))
    } else {
        parsed.format("%b %-d, %Y").to_string()
    }
}
