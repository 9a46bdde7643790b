// Device/domain record as returned by GET /api/domains

use serde::{Deserialize, Serialize};

/// One managed device row. Received from the portal API and treated as
/// read-only; display derivations live in [`crate::format`].
///
/// Optional fields mirror the backend's omit-when-empty contract: absent
/// keys and JSON `null` both deserialize to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Arrives bracket-wrapped on the wire, e.g. `"[::1]"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dkim_key: Option<String>,
    #[serde(default)]
    pub map_local_address: bool,
    /// RFC-1123 timestamp, e.g. `"Mon, 19 Oct 2020 19:31:49 GMT"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_mac_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_protocol: Option<String>,
    /// `0` or absent means "use the protocol default".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_local_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_servers: Option<Vec<String>>,
}
