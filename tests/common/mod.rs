// Shared test fixtures

use devportal::models::Domain;

/// Baseline device row; tests tweak the fields they care about.
pub fn device(name: &str) -> Domain {
    Domain {
        name: name.to_string(),
        ip: Some("111.111.111.111".to_string()),
        ipv6: None,
        local_ip: Some("192.168.1.1".to_string()),
        dkim_key: None,
        map_local_address: false,
        last_update: Some("Mon, 19 Oct 2020 19:31:49 GMT".to_string()),
        device_mac_address: Some("00:11:22:33:44:01".to_string()),
        device_name: Some("home-box".to_string()),
        device_title: Some("Home Box".to_string()),
        platform_version: Some("2".to_string()),
        web_protocol: Some("https".to_string()),
        web_port: Some(443),
        web_local_port: Some(443),
        name_servers: None,
    }
}
