// Device URL and last-update label tests

use chrono::{FixedOffset, TimeZone, Utc};
use devportal::format::{device_url, ipv6_label, last_update_label};

mod common;
use common::device;

#[test]
fn test_device_url_omits_default_https_port() {
    let d = device("test.example.com");
    assert_eq!(device_url(&d), "https://111.111.111.111");
}

#[test]
fn test_device_url_renders_explicit_port() {
    let mut d = device("test.example.com");
    d.web_port = Some(1443);
    assert_eq!(device_url(&d), "https://111.111.111.111:1443");
}

#[test]
fn test_device_url_zero_port_means_default() {
    let mut d = device("test.example.com");
    d.web_port = Some(0);
    assert_eq!(device_url(&d), "https://111.111.111.111");
}

#[test]
fn test_device_url_missing_port_means_default() {
    let mut d = device("test.example.com");
    d.web_port = None;
    assert_eq!(device_url(&d), "https://111.111.111.111");
}

#[test]
fn test_device_url_omits_default_http_port() {
    let mut d = device("test.example.com");
    d.web_protocol = Some("http".to_string());
    d.web_port = Some(80);
    assert_eq!(device_url(&d), "http://111.111.111.111");
}

#[test]
fn test_device_url_http_with_https_port_is_explicit() {
    let mut d = device("test.example.com");
    d.web_protocol = Some("http".to_string());
    d.web_port = Some(443);
    assert_eq!(device_url(&d), "http://111.111.111.111:443");
}

#[test]
fn test_device_url_mapped_uses_local_address_and_port() {
    let mut d = device("test.example.com");
    d.map_local_address = true;
    d.web_local_port = Some(443);
    d.web_port = Some(0);
    assert_eq!(device_url(&d), "https://192.168.1.1");
}

#[test]
fn test_device_url_mapped_renders_explicit_local_port() {
    let mut d = device("test.example.com");
    d.map_local_address = true;
    d.web_local_port = Some(8443);
    // Public port stays out of the picture when the local address is mapped.
    d.web_port = Some(443);
    assert_eq!(device_url(&d), "https://192.168.1.1:8443");
}

#[test]
fn test_device_url_falls_back_to_ipv6_without_ipv4() {
    let mut d = device("test.example.com");
    d.ip = None;
    d.local_ip = None;
    d.ipv6 = Some("[::1]".to_string());
    assert_eq!(device_url(&d), "https://[::1]");
}

#[test]
fn test_device_url_ignores_ipv6_when_ipv4_present() {
    let mut d = device("test.example.com");
    d.ipv6 = Some("[::1]".to_string());
    assert_eq!(device_url(&d), "https://111.111.111.111");
}

#[test]
fn test_ipv6_label_placeholder_when_absent() {
    let mut d = device("test.example.com");
    assert_eq!(ipv6_label(&d), "not provided");
    d.ipv6 = Some("[::1]".to_string());
    assert_eq!(ipv6_label(&d), "[::1]");
}

#[test]
fn test_last_update_same_day_is_today() {
    let now = Utc.with_ymd_and_hms(2020, 11, 2, 23, 30, 0).unwrap();
    let label = last_update_label("Sun, 02 Nov 2020 22:07:36 GMT", &now);
    assert_eq!(label, "Today 22:07");
}

#[test]
fn test_last_update_other_day_is_calendar_date() {
    let now = Utc.with_ymd_and_hms(2020, 11, 1, 12, 0, 0).unwrap();
    let label = last_update_label("Sun, 02 Nov 2020 22:07:36 GMT", &now);
    assert_eq!(label, "Nov 2, 2020");
}

#[test]
fn test_last_update_single_digit_day_unpadded() {
    let now = Utc.with_ymd_and_hms(2020, 11, 1, 12, 0, 0).unwrap();
    let label = last_update_label("Mon, 05 Oct 2020 08:00:00 GMT", &now);
    assert_eq!(label, "Oct 5, 2020");
}

#[test]
fn test_last_update_compared_in_callers_timezone() {
    // 22:07 GMT on Nov 2 is already Nov 3 at +02:00; "now" is Nov 3 there.
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let now = tz.with_ymd_and_hms(2020, 11, 3, 1, 0, 0).unwrap();
    let label = last_update_label("Sun, 02 Nov 2020 22:07:36 GMT", &now);
    assert_eq!(label, "Today 00:07");
}

#[test]
fn test_last_update_malformed_value_echoes_through() {
    let now = Utc.with_ymd_and_hms(2020, 11, 1, 12, 0, 0).unwrap();
    assert_eq!(last_update_label("not a timestamp", &now), "not a timestamp");
}
