// In-memory portal stub for development and tests

mod handlers;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

use crate::models::{Credentials, Domain, Plan, User};

/// Mutable stub dataset. Tests construct their own instance and hand it to
/// [`router`]; nothing here is process-global.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub logged_in: bool,
    pub credentials: Credentials,
    pub user: User,
    pub plan: Plan,
    pub domains: Vec<Domain>,
}

impl Default for Fixture {
    /// Two-device dataset matching what the dev stub has always served:
    /// one device on the default https port, one on an explicit port with
    /// an IPv6 address.
    fn default() -> Self {
        Fixture {
            logged_in: true,
            credentials: Credentials {
                email: "test@example.com".to_string(),
                password: "secret7".to_string(),
            },
            user: User {
                email: "test@example.com".to_string(),
                active: true,
                update_token: Some("0a".to_string()),
                notification_enabled: true,
                subscription_id: None,
            },
            plan: Plan {
                plan_monthly_id: "P-MONTHLY-SANDBOX".to_string(),
                plan_annual_id: "P-ANNUAL-SANDBOX".to_string(),
                client_id: "sandbox-client-id".to_string(),
            },
            domains: vec![
                Domain {
                    name: "test.example.com".to_string(),
                    ip: Some("111.111.111.111".to_string()),
                    ipv6: None,
                    local_ip: Some("192.168.1.1".to_string()),
                    dkim_key: Some("dkim".to_string()),
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
                },
                Domain {
                    name: "test1.example.com".to_string(),
                    ip: Some("111.222.333.444".to_string()),
                    ipv6: Some("[::1]".to_string()),
                    local_ip: Some("192.168.1.2".to_string()),
                    dkim_key: None,
                    map_local_address: false,
                    last_update: Some("Mon, 19 Oct 2020 18:51:18 GMT".to_string()),
                    device_mac_address: Some("00:11:22:33:44:ff".to_string()),
                    device_name: Some("odroid-xu3and4".to_string()),
                    device_title: Some("ODROID-XU".to_string()),
                    platform_version: Some("2".to_string()),
                    web_protocol: Some("https".to_string()),
                    web_port: Some(10001),
                    web_local_port: Some(443),
                    name_servers: Some(vec![
                        "ns1.example.com".to_string(),
                        "ns2.example.com".to_string(),
                    ]),
                },
            ],
        }
    }
}

#[derive(Clone)]
pub(crate) struct StubState {
    pub(crate) fixture: Arc<RwLock<Fixture>>,
}

/// Portal API surface over the given fixture.
pub fn router(fixture: Arc<RwLock<Fixture>>) -> Router {
    let state = StubState { fixture };
    Router::new()
        .route("/version", get(handlers::version)) // GET /version
        .route("/api/user/login", post(handlers::login))
        .route("/api/user/create", post(handlers::user_create))
        .route("/api/user/activate", post(handlers::user_activate))
        .route("/api/user/reset_password", post(handlers::password_reset))
        .route("/api/user/set_password", post(handlers::password_set))
        .route("/api/user", get(handlers::user).delete(handlers::user_delete))
        .route("/api/logout", post(handlers::logout))
        .route("/api/domains", get(handlers::domains))
        .route("/api/domain", delete(handlers::domain_delete))
        .route("/api/notification/enable", post(handlers::notification_enable))
        .route("/api/notification/disable", post(handlers::notification_disable))
        .route("/api/plan", get(handlers::plan).delete(handlers::plan_delete))
        .route("/api/plan/subscribe", post(handlers::plan_subscribe))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
