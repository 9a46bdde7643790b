// Stub endpoint handlers: portal semantics over the fixture

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::StubState;
use crate::models::{
    ApiResponse, Credentials, ParameterMessages, PasswordSetRequest, PlanSubscribeRequest,
    TokenRequest,
};
use crate::version::{NAME, VERSION};

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

fn ok<T: Serialize>(data: T) -> Response {
    Json(ApiResponse {
        success: true,
        message: None,
        data: Some(data),
        parameters_messages: None,
    })
    .into_response()
}

fn ok_message(message: &str) -> Response {
    Json(ApiResponse::<()> {
        success: true,
        message: Some(message.to_string()),
        data: None,
        parameters_messages: None,
    })
    .into_response()
}

fn fail(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ApiResponse::<()> {
            success: false,
            message: Some(message.to_string()),
            data: None,
            parameters_messages: None,
        }),
    )
        .into_response()
}

fn parameter_fail(parameter: &str, messages: &[&str]) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()> {
            success: false,
            message: Some("There's an error in parameters".to_string()),
            data: None,
            parameters_messages: Some(vec![ParameterMessages {
                parameter: parameter.to_string(),
                messages: messages.iter().map(|m| m.to_string()).collect(),
            }]),
        }),
    )
        .into_response()
}

pub(super) async fn login(
    State(state): State<StubState>,
    Json(request): Json<Credentials>,
) -> Response {
    let mut fixture = state.fixture.write().await;
    if fixture.credentials.email == request.email
        && fixture.credentials.password == request.password
    {
        fixture.logged_in = true;
        ok_message("OK")
    } else if request.email.len() < 2 {
        parameter_fail("email", &["Not valid email"])
    } else {
        fail(StatusCode::BAD_REQUEST, "Authentication failed")
    }
}

pub(super) async fn logout(State(state): State<StubState>) -> Response {
    state.fixture.write().await.logged_in = false;
    ok_message("User logged out")
}

pub(super) async fn user(State(state): State<StubState>) -> Response {
    let fixture = state.fixture.read().await;
    if fixture.logged_in {
        ok(fixture.user.clone())
    } else {
        fail(StatusCode::UNAUTHORIZED, "Unauthorized")
    }
}

pub(super) async fn user_create(Json(request): Json<Credentials>) -> Response {
    if request.email.len() < 2 {
        parameter_fail("email", &["Not valid email"])
    } else {
        ok_message("OK")
    }
}

pub(super) async fn user_activate(Json(request): Json<TokenRequest>) -> Response {
    if request.token == "1" {
        fail(StatusCode::BAD_REQUEST, "No such token")
    } else {
        ok_message("User was activated")
    }
}

pub(super) async fn password_reset(State(state): State<StubState>) -> Response {
    state.fixture.write().await.logged_in = false;
    ok_message("Reset password requested")
}

pub(super) async fn password_set(Json(request): Json<PasswordSetRequest>) -> Response {
    if request.token == "1" {
        fail(StatusCode::BAD_REQUEST, "No such token")
    } else {
        ok_message("Password was set successfully")
    }
}

pub(super) async fn user_delete(State(state): State<StubState>) -> Response {
    let mut fixture = state.fixture.write().await;
    fixture.domains.clear();
    fixture.logged_in = false;
    ok_message("OK")
}

pub(super) async fn domains(State(state): State<StubState>) -> Response {
    ok(state.fixture.read().await.domains.clone())
}

#[derive(Deserialize)]
pub(super) struct DomainQuery {
    domain: String,
}

pub(super) async fn domain_delete(
    State(state): State<StubState>,
    Query(query): Query<DomainQuery>,
) -> Response {
    let mut fixture = state.fixture.write().await;
    fixture.domains.retain(|d| d.name != query.domain);
    ok_message("Domain deleted")
}

pub(super) async fn notification_enable(State(state): State<StubState>) -> Response {
    state.fixture.write().await.user.notification_enabled = true;
    ok_message("OK")
}

pub(super) async fn notification_disable(State(state): State<StubState>) -> Response {
    state.fixture.write().await.user.notification_enabled = false;
    ok_message("OK")
}

pub(super) async fn plan(State(state): State<StubState>) -> Response {
    ok(state.fixture.read().await.plan.clone())
}

pub(super) async fn plan_subscribe(
    State(state): State<StubState>,
    Json(request): Json<PlanSubscribeRequest>,
) -> Response {
    state.fixture.write().await.user.subscription_id = Some(request.subscription_id);
    ok_message("OK")
}

pub(super) async fn plan_delete(State(state): State<StubState>) -> Response {
    state.fixture.write().await.user.subscription_id = None;
    ok_message("OK")
}
