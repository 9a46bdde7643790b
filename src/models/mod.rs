// Portal API wire models (snake_case JSON, ported from the Go backend contract)

mod domain;
mod plan;
mod request;
mod response;
mod user;

pub use domain::Domain;
pub use plan::Plan;
pub use request::{Credentials, PasswordSetRequest, PlanSubscribeRequest, ResetRequest, TokenRequest};
pub use response::{ApiResponse, ParameterMessages};
pub use user::User;
