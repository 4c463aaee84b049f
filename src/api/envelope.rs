use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Codes sent back when a team operation is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    MaxTeamsCreated,
    MemberNotAllowed,
    AlreadyAMember,
    NotAMember,
    YouAreLastMember,
}

impl Failure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Failure::MaxTeamsCreated => "max-teams-created",
            Failure::MemberNotAllowed => "member-not-allowed",
            Failure::AlreadyAMember => "already-a-member",
            Failure::NotAMember => "not-a-member",
            Failure::YouAreLastMember => "you-are-last-member",
        }
    }
}

/// Uniform response body: `{success: true, ...payload}` or
/// `{success: false, message: <code>}`
///
/// Both variants are sent with HTTP 200. The payload must serialise to a
/// JSON object so its fields can sit next to `success`.
#[derive(Debug)]
pub enum Envelope<T> {
    Success(T),
    Failure(Failure),
}

impl<T> Envelope<T> {
    pub fn success(payload: T) -> Self {
        Envelope::Success(payload)
    }

    pub fn fail(failure: Failure) -> Self {
        tracing::debug!(message = failure.as_str(), "request refused");
        Envelope::Failure(failure)
    }
}

#[derive(Serialize)]
struct SuccessBody<'a, T> {
    success: bool,
    #[serde(flatten)]
    payload: &'a T,
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        match self {
            Envelope::Success(payload) => Json(SuccessBody {
                success: true,
                payload: &payload,
            })
            .into_response(),
            Envelope::Failure(failure) => Json(json!({
                "success": false,
                "message": failure.as_str(),
            }))
            .into_response(),
        }
    }
}
