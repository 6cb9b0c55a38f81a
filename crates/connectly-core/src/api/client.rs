//! API Client
//!
//! One method per backend endpoint. Each method issues at most one request
//! and turns non-2xx responses into `ApiError::Rejected`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use super::{ApiRequest, HttpBackend, Method, RawResponse, ReqwestBackend};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, Operation};
use crate::models::{Account, Initiative, InitiativeDraft, LoginResponse, Registration, Session};

/// Characters left as-is in the search query value
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone)]
pub struct ApiClient<B = ReqwestBackend> {
    backend: B,
}

impl ApiClient<ReqwestBackend> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_backend(ReqwestBackend::new(config))
    }
}

impl<B: HttpBackend> ApiClient<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ========================
    // Initiatives
    // ========================

    /// `GET /initiatives`, filtered by `search` when it is non-empty.
    pub async fn fetch_initiatives(&self, search: Option<&str>) -> ApiResult<Vec<Initiative>> {
        let request = ApiRequest::new(Operation::FetchInitiatives, Method::Get, initiatives_path(search));
        let body = self.execute(request).await?;
        decode(&body)
    }

    pub async fn create_initiative(&self, session: Option<&Session>, draft: &InitiativeDraft) -> ApiResult<()> {
        let token = require_session(session)?;
        let body = encode(draft)?;
        let request = ApiRequest::new(Operation::CreateInitiative, Method::Post, "/initiatives")
            .with_session(token)
            .with_body(body);
        self.execute(request).await.map(|_| ())
    }

    /// Organization-only by convention; the server decides.
    pub async fn delete_initiative(&self, session: Option<&Session>, id: i64) -> ApiResult<()> {
        let token = require_session(session)?;
        let request = ApiRequest::new(Operation::DeleteInitiative, Method::Delete, "/initiatives")
            .with_session(token)
            .with_body(json!({ "id": id }));
        self.execute(request).await.map(|_| ())
    }

    // ========================
    // Participants
    // ========================

    /// `POST /participants`; the server answers 201 with no body.
    pub async fn join_initiative(&self, session: Option<&Session>, initiative_id: i64) -> ApiResult<()> {
        let token = require_session(session)?;
        let request = ApiRequest::new(Operation::JoinInitiative, Method::Post, "/participants")
            .with_session(token)
            .with_body(json!({ "initiative_id": initiative_id }));
        self.execute(request).await.map(|_| ())
    }

    pub async fn leave_initiative(&self, session: Option<&Session>, initiative_id: i64) -> ApiResult<()> {
        let token = require_session(session)?;
        let request = ApiRequest::new(Operation::LeaveInitiative, Method::Delete, "/participants")
            .with_session(token)
            .with_body(json!({ "initiative_id": initiative_id }));
        self.execute(request).await.map(|_| ())
    }

    // ========================
    // Accounts
    // ========================

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let request = ApiRequest::new(Operation::Login, Method::Post, "/login")
            .with_body(json!({ "email": email, "password": password }));
        let body = self.execute(request).await?;
        decode(&body)
    }

    pub async fn register(&self, registration: &Registration) -> ApiResult<()> {
        let body = encode(registration)?;
        let request = ApiRequest::new(Operation::Register, Method::Post, "/register").with_body(body);
        self.execute(request).await.map(|_| ())
    }

    /// Current user plus joined (volunteer) or created (organization) initiatives
    pub async fn get_account(&self, session: Option<&Session>) -> ApiResult<Account> {
        let token = require_session(session)?;
        let request = ApiRequest::new(Operation::GetAccount, Method::Get, "/account").with_session(token);
        let body = self.execute(request).await?;
        decode(&body)
    }

    async fn execute(&self, request: ApiRequest) -> ApiResult<String> {
        let operation = request.operation;
        tracing::debug!(method = request.method.as_str(), path = %request.path, "api request");

        let response = self.backend.send(request).await.map_err(|e| {
            tracing::warn!(?operation, error = %e, "request failed");
            e
        })?;

        if response.is_success() {
            Ok(response.body)
        } else {
            let err = rejection(operation, &response);
            tracing::warn!(?operation, status = response.status, message = %err, "request rejected");
            Err(err)
        }
    }
}

fn require_session(session: Option<&Session>) -> ApiResult<&str> {
    match session {
        Some(s) if !s.token().is_empty() => Ok(s.token()),
        _ => Err(ApiError::MissingSession),
    }
}

fn initiatives_path(search: Option<&str>) -> String {
    match search {
        Some(term) if !term.is_empty() => {
            format!("/initiatives?search={}", utf8_percent_encode(term, QUERY_VALUE))
        }
        _ => "/initiatives".to_string(),
    }
}

fn encode<T: Serialize>(value: &T) -> ApiResult<Value> {
    serde_json::to_value(value).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Message from a JSON `message`/`error` field, else the body text,
/// else the operation's fallback.
fn rejection(operation: Operation, response: &RawResponse) -> ApiError {
    let body = response.body.trim();
    let field = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => ["message", "error"]
            .iter()
            .filter_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string),
        Ok(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    };
    let message = field.or_else(|| (!body.is_empty()).then(|| body.to_string()));

    ApiError::Rejected {
        operation,
        status: response.status,
        message: message.unwrap_or_else(|| operation.fallback_message().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::testing::FakeBackend;

    fn client() -> ApiClient<FakeBackend> {
        ApiClient::with_backend(FakeBackend::new())
    }

    #[test]
    fn test_search_term_passed_through() {
        assert_eq!(initiatives_path(None), "/initiatives");
        assert_eq!(initiatives_path(Some("")), "/initiatives");
        assert_eq!(initiatives_path(Some("beach")), "/initiatives?search=beach");
        assert_eq!(initiatives_path(Some("Beach Day&x")), "/initiatives?search=Beach%20Day%26x");
    }

    #[tokio::test]
    async fn test_fetch_initiatives_decodes_list() {
        let api = client();
        api.backend().push_json(200, r#"[{"id":1,"title":"Beach cleanup","participants":[]}]"#);

        let list = api.fetch_initiatives(Some("beach")).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].title, "Beach cleanup");

        let sent = api.backend().requests();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].path, "/initiatives?search=beach");
        assert_eq!(sent[0].session, None);
    }

    #[tokio::test]
    async fn test_fetch_rejection_uses_fallback() {
        let api = client();
        api.backend().push_json(500, "");

        let err = api.fetch_initiatives(None).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch initiatives from the backend.");
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_rejection_prefers_body_message() {
        let api = client();
        api.backend().push_json(409, r#"{"message":"Email already registered"}"#);
        api.backend().push_json(400, "name must not be empty");

        let registration = Registration {
            name: "Ana".into(),
            email: "ana@example.com".into(),
            password: "pw".into(),
            role: Role::Volunteer,
        };
        let err = api.register(&registration).await.unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");

        let err = api.register(&registration).await.unwrap_err();
        assert_eq!(err.to_string(), "name must not be empty");

        let body = api.backend().requests()[0].body.clone().unwrap();
        assert_eq!(body["role"], "volunteer");
        assert_eq!(body["email"], "ana@example.com");
    }

    #[test]
    fn test_rejection_keeps_unrecognized_body() {
        let err = rejection(Operation::CreateInitiative, &RawResponse::new(400, r#"{"detail":"Title too long"}"#));
        assert_eq!(err.to_string(), r#"{"detail":"Title too long"}"#);

        let err = rejection(Operation::CreateInitiative, &RawResponse::new(400, "42"));
        assert_eq!(err.to_string(), "42");

        let err = rejection(Operation::CreateInitiative, &RawResponse::new(400, r#"{"message":"  "}"#));
        assert_eq!(err.to_string(), r#"{"message":"  "}"#);

        let err = rejection(Operation::CreateInitiative, &RawResponse::new(400, "  "));
        assert_eq!(err.to_string(), "Failed to create initiative.");
    }

    #[tokio::test]
    async fn test_authenticated_calls_need_session() {
        let api = client();

        assert_eq!(api.join_initiative(None, 1).await, Err(ApiError::MissingSession));
        assert_eq!(api.leave_initiative(None, 1).await, Err(ApiError::MissingSession));
        assert_eq!(api.delete_initiative(None, 1).await, Err(ApiError::MissingSession));
        assert_eq!(api.get_account(None).await.unwrap_err(), ApiError::MissingSession);
        let empty = Session::new("");
        assert_eq!(api.join_initiative(Some(&empty), 1).await, Err(ApiError::MissingSession));

        assert!(api.backend().requests().is_empty());
    }

    #[tokio::test]
    async fn test_join_sends_header_and_accepts_empty_201() {
        let api = client();
        api.backend().push_json(201, "");

        let session = Session::new("abc123");
        api.join_initiative(Some(&session), 42).await.unwrap();

        let sent = api.backend().requests();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, "/participants");
        assert_eq!(sent[0].session.as_deref(), Some("abc123"));
        assert_eq!(sent[0].body, Some(json!({ "initiative_id": 42 })));
    }

    #[tokio::test]
    async fn test_leave_and_delete_use_delete_method() {
        let api = client();
        api.backend().push_json(200, "");
        api.backend().push_json(204, "");

        let session = Session::new("tok");
        api.leave_initiative(Some(&session), 3).await.unwrap();
        api.delete_initiative(Some(&session), 9).await.unwrap();

        let sent = api.backend().requests();
        assert_eq!((sent[0].method, sent[0].path.as_str()), (Method::Delete, "/participants"));
        assert_eq!(sent[1].body, Some(json!({ "id": 9 })));
        assert_eq!((sent[1].method, sent[1].path.as_str()), (Method::Delete, "/initiatives"));
    }

    #[tokio::test]
    async fn test_login_failure_is_auth_error() {
        let api = client();
        api.backend().push_json(401, "");

        let err = api.login("ana@example.com", "wrong").await.unwrap_err();
        assert_eq!(err.to_string(), "Login failed. Please check your credentials.");
        assert_eq!(err.failure_kind(), Some(crate::error::FailureKind::Auth));
    }

    #[tokio::test]
    async fn test_account_decodes_user_and_initiatives() {
        let api = client();
        api.backend().push_json(
            200,
            r#"{"user":{"name":"Green Org","role":"organization","email":"g@o.org"},"initiatives":null}"#,
        );

        let account = api.get_account(Some(&Session::new("tok"))).await.unwrap();
        assert!(account.user.is_organization());
        assert!(account.initiatives.is_empty());
        assert_eq!(api.backend().requests()[0].session.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let api = client();
        api.backend().push_json(200, "<html>");

        assert!(matches!(api.fetch_initiatives(None).await, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_network_failure_propagates() {
        let api = client();
        api.backend().push_network_error("connection refused");

        let err = api.fetch_initiatives(None).await.unwrap_err();
        assert_eq!(err, ApiError::Network("connection refused".into()));
    }
}
