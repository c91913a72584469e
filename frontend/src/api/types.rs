use leptos::{IntoView, View};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub full_name: String,
    pub role: String,
    #[serde(default)]
    pub is_system_admin: bool,
}

impl UserResponse {
    pub fn is_admin(&self) -> bool {
        self.is_system_admin || self.role.eq_ignore_ascii_case("admin")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub const NOT_FOUND: &'static str = "NOT_FOUND";

    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::NOT_FOUND.to_string(),
            details: None,
        }
    }

    /// Fallback for error responses whose body is not an `ApiError`.
    pub fn from_status(status: u16) -> Self {
        match status {
            404 => Self::not_found("指定されたデータが見つかりません"),
            401 => Self {
                error: "認証が必要です".to_string(),
                code: "UNAUTHORIZED".to_string(),
                details: None,
            },
            403 => Self {
                error: "この操作を行う権限がありません".to_string(),
                code: "FORBIDDEN".to_string(),
                details: None,
            },
            other => Self::unknown(format!("Unexpected status: {}", other)),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == Self::NOT_FOUND
    }
}
