use serde::{Deserialize, Serialize};

/// Uniform response wrapper shared by success and error responses
///
/// `data` serializes as `null` when absent, so every response body has
/// the same three fields regardless of outcome. Error envelopes always
/// carry `success = false` and no data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Build a success envelope with a payload
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Build an error envelope
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Canonical success vocabulary
///
/// The success-side counterpart of the error taxonomy: a closed set of
/// public messages for successful operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuccessKind {
    ResourceRetrieved,
    ResourceCreated,
    ResourceUpdated,
    ResourceDeleted,
    ResourceValidated,
    ResourceCompleted,
    OperationSucceeded,
    UserLoggedIn,
    UserLoggedOut,
    UserRegistered,
    ProfileUpdated,
}

impl SuccessKind {
    /// Canonical public message for this outcome
    pub const fn message(self) -> &'static str {
        match self {
            Self::ResourceRetrieved => "Resource retrieved successfully",
            Self::ResourceCreated => "Resource created successfully",
            Self::ResourceUpdated => "Resource updated successfully",
            Self::ResourceDeleted => "Resource deleted successfully",
            Self::ResourceValidated => "Resource validated successfully",
            Self::ResourceCompleted => "Resource completed successfully",
            Self::OperationSucceeded => "Operation succeeded",
            Self::UserLoggedIn => "User logged in successfully",
            Self::UserLoggedOut => "User logged out successfully",
            Self::UserRegistered => "User registered successfully",
            Self::ProfileUpdated => "Profile updated successfully",
        }
    }
}

impl std::fmt::Display for SuccessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
