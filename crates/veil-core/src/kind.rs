use http::StatusCode;

/// Canonical, closed-set label for a class of failure
///
/// Every kind maps to exactly one default HTTP status and exactly one
/// public message; both mappings are total. Kinds partition across status
/// classes, and each class designates one safe kind whose message is
/// substituted when disclosure is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // 400 Bad Request
    InvalidRequest,
    MissingRequiredFields,
    InvalidDataFormat,
    InvalidRequestFormat,
    UnsupportedMediaType,
    TooManyParameters,
    InvalidQueryParameters,
    ValueTooLong,
    InvalidRelationConstraint,
    ValueOutOfRange,

    // 401 Unauthorized
    Unauthorized,
    InvalidCredentials,
    InvalidPassword,
    InvalidToken,
    TokenExpired,
    MissingToken,

    // 403 Forbidden
    Forbidden,
    InsufficientPermissions,
    AccessDenied,

    // 404 Not Found
    ResourceNotFound,

    // 409 Conflict
    ResourceAlreadyExists,
    ForeignKeyConstraintFailed,
    CascadeDeleteConstraintFailed,
    ConstraintViolation,

    // 413 Payload Too Large
    FileTooLarge,

    // 422 Unprocessable Entity
    ValidationError,
    InvalidEmailFormat,
    PasswordMismatch,
    PasswordTooWeak,

    // 429 Too Many Requests
    TooManyRequests,
    RateLimitExceeded,

    // 500 Internal Server Error
    InternalError,
    DatabaseConnectionError,
    GenericError,
}

impl ErrorKind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 34] = [
        Self::InvalidRequest,
        Self::MissingRequiredFields,
        Self::InvalidDataFormat,
        Self::InvalidRequestFormat,
        Self::UnsupportedMediaType,
        Self::TooManyParameters,
        Self::InvalidQueryParameters,
        Self::ValueTooLong,
        Self::InvalidRelationConstraint,
        Self::ValueOutOfRange,
        Self::Unauthorized,
        Self::InvalidCredentials,
        Self::InvalidPassword,
        Self::InvalidToken,
        Self::TokenExpired,
        Self::MissingToken,
        Self::Forbidden,
        Self::InsufficientPermissions,
        Self::AccessDenied,
        Self::ResourceNotFound,
        Self::ResourceAlreadyExists,
        Self::ForeignKeyConstraintFailed,
        Self::CascadeDeleteConstraintFailed,
        Self::ConstraintViolation,
        Self::FileTooLarge,
        Self::ValidationError,
        Self::InvalidEmailFormat,
        Self::PasswordMismatch,
        Self::PasswordTooWeak,
        Self::TooManyRequests,
        Self::RateLimitExceeded,
        Self::InternalError,
        Self::DatabaseConnectionError,
        Self::GenericError,
    ];

    /// Canonical public message for this kind
    pub const fn message(self) -> &'static str {
        match self {
            Self::InvalidRequest => "Invalid request",
            Self::MissingRequiredFields => "Missing required fields",
            Self::InvalidDataFormat => "Invalid data format",
            Self::InvalidRequestFormat => "Invalid request format",
            Self::UnsupportedMediaType => "Unsupported media type",
            Self::TooManyParameters => "Too many parameters",
            Self::InvalidQueryParameters => "Invalid query parameters",
            Self::ValueTooLong => "Value too long",
            Self::InvalidRelationConstraint => "Invalid relation constraint",
            Self::ValueOutOfRange => "Value out of range",
            Self::Unauthorized => "Unauthorized",
            Self::InvalidCredentials => "Invalid credentials",
            Self::InvalidPassword => "Invalid password",
            Self::InvalidToken => "Invalid token",
            Self::TokenExpired => "Token expired",
            Self::MissingToken => "Missing token",
            Self::Forbidden => "Forbidden",
            Self::InsufficientPermissions => "Insufficient permissions",
            Self::AccessDenied => "Access denied",
            Self::ResourceNotFound => "Resource not found",
            Self::ResourceAlreadyExists => "Resource already exists",
            Self::ForeignKeyConstraintFailed => "Foreign key constraint failed",
            Self::CascadeDeleteConstraintFailed => "Cascade delete constraint failed",
            Self::ConstraintViolation => "Constraint violation",
            Self::FileTooLarge => "File too large",
            Self::ValidationError => "Validation error",
            Self::InvalidEmailFormat => "Invalid email format",
            Self::PasswordMismatch => "Password mismatch",
            Self::PasswordTooWeak => "Password too weak",
            Self::TooManyRequests => "Too many requests",
            Self::RateLimitExceeded => "Rate limit exceeded",
            Self::InternalError => "Internal server error",
            Self::DatabaseConnectionError => "Database connection error",
            Self::GenericError => "An error occurred while processing your request",
        }
    }

    /// Default HTTP status for this kind
    pub const fn default_status(self) -> StatusCode {
        match self {
            Self::InvalidRequest
            | Self::MissingRequiredFields
            | Self::InvalidDataFormat
            | Self::InvalidRequestFormat
            | Self::UnsupportedMediaType
            | Self::TooManyParameters
            | Self::InvalidQueryParameters
            | Self::ValueTooLong
            | Self::InvalidRelationConstraint
            | Self::ValueOutOfRange => StatusCode::BAD_REQUEST,
            Self::Unauthorized
            | Self::InvalidCredentials
            | Self::InvalidPassword
            | Self::InvalidToken
            | Self::TokenExpired
            | Self::MissingToken => StatusCode::UNAUTHORIZED,
            Self::Forbidden | Self::InsufficientPermissions | Self::AccessDenied => StatusCode::FORBIDDEN,
            Self::ResourceNotFound => StatusCode::NOT_FOUND,
            Self::ResourceAlreadyExists
            | Self::ForeignKeyConstraintFailed
            | Self::CascadeDeleteConstraintFailed
            | Self::ConstraintViolation => StatusCode::CONFLICT,
            Self::FileTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::ValidationError | Self::InvalidEmailFormat | Self::PasswordMismatch | Self::PasswordTooWeak => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::TooManyRequests | Self::RateLimitExceeded => StatusCode::TOO_MANY_REQUESTS,
            Self::InternalError | Self::DatabaseConnectionError | Self::GenericError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Inverse lookup of the canonical text
    ///
    /// Returns `None` for text outside the closed vocabulary; callers
    /// degrade to [`Self::GenericError`].
    pub fn from_message(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.message() == text)
    }

    /// The designated safe kind for a status class
    ///
    /// In redact mode every failure in a class surfaces this kind's
    /// message, so callers still receive a category signal without the
    /// raw internal text. Unlisted classes (including 500) fall back to
    /// the blanket [`Self::GenericError`].
    pub const fn safe_kind(status: StatusCode) -> Self {
        match status.as_u16() {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::ResourceNotFound,
            409 => Self::ResourceAlreadyExists,
            413 => Self::FileTooLarge,
            422 => Self::ValidationError,
            429 => Self::TooManyRequests,
            _ => Self::GenericError,
        }
    }

    /// Kinds owned by a status class
    ///
    /// The classes partition [`Self::ALL`]; an unlisted status owns no
    /// kinds.
    pub const fn kinds_for_status(status: StatusCode) -> &'static [Self] {
        match status.as_u16() {
            400 => &[
                Self::InvalidRequest,
                Self::MissingRequiredFields,
                Self::InvalidDataFormat,
                Self::InvalidRequestFormat,
                Self::UnsupportedMediaType,
                Self::TooManyParameters,
                Self::InvalidQueryParameters,
                Self::ValueTooLong,
                Self::InvalidRelationConstraint,
                Self::ValueOutOfRange,
            ],
            401 => &[
                Self::Unauthorized,
                Self::InvalidCredentials,
                Self::InvalidPassword,
                Self::InvalidToken,
                Self::TokenExpired,
                Self::MissingToken,
            ],
            403 => &[Self::Forbidden, Self::InsufficientPermissions, Self::AccessDenied],
            404 => &[Self::ResourceNotFound],
            409 => &[
                Self::ResourceAlreadyExists,
                Self::ForeignKeyConstraintFailed,
                Self::CascadeDeleteConstraintFailed,
                Self::ConstraintViolation,
            ],
            413 => &[Self::FileTooLarge],
            422 => &[
                Self::ValidationError,
                Self::InvalidEmailFormat,
                Self::PasswordMismatch,
                Self::PasswordTooWeak,
            ],
            429 => &[Self::TooManyRequests, Self::RateLimitExceeded],
            500 => &[Self::InternalError, Self::DatabaseConnectionError, Self::GenericError],
            _ => &[],
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
