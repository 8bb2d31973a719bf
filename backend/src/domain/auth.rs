//! Authentication primitives: login credentials, signup credentials and
//! stored password hashes.
//!
//! Inbound adapters build these from raw strings before calling a port, so
//! services only ever see validated values.

use std::fmt;

use zeroize::Zeroizing;

use super::{UserValidationError, Username};

/// Minimum accepted password length at signup.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty and keeps caller whitespace.
///
/// # Examples
/// ```
/// use backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" alice ", "s3cret-pass").unwrap();
/// assert_eq!(creds.username(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for user lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Reasons a signup submission is rejected before touching storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupValidationError {
    /// The username breaks the handle rules.
    Username(UserValidationError),
    /// The two password entries differ.
    PasswordMismatch,
    /// The password is shorter than [`PASSWORD_MIN_LEN`].
    PasswordTooShort { min: usize },
    /// The password consists only of digits.
    PasswordEntirelyNumeric,
    /// The password matches the username, ignoring case.
    PasswordTooSimilar,
}

impl SignupValidationError {
    /// Form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Username(_) => "username",
            Self::PasswordMismatch => "password2",
            _ => "password1",
        }
    }

    /// Stable machine code for clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Username(_) => "invalid_username",
            Self::PasswordMismatch => "password_mismatch",
            Self::PasswordTooShort { .. } => "password_too_short",
            Self::PasswordEntirelyNumeric => "password_entirely_numeric",
            Self::PasswordTooSimilar => "password_too_similar",
        }
    }
}

impl fmt::Display for SignupValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username(err) => write!(f, "{err}"),
            Self::PasswordMismatch => write!(f, "the two password fields didn't match"),
            Self::PasswordTooShort { min } => {
                write!(f, "password must contain at least {min} characters")
            }
            Self::PasswordEntirelyNumeric => write!(f, "password can't be entirely numeric"),
            Self::PasswordTooSimilar => write!(f, "password is too similar to the username"),
        }
    }
}

impl std::error::Error for SignupValidationError {}

/// Validated signup submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupCredentials {
    username: Username,
    password: Zeroizing<String>,
}

impl SignupCredentials {
    /// Validate a signup form: handle rules, matching passwords and the
    /// password policy.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{SignupCredentials, SignupValidationError};
    ///
    /// let err = SignupCredentials::try_from_parts("alice", "whiskers-1", "whiskers-2")
    ///     .unwrap_err();
    /// assert_eq!(err, SignupValidationError::PasswordMismatch);
    /// ```
    pub fn try_from_parts(
        username: &str,
        password1: &str,
        password2: &str,
    ) -> Result<Self, SignupValidationError> {
        let username =
            Username::new(username.trim()).map_err(SignupValidationError::Username)?;
        if password1 != password2 {
            return Err(SignupValidationError::PasswordMismatch);
        }
        if password1.chars().count() < PASSWORD_MIN_LEN {
            return Err(SignupValidationError::PasswordTooShort {
                min: PASSWORD_MIN_LEN,
            });
        }
        if password1.chars().all(|c| c.is_ascii_digit()) {
            return Err(SignupValidationError::PasswordEntirelyNumeric);
        }
        if password1.to_lowercase() == username.as_ref().to_lowercase() {
            return Err(SignupValidationError::PasswordTooSimilar);
        }
        Ok(Self {
            username,
            password: Zeroizing::new(password1.to_owned()),
        })
    }

    /// Requested handle.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Chosen password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// PHC-format password hash as stored beside a user.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded PHC string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}
