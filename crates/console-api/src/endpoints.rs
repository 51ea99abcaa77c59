//! Backend endpoint paths.
//!
//! Every path is appended to the configured base URL; none take parameters.

/// `POST` credentials, returns a session.
pub const AUTH_LOGIN: &str = "/auth/login";

/// `POST` request a one-time password.
pub const AUTH_SEND_OTP: &str = "/auth/send-otp";

/// `POST` exchange a one-time password for tokens.
pub const AUTH_VERIFY_OTP: &str = "/auth/verify-otp";

/// `POST` set a new password, returns tokens.
pub const AUTH_UPDATE_PASSWORD: &str = "/auth/update-password";

/// `GET` the full plan catalog.
pub const PLAN_GET_ALL: &str = "/plan/getAllPlans";
