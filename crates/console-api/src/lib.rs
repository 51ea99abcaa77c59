//! # Console API
//!
//! This crate provides the typed endpoint wrappers the IoT Console uses to
//! talk to its backend, and the HTTP transport they share.
//!
//! ## Overview
//!
//! The console-api crate handles:
//! - **Configuration**: Base URL, bearer token and timeouts from the environment
//! - **Transport**: A reqwest-backed client behind the `Transport` trait
//! - **Auth endpoints**: Login, OTP and password update
//! - **Plan endpoints**: The plan catalog
//!
//! ## Endpoints
//!
//! | Path | Method | Wrapper |
//! |---|---|---|
//! | `/auth/login` | POST | [`AuthApi::login`] |
//! | `/auth/send-otp` | POST | [`AuthApi::send_otp`] |
//! | `/auth/verify-otp` | POST | [`AuthApi::verify_otp`] |
//! | `/auth/update-password` | POST | [`AuthApi::update_password`] |
//! | `/plan/getAllPlans` | GET | [`PlanApi::get_all_plans`] |
//!
//! ## Failure Policy
//!
//! Wrappers are passthrough: a transport failure, a non-success status or a
//! body of the wrong shape is returned to the caller as the transport
//! produced it. There is no retry and no default value.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use console_api::{AuthApi, ConsoleConfig, HttpTransport, LoginRequest, PlanApi};
//! use std::sync::Arc;
//!
//! async fn sign_in() -> Result<(), console_api::ApiError> {
//!     let transport = Arc::new(HttpTransport::new(ConsoleConfig::from_env())?);
//!
//!     let auth = AuthApi::new(transport.clone());
//!     let session = auth.login(&LoginRequest::new("ada@acme.io", "secret")).await?;
//!     println!("Signed in, {} organisations", session.organisations.len());
//!
//!     let plans = PlanApi::new(transport).get_all_plans().await?;
//!     println!("{} plans available", plans.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `jwt` (default): Read access-token claims with jsonwebtoken

pub mod auth;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod plan;
pub mod transport;

// Re-export main types
pub use auth::{AuthApi, LoginRequest, LoginResponse, SessionClaims, TokenData};
pub use config::{ConfigError, ConsoleConfig};
pub use error::{ApiError, ApiResult};
pub use plan::PlanApi;
pub use transport::{HttpTransport, Transport};
