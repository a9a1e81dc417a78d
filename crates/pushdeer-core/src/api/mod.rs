//! Remote service capability.
//!
//! The orchestrator never speaks HTTP itself; it drives a [`PushDeerApi`]
//! implementation and interprets the [`ApiResponse`] envelope it returns.
//!
//! # Module Structure
//!
//! - `operation`: Names of the remote operations (also used as log tags)
//! - `request`: Parameter structs for operations that take more than a token
//! - `response`: Response envelope and the small payload types
//! - `service`: The `PushDeerApi` trait

mod operation;
mod request;
mod response;
mod service;

pub use operation::ApiOperation;
pub use request::PushRequest;
pub use response::{ActionAck, ApiResponse, PushResult, SUCCESS_CODE, TokenOnly};
pub use service::PushDeerApi;
