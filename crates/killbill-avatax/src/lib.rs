#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for client operations.
///
/// Use this target for configuration, request assembly, and client-level errors.
pub const TRACING_TARGET_CLIENT: &str = "killbill_avatax::client";

/// Tracing target for HTTP transport operations.
pub const TRACING_TARGET_TRANSPORT: &str = "killbill_avatax::transport";

mod client;
pub mod error;
pub mod model;
#[doc(hidden)]
pub mod prelude;
pub mod transport;

pub use crate::client::{
    AvaTaxClient, AvaTaxConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT,
    KILL_BILL_CLIENT_HEADER, PROPERTY_PREFIX,
};
pub use crate::error::{Error, Result};
pub use crate::model::{CreateTransactionRequest, Transaction};
pub use crate::transport::{HttpTransport, ReqwestTransport};
