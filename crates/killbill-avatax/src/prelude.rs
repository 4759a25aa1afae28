//! Prelude for the killbill-avatax crate
//!
//! This module re-exports the most commonly used types and traits from the crate
//! to provide a convenient single import for users.

pub use crate::client::{AvaTaxClient, AvaTaxConfig};
pub use crate::error::{Error, Result};
pub use crate::model::{
    Address, CreateTransactionRequest, DocumentType, LineItem, Transaction,
    TransactionAddresses,
};
pub use crate::transport::{HttpTransport, ReqwestTransport};
