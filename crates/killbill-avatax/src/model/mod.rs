//! Wire models for the AvaTax v2 REST API.
//!
//! Field names map to the service's camelCase JSON. Response types keep
//! every field optional so partial documents and error envelopes parse
//! with the same types.

mod create_transaction;
mod transaction;

pub use self::create_transaction::{
    Address, CreateTransactionRequest, DocumentType, LineItem, TransactionAddresses,
};
pub use self::transaction::{
    AvaTaxMessage, DocumentStatus, ResultCode, Transaction, TransactionLine,
    TransactionLineDetail,
};
