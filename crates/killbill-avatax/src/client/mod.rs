//! AvaTax client and its configuration.

mod avatax_client;
mod avatax_config;

pub use self::avatax_client::{AvaTaxClient, KILL_BILL_CLIENT_HEADER};
pub use self::avatax_config::{
    AvaTaxConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT, PROPERTY_PREFIX,
};
