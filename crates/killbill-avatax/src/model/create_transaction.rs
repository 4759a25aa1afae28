//! Request types for the create-transaction endpoint.
//!
//! The payload mirrors the AvaTax v2 `CreateTransactionModel` schema. The
//! client serializes it as-is and leaves validation to the service.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Document types accepted by the transaction endpoint.
///
/// Order types are quotes: tax is computed but the document is never
/// persisted. Invoice types are recorded and may later be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    /// Sales quote, never persisted.
    SalesOrder,
    /// Permanent sales document.
    SalesInvoice,
    /// Purchase quote, never persisted.
    PurchaseOrder,
    /// Permanent purchase document.
    PurchaseInvoice,
    /// Return quote, never persisted.
    ReturnOrder,
    /// Permanent return document, used for refunds.
    ReturnInvoice,
}

/// A postal address in transaction coordinates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// First street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    /// Second street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// Third street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,
    /// City name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Postal code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Two-letter ISO country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Ship-from and ship-to endpoints for a transaction.
///
/// The service also accepts a `singleLocation` shorthand when both ends are
/// the same address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAddresses {
    /// Origin of the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_from: Option<Address>,
    /// Destination of the shipment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_to: Option<Address>,
    /// Single address standing in for both ends.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_location: Option<Address>,
}

/// One taxable line of a create-transaction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Line number; the service assigns one when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Quantity of items on the line. The service defaults to 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Total (extended) amount for the line, not a unit price.
    pub amount: f64,
    /// Avalara tax code controlling taxability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    /// Item code from the source system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_code: Option<String>,
    /// Human-readable line description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether tax is already included in the amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_included: Option<bool>,
    /// Free-form reference carried through to reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref1: Option<String>,
    /// Second free-form reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref2: Option<String>,
}

impl LineItem {
    /// Creates a line for the given extended amount.
    pub fn new(amount: f64) -> Self {
        Self {
            number: None,
            quantity: None,
            amount,
            tax_code: None,
            item_code: None,
            description: None,
            tax_included: None,
            ref1: None,
            ref2: None,
        }
    }

    /// Sets the line number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    /// Sets the quantity.
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets the Avalara tax code.
    pub fn with_tax_code(mut self, tax_code: impl Into<String>) -> Self {
        self.tax_code = Some(tax_code.into());
        self
    }

    /// Sets the item code.
    pub fn with_item_code(mut self, item_code: impl Into<String>) -> Self {
        self.item_code = Some(item_code.into());
        self
    }

    /// Sets the line description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the line amount as tax inclusive.
    pub fn with_tax_included(mut self, tax_included: bool) -> Self {
        self.tax_included = Some(tax_included);
        self
    }

    /// Sets the first reference field.
    pub fn with_ref1(mut self, ref1: impl Into<String>) -> Self {
        self.ref1 = Some(ref1.into());
        self
    }

    /// Sets the second reference field.
    pub fn with_ref2(mut self, ref2: impl Into<String>) -> Self {
        self.ref2 = Some(ref2.into());
        self
    }
}

/// Payload for `POST /transactions/create`.
///
/// # Examples
///
/// ```ignore
/// use jiff::civil::date;
/// use killbill_avatax::model::{CreateTransactionRequest, DocumentType, LineItem};
///
/// let request = CreateTransactionRequest::new("customer-42", date(2024, 3, 1))
///     .with_doc_type(DocumentType::SalesInvoice)
///     .with_company_code("DEFAULT")
///     .with_commit(true)
///     .with_line(LineItem::new(100.0).with_tax_code("P0000000"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    /// Document code; the service generates one when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Company the document belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_code: Option<String>,
    /// Document type; the service defaults to a sales order.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<DocumentType>,
    /// Document date.
    pub date: Date,
    /// Customer the document is billed to.
    pub customer_code: String,
    /// Finalize the document instead of leaving it uncommitted.
    pub commit: bool,
    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    /// Document-level description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Exemption certificate number, when the customer is exempt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemption_no: Option<String>,
    /// Reference code carried through to reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,
    /// Taxable lines.
    pub lines: Vec<LineItem>,
    /// Transaction endpoints used for tax sourcing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<TransactionAddresses>,
}

impl CreateTransactionRequest {
    /// Creates an empty document for `customer_code` dated `date`.
    pub fn new(customer_code: impl Into<String>, date: Date) -> Self {
        Self {
            code: None,
            company_code: None,
            doc_type: None,
            date,
            customer_code: customer_code.into(),
            commit: false,
            currency_code: None,
            description: None,
            exemption_no: None,
            reference_code: None,
            lines: Vec::new(),
            addresses: None,
        }
    }

    /// Sets the document code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Sets the company code.
    pub fn with_company_code(mut self, company_code: impl Into<String>) -> Self {
        self.company_code = Some(company_code.into());
        self
    }

    /// Sets the document type.
    pub fn with_doc_type(mut self, doc_type: DocumentType) -> Self {
        self.doc_type = Some(doc_type);
        self
    }

    /// Requests the document be committed on creation.
    pub fn with_commit(mut self, commit: bool) -> Self {
        self.commit = commit;
        self
    }

    /// Sets the currency code.
    pub fn with_currency_code(mut self, currency_code: impl Into<String>) -> Self {
        self.currency_code = Some(currency_code.into());
        self
    }

    /// Sets the document description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the exemption certificate number.
    pub fn with_exemption_no(mut self, exemption_no: impl Into<String>) -> Self {
        self.exemption_no = Some(exemption_no.into());
        self
    }

    /// Sets the reference code.
    pub fn with_reference_code(mut self, reference_code: impl Into<String>) -> Self {
        self.reference_code = Some(reference_code.into());
        self
    }

    /// Appends a taxable line.
    pub fn with_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    /// Sets the transaction addresses.
    pub fn with_addresses(mut self, addresses: TransactionAddresses) -> Self {
        self.addresses = Some(addresses);
        self
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_request_serializes_to_wire_names() {
        let request = CreateTransactionRequest::new("customer-42", date(2024, 3, 1))
            .with_code("INV-0001")
            .with_company_code("DEFAULT")
            .with_doc_type(DocumentType::SalesInvoice)
            .with_commit(true)
            .with_currency_code("USD")
            .with_line(
                LineItem::new(100.0)
                    .with_number("1")
                    .with_quantity(1.0)
                    .with_tax_code("P0000000"),
            )
            .with_addresses(TransactionAddresses {
                ship_to: Some(Address {
                    city: Some("San Francisco".to_owned()),
                    region: Some("CA".to_owned()),
                    postal_code: Some("94105".to_owned()),
                    country: Some("US".to_owned()),
                    ..Address::default()
                }),
                ..TransactionAddresses::default()
            });

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "code": "INV-0001",
                "companyCode": "DEFAULT",
                "type": "SalesInvoice",
                "date": "2024-03-01",
                "customerCode": "customer-42",
                "commit": true,
                "currencyCode": "USD",
                "lines": [{
                    "number": "1",
                    "quantity": 1.0,
                    "amount": 100.0,
                    "taxCode": "P0000000",
                }],
                "addresses": {
                    "shipTo": {
                        "city": "San Francisco",
                        "region": "CA",
                        "postalCode": "94105",
                        "country": "US",
                    },
                },
            })
        );
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let request = CreateTransactionRequest::new("c", date(2020, 6, 1));
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "date": "2020-06-01",
                "customerCode": "c",
                "commit": false,
                "lines": [],
            })
        );
    }

    #[test]
    fn test_document_type_round_trip() {
        let encoded = serde_json::to_string(&DocumentType::ReturnInvoice).unwrap();
        assert_eq!(encoded, "\"ReturnInvoice\"");
        let decoded: DocumentType = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, DocumentType::ReturnInvoice);
    }
}
