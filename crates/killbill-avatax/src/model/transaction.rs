//! Transaction documents returned by the tax service.
//!
//! The service returns the same document shape for committed transactions,
//! quotes, and error envelopes, so every field here is optional or
//! defaulted and sparse documents still parse.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::DocumentType;

/// Lifecycle status of a transaction document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Temporary,
    Saved,
    Posted,
    Committed,
    Cancelled,
    Adjusted,
    Queued,
    PendingApproval,
    Any,
}

/// Outcome code attached to error envelopes and legacy responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultCode {
    Success,
    Warning,
    Error,
    Exception,
}

/// A message the service attached to a document.
///
/// Error envelopes carry their diagnostics here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvaTaxMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Field or document the message refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refers_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Jurisdiction-level tax detail for one line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionLineDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Name of the taxing jurisdiction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub juris_name: Option<String>,
    /// Jurisdiction kind (state, county, city, special).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub juris_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Effective rate applied by this jurisdiction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// Tax charged by this jurisdiction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_name: Option<String>,
}

/// One computed line of a transaction document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    /// Extended amount for the line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxable_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exempt_amount: Option<f64>,
    /// Tax actually charged on the line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    /// Tax the engine computed before overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_calculated: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_included: Option<bool>,
    /// Per-jurisdiction breakdown.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<TransactionLineDetail>,
}

/// A transaction document returned by the create-transaction endpoint.
///
/// The service conflates successes and business rejections into this one
/// shape: rejections arrive with an HTTP error status but still parse as a
/// document, with the failure described in [`messages`](Self::messages).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier assigned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Document code, unique within the company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    /// Document date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Date>,
    /// Lifecycle status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
    /// Document type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<DocumentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_vendor_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exempt_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reconciled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Total of all line amounts, before tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_exempt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_taxable: Option<f64>,
    /// Total tax charged on the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<f64>,
    /// Total tax the engine computed before overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_calculated: Option<f64>,
    /// Computed lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<TransactionLine>,
    /// Result code carried by error envelopes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_code: Option<ResultCode>,
    /// Diagnostics attached to the document.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<AvaTaxMessage>,
}

impl Transaction {
    /// True unless the document carries an explicit non-success result code.
    ///
    /// Plain documents omit `resultCode` entirely; only error envelopes and
    /// legacy responses set it.
    pub fn is_success(&self) -> bool {
        matches!(self.result_code, None | Some(ResultCode::Success))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_sparse_document_parses() {
        let transaction: Transaction =
            serde_json::from_str(r#"{"resultCode":"Success","totalTax":12.5}"#).unwrap();
        assert_eq!(transaction.total_tax, Some(12.5));
        assert_eq!(transaction.result_code, Some(ResultCode::Success));
        assert!(transaction.is_success());
        assert!(transaction.lines.is_empty());
    }

    #[test]
    fn test_error_envelope_parses_as_document() {
        let body = json!({
            "resultCode": "Error",
            "messages": [{
                "summary": "Company not found.",
                "details": "The company code DEFAULT was not found.",
                "severity": "Exception",
            }],
        })
        .to_string();

        let transaction: Transaction = serde_json::from_str(&body).unwrap();
        assert!(!transaction.is_success());
        assert_eq!(transaction.messages.len(), 1);
        assert_eq!(
            transaction.messages[0].summary.as_deref(),
            Some("Company not found.")
        );
    }

    #[test]
    fn test_full_document_parses() {
        let body = json!({
            "id": 123456789,
            "code": "INV-0001",
            "companyId": 42,
            "date": "2024-03-01",
            "status": "Committed",
            "type": "SalesInvoice",
            "currencyCode": "USD",
            "customerVendorCode": "customer-42",
            "totalAmount": 100.0,
            "totalTax": 8.75,
            "lines": [{
                "lineNumber": "1",
                "lineAmount": 100.0,
                "tax": 8.75,
                "taxCalculated": 8.75,
                "details": [{
                    "jurisName": "CALIFORNIA",
                    "jurisType": "State",
                    "region": "CA",
                    "rate": 0.0875,
                    "tax": 8.75,
                }],
            }],
            "unknownFutureField": true,
        })
        .to_string();

        let transaction: Transaction = serde_json::from_str(&body).unwrap();
        assert_eq!(transaction.status, Some(DocumentStatus::Committed));
        assert_eq!(transaction.doc_type, Some(DocumentType::SalesInvoice));
        assert_eq!(transaction.date, Some(date(2024, 3, 1)));
        assert_eq!(transaction.total_tax, Some(8.75));
        assert_eq!(transaction.lines.len(), 1);
        assert_eq!(
            transaction.lines[0].details[0].juris_name.as_deref(),
            Some("CALIFORNIA")
        );
        assert!(transaction.is_success());
    }

    #[test]
    fn test_default_document_is_success() {
        let transaction = Transaction::default();
        assert!(transaction.is_success());
        assert_eq!(transaction.total_tax, None);
    }
}
