use crate::{api::Transaction, components::common::Tone, utils::format::format_amount};

/// Aggregates shown above the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransactionSummary {
    pub total_revenue: f64,
    pub platform_share: f64,
    pub doctor_payouts: f64,
    pub pending_payouts: f64,
}

impl TransactionSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions
            .iter()
            .fold(Self::default(), |mut summary, txn| {
                match (txn.kind.as_str(), txn.status.as_str()) {
                    ("payment", "completed") => {
                        summary.total_revenue += txn.amount;
                        summary.platform_share += txn.platform_share.unwrap_or(0.0);
                    }
                    ("payout", "completed") => summary.doctor_payouts += txn.amount,
                    ("payout", "pending") => summary.pending_payouts += txn.amount,
                    _ => {}
                }
                summary
            })
    }
}

pub fn type_tone(kind: &str) -> Tone {
    match kind {
        "payment" => Tone::Success,
        "payout" => Tone::Warning,
        "refund" => Tone::Error,
        _ => Tone::Default,
    }
}

pub fn status_tone(status: &str) -> Tone {
    match status {
        "completed" => Tone::Success,
        "pending" => Tone::Warning,
        "failed" => Tone::Error,
        _ => Tone::Default,
    }
}

pub fn transaction_label(id: i64) -> String {
    format!("TXN-{}", id)
}

pub fn case_label(case_id: Option<i64>) -> String {
    case_id
        .map(|id| format!("#{}", id))
        .unwrap_or_else(|| "N/A".into())
}

pub fn patient_label(patient_id: Option<i64>) -> String {
    patient_id
        .map(|id| format!("P-{}", id))
        .unwrap_or_else(|| "N/A".into())
}

pub fn doctor_label(doctor_id: Option<i64>) -> String {
    doctor_id
        .map(|id| format!("D-{}", id))
        .unwrap_or_else(|| "N/A".into())
}

/// Payouts leave the platform and render negative.
pub fn signed_amount(txn: &Transaction) -> String {
    let sign = if txn.kind == "payout" { "-" } else { "+" };
    format!("{}${}", sign, format_amount(txn.amount))
}

pub fn amount_tone(txn: &Transaction) -> Tone {
    if txn.kind == "payout" {
        Tone::Error
    } else {
        Tone::Success
    }
}

pub fn platform_share_label(share: Option<f64>) -> String {
    share
        .map(|share| format!("${}", format_amount(share)))
        .unwrap_or_else(|| "N/A".into())
}

pub fn method_label(method: Option<&str>) -> String {
    method
        .filter(|method| !method.is_empty())
        .unwrap_or("N/A")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::transactions::repository::demo_transactions;

    #[test]
    fn summary_sums_by_kind_and_status() {
        let mut transactions = demo_transactions();
        let summary = TransactionSummary::from_transactions(&transactions);
        // The third payment is still pending and does not count yet.
        assert_eq!(summary.total_revenue, 200.0);
        assert_eq!(summary.platform_share, 120.0);
        assert_eq!(summary.doctor_payouts, 80.0);
        assert_eq!(summary.pending_payouts, 0.0);

        transactions[1].status = "pending".into();
        transactions[2].status = "completed".into();
        transactions[2].platform_share = None;
        let summary = TransactionSummary::from_transactions(&transactions);
        assert_eq!(summary.total_revenue, 400.0);
        assert_eq!(summary.platform_share, 120.0);
        assert_eq!(summary.doctor_payouts, 0.0);
        assert_eq!(summary.pending_payouts, 80.0);
    }

    #[test]
    fn empty_ledger_sums_to_zero() {
        assert_eq!(
            TransactionSummary::from_transactions(&[]),
            TransactionSummary::default()
        );
    }

    #[test]
    fn tones_by_type_and_status() {
        assert_eq!(type_tone("payment"), Tone::Success);
        assert_eq!(type_tone("payout"), Tone::Warning);
        assert_eq!(type_tone("refund"), Tone::Error);
        assert_eq!(type_tone("adjustment"), Tone::Default);
        assert_eq!(status_tone("completed"), Tone::Success);
        assert_eq!(status_tone("pending"), Tone::Warning);
        assert_eq!(status_tone("failed"), Tone::Error);
    }

    #[test]
    fn labels_cover_missing_fields() {
        let transactions = demo_transactions();
        assert_eq!(transaction_label(7), "TXN-7");
        assert_eq!(case_label(Some(1)), "#1");
        assert_eq!(case_label(None), "N/A");
        assert_eq!(patient_label(Some(3)), "P-3");
        assert_eq!(doctor_label(None), "N/A");
        assert_eq!(signed_amount(&transactions[0]), "+$200");
        assert_eq!(signed_amount(&transactions[1]), "-$80");
        assert_eq!(amount_tone(&transactions[1]), Tone::Error);
        assert_eq!(platform_share_label(Some(120.0)), "$120");
        assert_eq!(platform_share_label(None), "N/A");
        assert_eq!(method_label(Some("Plutu")), "Plutu");
        assert_eq!(method_label(None), "N/A");
    }
}
