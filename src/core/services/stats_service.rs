use chrono::NaiveDate;

use crate::core::models::report::{ComplianceStatus, Report};

/// Headline figures for the compliance dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceStats {
    pub total_reports: usize,
    /// Rounded share of `Compliant` reports, 0-100.
    pub overall_compliance: u32,
    /// Rounded mean safety score.
    pub average_safety_score: u32,
    pub pending_reviews: usize,
    /// Reports whose next audit falls on or after `today`.
    pub upcoming_audits: usize,
}

impl ComplianceStats {
    pub fn compute(reports: &[Report], today: NaiveDate) -> Self {
        let total = reports.len();
        if total == 0 {
            return Self {
                total_reports: 0,
                overall_compliance: 0,
                average_safety_score: 0,
                pending_reviews: 0,
                upcoming_audits: 0,
            };
        }

        let count = |status: ComplianceStatus| {
            reports
                .iter()
                .filter(|r| r.compliance_status == status)
                .count()
        };

        let compliant = count(ComplianceStatus::Compliant);
        let score_sum: u32 = reports.iter().map(|r| u32::from(r.safety_score)).sum();

        let upcoming_audits = reports
            .iter()
            .filter_map(|r| r.next_audit_date.date())
            .filter(|d| *d >= today)
            .count();

        Self {
            total_reports: total,
            overall_compliance: rounded_ratio(compliant as u32 * 100, total as u32),
            average_safety_score: rounded_ratio(score_sum, total as u32),
            pending_reviews: count(ComplianceStatus::PendingReview),
            upcoming_audits,
        }
    }
}

/// `numerator / denominator`, rounded half up.
fn rounded_ratio(numerator: u32, denominator: u32) -> u32 {
    (numerator * 2 + denominator) / (denominator * 2)
}
