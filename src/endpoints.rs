//! The fixed list of Fiscal Data endpoints and output file naming.

/// Endpoint paths extracted by a run, in extraction order.
pub const ENDPOINTS: &[&str] = &[
    "/v2/debt/tror/data_act_compliance",
    "/v2/accounting/od/redemption_tables",
    "/v2/accounting/od/title_xii",
    "/v2/accounting/od/avg_interest_rates",
    "/v1/accounting/dts/operating_cash_balance",
    "/v1/accounting/dts/deposits_withdrawals_operating_cash",
    "/v1/accounting/dts/public_debt_transactions",
    "/v1/accounting/dts/adjustment_public_debt_transactions_cash_basis",
    "/v1/accounting/dts/debt_subject_to_limit",
    "/v1/accounting/dts/inter_agency_tax_transfers",
    "/v2/accounting/od/debt_to_penny",
    "/v2/accounting/od/combined_statement",
    "/v2/accounting/od/available_balances",
    "/v2/accounting/od/estimated_financing",
    "/v2/accounting/od/gov_receipts",
    "/v2/accounting/od/gov_outlays",
    "/v2/accounting/od/int_exp",
    "/v2/accounting/od/int_exp_summary",
    "/v2/accounting/od/mspd",
    "/v2/accounting/od/monthly_statement",
    "/v2/accounting/od/pd_schedules",
    "/v2/accounting/od/pd_summary",
    "/v2/accounting/od/tic",
    "/v2/accounting/od/pd_detail",
];

/// Derives the CSV file name for an endpoint path.
///
/// Leading and trailing slashes are stripped and the remaining slashes become
/// underscores: `/v2/accounting/od/debt_to_penny` maps to
/// `v2_accounting_od_debt_to_penny.csv`.
pub fn output_filename(endpoint: &str) -> String {
    format!("{}.csv", endpoint.trim_matches('/').replace('/', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn filename_replaces_slashes() {
        assert_eq!(
            output_filename("/v2/accounting/od/debt_to_penny"),
            "v2_accounting_od_debt_to_penny.csv"
        );
    }

    #[test]
    fn filename_strips_trailing_and_repeated_edge_slashes() {
        assert_eq!(output_filename("//v1/a/b//"), "v1_a_b.csv");
    }

    #[test]
    fn endpoint_list_is_complete_and_unique() {
        assert_eq!(ENDPOINTS.len(), 24);
        assert_eq!(ENDPOINTS[0], "/v2/debt/tror/data_act_compliance");
        assert_eq!(ENDPOINTS[23], "/v2/accounting/od/pd_detail");

        let filenames: HashSet<String> = ENDPOINTS.iter().map(|e| output_filename(e)).collect();
        assert_eq!(filenames.len(), ENDPOINTS.len(), "file names must not collide");
    }

    #[test]
    fn every_endpoint_is_rooted() {
        for endpoint in ENDPOINTS {
            assert!(endpoint.starts_with('/'), "{endpoint} must start with '/'");
        }
    }
}
