//! Balance applier and outcome builder
//!
//! The applier produces fresh output records for the involved accounts,
//! mutating copies rather than the caller's snapshot: the debit account
//! loses the amount and the credit account gains it, each exactly once, and
//! only when settlement is immediate. The outcome builder assembles the
//! uniform result shape from whatever fields the pipeline had determined by
//! the time it finished or failed.

use crate::types::{
    Account, InstructionType, Rejection, SettledAccount, SettlementOutcome, Status, StatusCode,
};

use super::resolver::Settlement;

/// Reason text accompanying an immediate success
const REASON_SUCCESSFUL: &str = "Transaction applied successfully";

/// Reason text accompanying a deferred settlement
const REASON_PENDING: &str = "Transaction accepted; settlement pending until the execution date";

/// Build the output records for the involved accounts
///
/// Records come out in snapshot order with `balance_before` carrying the
/// pre-call balance and currency uppercased. For pending settlement the
/// balances are left untouched. The resolver has already guaranteed the
/// debit and credit ids differ whenever this is called for an immediate
/// settlement, so each record matches at most one role.
pub fn apply(
    involved: &[&Account],
    debit_id: &str,
    credit_id: &str,
    amount: i64,
    settlement: Settlement,
) -> Vec<SettledAccount> {
    involved
        .iter()
        .map(|account| {
            let mut settled = SettledAccount::unchanged(account);
            if settlement == Settlement::Immediate {
                // Saturating arithmetic keeps snapshots at the i64 extremes
                // panic-free; the engine never panics for reachable input.
                if account.id == debit_id {
                    settled.balance = settled.balance.saturating_sub(amount);
                } else if account.id == credit_id {
                    settled.balance = settled.balance.saturating_add(amount);
                }
            }
            settled
        })
        .collect()
}

/// Accumulator for the fields determined as the pipeline advances
///
/// Each stage fills in what it validated; on failure the draft is folded
/// into an outcome that carries exactly what was known so far, with `null`
/// for the rest. Accounts are attached once the resolver has matched them
/// and are never fabricated.
#[derive(Debug, Default)]
pub struct OutcomeDraft {
    /// Set once the grammar recognized the sentence form
    pub instruction_type: Option<InstructionType>,

    /// Set once the amount validated
    pub amount: Option<i64>,

    /// Set once the currency validated, uppercased
    pub currency: Option<String>,

    /// Raw debit id, set at grammar extraction
    pub debit_account: Option<String>,

    /// Raw credit id, set at grammar extraction
    pub credit_account: Option<String>,

    /// Raw date token, set at grammar extraction when a date clause exists
    pub execute_by: Option<String>,

    /// Involved accounts, set once resolution has run
    pub accounts: Vec<SettledAccount>,
}

impl OutcomeDraft {
    /// Fold the draft into a failed outcome for the given rejection
    pub fn fail(self, rejection: &Rejection) -> SettlementOutcome {
        SettlementOutcome {
            instruction_type: self.instruction_type,
            amount: self.amount,
            currency: self.currency,
            debit_account: self.debit_account,
            credit_account: self.credit_account,
            execute_by: self.execute_by,
            status: Status::Failed,
            status_code: rejection.code(),
            status_reason: rejection.to_string(),
            accounts: self.accounts,
        }
    }

    /// Fold the draft into a terminal successful or pending outcome
    pub fn settle(self, settlement: Settlement) -> SettlementOutcome {
        let (status_code, status_reason) = match settlement {
            Settlement::Immediate => (StatusCode::Ap00, REASON_SUCCESSFUL),
            Settlement::Pending => (StatusCode::Ap01, REASON_PENDING),
        };

        SettlementOutcome {
            instruction_type: self.instruction_type,
            amount: self.amount,
            currency: self.currency,
            debit_account: self.debit_account,
            credit_account: self.credit_account,
            execute_by: self.execute_by,
            status: status_code.status(),
            status_code,
            status_reason: status_reason.to_string(),
            accounts: self.accounts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: &str, balance: i64, currency: &str) -> Account {
        Account {
            id: id.to_string(),
            balance,
            currency: currency.to_string(),
        }
    }

    #[test]
    fn test_apply_immediate_moves_amount() {
        let debit = account("N90394", 1000, "usd");
        let credit = account("N9122", 500, "USD");
        let involved = vec![&debit, &credit];

        let settled = apply(&involved, "N90394", "N9122", 500, Settlement::Immediate);

        assert_eq!(settled[0].balance_before, 1000);
        assert_eq!(settled[0].balance, 500);
        assert_eq!(settled[0].currency, "USD");
        assert_eq!(settled[1].balance_before, 500);
        assert_eq!(settled[1].balance, 1000);
    }

    #[test]
    fn test_apply_conserves_total_balance() {
        let debit = account("a", 700, "GHS");
        let credit = account("b", 300, "GHS");
        let involved = vec![&debit, &credit];

        let settled = apply(&involved, "a", "b", 250, Settlement::Immediate);

        let before: i64 = settled.iter().map(|a| a.balance_before).sum();
        let after: i64 = settled.iter().map(|a| a.balance).sum();
        assert_eq!(before, after);
    }

    #[test]
    fn test_apply_saturates_at_credit_ceiling() {
        let debit = account("a", 1000, "USD");
        let credit = account("full", i64::MAX, "USD");
        let involved = vec![&debit, &credit];

        let settled = apply(&involved, "a", "full", 5, Settlement::Immediate);

        assert_eq!(settled[0].balance, 995);
        assert_eq!(settled[1].balance_before, i64::MAX);
        assert_eq!(settled[1].balance, i64::MAX);
    }

    #[test]
    fn test_apply_saturates_at_debit_floor() {
        let debit = account("deep", i64::MIN + 1, "USD");
        let credit = account("b", 0, "USD");
        let involved = vec![&debit, &credit];

        let settled = apply(&involved, "deep", "b", 2, Settlement::Immediate);

        assert_eq!(settled[0].balance, i64::MIN);
        assert_eq!(settled[1].balance, 2);
    }

    #[test]
    fn test_apply_pending_leaves_balances_unchanged() {
        let debit = account("a", 700, "NGN");
        let credit = account("b", 300, "NGN");
        let involved = vec![&debit, &credit];

        let settled = apply(&involved, "a", "b", 250, Settlement::Pending);

        for record in &settled {
            assert_eq!(record.balance, record.balance_before);
        }
    }

    #[test]
    fn test_fail_uses_rejection_code_and_reason() {
        let draft = OutcomeDraft {
            instruction_type: Some(InstructionType::Debit),
            amount: Some(500),
            ..OutcomeDraft::default()
        };

        let outcome = draft.fail(&Rejection::unsupported_currency("XYZ"));

        assert_eq!(outcome.status, Status::Failed);
        assert_eq!(outcome.status_code, StatusCode::Cu02);
        assert_eq!(outcome.amount, Some(500));
        assert_eq!(outcome.currency, None);
        assert!(outcome.status_reason.contains("XYZ"));
        assert!(outcome.accounts.is_empty());
    }

    #[test]
    fn test_settle_immediate_is_ap00() {
        let outcome = OutcomeDraft::default().settle(Settlement::Immediate);
        assert_eq!(outcome.status, Status::Successful);
        assert_eq!(outcome.status_code, StatusCode::Ap00);
    }

    #[test]
    fn test_settle_pending_is_ap01() {
        let outcome = OutcomeDraft::default().settle(Settlement::Pending);
        assert_eq!(outcome.status, Status::Pending);
        assert_eq!(outcome.status_code, StatusCode::Ap01);
    }
}
