//! Transaction resolver
//!
//! Given validated instruction fields and the caller's account snapshot,
//! decides between immediate settlement, pending settlement, or one of the
//! remaining failure classes, strictly in this order:
//!
//! 1. account existence (`AC03`)
//! 2. currency consistency (`CU01`)
//! 3. account distinctness (`AC02`)
//! 4. funds sufficiency (`AC01`)
//! 5. date validity and the pending/immediate cut (`DT01` / deferral)
//!
//! Funds are checked against the *current* balance regardless of whether
//! settlement will be deferred: a future-dated instruction against an
//! account that lacks funds today is rejected now, not later.
//!
//! Every failure carries the involved accounts collected so far, unmutated,
//! so callers get partial visibility into what was matched.

use chrono::NaiveDate;

use crate::types::{Account, Rejection};

use super::validate::validate_date;

/// Settlement timing decided by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Balances are mutated within this call
    Immediate,

    /// Valid but deferred to a future execution date; balances untouched
    Pending,
}

/// A successful resolution: the involved accounts plus the timing decision
#[derive(Debug)]
pub struct Resolution<'a> {
    /// Snapshot accounts matching the debit and/or credit id, in snapshot
    /// order, each at most once
    pub involved: Vec<&'a Account>,

    /// Whether balances are applied now or deferred
    pub settlement: Settlement,
}

/// A failed resolution, still carrying whatever accounts were matched
#[derive(Debug)]
pub struct ResolutionFailure<'a> {
    /// The involved accounts collected before the failing check, unmutated
    pub involved: Vec<&'a Account>,

    /// The failure class
    pub rejection: Rejection,
}

impl<'a> ResolutionFailure<'a> {
    fn new(involved: Vec<&'a Account>, rejection: Rejection) -> Self {
        ResolutionFailure {
            involved,
            rejection,
        }
    }
}

/// Resolve accounts and decide settlement timing
///
/// `currency` is the validated, uppercased instruction currency; `today` is
/// the injected reference day for the pending/immediate cut. Absence of a
/// date token always means immediate settlement.
pub fn resolve<'a>(
    accounts: &'a [Account],
    debit_id: &str,
    credit_id: &str,
    currency: &str,
    amount: i64,
    date_token: Option<&str>,
    today: NaiveDate,
) -> Result<Resolution<'a>, ResolutionFailure<'a>> {
    // Single pass over the snapshot; when debit and credit ids are equal a
    // matching account still appears only once.
    let involved: Vec<&Account> = accounts
        .iter()
        .filter(|account| account.id == debit_id || account.id == credit_id)
        .collect();

    let debit = involved.iter().copied().find(|a| a.id == debit_id);
    let credit = involved.iter().copied().find(|a| a.id == credit_id);
    let (debit, credit) = match (debit, credit) {
        (Some(debit), Some(credit)) => (debit, credit),
        (None, _) => {
            return Err(ResolutionFailure::new(
                involved,
                Rejection::account_not_found(debit_id),
            ))
        }
        (_, None) => {
            return Err(ResolutionFailure::new(
                involved,
                Rejection::account_not_found(credit_id),
            ))
        }
    };

    let debit_currency = debit.currency.to_uppercase();
    let credit_currency = credit.currency.to_uppercase();
    if debit_currency != currency || credit_currency != currency {
        return Err(ResolutionFailure::new(
            involved,
            Rejection::currency_mismatch(currency, &debit_currency, &credit_currency),
        ));
    }

    // Only reachable here: with a single shared account the currency check
    // above has already passed trivially.
    if debit_id == credit_id {
        return Err(ResolutionFailure::new(
            involved,
            Rejection::same_account(debit_id),
        ));
    }

    if debit.balance < amount {
        return Err(ResolutionFailure::new(
            involved,
            Rejection::insufficient_funds(debit_id, debit.balance, amount),
        ));
    }

    let settlement = match date_token {
        None => Settlement::Immediate,
        Some(token) => match validate_date(token) {
            Err(rejection) => return Err(ResolutionFailure::new(involved, rejection)),
            Ok(date) if date > today => Settlement::Pending,
            Ok(_) => Settlement::Immediate,
        },
    };

    Ok(Resolution {
        involved,
        settlement,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn account(id: &str, balance: i64, currency: &str) -> Account {
        Account {
            id: id.to_string(),
            balance,
            currency: currency.to_string(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    fn snapshot() -> Vec<Account> {
        vec![
            account("N90394", 1000, "USD"),
            account("N9122", 500, "USD"),
        ]
    }

    #[test]
    fn test_resolves_immediate_without_date() {
        let accounts = snapshot();
        let resolution =
            resolve(&accounts, "N90394", "N9122", "USD", 500, None, today()).unwrap();

        assert_eq!(resolution.settlement, Settlement::Immediate);
        let ids: Vec<&str> = resolution.involved.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["N90394", "N9122"]);
    }

    #[test]
    fn test_involved_accounts_keep_snapshot_order() {
        // Credit account appears first in the snapshot and must stay first.
        let accounts = vec![
            account("N9122", 500, "USD"),
            account("other", 10, "USD"),
            account("N90394", 1000, "USD"),
        ];
        let resolution =
            resolve(&accounts, "N90394", "N9122", "USD", 100, None, today()).unwrap();

        let ids: Vec<&str> = resolution.involved.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["N9122", "N90394"]);
    }

    #[rstest]
    #[case::debit_missing("ghost", "N9122", "ghost", 1)]
    #[case::credit_missing("N90394", "ghost", "ghost", 1)]
    #[case::both_missing("ghost1", "ghost2", "ghost1", 0)]
    fn test_account_not_found(
        #[case] debit: &str,
        #[case] credit: &str,
        #[case] reported: &str,
        #[case] involved_count: usize,
    ) {
        let accounts = snapshot();
        let failure = resolve(&accounts, debit, credit, "USD", 100, None, today()).unwrap_err();

        assert_eq!(failure.rejection, Rejection::account_not_found(reported));
        assert_eq!(failure.involved.len(), involved_count);
    }

    #[test]
    fn test_currency_mismatch_between_accounts() {
        let accounts = vec![
            account("N90394", 1000, "USD"),
            account("N9122", 500, "gbp"),
        ];
        let failure =
            resolve(&accounts, "N90394", "N9122", "USD", 100, None, today()).unwrap_err();

        assert_eq!(
            failure.rejection,
            Rejection::currency_mismatch("USD", "USD", "GBP")
        );
        assert_eq!(failure.involved.len(), 2);
    }

    #[test]
    fn test_currency_mismatch_with_instruction() {
        let accounts = snapshot();
        let failure =
            resolve(&accounts, "N90394", "N9122", "NGN", 100, None, today()).unwrap_err();

        assert!(matches!(
            failure.rejection,
            Rejection::CurrencyMismatch { .. }
        ));
    }

    #[test]
    fn test_same_account_rejected_after_currency_check() {
        let accounts = snapshot();
        let failure = resolve(&accounts, "N9122", "N9122", "USD", 100, None, today()).unwrap_err();

        assert_eq!(failure.rejection, Rejection::same_account("N9122"));
        // The shared account appears once.
        assert_eq!(failure.involved.len(), 1);
    }

    #[test]
    fn test_same_account_with_wrong_currency_is_currency_mismatch() {
        // Ordering: the currency check runs before the same-account check.
        let accounts = snapshot();
        let failure = resolve(&accounts, "N9122", "N9122", "NGN", 100, None, today()).unwrap_err();

        assert!(matches!(
            failure.rejection,
            Rejection::CurrencyMismatch { .. }
        ));
    }

    #[rstest]
    #[case::one_over(501)]
    #[case::far_over(10_000)]
    fn test_insufficient_funds(#[case] amount: i64) {
        let accounts = snapshot();
        let failure =
            resolve(&accounts, "N9122", "N90394", "USD", amount, None, today()).unwrap_err();

        assert_eq!(
            failure.rejection,
            Rejection::insufficient_funds("N9122", 500, amount)
        );
    }

    #[test]
    fn test_exact_balance_is_sufficient() {
        let accounts = snapshot();
        let resolution =
            resolve(&accounts, "N9122", "N90394", "USD", 500, None, today()).unwrap();
        assert_eq!(resolution.settlement, Settlement::Immediate);
    }

    #[test]
    fn test_insufficient_funds_checked_even_for_future_dates() {
        let accounts = snapshot();
        let failure = resolve(
            &accounts,
            "N9122",
            "N90394",
            "USD",
            600,
            Some("2027-08-30"),
            today(),
        )
        .unwrap_err();

        assert!(matches!(
            failure.rejection,
            Rejection::InsufficientFunds { .. }
        ));
    }

    #[rstest]
    #[case::tomorrow("2026-08-31", Settlement::Pending)]
    #[case::next_year("2027-08-30", Settlement::Pending)]
    #[case::today("2026-08-30", Settlement::Immediate)]
    #[case::yesterday("2026-08-29", Settlement::Immediate)]
    #[case::long_past("1999-01-01", Settlement::Immediate)]
    fn test_pending_boundary(#[case] date: &str, #[case] expected: Settlement) {
        let accounts = snapshot();
        let resolution = resolve(
            &accounts,
            "N90394",
            "N9122",
            "USD",
            100,
            Some(date),
            today(),
        )
        .unwrap();

        assert_eq!(resolution.settlement, expected);
    }

    #[test]
    fn test_invalid_date_rejected_with_involved_accounts() {
        let accounts = snapshot();
        let failure = resolve(
            &accounts,
            "N90394",
            "N9122",
            "USD",
            100,
            Some("2025-02-30"),
            today(),
        )
        .unwrap_err();

        assert_eq!(failure.rejection, Rejection::invalid_date("2025-02-30"));
        assert_eq!(failure.involved.len(), 2);
    }
}
