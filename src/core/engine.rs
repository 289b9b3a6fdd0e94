//! Instruction settlement engine
//!
//! This module provides the SettlementEngine that orchestrates the full
//! pipeline: tokenize, match the grammar, validate fields, resolve accounts,
//! apply balances and build the uniform outcome. Each stage consumes the
//! previous stage's output and short-circuits on failure; every reachable
//! input produces a fully-formed outcome and the engine never panics.
//!
//! The engine is a pure, synchronous computation over its inputs. It holds
//! no state besides the injected clock, so independent calls are trivially
//! safe to run concurrently.

use serde_json::Value;

use crate::io::json_format::decode_request;
use crate::types::{Account, SettledAccount, SettlementOutcome};

use super::clock::{Clock, SystemClock};
use super::grammar::match_instruction;
use super::resolver::resolve;
use super::settlement::{apply, OutcomeDraft};
use super::tokenizer::tokenize;
use super::validate::{validate_account_ids, validate_amount, validate_currency};

/// Payment instruction settlement engine
///
/// Converts a free-text payment instruction plus an account snapshot into
/// either an applied ledger transaction or a precise rejection with a
/// stable status code. The clock supplies the "today" reference for the
/// pending/immediate decision and is injected for deterministic testing.
pub struct SettlementEngine<C: Clock = SystemClock> {
    clock: C,
}

impl SettlementEngine<SystemClock> {
    /// Create an engine running against the UTC wall-clock date
    pub fn new() -> Self {
        SettlementEngine { clock: SystemClock }
    }
}

impl Default for SettlementEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SettlementEngine<C> {
    /// Create an engine with an explicit clock
    pub fn with_clock(clock: C) -> Self {
        SettlementEngine { clock }
    }

    /// Process one instruction against an account snapshot
    ///
    /// The snapshot is treated as immutable input; output records are fresh
    /// copies. The same inputs always produce the same outcome for a given
    /// clock reading.
    pub fn process(&self, accounts: &[Account], instruction: &str) -> SettlementOutcome {
        let tokens = tokenize(instruction);
        let mut draft = OutcomeDraft::default();

        let parsed = match match_instruction(&tokens) {
            Ok(parsed) => parsed,
            Err(rejection) => return draft.fail(&rejection),
        };
        draft.instruction_type = Some(parsed.instruction_type);
        draft.debit_account = Some(parsed.debit_account_id.clone());
        draft.credit_account = Some(parsed.credit_account_id.clone());
        draft.execute_by = parsed.date_token.clone();

        let amount = match validate_amount(&parsed.amount_token) {
            Ok(amount) => amount,
            Err(rejection) => return draft.fail(&rejection),
        };
        draft.amount = Some(amount);

        let currency = match validate_currency(&parsed.currency_token) {
            Ok(currency) => currency,
            Err(rejection) => return draft.fail(&rejection),
        };
        draft.currency = Some(currency.clone());

        if let Err(rejection) =
            validate_account_ids(&parsed.debit_account_id, &parsed.credit_account_id)
        {
            return draft.fail(&rejection);
        }

        match resolve(
            accounts,
            &parsed.debit_account_id,
            &parsed.credit_account_id,
            &currency,
            amount,
            parsed.date_token.as_deref(),
            self.clock.today(),
        ) {
            Ok(resolution) => {
                draft.accounts = apply(
                    &resolution.involved,
                    &parsed.debit_account_id,
                    &parsed.credit_account_id,
                    amount,
                    resolution.settlement,
                );
                draft.settle(resolution.settlement)
            }
            Err(failure) => {
                draft.accounts = failure
                    .involved
                    .iter()
                    .map(|account| SettledAccount::unchanged(account))
                    .collect();
                draft.fail(&failure.rejection)
            }
        }
    }

    /// Process a raw transport payload, defending against malformed shape
    ///
    /// The request layer normally screens the `{accounts, instruction}`
    /// shape before calling in, but the engine does not assume that: any
    /// shape violation becomes an `SY03` outcome rather than an error.
    pub fn process_request(&self, request: &Value) -> SettlementOutcome {
        match decode_request(request) {
            Ok((accounts, instruction)) => self.process(&accounts, &instruction),
            Err(rejection) => OutcomeDraft::default().fail(&rejection),
        }
    }
}
