use anchor_lang::prelude::*;

use crate::error::RaffleError;

/// Upper bound on entries per round. The raffle account is allocated for this many keys.
pub const MAX_ENTRANTS: usize = 200;

// 4 (vec length) + 32 * MAX_ENTRANTS (entrants) + 8 (balance)
pub const POOL_LEDGER_SIZE: usize = 4 + 32 * MAX_ENTRANTS + 8;

/// Entrants of the current round in insertion order, plus the lamports they paid in.
///
/// A wallet appears once per entry, so entering twice doubles its odds.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq)]
pub struct PoolLedger {
    pub entrants: Vec<Pubkey>,
    pub balance: u64,
}

impl PoolLedger {
    pub fn len(&self) -> usize {
        self.entrants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrants.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Pubkey> {
        self.entrants.get(index).copied()
    }

    /// Checks that `payment` can be recorded without touching the ledger.
    fn validate_append(&self, payment: u64) -> Result<u64> {
        require!(self.entrants.len() < MAX_ENTRANTS, RaffleError::PoolFull);
        self.balance
            .checked_add(payment)
            .ok_or_else(|| RaffleError::Overflow.into())
    }

    pub fn append(&mut self, entrant: Pubkey, payment: u64) -> Result<()> {
        let balance = self.validate_append(payment)?;
        self.entrants.push(entrant);
        self.balance = balance;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.entrants.clear();
        self.balance = 0;
    }
}
