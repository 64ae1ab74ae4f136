use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{
        DrawClock, PoolLedger, RequestCorrelator, RequestId, RequestSeed, DRAW_CLOCK_SIZE,
        POOL_LEDGER_SIZE, REQUEST_CORRELATOR_SIZE,
    },
    utils::selection::select_winner,
};

// Space calculation:
// 8 (discriminator) +
// 32 (treasury) +
// 8 (entrance_fee) +
// 1 (raffle_state) +
// POOL_LEDGER_SIZE (ledger) +
// DRAW_CLOCK_SIZE (clock) +
// REQUEST_CORRELATOR_SIZE (request) +
// 8 (round) +
// 33 (recent_winner: Option<Pubkey>)
pub const RAFFLE_ACCOUNT_SIZE: usize = 8
    + 32
    + 8
    + 1
    + POOL_LEDGER_SIZE
    + DRAW_CLOCK_SIZE
    + REQUEST_CORRELATOR_SIZE
    + 8
    + 33;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq)]
pub enum RaffleState {
    Open = 0,
    Calculating = 1,
}

#[account]
#[derive(Debug, PartialEq)]
pub struct Raffle {
    pub treasury: Pubkey,
    pub entrance_fee: u64,
    pub raffle_state: RaffleState,
    pub ledger: PoolLedger,
    pub clock: DrawClock,
    pub request: RequestCorrelator,
    /// Number of rounds paid out so far
    pub round: u64,
    pub recent_winner: Option<Pubkey>,
}

/// Outcome of a settled round.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Payout {
    pub winner: Pubkey,
    pub amount: u64,
    /// The round that was just paid out
    pub round: u64,
}

impl Raffle {
    pub fn init(treasury: Pubkey, entrance_fee: u64, interval: i64, now: i64) -> Self {
        Self {
            treasury,
            entrance_fee,
            raffle_state: RaffleState::Open,
            ledger: PoolLedger::default(),
            clock: DrawClock::new(now, interval),
            request: RequestCorrelator::default(),
            round: 0,
            recent_winner: None,
        }
    }

    pub fn entrance_fee(&self) -> u64 {
        self.entrance_fee
    }

    pub fn interval(&self) -> i64 {
        self.clock.interval
    }

    pub fn state(&self) -> RaffleState {
        self.raffle_state
    }

    pub fn last_timestamp(&self) -> i64 {
        self.clock.last_timestamp
    }

    pub fn entrant(&self, index: usize) -> Option<Pubkey> {
        self.ledger.get(index)
    }

    pub fn entrant_count(&self) -> usize {
        self.ledger.len()
    }

    pub fn balance(&self) -> u64 {
        self.ledger.balance
    }

    pub fn recent_winner(&self) -> Option<Pubkey> {
        self.recent_winner
    }

    pub fn pending_request(&self) -> Option<RequestId> {
        self.request.pending
    }

    /// Whether a draw may start at `now`. Side-effect free.
    pub fn check_eligibility(&self, now: i64) -> bool {
        self.raffle_state == RaffleState::Open
            && self.clock.is_due(now)
            && !self.ledger.is_empty()
            && self.ledger.balance > 0
    }

    /// Records one entry for `entrant`. The whole payment goes into the pool.
    ///
    /// # Errors
    /// - `RaffleNotOpen` while a draw is in flight
    /// - `InsufficientPayment` if `payment` is below the entrance fee
    /// - `PoolFull` if the round already holds the maximum number of entries
    pub fn enter(&mut self, entrant: Pubkey, payment: u64) -> Result<()> {
        require!(
            self.raffle_state == RaffleState::Open,
            RaffleError::RaffleNotOpen
        );
        require!(
            payment >= self.entrance_fee,
            RaffleError::InsufficientPayment
        );

        self.ledger.append(entrant, payment)
    }

    /// Starts a draw: re-checks eligibility, issues a randomness request and
    /// moves the raffle to `Calculating`.
    /// Eligibility is always re-evaluated here.
    ///
    /// # Errors
    /// - `DrawInFlight` if a request is already pending
    /// - `UpkeepNotNeeded` if any draw condition is unmet
    pub fn start_draw(
        &mut self,
        raffle: Pubkey,
        slot: u64,
        now: i64,
        perform_data: &[u8],
    ) -> Result<RequestId> {
        require!(!self.request.is_pending(), RaffleError::DrawInFlight);

        if !self.check_eligibility(now) {
            msg!(
                "Upkeep not needed: balance {}, entrants {}, state {:?}",
                self.ledger.balance,
                self.ledger.len(),
                self.raffle_state
            );
            return Err(RaffleError::UpkeepNotNeeded.into());
        }

        let request_id = self.request.issue(&RequestSeed {
            raffle,
            round: self.round,
            slot,
            perform_data,
        })?;
        self.raffle_state = RaffleState::Calculating;

        Ok(request_id)
    }

    /// Accepts the oracle callback for the pending request and pays the winner.
    ///
    /// The pending request is consumed on a working copy and only written
    /// back once the payout went through. A failed `transfer` therefore
    /// leaves the raffle untouched and the same request can be fulfilled again.
    ///
    /// # Errors
    /// - `UnknownRequest` if the raffle is not calculating or `request_id` is not the pending one
    /// - any error returned by `transfer`
    pub fn fulfill<F>(
        &mut self,
        request_id: &RequestId,
        randomness: &[u8; 32],
        now: i64,
        transfer: F,
    ) -> Result<Payout>
    where
        F: FnOnce(Pubkey, u64) -> Result<()>,
    {
        require!(
            self.raffle_state == RaffleState::Calculating,
            RaffleError::UnknownRequest
        );

        let mut request = self.request.clone();
        request.consume(request_id)?;

        let winner_index = select_winner(randomness, self.ledger.len())?;
        let payout = self.settle(winner_index, now, transfer)?;
        self.request = request;

        Ok(payout)
    }

    /// Pays the whole pool to the entrant at `winner_index` and opens the next round.
    ///
    /// Nothing is modified unless `transfer` succeeds.
    pub fn settle<F>(&mut self, winner_index: usize, now: i64, transfer: F) -> Result<Payout>
    where
        F: FnOnce(Pubkey, u64) -> Result<()>,
    {
        let winner = self
            .ledger
            .get(winner_index)
            .ok_or(RaffleError::NoEntrants)?;
        let amount = self.ledger.balance;
        let next_round = self.round.checked_add(1).ok_or(RaffleError::Overflow)?;

        transfer(winner, amount)?;

        let payout = Payout {
            winner,
            amount,
            round: self.round,
        };

        self.ledger.clear();
        self.clock.reset(now);
        self.raffle_state = RaffleState::Open;
        self.recent_winner = Some(winner);
        self.round = next_round;

        Ok(payout)
    }
}
