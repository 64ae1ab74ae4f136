use anchor_lang::prelude::*;

use crate::state::Raffle;

/// Event the randomness oracle listens for
#[event]
pub struct RandomnessRequested {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Id the oracle must echo back when fulfilling
    pub request_id: [u8; 32],
    /// The round being drawn
    pub round: u64,
}

/// Starts a draw for a raffle and requests randomness from the oracle.
/// Anyone may call this; the draw conditions are validated here regardless
/// of what a previous `check_upkeep` returned.
///
/// Execution requirements:
/// 1. The raffle must be in Open state with no request in flight
/// 2. The interval since the last payout must have passed
/// 3. The pool must hold at least one entry and a positive balance
///
/// After execution:
/// - The raffle state is changed to Calculating
/// - The new request id is stored as the only pending request
/// - `RandomnessRequested` is emitted for the oracle
///
/// # Arguments
/// * `ctx` - The context object containing the raffle account
/// * `perform_data` - Opaque keeper data mixed into the request id
///
/// # Errors
/// - `DrawInFlight` if a randomness request is already pending
/// - `UpkeepNotNeeded` if any draw condition is unmet
pub fn perform_upkeep(ctx: Context<PerformUpkeep>, perform_data: Vec<u8>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle_key = ctx.accounts.raffle.key();
    let raffle = &mut ctx.accounts.raffle;

    let request_id =
        raffle.start_draw(raffle_key, clock.slot, clock.unix_timestamp, &perform_data)?;

    msg!(
        "Requested randomness for round {} with {} entrants",
        raffle.round,
        raffle.entrant_count()
    );

    emit!(RandomnessRequested {
        raffle: raffle_key,
        request_id,
        round: raffle.round,
    });

    Ok(())
}

/// Accounts required for the perform_upkeep instruction
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(mut)]
    pub raffle: Account<'info, Raffle>,
}
