use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Config, Raffle, Treasury},
};

/// Event emitted when a round is paid out
#[event]
pub struct WinnerPicked {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// The round that was paid out
    pub round: u64,
    /// Lamports transferred to the winner
    pub amount: u64,
}

/// Oracle callback delivering the randomness for the pending draw.
/// Selects the winner, pays out the whole pool and opens the next round.
///
/// This instruction can only be executed when:
/// 1. The signer is the oracle authority stored in config
/// 2. The raffle is in Calculating state
/// 3. `request_id` equals the raffle's pending request
/// 4. `winner` is the entrant selected by `randomness`
///
/// The oracle derives the winner account off-chain from the same
/// randomness: index = randomness (big-endian u256) mod entrant count.
///
/// After execution:
/// - The pool balance is moved from the treasury to the winner
/// - The pool is cleared and the draw clock restarts
/// - The raffle state is changed to Open
///
/// # Errors
/// - `UnknownRequest` for stale, replayed or foreign request ids
/// - `WinnerAccountMismatch` if `winner` is not the selected entrant
/// - `PayoutFailed` if the treasury cannot pay the pool
pub fn fulfill_randomness(
    ctx: Context<FulfillRandomness>,
    request_id: [u8; 32],
    randomness: [u8; 32],
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();
    let treasury_info = ctx.accounts.treasury.to_account_info();
    let winner_info = ctx.accounts.winner.to_account_info();

    let payout = ctx
        .accounts
        .raffle
        .fulfill(&request_id, &randomness, now, |winner, amount| {
            pay_winner(&treasury_info, &winner_info, winner, amount)
        })?;

    msg!(
        "Round {} paid {} lamports to {}",
        payout.round,
        payout.amount,
        payout.winner
    );

    emit!(WinnerPicked {
        raffle: raffle_key,
        winner: payout.winner,
        round: payout.round,
        amount: payout.amount,
    });

    Ok(())
}

/// Moves `amount` lamports from the treasury to `winner` once `winner` is
/// confirmed to be the `selected` entrant.
///
/// # Errors
/// - `WinnerAccountMismatch` if `winner` is not `selected`; no lamports move
/// - `PayoutFailed` if the treasury holds less than `amount`
pub fn pay_winner(
    treasury: &AccountInfo,
    winner: &AccountInfo,
    selected: Pubkey,
    amount: u64,
) -> Result<()> {
    require_keys_eq!(*winner.key, selected, RaffleError::WinnerAccountMismatch);

    // Transfer lamports by directly deducting from treasury and adding to the winner.
    // This only works because the treasury is a PDA owned by our program.
    treasury
        .sub_lamports(amount)
        .map_err(|_| RaffleError::PayoutFailed)?;
    winner
        .add_lamports(amount)
        .map_err(|_| RaffleError::PayoutFailed)?;
    Ok(())
}

/// Accounts required for the fulfill_randomness instruction
#[derive(Accounts)]
pub struct FulfillRandomness<'info> {
    #[account(
        mut,
        has_one = treasury @ RaffleError::InvalidTreasury,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Treasury PDA for this raffle that holds the pool
    #[account(
        mut,
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// CHECK: Compared against the selected entrant inside the handler.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    #[account(
        seeds = [b"config"],
        bump = config.bump,
        has_one = oracle_authority @ RaffleError::NotOracleAuthority,
    )]
    pub config: Account<'info, Config>,

    pub oracle_authority: Signer<'info>,
}
