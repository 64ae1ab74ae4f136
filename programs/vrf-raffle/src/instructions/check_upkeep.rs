use anchor_lang::prelude::*;

use crate::state::Raffle;

/// Read-only eligibility check for keepers.
///
/// Returns `true` when the raffle is open, the interval has elapsed and the
/// pool holds at least one paid entry. Keepers simulate this instruction and
/// read the boolean from the return data; it never mutates the raffle.
/// `check_data` is accepted for keeper compatibility and ignored.
pub fn check_upkeep(ctx: Context<CheckUpkeep>, _check_data: Vec<u8>) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.raffle.check_eligibility(now))
}

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    pub raffle: Account<'info, Raffle>,
}
