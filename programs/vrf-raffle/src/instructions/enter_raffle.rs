use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{
    error::RaffleError,
    state::{Raffle, Treasury},
};

/// Event emitted when an entry is accepted
#[event]
pub struct RaffleEntered {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The entrant's address
    pub entrant: Pubkey,
    /// Amount paid in lamports
    pub payment: u64,
    /// Number of entries in the pool after this one
    pub entrant_count: u64,
}

/// Instruction to enter the current round of a raffle
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `payment` - Lamports sent to the treasury, at least the entrance fee
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates the raffle is Open (no draw in flight)
/// 2. Validates the payment covers the entrance fee
/// 3. Verifies the treasury account matches the one stored in raffle
/// 4. Confirms the treasury received exactly the payment
///
/// # Implementation Notes
/// - One call records one entry; entering again adds another entry
/// - Any overpayment stays in the pool
/// - Updates state before performing the transfer
pub fn enter_raffle(ctx: Context<EnterRaffle>, payment: u64) -> Result<()> {
    let entrant = ctx.accounts.entrant.key();
    ctx.accounts.raffle.enter(entrant, payment)?;

    // Store pre-transfer balance for verification
    let pre_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.entrant.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        payment,
    )?;

    let post_transfer_balance = ctx.accounts.treasury.to_account_info().lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(payment)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    emit!(RaffleEntered {
        raffle: ctx.accounts.raffle.key(),
        entrant,
        payment,
        entrant_count: ctx.accounts.raffle.entrant_count() as u64,
    });

    Ok(())
}

/// Accounts required for the enter_raffle instruction
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The raffle being entered
    #[account(
        mut,
        has_one = treasury @ RaffleError::InvalidTreasury,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Treasury account that receives the payment
    /// PDA with seeds ["treasury", raffle_key]
    #[account(
        mut,
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// The account paying for and owning the entry
    #[account(mut)]
    pub entrant: Signer<'info>,

    pub system_program: Program<'info, System>,
}
