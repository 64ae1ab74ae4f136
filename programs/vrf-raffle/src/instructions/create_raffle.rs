use crate::{
    error::RaffleError,
    state::{Config, Raffle, Treasury, RAFFLE_ACCOUNT_SIZE, TREASURY_ACCOUNT_SIZE},
};
use anchor_lang::prelude::*;

// Constants for validation
const MAX_ENTRANCE_FEE: u64 = 100_000_000_000; // 100 SOL
const MIN_ENTRANCE_FEE: u64 = 1_000_000; // 0.001 SOL
const MAX_INTERVAL: i64 = 30 * 24 * 60 * 60; // 30 days in seconds
const MIN_INTERVAL: i64 = 30; // 30 seconds

/// Event emitted when a raffle is created
#[event]
pub struct RaffleCreated {
    /// The pubkey of the created raffle
    pub raffle: Pubkey,
    /// The treasury holding the raffle's pool
    pub treasury: Pubkey,
    /// Fee per entry in lamports
    pub entrance_fee: u64,
    /// Seconds between draws
    pub interval: i64,
    /// When the raffle was created
    pub creation_time: i64,
}

/// Instruction to create a new recurring raffle
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `entrance_fee` - Lamports required per entry
/// * `interval` - Seconds that must pass between two draws
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Validates caller is the management authority via config PDA
/// 2. Ensures entrance_fee is between 0.001 SOL and 100 SOL
/// 3. Ensures interval is between 30 seconds and 30 days
/// 4. Uses a PDA for treasury with proper seeds
///
/// # Implementation Notes
/// - Initializes raffle in Open state with an empty pool
/// - The first draw becomes possible `interval` seconds after creation
/// - Creates treasury PDA linked to raffle
pub fn create_raffle(ctx: Context<CreateRaffle>, entrance_fee: u64, interval: i64) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;

    require!(
        entrance_fee >= MIN_ENTRANCE_FEE,
        RaffleError::EntranceFeeTooLow
    );
    require!(
        entrance_fee <= MAX_ENTRANCE_FEE,
        RaffleError::EntranceFeeTooHigh
    );
    require!(interval >= MIN_INTERVAL, RaffleError::IntervalTooShort);
    require!(interval <= MAX_INTERVAL, RaffleError::IntervalTooLong);

    let treasury_key = ctx.accounts.treasury.key();
    ctx.accounts
        .raffle
        .set_inner(Raffle::init(treasury_key, entrance_fee, interval, current_time));
    ctx.accounts.treasury.bump = ctx.bumps.treasury;
    ctx.accounts.treasury.raffle = ctx.accounts.raffle.key();

    // Increment the raffle counter
    ctx.accounts.config.raffle_counter = ctx
        .accounts
        .config
        .raffle_counter
        .checked_add(1)
        .ok_or(RaffleError::Overflow)?;

    emit!(RaffleCreated {
        raffle: ctx.accounts.raffle.key(),
        treasury: treasury_key,
        entrance_fee,
        interval,
        creation_time: current_time,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateRaffle<'info> {
    #[account(
        init,
        payer = management_authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [
            b"raffle",
            config.raffle_counter.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(mut)]
    pub management_authority: Signer<'info>,

    #[account(
        init,
        payer = management_authority,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [
            b"treasury",
            raffle.key().as_ref(),
        ],
        bump,
    )]
    pub treasury: Account<'info, Treasury>,

    /// The config account storing the authorities and raffle counter
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = management_authority @ RaffleError::NotProgramManagementAuthority,
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}
