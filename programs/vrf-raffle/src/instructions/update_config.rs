use anchor_lang::prelude::*;

use crate::{error::RaffleError, state::Config};

/// Event emitted when the oracle authority is replaced
#[event]
pub struct ConfigUpdated {
    /// The previous oracle authority
    pub old_oracle_authority: Pubkey,
    /// The oracle authority from now on
    pub new_oracle_authority: Pubkey,
}

/// Rotates the key allowed to fulfill randomness requests.
/// Signed by the management authority or the upgrade authority.
///
/// Requests already in flight keep their id, so the new oracle can deliver
/// them as long as it knows the pending request id.
pub fn update_config(ctx: Context<UpdateConfig>) -> Result<()> {
    let old_oracle_authority = ctx.accounts.config.oracle_authority;
    ctx.accounts.config.oracle_authority = ctx.accounts.new_oracle_authority.key();

    msg!(
        "Oracle authority changed from {} to {}",
        old_oracle_authority,
        ctx.accounts.config.oracle_authority
    );

    emit!(ConfigUpdated {
        old_oracle_authority,
        new_oracle_authority: ctx.accounts.config.oracle_authority,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        constraint = config.is_config_authority(&authority.key())
            @ RaffleError::NotProgramManagementAuthority,
    )]
    pub config: Account<'info, Config>,

    pub authority: Signer<'info>,

    /// CHECK: Only its key is stored.
    pub new_oracle_authority: UncheckedAccount<'info>,
}
