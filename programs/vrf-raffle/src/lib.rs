use anchor_lang::prelude::*;
use instructions::*;

pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

declare_id!("VRFRaf1e8mWbD1mk6GnWZ5qSUXmDcjLMdGnKzvM7q3B");

#[program]
pub mod vrf_raffle {
    use super::*;

    pub fn init_config(ctx: Context<InitConfig>) -> Result<()> {
        instructions::init_config::init_config(ctx)
    }

    pub fn update_config(ctx: Context<UpdateConfig>) -> Result<()> {
        instructions::update_config::update_config(ctx)
    }

    pub fn create_raffle(
        ctx: Context<CreateRaffle>,
        entrance_fee: u64,
        interval: i64,
    ) -> Result<()> {
        instructions::create_raffle::create_raffle(ctx, entrance_fee, interval)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, payment: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, payment)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>, check_data: Vec<u8>) -> Result<bool> {
        instructions::check_upkeep::check_upkeep(ctx, check_data)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>, perform_data: Vec<u8>) -> Result<()> {
        instructions::perform_upkeep::perform_upkeep(ctx, perform_data)
    }

    pub fn fulfill_randomness(
        ctx: Context<FulfillRandomness>,
        request_id: [u8; 32],
        randomness: [u8; 32],
    ) -> Result<()> {
        instructions::fulfill_randomness::fulfill_randomness(ctx, request_id, randomness)
    }
}
