use anchor_lang::prelude::*;

// 8 discriminator + 32 upgrade_authority + 32 management_authority + 32 oracle_authority + 1 bump + 8 raffle_counter
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 32 + 1 + 8;

#[account]
pub struct Config {
    pub upgrade_authority: Pubkey,
    pub management_authority: Pubkey,
    /// Key of the randomness oracle allowed to fulfill draw requests
    pub oracle_authority: Pubkey,
    pub bump: u8,
    pub raffle_counter: u64,
}

impl Config {
    /// The management authority runs day-to-day changes; the upgrade
    /// authority can step in when the management key is lost.
    pub fn is_config_authority(&self, key: &Pubkey) -> bool {
        *key == self.management_authority || *key == self.upgrade_authority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn management_and_upgrade_authorities_may_update() {
        let config = Config {
            upgrade_authority: Pubkey::new_unique(),
            management_authority: Pubkey::new_unique(),
            oracle_authority: Pubkey::new_unique(),
            bump: 255,
            raffle_counter: 0,
        };

        assert!(config.is_config_authority(&config.management_authority));
        assert!(config.is_config_authority(&config.upgrade_authority));
        assert!(!config.is_config_authority(&config.oracle_authority));
        assert!(!config.is_config_authority(&Pubkey::new_unique()));
    }
}
