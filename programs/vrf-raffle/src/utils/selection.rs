use anchor_lang::prelude::*;
use arrayref::array_refs;

use crate::error::RaffleError;

/// Maps oracle randomness onto an entrant index.
///
/// The 32 bytes are read as one big-endian 256-bit unsigned integer and the
/// result is that integer modulo `entrant_count`. The same randomness always
/// selects the same entrant.
///
/// # Errors
/// - `NoEntrants` if `entrant_count` is zero
pub fn select_winner(randomness: &[u8; 32], entrant_count: usize) -> Result<usize> {
    require!(entrant_count > 0, RaffleError::NoEntrants);

    let modulus = entrant_count as u128;
    let (l0, l1, l2, l3) = array_refs![randomness, 8, 8, 8, 8];

    // Horner's rule over 64-bit limbs. The remainder stays below 2^64, so
    // shifting it up by one limb fits in a u128.
    let remainder = [l0, l1, l2, l3].iter().fold(0u128, |acc, limb| {
        ((acc << 64) | u64::from_be_bytes(**limb) as u128) % modulus
    });

    usize::try_from(remainder).map_err(|_| RaffleError::Overflow.into())
}

/// Encodes a small integer as the 32-byte big-endian value the oracle would deliver.
#[cfg(test)]
pub fn randomness_from_u64(value: u64) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&value.to_be_bytes());
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    #[test]
    fn seven_of_three_selects_the_second_entrant() {
        assert_eq!(select_winner(&randomness_from_u64(7), 3).unwrap(), 1);
    }

    #[test]
    fn small_values_match_plain_modulo() {
        for value in [0u64, 1, 2, 99, 1_000_003, u64::MAX] {
            for count in [1usize, 2, 3, 7, 200] {
                assert_eq!(
                    select_winner(&randomness_from_u64(value), count).unwrap(),
                    (value % count as u64) as usize
                );
            }
        }
    }

    #[test]
    fn high_limbs_take_part_in_the_modulo() {
        // 2^64 mod 3 == 1, while the low limb alone would give 0.
        let mut randomness = [0u8; 32];
        randomness[23] = 1;
        assert_eq!(select_winner(&randomness, 3).unwrap(), 1);

        // 2^256 - 1 is divisible by 3 and by 5.
        let all_ones = [0xffu8; 32];
        assert_eq!(select_winner(&all_ones, 3).unwrap(), 0);
        assert_eq!(select_winner(&all_ones, 5).unwrap(), 0);
        // 2^256 - 1 mod 7 == 1 because 2^256 = 2^(3*85 + 1) ≡ 2 (mod 7).
        assert_eq!(select_winner(&all_ones, 7).unwrap(), 1);
    }

    #[test]
    fn zero_entrants_is_rejected() {
        assert_eq!(
            select_winner(&[1u8; 32], 0).unwrap_err(),
            Error::from(RaffleError::NoEntrants)
        );
    }
}
