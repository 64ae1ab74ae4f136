use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::error::RaffleError;

// 1 (option tag) + 32 (request id) + 8 (nonce)
pub const REQUEST_CORRELATOR_SIZE: usize = 1 + 32 + 8;

pub type RequestId = [u8; 32];

/// Single-slot record of the randomness request currently in flight.
///
/// Only one request can be outstanding per raffle. The slot is filled when a
/// draw starts and emptied when the matching fulfillment is accepted; any
/// other callback is rejected with `UnknownRequest`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq)]
pub struct RequestCorrelator {
    pub pending: Option<RequestId>,
    /// Number of requests ever issued by this raffle, mixed into every id
    pub nonce: u64,
}

/// Inputs hashed into a request id. `perform_data` comes from the upkeep caller.
pub struct RequestSeed<'a> {
    pub raffle: Pubkey,
    pub round: u64,
    pub slot: u64,
    pub perform_data: &'a [u8],
}

impl RequestCorrelator {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Derives a fresh request id and stores it as the pending request.
    pub fn issue(&mut self, seed: &RequestSeed) -> Result<RequestId> {
        require!(self.pending.is_none(), RaffleError::DrawInFlight);

        let next_nonce = self.nonce.checked_add(1).ok_or(RaffleError::Overflow)?;
        let request_id = hashv(&[
            b"request".as_ref(),
            seed.raffle.as_ref(),
            seed.round.to_le_bytes().as_ref(),
            self.nonce.to_le_bytes().as_ref(),
            seed.slot.to_le_bytes().as_ref(),
            seed.perform_data,
        ])
        .to_bytes();

        self.pending = Some(request_id);
        self.nonce = next_nonce;
        Ok(request_id)
    }

    /// Fails unless `request_id` is the request currently in flight.
    pub fn verify(&self, request_id: &RequestId) -> Result<()> {
        match &self.pending {
            Some(pending) if pending == request_id => Ok(()),
            _ => Err(RaffleError::UnknownRequest.into()),
        }
    }

    /// Empties the slot so the same fulfillment can never be accepted twice.
    pub fn consume(&mut self, request_id: &RequestId) -> Result<RequestId> {
        self.verify(request_id)?;
        self.pending.take().ok_or_else(|| RaffleError::UnknownRequest.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn seed(raffle: Pubkey, slot: u64) -> RequestSeed<'static> {
        RequestSeed {
            raffle,
            round: 0,
            slot,
            perform_data: &[],
        }
    }

    #[test]
    fn issue_fills_the_slot_once() {
        let raffle = Pubkey::new_unique();
        let mut correlator = RequestCorrelator::default();

        let id = correlator.issue(&seed(raffle, 10)).unwrap();
        assert_eq!(correlator.pending, Some(id));
        assert_eq!(correlator.nonce, 1);

        let err = correlator.issue(&seed(raffle, 11)).unwrap_err();
        assert_eq!(err, Error::from(RaffleError::DrawInFlight));
        assert_eq!(correlator.pending, Some(id));
        assert_eq!(correlator.nonce, 1);
    }

    #[test]
    fn ids_differ_across_requests_in_the_same_slot() {
        let raffle = Pubkey::new_unique();
        let mut correlator = RequestCorrelator::default();

        let first = correlator.issue(&seed(raffle, 10)).unwrap();
        correlator.consume(&first).unwrap();
        let second = correlator.issue(&seed(raffle, 10)).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn verify_rejects_foreign_and_missing_requests() {
        let mut correlator = RequestCorrelator::default();
        assert_eq!(
            correlator.verify(&[7u8; 32]).unwrap_err(),
            Error::from(RaffleError::UnknownRequest)
        );

        let id = correlator.issue(&seed(Pubkey::new_unique(), 1)).unwrap();
        assert_eq!(
            correlator.verify(&[7u8; 32]).unwrap_err(),
            Error::from(RaffleError::UnknownRequest)
        );
        assert!(correlator.verify(&id).is_ok());
    }

    #[test]
    fn consume_is_one_shot() {
        let mut correlator = RequestCorrelator::default();
        let id = correlator.issue(&seed(Pubkey::new_unique(), 1)).unwrap();

        assert_eq!(correlator.consume(&id).unwrap(), id);
        assert!(!correlator.is_pending());
        assert_eq!(
            correlator.consume(&id).unwrap_err(),
            Error::from(RaffleError::UnknownRequest)
        );
    }
}
