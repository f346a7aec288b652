use anchor_lang::prelude::*;

use crate::constants::MAX_TICKETS_CAP;
use crate::errors::TombolaErrorCode;

/// ---------------------------------------------------------------------------
/// Lottery
/// ---------------------------------------------------------------------------
///
/// Single global PDA holding the full round state. A round runs from an empty
/// `players` list to a sellout, after which the operator settles it with
/// `end_game` and the state resets for the next round.
#[account]
pub struct Lottery {
    /// Privileged account allowed to settle rounds and change configuration.
    /// Immutable after `initialize`.
    pub operator: Pubkey,

    /// Price per ticket in lamports.
    pub ticket_cost: u64,

    /// Unsold tickets remaining in the current round.
    pub tickets_available: u32,

    /// Total tickets per round. `tickets_available == max_tickets` means the
    /// lottery is between rounds, which is when configuration may change.
    pub max_tickets: u32,

    /// Ticket owners in purchase order. The ticket index IS the position:
    /// every sale appends, so indices are contiguous and gapless.
    pub players: Vec<Pubkey>,

    // ─────────────────────────────
    // Accounting / stats
    // ─────────────────────────────

    /// Rounds settled since deployment (monotonic, for audit).
    pub rounds_settled: u64,

    /// PDA bump for deterministic re-derivation.
    pub bump: u8,

    /// Reserved bytes for future use.
    pub _reserved: [u8; 16],
}

impl Lottery {
    pub const SEED: &'static [u8] = b"lottery";

    /// Serialized size excluding the 8-byte Anchor discriminator.
    /// `players` is sized for the hard capacity so the account never needs
    /// reallocation as the round fills.
    pub const SIZE: usize =
        32 + // operator
            8 + // ticket_cost
            4 + // tickets_available
            4 + // max_tickets
            (4 + 32 * MAX_TICKETS_CAP as usize) + // players
            8 + // rounds_settled
            1 + // bump
            16; // reserved

    pub fn is_between_rounds(&self) -> bool {
        self.tickets_available == self.max_tickets
    }

    pub fn is_sold_out(&self) -> bool {
        self.tickets_available == 0
    }

    /// Total lamports owed for `entries` tickets at the current price.
    pub fn required_payment(&self, entries: u32) -> Result<u64> {
        (entries as u64)
            .checked_mul(self.ticket_cost)
            .ok_or_else(|| error!(TombolaErrorCode::MathOverflow))
    }

    /// Sells `entries` tickets to `buyer` against an attached `payment`.
    ///
    /// Validates every precondition before touching state, so a failure
    /// leaves the round untouched. Returns the excess lamports to refund
    /// (zero for an exact payment).
    ///
    /// `entries == 0` passes all checks and grants nothing; the whole call
    /// degenerates to a no-op apart from refunding the full payment.
    pub fn sell(&mut self, buyer: Pubkey, entries: u32, payment: u64) -> Result<u64> {
        require!(
            self.tickets_available > 0,
            TombolaErrorCode::NoTicketsAvailable
        );
        require!(
            self.tickets_available >= entries,
            TombolaErrorCode::InsufficientTicketsAvailable
        );

        let total = self.required_payment(entries)?;
        require!(payment >= total, TombolaErrorCode::InvalidAmount);

        // Next ticket index is always the current entry count.
        for _ in 0..entries {
            self.players.push(buyer);
            self.tickets_available -= 1;
        }

        Ok(payment - total)
    }

    /// Resolves the winning ticket for an operator-supplied seed. Settlement
    /// requires a sold-out round.
    ///
    /// `max_tickets` is validated positive at every site that sets it, so
    /// the modulo is always defined, and a sold-out round holds exactly
    /// `max_tickets` entries, so the index lookup cannot miss.
    pub fn pick_winner(&self, seed: u64) -> Result<Pubkey> {
        require!(self.is_sold_out(), TombolaErrorCode::RoundNotFinished);

        let winner_index = (seed % u64::from(self.max_tickets)) as usize;
        self.players
            .get(winner_index)
            .copied()
            .ok_or_else(|| error!(TombolaErrorCode::WinnerIndexOutOfRange))
    }

    /// Updates the ticket price. Only allowed between rounds, so every
    /// ticket in a round is sold at the same price.
    pub fn set_cost(&mut self, new_cost: u64) -> Result<()> {
        require!(self.is_between_rounds(), TombolaErrorCode::RoundNotFinished);

        self.ticket_cost = new_cost;
        Ok(())
    }

    /// Resizes the round. Only allowed between rounds; the fresh round
    /// starts with the full new supply, so the winner draw can never see a
    /// `max_tickets` that disagrees with the sold tickets.
    pub fn resize(&mut self, new_max: u32) -> Result<()> {
        require!(self.is_between_rounds(), TombolaErrorCode::RoundNotFinished);
        require!(
            new_max > 0 && new_max <= MAX_TICKETS_CAP,
            TombolaErrorCode::InvalidMaxTickets
        );

        self.max_tickets = new_max;
        self.tickets_available = new_max;
        Ok(())
    }

    /// Clears the round: no players, full ticket supply.
    pub fn reset_round(&mut self) {
        self.players.clear();
        self.tickets_available = self.max_tickets;
    }

    /// Conservation check: sold + unsold always equals the round size.
    pub fn assert_invariant(&self) -> Result<()> {
        require!(
            self.players.len() as u32 + self.tickets_available == self.max_tickets,
            TombolaErrorCode::AssertInvariantFailed
        );
        require!(
            self.max_tickets > 0 && self.max_tickets <= MAX_TICKETS_CAP,
            TombolaErrorCode::InvalidMaxTickets
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_MAX_TICKETS, DEFAULT_TICKET_COST};
    use borsh::BorshSerialize;

    fn fresh_lottery() -> Lottery {
        Lottery {
            operator: Pubkey::new_unique(),
            ticket_cost: DEFAULT_TICKET_COST,
            tickets_available: DEFAULT_MAX_TICKETS,
            max_tickets: DEFAULT_MAX_TICKETS,
            players: Vec::new(),
            rounds_settled: 0,
            bump: 255,
            _reserved: [0u8; 16],
        }
    }

    #[test]
    fn lottery_size_matches_serialization_at_capacity() {
        let mut lottery = fresh_lottery();
        lottery.max_tickets = MAX_TICKETS_CAP;
        lottery.tickets_available = 0;
        lottery.players = vec![Pubkey::default(); MAX_TICKETS_CAP as usize];

        let bytes = lottery.try_to_vec().unwrap();
        assert_eq!(
            bytes.len(),
            Lottery::SIZE,
            "Lottery account size mismatch: expected {}, got {}",
            Lottery::SIZE,
            bytes.len()
        );
    }

    #[test]
    fn tickets_are_contiguous_across_purchases() {
        let mut lottery = fresh_lottery();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        lottery.sell(alice, 2, 2 * DEFAULT_TICKET_COST).unwrap();
        lottery.sell(bob, 3, 3 * DEFAULT_TICKET_COST).unwrap();

        assert_eq!(lottery.players.len(), 5);
        assert_eq!(lottery.players[0], alice);
        assert_eq!(lottery.players[1], alice);
        assert_eq!(lottery.players[2], bob);
        assert_eq!(lottery.players[4], bob);
        assert_eq!(lottery.tickets_available, 0);
        lottery.assert_invariant().unwrap();
    }

    #[test]
    fn conservation_holds_after_every_operation() {
        let mut lottery = fresh_lottery();
        let buyer = Pubkey::new_unique();

        for _ in 0..DEFAULT_MAX_TICKETS {
            lottery.sell(buyer, 1, DEFAULT_TICKET_COST).unwrap();
            lottery.assert_invariant().unwrap();
        }
        lottery.reset_round();
        lottery.assert_invariant().unwrap();
    }

    #[test]
    fn exact_payment_refunds_nothing_overpayment_refunds_difference() {
        let mut lottery = fresh_lottery();
        let buyer = Pubkey::new_unique();

        let excess = lottery.sell(buyer, 1, DEFAULT_TICKET_COST).unwrap();
        assert_eq!(excess, 0);

        let excess = lottery.sell(buyer, 2, 3 * DEFAULT_TICKET_COST).unwrap();
        assert_eq!(excess, DEFAULT_TICKET_COST);
    }

    #[test]
    fn underpayment_fails_and_leaves_state_unchanged() {
        let mut lottery = fresh_lottery();
        let buyer = Pubkey::new_unique();

        let err = lottery
            .sell(buyer, 2, 2 * DEFAULT_TICKET_COST - 1)
            .unwrap_err();
        assert_eq!(err, TombolaErrorCode::InvalidAmount.into());
        assert!(lottery.players.is_empty());
        assert_eq!(lottery.tickets_available, DEFAULT_MAX_TICKETS);
    }

    #[test]
    fn sold_out_round_rejects_further_purchases() {
        let mut lottery = fresh_lottery();
        let buyer = Pubkey::new_unique();
        lottery
            .sell(buyer, DEFAULT_MAX_TICKETS, 5 * DEFAULT_TICKET_COST)
            .unwrap();

        let err = lottery.sell(buyer, 1, DEFAULT_TICKET_COST).unwrap_err();
        assert_eq!(err, TombolaErrorCode::NoTicketsAvailable.into());
        assert_eq!(lottery.players.len(), 5);
        assert_eq!(lottery.tickets_available, 0);
    }

    #[test]
    fn oversized_purchase_rejected() {
        let mut lottery = fresh_lottery();
        let buyer = Pubkey::new_unique();
        lottery.sell(buyer, 3, 3 * DEFAULT_TICKET_COST).unwrap();

        let err = lottery.sell(buyer, 3, 3 * DEFAULT_TICKET_COST).unwrap_err();
        assert_eq!(err, TombolaErrorCode::InsufficientTicketsAvailable.into());
        assert_eq!(lottery.players.len(), 3);
    }

    #[test]
    fn zero_entries_is_a_harmless_noop() {
        let mut lottery = fresh_lottery();
        let buyer = Pubkey::new_unique();

        let excess = lottery.sell(buyer, 0, 7).unwrap();
        assert_eq!(excess, 7);
        assert!(lottery.players.is_empty());
        assert_eq!(lottery.tickets_available, DEFAULT_MAX_TICKETS);
    }

    #[test]
    fn winner_selection_is_seed_mod_max_tickets() {
        let mut lottery = fresh_lottery();
        let holders: Vec<Pubkey> = (0..5).map(|_| Pubkey::new_unique()).collect();
        for holder in &holders {
            lottery.sell(*holder, 1, DEFAULT_TICKET_COST).unwrap();
        }

        // 21 mod 5 = 1
        assert_eq!(lottery.pick_winner(21).unwrap(), holders[1]);
        // 7 mod 5 = 2
        assert_eq!(lottery.pick_winner(7).unwrap(), holders[2]);
        assert_eq!(lottery.pick_winner(0).unwrap(), holders[0]);

        lottery.reset_round();
        assert!(lottery.players.is_empty());
        assert_eq!(lottery.tickets_available, DEFAULT_MAX_TICKETS);
    }

    #[test]
    fn full_round_scenario() {
        let mut lottery = fresh_lottery();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        // Alice pays exactly, Bob overpays by one ticket's worth.
        assert_eq!(lottery.sell(alice, 1, DEFAULT_TICKET_COST).unwrap(), 0);
        assert_eq!(
            lottery.sell(bob, 1, 2 * DEFAULT_TICKET_COST).unwrap(),
            DEFAULT_TICKET_COST
        );

        let rest: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        for p in &rest {
            lottery.sell(*p, 1, DEFAULT_TICKET_COST).unwrap();
        }

        assert!(lottery.is_sold_out());
        // 7 mod 5 = 2 → first of the exact-cost stragglers.
        assert_eq!(lottery.pick_winner(7).unwrap(), rest[0]);

        lottery.reset_round();
        assert!(lottery.is_between_rounds());
        assert!(lottery.players.is_empty());
        assert_eq!(lottery.tickets_available, 5);
    }

    #[test]
    fn config_changes_rejected_mid_round() {
        let mut lottery = fresh_lottery();
        let buyer = Pubkey::new_unique();
        lottery.sell(buyer, 1, DEFAULT_TICKET_COST).unwrap();

        let err = lottery.set_cost(2 * DEFAULT_TICKET_COST).unwrap_err();
        assert_eq!(err, TombolaErrorCode::RoundNotFinished.into());
        assert_eq!(lottery.ticket_cost, DEFAULT_TICKET_COST);

        let err = lottery.resize(10).unwrap_err();
        assert_eq!(err, TombolaErrorCode::RoundNotFinished.into());
        assert_eq!(lottery.max_tickets, DEFAULT_MAX_TICKETS);
        assert_eq!(lottery.tickets_available, DEFAULT_MAX_TICKETS - 1);
        lottery.assert_invariant().unwrap();
    }

    #[test]
    fn config_changes_allowed_between_rounds() {
        let mut lottery = fresh_lottery();

        lottery.set_cost(2 * DEFAULT_TICKET_COST).unwrap();
        assert_eq!(lottery.ticket_cost, 2 * DEFAULT_TICKET_COST);

        lottery.resize(2).unwrap();
        assert_eq!(lottery.max_tickets, 2);
        assert_eq!(lottery.tickets_available, 2);
        lottery.assert_invariant().unwrap();
    }

    #[test]
    fn resize_bounds_enforced() {
        let mut lottery = fresh_lottery();

        let err = lottery.resize(0).unwrap_err();
        assert_eq!(err, TombolaErrorCode::InvalidMaxTickets.into());

        let err = lottery.resize(MAX_TICKETS_CAP + 1).unwrap_err();
        assert_eq!(err, TombolaErrorCode::InvalidMaxTickets.into());

        assert_eq!(lottery.max_tickets, DEFAULT_MAX_TICKETS);
    }

    #[test]
    fn settlement_rejected_before_sellout() {
        let mut lottery = fresh_lottery();
        let buyer = Pubkey::new_unique();
        lottery.sell(buyer, 4, 4 * DEFAULT_TICKET_COST).unwrap();

        let err = lottery.pick_winner(21).unwrap_err();
        assert_eq!(err, TombolaErrorCode::RoundNotFinished.into());
        assert_eq!(lottery.players.len(), 4);
        assert_eq!(lottery.tickets_available, 1);
    }

    #[test]
    fn excess_and_required_payment_split_the_attached_amount() {
        let mut lottery = fresh_lottery();
        let buyer = Pubkey::new_unique();

        let payment = 3 * DEFAULT_TICKET_COST + 17;
        let total = lottery.required_payment(3).unwrap();
        let excess = lottery.sell(buyer, 3, payment).unwrap();
        assert_eq!(total + excess, payment);
        assert_eq!(total, 3 * DEFAULT_TICKET_COST);
    }

    #[test]
    fn required_payment_overflow_is_caught() {
        let mut lottery = fresh_lottery();
        lottery.ticket_cost = u64::MAX;

        let err = lottery.required_payment(2).unwrap_err();
        assert_eq!(err, TombolaErrorCode::MathOverflow.into());
    }
}
