use anchor_lang::prelude::*;

/// ---------------------------------------------------------------------------
/// Vault
/// ---------------------------------------------------------------------------
///
/// Program-owned PDA that holds the pot. Ticket payments flow in through a
/// system-program transfer; refunds and the winning payout flow out by direct
/// lamport debit. The spendable pot is everything above the rent-exempt
/// minimum.
#[account]
pub struct Vault {
    /// PDA bump for deterministic re-derivation.
    pub bump: u8,

    // ─────────────────────────────
    // Accounting / stats
    // ─────────────────────────────

    /// Total lamports ever collected as ticket payments
    /// (net of refunds; monotonic counter, for audit).
    pub total_in_lamports: u64,

    /// Total lamports ever paid out to winners.
    pub total_out_lamports: u64,

    /// Versioning for future migrations.
    pub version: u8,

    /// Reserved bytes for future use.
    pub _reserved: [u8; 16],
}

impl Vault {
    pub const SEED: &'static [u8] = b"vault";
    pub const SIZE: usize =
        1 + // bump
            8 + // total_in_lamports
            8 + // total_out_lamports
            1 + // version
            16; // reserved
    // When allocating:
    // space = 8 (discriminator) + Vault::SIZE
}
