use anchor_lang::prelude::*;

#[error_code]
pub enum TombolaErrorCode {
    // ─────────────────────────────
    // General / Access Control
    // ─────────────────────────────
    #[msg("Not authorized")]
    NotAuthorized,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Operation not allowed")]
    OperationNotAllowed,

    AssertInvariantFailed,

    // ─────────────────────────────
    // Ticket Sales
    // ─────────────────────────────
    #[msg("No tickets available")]
    NoTicketsAvailable,

    #[msg("Not enough tickets available")]
    InsufficientTicketsAvailable,

    #[msg("Invalid amount")]
    InvalidAmount,

    // ─────────────────────────────
    // Round Lifecycle
    // ─────────────────────────────
    #[msg("Game is yet to end")]
    RoundNotFinished,

    WinnerIndexOutOfRange,

    #[msg("Winner account does not match the drawn ticket")]
    WinnerMismatch,

    InsufficientVaultBalance,

    // ─────────────────────────────
    // Configuration
    // ─────────────────────────────
    #[msg("Invalid max tickets")]
    InvalidMaxTickets,
}
