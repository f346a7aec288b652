pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Ticket price at deployment (1 SOL).
pub const DEFAULT_TICKET_COST: u64 = LAMPORTS_PER_SOL;

/// Tickets per round at deployment.
pub const DEFAULT_MAX_TICKETS: u32 = 5;

// Hard cap on tickets per round. The lottery account is sized for this
// many player entries, so change_max must never exceed it.
pub const MAX_TICKETS_CAP: u32 = 64;
