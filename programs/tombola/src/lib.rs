use anchor_lang::prelude::*;
use solana_security_txt::security_txt;

// -----------------------------------------------------------------------------
// Program ID
// -----------------------------------------------------------------------------
declare_id!("7ZmrmUUBRYQZFP5FeSLV2usbY1eWPFbAUVdCmkgxZAJR");

security_txt! {
    name: "Tombola",
    project_url: "https://tombola.bet",
    source_code: "https://github.com/leonine-labs/tombola",
    contacts: "mailto:contact@tombola.bet",
    policy: "https://github.com/leonine-labs/tombola/blob/main/SECURITY.md",
    preferred_languages: "en"
}


// -----------------------------------------------------------------------------
// Modules
// -----------------------------------------------------------------------------
pub mod state;
pub mod instructions;
pub mod utils;
pub mod errors;
pub mod constants;

use errors::TombolaErrorCode;
use instructions::*;

// -----------------------------------------------------------------------------
// Program Entrypoints
// -----------------------------------------------------------------------------
#[program]
pub mod tombola {
    use super::*;

    // -------------------------------------------------------------------------
    // initialize
    // -------------------------------------------------------------------------
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        initialize_handler(ctx)
    }

    // -------------------------------------------------------------------------
    // buy_ticket
    // -------------------------------------------------------------------------
    pub fn buy_ticket(ctx: Context<BuyTicket>, entries: u32, payment: u64) -> Result<()> {
        buy_ticket_handler(ctx, entries, payment)
    }

    // -------------------------------------------------------------------------
    // end_game
    // -------------------------------------------------------------------------
    pub fn end_game(ctx: Context<EndGame>, seed: u64) -> Result<()> {
        end_game_handler(ctx, seed)
    }

    // -------------------------------------------------------------------------
    // change_cost
    // -------------------------------------------------------------------------
    pub fn change_cost(ctx: Context<ChangeCost>, new_cost: u64) -> Result<()> {
        change_cost_handler(ctx, new_cost)
    }

    // -------------------------------------------------------------------------
    // change_max
    // -------------------------------------------------------------------------
    pub fn change_max(ctx: Context<ChangeMax>, new_max: u32) -> Result<()> {
        change_max_handler(ctx, new_max)
    }

    // -------------------------------------------------------------------------
    // fallback: the program accepts no unconditional funding or unknown calls
    // -------------------------------------------------------------------------
    pub fn fallback(
        _program_id: &Pubkey,
        _accounts: &[AccountInfo],
        _data: &[u8],
    ) -> Result<()> {
        err!(TombolaErrorCode::OperationNotAllowed)
    }
}
