use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_MAX_TICKETS, DEFAULT_TICKET_COST};
use crate::state::lottery::Lottery;
use crate::state::vault::Vault;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Global lottery PDA.
    #[account(
        init,
        payer = payer,
        space = 8 + Lottery::SIZE,
        seeds = [Lottery::SEED],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// Vault PDA holding the pot.
    #[account(
        init,
        payer = payer,
        space = 8 + Vault::SIZE,
        seeds = [Vault::SEED],
        bump
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: Operator address chosen by the deployer; stored verbatim and
    /// enforced via `has_one` on every privileged instruction.
    pub operator: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_handler(ctx: Context<Initialize>) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;

    // ────────────────────────────────────────────────
    // Initialize lottery
    // ────────────────────────────────────────────────
    lottery.operator = ctx.accounts.operator.key();
    lottery.ticket_cost = DEFAULT_TICKET_COST;
    lottery.tickets_available = DEFAULT_MAX_TICKETS;
    lottery.max_tickets = DEFAULT_MAX_TICKETS;
    lottery.players = Vec::new();
    lottery.rounds_settled = 0;
    lottery.bump = ctx.bumps.lottery;
    lottery._reserved = [0; 16];

    // ────────────────────────────────────────────────
    // Initialize vault
    // ────────────────────────────────────────────────
    let vault = &mut ctx.accounts.vault;
    vault.bump = ctx.bumps.vault;
    vault.total_in_lamports = 0;
    vault.total_out_lamports = 0;
    vault.version = 1;
    vault._reserved = [0; 16];

    msg!(
        "Lottery initialized: operator={} ticket_cost={} max_tickets={}",
        lottery.operator,
        lottery.ticket_cost,
        lottery.max_tickets
    );

    Ok(())
}
