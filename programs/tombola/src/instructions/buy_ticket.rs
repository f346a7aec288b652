use anchor_lang::prelude::*;

use crate::state::lottery::Lottery;
use crate::state::vault::Vault;
use crate::utils::transfers::{payout_lamports, transfer_lamports};

#[derive(Accounts)]
pub struct BuyTicket<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [Lottery::SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        mut,
        seeds = [Vault::SEED],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

/// Sells `entries` tickets to the signing player.
///
/// `payment` is the lamport amount the player attaches to the purchase. The
/// full amount is pulled into the vault and anything above the exact ticket
/// total is immediately returned, so an aborted refund aborts the sale too.
pub fn buy_ticket_handler(ctx: Context<BuyTicket>, entries: u32, payment: u64) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    let vault = &mut ctx.accounts.vault;
    let player = &ctx.accounts.player;

    let first_index = lottery.players.len();
    let total = lottery.required_payment(entries)?;
    let excess = lottery.sell(player.key(), entries, payment)?;

    // ─────────────────────────────
    // Collect payment, refund excess
    // ─────────────────────────────
    if payment > 0 {
        transfer_lamports(
            &player.to_account_info(),
            &vault.to_account_info(),
            &ctx.accounts.system_program.to_account_info(),
            payment,
        )?;
    }

    if excess > 0 {
        payout_lamports(
            &vault.to_account_info(),
            &player.to_account_info(),
            excess,
        )?;
    }

    vault.total_in_lamports = vault.total_in_lamports.saturating_add(total);

    lottery.assert_invariant()?;

    msg!(
        "Sold {} ticket(s) to {} starting at index {}; {} remaining, refunded {}",
        entries,
        player.key(),
        first_index,
        lottery.tickets_available,
        excess
    );

    Ok(())
}
