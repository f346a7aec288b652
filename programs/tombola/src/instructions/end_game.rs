use anchor_lang::prelude::*;

use crate::errors::TombolaErrorCode;
use crate::state::lottery::Lottery;
use crate::state::vault::Vault;
use crate::utils::transfers::payout_lamports;

#[derive(Accounts)]
pub struct EndGame<'info> {
    #[account(
        mut,
        seeds = [Lottery::SEED],
        bump = lottery.bump,
        has_one = operator @ TombolaErrorCode::NotAuthorized
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        mut,
        seeds = [Vault::SEED],
        bump = vault.bump,
    )]
    pub vault: Account<'info, Vault>,

    /// CHECK: Payout destination; must hold the ticket drawn from the seed,
    /// verified in the handler against `lottery.players`.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    pub operator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Settles a fully sold round: draws the winning ticket from the
/// operator-supplied seed, pays the whole pot to its holder, and resets the
/// round. The seed is a trust assumption inherited from the game design; the
/// chain offers no native entropy and the operator provides it instead.
pub fn end_game_handler(ctx: Context<EndGame>, seed: u64) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    let vault = &mut ctx.accounts.vault;

    let winner_address = lottery.pick_winner(seed)?;
    require_keys_eq!(
        ctx.accounts.winner.key(),
        winner_address,
        TombolaErrorCode::WinnerMismatch
    );

    // ─────────────────────────────
    // Pay out the whole pot
    // ─────────────────────────────
    // The vault must stay rent-exempt, so the pot is everything above the
    // rent minimum.
    let rent_due = Rent::get()?.minimum_balance(vault.to_account_info().data_len());
    let pot = vault
        .to_account_info()
        .lamports()
        .saturating_sub(rent_due);

    if pot > 0 {
        payout_lamports(
            &vault.to_account_info(),
            &ctx.accounts.winner.to_account_info(),
            pot,
        )?;
    }

    vault.total_out_lamports = vault.total_out_lamports.saturating_add(pot);

    // ─────────────────────────────
    // Reset the round
    // ─────────────────────────────
    lottery.reset_round();
    lottery.rounds_settled = lottery
        .rounds_settled
        .checked_add(1)
        .ok_or(TombolaErrorCode::MathOverflow)?;

    lottery.assert_invariant()?;

    msg!(
        "Round {} settled: seed={} winner={} pot={}",
        lottery.rounds_settled,
        seed,
        winner_address,
        pot
    );

    Ok(())
}
