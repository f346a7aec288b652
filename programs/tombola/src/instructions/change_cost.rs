use anchor_lang::prelude::*;

use crate::errors::TombolaErrorCode;
use crate::state::lottery::Lottery;

#[derive(Accounts)]
pub struct ChangeCost<'info> {
    #[account(
        mut,
        seeds = [Lottery::SEED],
        bump = lottery.bump,
        has_one = operator @ TombolaErrorCode::NotAuthorized
    )]
    pub lottery: Account<'info, Lottery>,

    pub operator: Signer<'info>,
}

pub fn change_cost_handler(ctx: Context<ChangeCost>, new_cost: u64) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;

    lottery.set_cost(new_cost)?;

    msg!("Ticket cost changed to {}", new_cost);
    Ok(())
}
