use anchor_lang::prelude::*;

use crate::errors::TombolaErrorCode;
use crate::state::lottery::Lottery;

#[derive(Accounts)]
pub struct ChangeMax<'info> {
    #[account(
        mut,
        seeds = [Lottery::SEED],
        bump = lottery.bump,
        has_one = operator @ TombolaErrorCode::NotAuthorized
    )]
    pub lottery: Account<'info, Lottery>,

    pub operator: Signer<'info>,
}

pub fn change_max_handler(ctx: Context<ChangeMax>, new_max: u32) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;

    lottery.resize(new_max)?;
    lottery.assert_invariant()?;

    msg!("Max tickets changed to {}", new_max);
    Ok(())
}
