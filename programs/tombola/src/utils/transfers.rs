use anchor_lang::prelude::*;
use crate::errors::TombolaErrorCode;

/// Moves lamports from a wallet into a program account via the system
/// program. Used for the ticket payment leg, where the payer signs.
pub fn transfer_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    require!(amount > 0, TombolaErrorCode::InvalidAmount);

    anchor_lang::system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            anchor_lang::system_program::Transfer {
                from: from.clone(),
                to: to.clone(),
            },
        ),
        amount,
    )
}

/// Moves lamports out of a program-owned account by direct debit. Used for
/// refunds and the winning payout, where no signature exists for `from`.
pub fn payout_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let balance = **from.lamports.borrow();
    require!(
        balance >= amount,
        TombolaErrorCode::InsufficientVaultBalance
    );

    **from.try_borrow_mut_lamports()? -= amount;
    **to.try_borrow_mut_lamports()? += amount;
    Ok(())
}
