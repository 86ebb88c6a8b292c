// Mint To Instruction
//
// Issues new tokens to a balance. Gated on the mint authority; used by the
// scenario setup phase to seed pools and actors.

use anchor_lang::prelude::*;

use crate::{errors::*, state::*};

#[derive(Accounts)]
pub struct MintTokens<'info> {
    pub authority: Signer<'info>,

    #[account(mut, has_one = authority @ TokenError::UnauthorizedMint)]
    pub mint: Account<'info, TokenMint>,

    #[account(mut, constraint = to.mint == mint.key() @ TokenError::MintMismatch)]
    pub to: Account<'info, Balance>,
}

impl<'info> MintTokens<'info> {
    pub fn mint_to(&mut self, amount: u64) -> Result<()> {
        self.mint.supply = self
            .mint
            .supply
            .checked_add(amount)
            .ok_or(TokenError::Overflow)?;
        self.to.credit(amount)?;

        msg!("Minted {} to {}", amount, self.to.owner);

        Ok(())
    }
}
