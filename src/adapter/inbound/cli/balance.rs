//! Token balances.

use serde_json::json;

use super::output;
use crate::domain::error::DomainError;
use crate::domain::token::token_by_symbol;
use crate::error::Result;
use crate::infrastructure::SdkContext;

/// Show `owner`'s balance of the token named `symbol`.
pub async fn execute(context: &SdkContext, symbol: &str, owner: &str) -> Result<()> {
    let token = token_by_symbol(symbol).ok_or_else(|| DomainError::UnknownToken {
        address: symbol.to_string(),
    })?;
    let balance = token.fetch_balance(&context.contracts(), owner).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "balance",
            "token": token.symbol(),
            "owner": owner,
            "balance": balance,
        }));
        return Ok(());
    }

    output::field(token.symbol(), output::highlight(balance));
    Ok(())
}
