use crate::models::BurnConfig;
use crate::render::{header_block, token_id, ScriptTemplate};

/// Builds `burn.sh`: one burn call per token, then deletion of the contract
/// account.
pub fn script(config: &BurnConfig) -> String {
    let template = ScriptTemplate {
        header: format!("{}\n", header_block(&config.accounts)),
        range: config.range,
        trailer: Some("\nnear delete $CONTRACT_ID $ACCOUNT_ID\n".to_string()),
    };
    template.render(|index| burn_line(config, index))
}

fn burn_line(config: &BurnConfig, index: u32) -> String {
    format!(
        "near call $CONTRACT_ID nft_burn '{{\"token_id\":\"{}\"}}' --accountId $ACCOUNT_ID --depositYocto {}\n",
        token_id(index),
        config.burn_deposit_yocto
    )
}
