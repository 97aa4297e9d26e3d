use crate::models::ParasConfig;
use crate::render::{header_block, token_id, ScriptTemplate};

/// Builds `deploy_to_paras.sh`: marketplace storage deposit followed by one
/// sale approval per token.
pub fn script(config: &ParasConfig) -> String {
    let template = ScriptTemplate {
        header: header(config),
        range: config.range,
        trailer: None,
    };
    template.render(|index| approve_line(config, index))
}

fn header(config: &ParasConfig) -> String {
    format!(
        "{}\n\
         near call {} storage_deposit '{{\"accountId\":\"'$ACCOUNT_ID'\"}}' --accountId $ACCOUNT_ID --deposit {}\n\
         \n",
        header_block(&config.accounts),
        config.marketplace_id,
        config.storage_deposit
    )
}

// The `msg` payload is JSON nested inside JSON, so its quotes stay escaped
// for the marketplace contract to parse.
fn approve_line(config: &ParasConfig, index: u32) -> String {
    format!(
        "near call $CONTRACT_ID nft_approve '{{\"token_id\":\"{}\",\"account_id\":\"{}\",\"msg\":\"{{\\\"market_type\\\":\\\"sale\\\", \\\"price\\\":\\\"{}\\\",\\\"ft_token_id\\\":\\\"{}\\\"}}\"}}' --accountId $ACCOUNT_ID --depositYocto {}\n",
        token_id(index),
        config.marketplace_id,
        config.price_yocto,
        config.ft_token_id,
        config.approve_deposit_yocto
    )
}
