use crate::models::DeployConfig;
use crate::render::{header_block, series_label, ScriptTemplate};

/// Builds `deploy.sh`: account and contract setup followed by one
/// create-series / mint pair per index.
pub fn script(config: &DeployConfig) -> String {
    let template = ScriptTemplate {
        header: header(config),
        range: config.range,
        trailer: None,
    };
    template.render(|index| format!("{}{}", create_series_line(config, index), mint_line(config, index)))
}

fn header(config: &DeployConfig) -> String {
    format!(
        "{}\n\
         # near delete $CONTRACT_ID $ACCOUNT_ID\n\
         near create-account $CONTRACT_ID --masterAccount $ACCOUNT_ID --initialBalance {}\n\
         near deploy $CONTRACT_ID --accountId $ACCOUNT_ID --wasmFile {}\n\
         \n\
         near call $CONTRACT_ID new_default_meta '{{\"owner_id\":\"'$ACCOUNT_ID'\", \"treasury_id\":\"'$TREASURY_ID'\"}}' --accountId $ACCOUNT_ID\n\
         \n",
        header_block(&config.accounts),
        config.initial_balance,
        config.wasm_file
    )
}

fn create_series_line(config: &DeployConfig, index: u32) -> String {
    let series = &config.series;
    let label = series_label(index, series.pad_threshold);
    format!(
        "near call $CONTRACT_ID nft_create_series '{{\"token_series_id\":\"{}\", \"creator_id\":\"'$ACCOUNT_ID'\",\"token_metadata\":{{\"title\": \"{}{}\",\"media\":\"{}/{}{}{}\", \"reference\":\"{}\", \"copies\": {}}},\"price\":\"{}\", \"royalty\":{{\"'$ROY1'\": {}}}}}' --accountId $ACCOUNT_ID --depositYocto {}\n",
        index,
        series.title_prefix,
        label,
        series.media_base_url,
        series.media_name_prefix,
        label,
        series.media_suffix,
        series.reference,
        series.copies,
        series.price_yocto,
        series.royalty_bps,
        series.create_deposit_yocto
    )
}

fn mint_line(config: &DeployConfig, index: u32) -> String {
    format!(
        "near call $CONTRACT_ID nft_mint '{{\"token_series_id\":\"{}\",\"receiver_id\": \"'$ACCOUNT_ID'\"}}' --accountId $ACCOUNT_ID --depositYocto {}\n",
        index, config.mint_deposit_yocto
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_series_and_mint_pairs() {
        let out = script(&DeployConfig::default());
        assert_eq!(out.matches("nft_create_series").count(), 50);
        assert_eq!(out.matches("nft_mint").count(), 50);
    }

    #[test]
    fn header_declares_setup_calls() {
        let out = script(&DeployConfig::default());
        assert!(out.starts_with("#!/bin/bash\nset -e\n"));
        assert!(out.contains("export ACCOUNT_ID=nearlend-official.testnet\n"));
        assert!(out.contains("export CONTRACT_ID=nft.$ACCOUNT_ID\n"));
        assert!(out.contains(
            "near create-account $CONTRACT_ID --masterAccount $ACCOUNT_ID --initialBalance 40\n"
        ));
        assert!(out
            .contains("near deploy $CONTRACT_ID --accountId $ACCOUNT_ID --wasmFile ../out/main.wasm\n"));
        assert!(out.contains("new_default_meta '{\"owner_id\":\"'$ACCOUNT_ID'\", \"treasury_id\":\"'$TREASURY_ID'\"}'"));
        // setup precedes the first series call
        assert!(out.find("new_default_meta").unwrap() < out.find("nft_create_series").unwrap());
    }

    #[test]
    fn index_five_scenario() {
        let out = script(&DeployConfig::default());
        let series_pos = out.find("\"token_series_id\":\"5\", \"creator_id\"").unwrap();
        assert!(out.contains("\"title\": \"Lang Biang - 005\""));
        assert!(out.contains("Lang%20Biang%20%23005.png"));
        let mint_pos = out
            .find("nft_mint '{\"token_series_id\":\"5\",\"receiver_id\"")
            .unwrap();
        assert!(series_pos < mint_pos);
    }

    #[test]
    fn padding_switches_at_ten() {
        let out = script(&DeployConfig::default());
        for index in 1..10u32 {
            assert!(out.contains(&format!("\"title\": \"Lang Biang - 00{}\"", index)));
        }
        for index in 10..51u32 {
            assert!(out.contains(&format!("\"title\": \"Lang Biang - 0{}\"", index)));
            assert!(!out.contains(&format!("\"title\": \"Lang Biang - 00{}\"", index)));
        }
    }

    #[test]
    fn items_in_increasing_order() {
        let out = script(&DeployConfig::default());
        let positions: Vec<usize> = (1..51u32)
            .map(|i| {
                out.find(&format!("'{{\"token_series_id\":\"{}\", \"creator_id\"", i))
                    .unwrap()
            })
            .collect();
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn output_is_deterministic() {
        let config = DeployConfig::default();
        assert_eq!(script(&config), script(&config));
    }
}
