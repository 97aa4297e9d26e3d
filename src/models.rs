use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, EnumVariantNames};

use crate::Result;

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, EnumVariantNames, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum ScriptKind {
    Deploy,
    DeployToParas,
    Burn,
}

impl ScriptKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            ScriptKind::Deploy => "deploy.sh",
            ScriptKind::DeployToParas => "deploy_to_paras.sh",
            ScriptKind::Burn => "burn.sh",
        }
    }
}

/// Identities exported at the top of every script. `contract_id` and friends
/// may reference `$ACCOUNT_ID`; the shell expands them at run time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Accounts {
    pub account_id: String,
    pub contract_id: String,
    pub treasury_id: String,
    pub royalty_id: String,
}

impl Accounts {
    pub fn new(account_id: &str, contract_id: &str) -> Self {
        Accounts {
            account_id: account_id.to_string(),
            contract_id: contract_id.to_string(),
            treasury_id: "$ACCOUNT_ID".to_string(),
            royalty_id: "$ACCOUNT_ID".to_string(),
        }
    }
}

/// Inclusive-exclusive range of token series indices.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRange {
    pub start: u32,
    pub end: u32,
}

impl ItemRange {
    pub fn new(start: u32, end: u32) -> Self {
        ItemRange { start, end }
    }

    pub fn iter(&self) -> std::ops::Range<u32> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.iter().len()
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeriesParams {
    pub title_prefix: String,
    pub media_base_url: String,
    /// URL-encoded filename prefix, the series label and `media_suffix` are
    /// appended to it.
    pub media_name_prefix: String,
    pub media_suffix: String,
    pub reference: String,
    pub copies: u32,
    pub price_yocto: String,
    pub royalty_bps: u32,
    pub create_deposit_yocto: String,
    /// Indices below this get the double-zero label prefix.
    pub pad_threshold: u32,
}

impl Default for SeriesParams {
    fn default() -> Self {
        SeriesParams {
            title_prefix: "Lang Biang - ".to_string(),
            media_base_url:
                "https://bafybeibkhcuq6s3drxtvyegtooc6wosudvbpzvhf5gtfy5xnwemp7mku6u.ipfs.nftstorage.link"
                    .to_string(),
            media_name_prefix: "Lang%20Biang%20%23".to_string(),
            media_suffix: ".png".to_string(),
            reference: "bafkreiceiix3c3q6eahprmo2aovs46sdkrfcrdz52c2ouojkul7uzk5zsa".to_string(),
            copies: 1,
            price_yocto: "5000000000000000000000000".to_string(),
            royalty_bps: 500,
            create_deposit_yocto: "8540000000000000000000".to_string(),
            pad_threshold: 10,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeployConfig {
    pub accounts: Accounts,
    pub range: ItemRange,
    pub initial_balance: String,
    pub wasm_file: String,
    pub series: SeriesParams,
    pub mint_deposit_yocto: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        DeployConfig {
            accounts: Accounts::new("nearlend-official.testnet", "nft.$ACCOUNT_ID"),
            range: ItemRange::new(1, 51),
            initial_balance: "40".to_string(),
            wasm_file: "../out/main.wasm".to_string(),
            series: SeriesParams::default(),
            mint_deposit_yocto: "11280000000000000000000".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ParasConfig {
    pub accounts: Accounts,
    pub range: ItemRange,
    pub marketplace_id: String,
    pub storage_deposit: String,
    pub price_yocto: String,
    pub ft_token_id: String,
    pub approve_deposit_yocto: String,
}

impl Default for ParasConfig {
    fn default() -> Self {
        ParasConfig {
            accounts: Accounts::new("nearlend-official.testnet", "nft.$ACCOUNT_ID"),
            range: ItemRange::new(1, 51),
            marketplace_id: "marketplace.nearlend-official.testnet".to_string(),
            storage_deposit: "5".to_string(),
            price_yocto: "5000000000000000000000000".to_string(),
            ft_token_id: "near".to_string(),
            approve_deposit_yocto: "1320000000000000000000".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BurnConfig {
    pub accounts: Accounts,
    pub range: ItemRange,
    pub burn_deposit_yocto: String,
}

impl Default for BurnConfig {
    fn default() -> Self {
        BurnConfig {
            accounts: Accounts::new("nearlend-nft2.testnet", "lang-biang5.$ACCOUNT_ID"),
            range: ItemRange::new(1, 3),
            burn_deposit_yocto: "1".to_string(),
        }
    }
}

/// All three script configurations. A JSON profile file may override any
/// subset; missing sections fall back to the built-in defaults.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Profile {
    #[serde(default)]
    pub deploy: DeployConfig,
    #[serde(default)]
    pub paras: ParasConfig,
    #[serde(default)]
    pub burn: BurnConfig,
}

impl Profile {
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}
