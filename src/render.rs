use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::models::{Accounts, ItemRange};
use crate::Result;

/// One generated shell script: fixed header, one block per index in
/// increasing order, optional fixed trailer.
pub struct ScriptTemplate {
    pub header: String,
    pub range: ItemRange,
    pub trailer: Option<String>,
}

impl ScriptTemplate {
    pub fn render<F>(&self, mut item: F) -> String
    where
        F: FnMut(u32) -> String,
    {
        let mut out = self.header.clone();
        for index in self.range.iter() {
            log::debug!("rendering item {}", index);
            out.push_str(&item(index));
        }
        if let Some(trailer) = &self.trailer {
            out.push_str(trailer);
        }
        out
    }
}

/// Shebang, strict mode, identity exports and diagnostic echos shared by all
/// three scripts.
pub fn header_block(accounts: &Accounts) -> String {
    format!(
        "#!/bin/bash\n\
         set -e\n\
         export ACCOUNT_ID={}\n\
         export CONTRACT_ID={}\n\
         export TREASURY_ID={}\n\
         export ROY1={}\n\
         echo $CONTRACT_ID\n\
         echo $ACCOUNT_ID\n",
        accounts.account_id, accounts.contract_id, accounts.treasury_id, accounts.royalty_id
    )
}

/// Numeric label used in series titles and media filenames. Indices below the
/// threshold get a double-zero prefix, the rest a single zero. The uploaded
/// media assets are named under this rule, so it must not change.
pub fn series_label(index: u32, pad_threshold: u32) -> String {
    if index < pad_threshold {
        format!("00{}", index)
    } else {
        format!("0{}", index)
    }
}

/// Token id in the contract's `series:edition` format; every series here has
/// a single edition.
pub fn token_id(index: u32) -> String {
    format!("{}:1", index)
}

pub fn write_script(path: &Path, contents: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_pad_below_threshold() {
        assert_eq!(series_label(3, 10), "003");
        assert_eq!(series_label(9, 10), "009");
        assert_eq!(series_label(10, 10), "010");
        assert_eq!(series_label(42, 10), "042");
        assert_eq!(series_label(50, 10), "050");
    }

    #[test]
    fn token_ids_use_first_edition() {
        assert_eq!(token_id(1), "1:1");
        assert_eq!(token_id(50), "50:1");
    }

    #[test]
    fn render_keeps_index_order() {
        let template = ScriptTemplate {
            header: "header\n".to_string(),
            range: ItemRange::new(1, 6),
            trailer: Some("trailer\n".to_string()),
        };
        let out = template.render(|i| format!("item {}\n", i));
        assert!(out.starts_with("header\n"));
        assert!(out.ends_with("trailer\n"));
        let positions: Vec<usize> = (1..6)
            .map(|i| out.find(&format!("item {}\n", i)).unwrap())
            .collect();
        for pair in positions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn render_is_idempotent() {
        let template = ScriptTemplate {
            header: "h\n".to_string(),
            range: ItemRange::new(1, 51),
            trailer: None,
        };
        let a = template.render(|i| format!("{}\n", i));
        let b = template.render(|i| format!("{}\n", i));
        assert_eq!(a, b);
    }

    #[test]
    fn write_script_overwrites() {
        let path = std::env::temp_dir().join("scriptgen_write_test.sh");
        write_script(&path, "first\n").unwrap();
        write_script(&path, "second\n").unwrap();
        let read = std::fs::read_to_string(&path).unwrap();
        assert_eq!(read, "second\n");
        std::fs::remove_file(&path).unwrap();
    }
}
