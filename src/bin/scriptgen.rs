use std::path::PathBuf;

use nft_scriptgen::models::{Profile, ScriptKind};
use nft_scriptgen::render::write_script;
use nft_scriptgen::{burn, deploy, paras, Result, ScriptGenError};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "NFT Script Generator",
    about = "Generates near CLI shell scripts to deploy, mint, list and burn NFT series."
)]
struct Opt {
    #[structopt(short, long, help = "generate only this script (deploy, deploy_to_paras, burn)")]
    script: Option<ScriptKind>,

    #[structopt(short, long, default_value = ".", help = "directory the scripts are written to")]
    out_dir: PathBuf,

    #[structopt(short, long, help = "JSON profile overriding the built-in configuration")]
    profile: Option<PathBuf>,
}

pub fn main() -> Result<()> {
    pretty_env_logger::init();
    let opt = Opt::from_args();

    if !opt.out_dir.is_dir() {
        return Err(ScriptGenError::new(&format!(
            "output directory {} does not exist",
            opt.out_dir.display()
        )));
    }

    let profile = match &opt.profile {
        Some(path) => {
            log::debug!("loading profile from {}", path.display());
            Profile::from_file(path)?
        }
        None => Profile::default(),
    };

    let kinds = match opt.script {
        Some(kind) => vec![kind],
        None => vec![ScriptKind::Deploy, ScriptKind::DeployToParas, ScriptKind::Burn],
    };

    for kind in kinds {
        let contents = match kind {
            ScriptKind::Deploy => deploy::script(&profile.deploy),
            ScriptKind::DeployToParas => paras::script(&profile.paras),
            ScriptKind::Burn => burn::script(&profile.burn),
        };
        let path = opt.out_dir.join(kind.file_name());
        write_script(&path, &contents)?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}
