use super::Command;
use crate::error::{Result, WrapErr};
use crate::config::Config;
use search_core::SheetSearchEngine;
use std::path::PathBuf;

pub struct IndexCommand {
    config: Config,
    root_path: PathBuf,
}

impl IndexCommand {
    pub fn new(cfg: Config, root_path: Option<PathBuf>) -> Self {
        let root_path = root_path.unwrap_or_else(|| cfg.data_dir.clone());
        Self {
            config: cfg,
            root_path
        }
    }
}

#[async_trait::async_trait]
impl Command for IndexCommand {
    async fn execute(&self) -> Result<()> {
        let engine = SheetSearchEngine::new(self.config.search_config());
        let files = engine
            .rebuild_index(&self.root_path)
            .wrap_err_with(|| format!("索引目录失败: {:?}", self.root_path))?;

        println!("{}", serde_json::to_string_pretty(&files)?);
        Ok(())
    }
}
