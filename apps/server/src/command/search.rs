use super::Command;
use crate::error::{Result, WrapErr};
use crate::config::Config;
use search_core::SheetSearchEngine;
use std::path::PathBuf;

pub struct SearchCommand {
    config: Config,
    text: String,
    root_path: PathBuf,
}

impl SearchCommand {
    pub fn new(cfg: Config, text: String, root_path: Option<PathBuf>) -> Self {
        let root_path = root_path.unwrap_or_else(|| cfg.data_dir.clone());
        Self {
            config: cfg,
            text,
            root_path
        }
    }
}

#[async_trait::async_trait]
impl Command for SearchCommand {
    async fn execute(&self) -> Result<()> {
        let engine = SheetSearchEngine::new(self.config.search_config());
        let results = engine
            .search(&self.root_path, &self.text)
            .wrap_err("搜索失败")?;

        println!("{}", serde_json::to_string_pretty(&results)?);
        Ok(())
    }
}
