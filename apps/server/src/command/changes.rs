use super::Command;
use crate::error::{Result, WrapErr};
use crate::config::Config;
use search_core::SheetSearchEngine;
use std::path::PathBuf;

/// 对空索引做一次变更检查
///
/// 索引只存在于进程内存中，单次运行时目录下的每个表格文件都是新发现的，
/// 输出即目录当前的文件清单与修改时间。
pub struct ChangesCommand {
    config: Config,
    root_path: PathBuf,
}

impl ChangesCommand {
    pub fn new(cfg: Config, root_path: Option<PathBuf>) -> Self {
        let root_path = root_path.unwrap_or_else(|| cfg.data_dir.clone());
        Self {
            config: cfg,
            root_path
        }
    }
}

#[async_trait::async_trait]
impl Command for ChangesCommand {
    async fn execute(&self) -> Result<()> {
        let engine = SheetSearchEngine::new(self.config.search_config());
        let changed = engine
            .check_for_changes(&self.root_path)
            .wrap_err_with(|| format!("检查变更失败: {:?}", self.root_path))?;

        println!("{}", serde_json::to_string_pretty(&changed)?);
        Ok(())
    }
}
