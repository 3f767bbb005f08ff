use super::Command;
use crate::config::Config;
use futures::{future, prelude::*};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use rpc::{
    RequestError, SheetSearch,
    index::{ChangeReport, IndexReport},
    search::SearchHit,
};
use tarpc::{
    context::Context,
    server::{self, Channel},
    tokio_serde::formats::Json
};
use tokio_util::codec::length_delimited;

use config::constants::MAX_FRAME_LENGTH;

use search_core::{SheetSearchEngine, rpc_compat};

const WELCOME: &str = "表格文本搜索与索引服务";

/// 服务监听在网络上，对端给出的帧长度前缀必须有上限
fn limit_frames(codec: &mut length_delimited::Builder) {
    codec.max_frame_length(MAX_FRAME_LENGTH);
}

async fn spawn(fut: impl Future<Output = ()> + Send + 'static) {
    tokio::spawn(fut);
}

#[derive(Clone)]
struct Server {
    engine: Arc<SheetSearchEngine>,
    data_dir: Arc<PathBuf>,
}

impl Server {
    /// 在阻塞线程池中运行一次目录扫描
    async fn run_blocking<T, F>(&self, job: F) -> Result<T, RequestError>
    where
        T: Send + 'static,
        F: FnOnce(&SheetSearchEngine, &std::path::Path) -> search_core::Result<T> + Send + 'static,
    {
        let engine = self.engine.clone();
        let data_dir = self.data_dir.clone();

        tokio::task::spawn_blocking(move || job(engine.as_ref(), data_dir.as_path()))
            .await
            .map_err(|e| RequestError::Failed(format!("后台任务失败: {}", e)))?
            .map_err(RequestError::from)
    }
}

impl SheetSearch for Server {
    async fn ping(self, _c: Context) -> String {
        WELCOME.to_string()
    }

    async fn rebuild_index(self, _c: Context) -> Result<IndexReport, RequestError> {
        info!("收到索引请求");
        let files = self.run_blocking(|engine, dir| engine.rebuild_index(dir)).await?;

        Ok(IndexReport {
            message: "所有文件已索引".to_string(),
            files: rpc_compat::to_file_entries(files),
        })
    }

    async fn check_for_changes(self, _c: Context) -> Result<ChangeReport, RequestError> {
        info!("收到变更检查请求");
        let changed = self.run_blocking(|engine, dir| engine.check_for_changes(dir)).await?;

        Ok(ChangeReport {
            message: "新文件检查完成".to_string(),
            new_files: changed.into_iter().map(Into::into).collect(),
        })
    }

    async fn search_text(self, _c: Context, text: String) -> Result<Vec<SearchHit>, RequestError> {
        info!("收到搜索请求: {:?}", text);
        if text.is_empty() {
            warn!("搜索文本为空");
            return Err(RequestError::BadRequest("query is empty".to_string()));
        }

        let results = self.run_blocking(move |engine, dir| engine.search(dir, &text)).await?;
        Ok(rpc_compat::to_search_hits(results))
    }
}

pub struct ServeCommand {
    config: Config
}

impl ServeCommand {
    pub fn new(cfg: Config) -> Self {
        Self {
            config: cfg
        }
    }
}

#[async_trait::async_trait]
impl Command for ServeCommand {
    async fn execute(&self) -> crate::error::Result<()> {
        info!("正在初始化搜索引擎...");
        let engine = Arc::new(SheetSearchEngine::new(self.config.search_config()));
        let data_dir = Arc::new(self.config.data_dir.clone());

        if !data_dir.is_dir() {
            warn!("数据目录不存在: {:?}，请求将返回错误直到目录被创建", data_dir);
        }

        info!("数据目录 {:?}", data_dir);
        info!("监听 {}", self.config.listen_addr);

        let mut listener = tarpc::serde_transport::tcp::listen(self.config.listen_addr, Json::default).await?;
        limit_frames(listener.config_mut());

        let server = Server { engine, data_dir };

        listener
            .filter_map(|r| future::ready(r.ok()))
            .map(server::BaseChannel::with_defaults)
            .map(|channel| {
                let server = server.clone();
                channel.execute(server.serve()).for_each(spawn)
            })
            .buffer_unordered(10)
            .for_each(|_| async {})
            .await;

        Ok(())
    }
}
