use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use config::{create_strategy, resolve_dir, server_config_path};
use config::constants::{DEFAULT_DATA_DIR, DEFAULT_EXTENSION, DEFAULT_LISTEN_ADDR};
use search_core::{SearchConfig, WalkerConfig};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default="default_config", deny_unknown_fields)]
pub struct Config {
    /// 服务监听地址
    pub listen_addr: SocketAddr,
    /// 存放表格文件的目录
    pub data_dir: PathBuf,
    /// 表格文件扩展名
    pub extension: String,
    pub follow_symlinks: bool,
    /// 0 表示不限制
    pub max_depth: usize,
}


fn default_config() -> Config {
    let data_dir = match create_strategy() {
        Ok(strategy) => resolve_dir("SHEET_SEARCH_DATA_DIR", &strategy, |_| {
            Some(PathBuf::from(DEFAULT_DATA_DIR))
        }),
        Err(_) => PathBuf::from(DEFAULT_DATA_DIR),
    };

    Config {
        listen_addr: DEFAULT_LISTEN_ADDR.parse().unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 3000))),
        data_dir,
        extension: DEFAULT_EXTENSION.to_string(),
        follow_symlinks: false,
        max_depth: 0,
    }
}


impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    pub fn load() -> Result<Config> {
        let strategy = create_strategy()?;
        let config_path = server_config_path(&strategy);

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // 配置文件不存在，创建示例配置文件
                Self::create_example_config(&config_path)?;
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 转换为搜索引擎配置
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            extension: self.extension.clone(),
            walker: WalkerConfig {
                follow_symlinks: self.follow_symlinks,
                max_depth: self.max_depth,
            },
        }
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        use std::io::Write;

        // 确保配置目录存在
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let example_config = r#"# Server 配置文件
#
# 此文件在首次运行时自动创建
# 配置修改后重启服务生效

# 服务监听地址
# listen-addr = "127.0.0.1:3000"

# 存放表格文件的目录（也可通过环境变量 SHEET_SEARCH_DATA_DIR 指定）
# data-dir = "./xlsx_files"

# 表格文件扩展名，比较时忽略大小写
# extension = "xlsx"

# 是否跟随符号链接
# follow-symlinks = false

# 最大遍历深度，0 表示不限制
# max-depth = 0
"#;

        let mut file = std::fs::File::create(config_path)?;
        file.write_all(example_config.as_bytes())?;

        eprintln!("\n📝 已创建配置文件: {:?}", config_path);
        eprintln!("💡 请编辑配置文件，设置 data-dir 为存放表格文件的目录\n");

        Ok(())
    }
}
