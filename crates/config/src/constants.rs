pub const TOP_LEVEL_DOMAIN: &str = "org";
pub const AUTHOR: &str = "sheet-search";
pub const APP_NAME: &str = "sheet-search";

pub const SERVER_CONFIG_FILE_NAME: &str = "server.toml";

/// 服务默认监听地址
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";
/// 未配置时默认扫描的表格目录
pub const DEFAULT_DATA_DIR: &str = "./xlsx_files";
pub const DEFAULT_EXTENSION: &str = "xlsx";

/// RPC 单帧上限（字节）。搜索结果是最大的响应，16 MiB 约可容纳十万条命中
pub const MAX_FRAME_LENGTH: usize = 16 * 1024 * 1024;
