//! 命令行客户端 - 调用表格搜索服务
//!
//! 运行方式:
//! 1. 先启动服务: cargo run -p server -- serve
//! 2. 运行客户端: cargo run -p client -- search apple

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use rpc::{RequestError, SheetSearchClient};
use tarpc::{client, context, tokio_serde::formats::Json};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Server address
    #[arg(long, default_value = config::constants::DEFAULT_LISTEN_ADDR)]
    addr: SocketAddr,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that the server is up
    Ping,
    /// Rebuild the server's spreadsheet index
    Index,
    /// List spreadsheets that are new or changed since last seen
    Changes,
    /// Search every cell for a piece of text
    Search { text: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut connect = tarpc::serde_transport::tcp::connect(cli.addr, Json::default);
    connect.config_mut().max_frame_length(config::constants::MAX_FRAME_LENGTH);
    let transport = connect.await?;
    let client = SheetSearchClient::new(client::Config::default(), transport).spawn();

    let output = match cli.command {
        Commands::Ping => {
            let response = client.ping(context::current()).await?;
            serde_json::to_string_pretty(&response)?
        }
        Commands::Index => {
            let report = client.rebuild_index(context::current()).await?.map_err(request_error)?;
            serde_json::to_string_pretty(&report)?
        }
        Commands::Changes => {
            let report = client.check_for_changes(context::current()).await?.map_err(request_error)?;
            serde_json::to_string_pretty(&report)?
        }
        Commands::Search { text } => {
            let hits = client.search_text(context::current(), text).await?.map_err(request_error)?;
            serde_json::to_string_pretty(&hits)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn request_error(e: RequestError) -> anyhow::Error {
    match e {
        RequestError::BadRequest(msg) => anyhow::anyhow!("请求无效: {}", msg),
        RequestError::Failed(msg) => anyhow::anyhow!("服务端错误: {}", msg),
    }
}
