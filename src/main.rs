mod cli;

use anyhow::Context;
use cadvault::core::{db, repo::Repository};
use cadvault::server::{rpc, seed};
use clap::Parser;
use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let db_path = args.db.unwrap_or_else(db::default_db_path);
    let db_path = db_path.to_string_lossy().to_string();

    match args.command {
        Command::Init => {
            let conn = db::open(&db_path).context("failed to initialize database")?;
            drop(conn);
            println!("Database initialized at {db_path}");
        }
        Command::Seed => {
            let conn = db::open(&db_path)?;
            let repo = Repository::new(conn);
            let summary = seed::seed(&repo).map_err(|e| anyhow::anyhow!(e.to_string()))?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Serve => {
            let conn = db::open(&db_path)?;
            let repo = Repository::new(conn);
            rpc::serve(&repo)?;
        }
        Command::Call { op, params } => {
            let conn = db::open(&db_path)?;
            let repo = Repository::new(conn);
            let params = match params {
                Some(text) => serde_json::from_str(&text).context("invalid --params JSON")?,
                None => serde_json::Value::Null,
            };
            let request =
                rpc::RpcRequest { op, params, id: rpc::default_request_id() };
            let response = rpc::dispatch(&repo, &request);
            println!("{}", serde_json::to_string_pretty(&response)?);
            if !response.success {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
