use std::fs::{self, File};

use clap::Parser;
use estate_admin::dataset::DataFile;
use estate_admin::prefs::{PrefsStore, SqliteBackend};
use estate_admin::{AdminApp, AdminConfig, Cli, Result, demo, paths};
use simplelog::{Config, WriteLogger};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

fn init_logging(config: &AdminConfig) -> Result<()> {
    let Some(log_path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir)?;
    }
    paths::rotate_logs();
    let log_file = File::create(&log_path)?;
    WriteLogger::init(config.log_level, Config::default(), log_file)?;
    Ok(())
}

async fn open_prefs(config: &AdminConfig) -> Result<PrefsStore> {
    let Some(path) = &config.prefs_db else {
        log::info!("Keeping list preferences in memory");
        return Ok(PrefsStore::in_memory());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    log::info!("Opening preferences at {}", path.display());
    Ok(PrefsStore::new(SqliteBackend::open(path).await?))
}

async fn run(config: AdminConfig) -> Result<()> {
    let data = match &config.data_file {
        Some(path) => DataFile::load(path)?,
        None => demo::dataset(),
    };
    let prefs = open_prefs(&config).await?;
    let mut app = AdminApp::new(data, prefs, &config);

    let mut stdout = tokio::io::stdout();
    let intro = app.start().await?;
    stdout
        .write_all(format!("{}\nType 'help' for commands.\n> ", intro).as_bytes())
        .await?;
    stdout.flush().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let reply = app.handle_line(&line).await?;
        if reply.quit {
            break;
        }
        stdout
            .write_all(format!("{}\n> ", reply.output).as_bytes())
            .await?;
        stdout.flush().await?;
    }
    log::info!("Exiting");
    Ok(())
}

#[tokio::main]
async fn main() {
    let config = match AdminConfig::from_cli(Cli::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = init_logging(&config) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    if let Err(e) = run(config).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
