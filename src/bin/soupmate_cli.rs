use std::sync::Arc;

use anyhow::{Context, Result};
use soupmate::components::{App, Command, Flow};
use soupmate::config::Config;
use soupmate::{HttpApiService, init_tracing};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

// Everything runs on one thread; a command finishes before the next line is read.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_level);

    let api = HttpApiService::new(&config.backend_url);
    info!("Talking to backend at {}", api.base());

    let mut app = App::new(Arc::new(api));
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(app.render().as_bytes()).await?;
    stdout.write_all(b"(/help for commands)\n").await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if app.dispatch(Command::parse(&line)).await == Flow::Quit {
            break;
        }
        stdout.write_all(b"\n").await?;
        stdout.write_all(app.render().as_bytes()).await?;
        stdout.flush().await?;
    }

    Ok(())
}
