use std::fmt::{Debug, Display};

use page_links::core::{get_subscriber, init_subscriber, AppConfig};
use page_links::page_links_web_server::PageLinksWebServer;
use tokio::task::JoinError;

use colored::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let file_appender = tracing_appender::rolling::daily("/var/tmp/log/page_links", "app");

    let subscriber = get_subscriber("page_links".into(), "info".into(), file_appender);
    init_subscriber(subscriber);

    let config = AppConfig::new()?;

    let page_links_web_server = PageLinksWebServer::build(config.clone()).await?;
    let port = page_links_web_server.port();

    let server_task = tokio::spawn(page_links_web_server.run_until_stopped());

    println!("{}", "-----------------------------------------".green());
    println!(
        "🚀 Server started on Addr: {}:{}",
        config.page_links_server_config.host, port
    );
    println!("{}", "-----------------------------------------".green());

    tokio::select! {
        outcome = server_task => { report_exit("page_links_web_server", outcome); }
    }
    Ok(())
}

fn report_exit(task_name: &str, outcome: Result<Result<(), impl Debug + Display>, JoinError>) {
    match outcome {
        Ok(Ok(())) => {
            tracing::info!("{} has exited", task_name)
        }
        Ok(Err(e)) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "{} failed",
                task_name
            )
        }
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "{}' task failed to complete",
                task_name
            )
        }
    }
}
