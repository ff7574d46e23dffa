use crate::core::AppConfig;
use crate::routes::{page_links_routes, ListingState};
use actix_web::{dev::Server, web::Data, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct PageLinksWebServer {
    port: u16,
    server: Server,
}

impl PageLinksWebServer {
    pub async fn build(configuration: AppConfig) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.page_links_server_config.host,
            configuration.page_links_server_config.port
        );

        let listing_state = ListingState::from_config(&configuration)?;

        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let server = run(listener, listing_state).await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub async fn run(listener: TcpListener, listing_state: ListingState) -> Result<Server, anyhow::Error> {
    let listing_state = Data::new(listing_state);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .configure(page_links_routes)
            .app_data(listing_state.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
