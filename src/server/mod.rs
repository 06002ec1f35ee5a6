pub mod api;

use std::error::Error;
use std::net::SocketAddr;

use log::info;

use crate::cli::Args;
use api::AppState;

pub struct Server {
    addr: SocketAddr,
    state: AppState,
    args: Args,
}

impl Server {
    pub fn new(state: AppState, args: Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let addr = format!("{}:{}", args.server_host, args.port).parse::<SocketAddr>()?;
        Ok(Self { addr, state, args })
    }

    pub async fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = api::build_router(self.state, &self.args);

        info!("Starting HTTP server on: http://{}", self.addr);
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        axum::serve(listener, app.into_make_service()).await?;

        Ok(())
    }
}
