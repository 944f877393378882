mod config;
mod static_files;

use crate::config::ServerConfig;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use env_logger::Env;
use log::{info, warn};
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::from_env();
    let url = config.url();

    if !config.static_dir.join("index.html").exists() {
        warn!(
            "no index.html in {}, build the frontend first",
            config.static_dir.display()
        );
    }

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("could not open browser: {}", e);
            }
        });
    }

    info!("Server running at {}", url);

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(static_files::static_files(&static_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
