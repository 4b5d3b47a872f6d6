extern crate actix_web;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate diesel;
#[macro_use]
extern crate derive_more;
extern crate dotenv;
extern crate env_logger;
#[macro_use]
extern crate log;

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod rating;
mod schema;
mod templates;

#[cfg(test)]
mod test_util;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use self::config::Config;
use self::error::Result;

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;

    // Create a connection pool to the database
    let pool = db::create_pool(&config.database_url, config.pool_size)?;
    db::run_migrations(&pool)?;

    let listen_addr = config.listen_addr;
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(Logger::default())
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind(listen_addr)?;

    info!("Listening on {}", listen_addr);

    server.run().await?;

    Ok(())
}
