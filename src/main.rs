use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use apidemo_backend::config::Config;
use apidemo_backend::{db, routes};
use dotenv::dotenv;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(io::Error::other)?;

    // Initialize the database pool and bring the schema up to date
    let pool = db::create_pool(&config.database_url)
        .await
        .map_err(io::Error::other)?;
    db::migrate(&pool).await.map_err(io::Error::other)?;

    let (host, port) = config.bind_address();
    info!("Starting server at {}:{}", host, port);

    let pool = web::Data::new(pool);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(pool.clone())
            .app_data(config.clone())
            .configure(routes::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
