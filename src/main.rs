//! Storefront JSON API Server

use std::process;

use salvo::{
    affix_state::inject,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors},
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use crate::{config::ServerConfig, state::State};

mod categories;
mod config;
mod database;
mod extensions;
mod healthcheck;
mod observability;
mod orders;
mod products;
mod responses;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;
mod users;

/// Storefront JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    if let Err(subscriber_error) = observability::logging::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln to report it"
        )]
        {
            eprintln!("Logging error: {subscriber_error}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let database = match database::connect(&config.database).await {
        Ok(database) => database,
        Err(connect_error) => {
            error!("failed to connect to document store: {connect_error}");

            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(observability::request::request_logging)
        .hoop(inject(State::from_database(&database)))
        .get(healthcheck::handler)
        .push(
            Router::with_path("api")
                .push(
                    Router::with_path("users")
                        .get(users::index::handler)
                        .post(users::create::handler)
                        .push(
                            Router::with_path("{uid}")
                                .get(users::get::handler)
                                .put(users::update::handler)
                                .delete(users::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("categories")
                        .get(categories::index::handler)
                        .post(categories::create::handler)
                        .push(
                            Router::with_path("products/{category}")
                                .get(products::by_category::handler),
                        )
                        .push(
                            Router::with_path("{id}")
                                .get(categories::get::handler)
                                .put(categories::update::handler)
                                .delete(categories::delete::handler),
                        ),
                )
                .push(
                    Router::with_path("products")
                        .get(products::index::handler)
                        .post(products::create::handler)
                        .push(
                            Router::with_path("{id}")
                                .get(products::get::handler)
                                .put(products::update::handler)
                                .delete(products::delete::handler),
                        ),
                )
                .push(Router::with_path("buy").post(orders::create::handler))
                .push(
                    Router::with_path("orders")
                        .get(orders::index::handler)
                        .push(Router::with_path("user/{uid}").get(orders::by_user::handler))
                        .push(
                            Router::with_path("{id}")
                                .get(orders::get::handler)
                                .delete(orders::delete::handler),
                        ),
                ),
        )
        // Preflight requests may target any route
        .push(Router::with_path("{**}").options(salvo::handler::empty()));

    let doc = OpenApi::new("Storefront API", "0.1.0").merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let cors = Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::any())
        .allow_headers(AllowHeaders::any())
        .into_handler();

    let service = Service::new(router).hoop(cors);

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(signal_error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {signal_error}");
        }
    });

    // Start serving requests
    server.serve(service).await;
}
