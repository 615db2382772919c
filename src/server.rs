use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use crate::config::AppConfig;
use crate::database::Store;
use crate::middlewares::RequestLog;
use crate::router;

/// Bind the HTTP listener and return the running server
///
/// The store must already be initialized.
pub fn run(config: &AppConfig, store: Store) -> std::io::Result<Server> {
    let store = Data::new(store);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(RequestLog)
            .app_data(store.clone())
            .configure(router::route)
    });

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    Ok(server
        .bind((config.server.host.as_str(), config.server.port))?
        .run())
}
