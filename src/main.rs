use actix_web::{middleware::Logger, web, App, HttpServer};

use mcq_generator::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    if let Err(e) = config.validate() {
        log::error!("{}", e);
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }

    let bind = (config.web_server_host.clone(), config.web_server_port);
    log::info!(
        "Starting MCQ generator on http://{}:{} (model: {})",
        bind.0,
        bind.1,
        config.llm_model
    );

    let state = web::Data::new(AppState::new(config));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind(bind)?
    .run()
    .await
}
