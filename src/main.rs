use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use std::sync::Arc;

use par3_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    external::{SendGridService, StripeService},
    handlers,
    middlewares::{AuthMiddleware, create_cors},
    services::*,
    swagger::swagger_config,
    utils::JwtService,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    let config = Config::from_toml().expect("Failed to load configuration");

    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    let pool = Arc::new(pool);

    let jwt_service = JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expires_in,
        config.jwt.refresh_token_expires_in,
    );

    // External providers degrade to errors per-request when unconfigured;
    // the process itself always comes up.
    let stripe_service = StripeService::new(&config.stripe);
    let sendgrid_service = SendGridService::new(&config.sendgrid);

    let auth_service = AuthService::new(config.admin.clone(), jwt_service.clone());
    let claim_service = ClaimService::new(pool.clone(), sendgrid_service.clone());
    let player_service = PlayerService::new(pool.clone());
    let course_service = CourseService::new(pool.clone());
    let tournament_service = TournamentService::new(pool.clone());
    let customer_service = CustomerService::new(pool.clone());
    let accounting_service = AccountingService::new(pool.clone());
    let special_service = SpecialService::new(pool.clone());
    let event_service = EventService::new(pool.clone());
    let notification_service = NotificationService::new(pool.clone(), sendgrid_service.clone());
    let payment_service = PaymentService::new(stripe_service.clone());

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    let cors_config = config.cors.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors(&cors_config))
            .wrap(AuthMiddleware::new(jwt_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(claim_service.clone()))
            .app_data(web::Data::new(player_service.clone()))
            .app_data(web::Data::new(course_service.clone()))
            .app_data(web::Data::new(tournament_service.clone()))
            .app_data(web::Data::new(customer_service.clone()))
            .app_data(web::Data::new(accounting_service.clone()))
            .app_data(web::Data::new(special_service.clone()))
            .app_data(web::Data::new(event_service.clone()))
            .app_data(web::Data::new(notification_service.clone()))
            .app_data(web::Data::new(payment_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::auth_config)
                    .configure(handlers::claim_config)
                    .configure(handlers::player_config)
                    .configure(handlers::course_config)
                    .configure(handlers::tournament_config)
                    .configure(handlers::crm_config)
                    .configure(handlers::accounting_config)
                    .configure(handlers::special_config)
                    .configure(handlers::event_config)
                    .configure(handlers::payment_config)
                    .configure(handlers::notification_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
