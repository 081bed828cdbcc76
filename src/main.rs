use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use std::sync::Arc;
use tokio::sync::Mutex;

use timbadao_backend::{
    config::Config,
    contract::MockLotteryContract,
    database::{create_pool, run_migrations},
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
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

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration file");

    // 创建数据库连接池
    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    // 运行数据库迁移
    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // mock 彩票合约 (仅本地调试; 非开发环境下调试接口整体 403)
    let contract = Arc::new(Mutex::new(MockLotteryContract::new(config.contract.clone())));

    // 创建服务
    let game_service = GameService::new(pool.clone(), config.contract.clone());
    let ong_service = OngService::new(pool.clone());
    let draw_service = DrawService::new(pool.clone(), contract.clone());

    let environment = config.server.environment;

    // 启动HTTP服务器
    log::info!(
        "Starting HTTP server at {}:{} ({:?})",
        config.server.host,
        config.server.port,
        environment,
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(environment))
            .app_data(web::Data::new(contract.clone()))
            .app_data(web::Data::new(game_service.clone()))
            .app_data(web::Data::new(ong_service.clone()))
            .app_data(web::Data::new(draw_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api")
                    .configure(handlers::game_config)
                    .configure(handlers::ong_config)
                    .configure(handlers::admin_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
