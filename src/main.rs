use axum::{
    routing::{get, post},
    Router,
};
use sales_dashboard_rust::{api, AppConfig, ReportService};
use std::sync::Arc;
use tower::ServiceBuilder;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env();
    info!("Starting server with config: {:?}", config);

    // 报表服务 (无状态, 每次上传独立计算)
    let report_service = Arc::new(ReportService::new());

    // 构建路由
    let app = Router::new()
        .route("/health", get(api::health_check))
        .route("/api/template", get(api::download_template))
        .route("/api/report", post(api::build_report))
        .route("/api/report/export", post(api::export_report))
        .with_state(report_service)
        .layer(ServiceBuilder::new());

    // 启动服务器
    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET  /api/template       - modele_ventes.xlsx download");
    info!("  POST /api/report         - upload sales file, JSON report");
    info!("  POST /api/report/export  - upload sales file, top_clients.xlsx download");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
