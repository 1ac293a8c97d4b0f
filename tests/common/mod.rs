//! Common test utilities and helpers

#![allow(dead_code)]

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Path of a file under `tests/fixtures`
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Contents of a file under `tests/fixtures`
pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture should be readable")
}

/// Expected rendering of `statistics.json`
pub const STATISTICS_LINES: &str = "mesos_tasks,task_name=web cpus_limit=1.100,cpus_system_time_secs=3.000,cpus_user_time_secs=11.500,disk_limit_bytes=1073741824.000,disk_perc=25.000,disk_used_bytes=268435456.000,instances=2.000,mem_limit_bytes=167772160.000,mem_perc=31.250,mem_rss_bytes=52428800.000
mesos_tasks,task_name=worker cpus_limit=0.500,instances=1.000,mem_limit_bytes=0.000,mem_rss_bytes=1048576.000";

/// Behaviour of the mock agent's statistics endpoint
#[derive(Clone)]
pub enum AgentResponse {
    Body(String),
    Status(StatusCode),
    Delayed(Duration, String),
}

/// Serve `/monitor/statistics.json` on an ephemeral local port.
///
/// Returns the base URL to hand to the client. The server lives until the
/// test runtime shuts down.
pub async fn spawn_mock_agent(response: AgentResponse) -> String {
    let app = Router::new().route(
        "/monitor/statistics.json",
        get(move || {
            let response = response.clone();
            async move {
                match response {
                    AgentResponse::Body(body) => (StatusCode::OK, body),
                    AgentResponse::Status(status) => (status, String::new()),
                    AgentResponse::Delayed(delay, body) => {
                        tokio::time::sleep(delay).await;
                        (StatusCode::OK, body)
                    }
                }
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock agent");
    let addr: SocketAddr = listener.local_addr().expect("mock agent address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock agent server");
    });

    format!("http://{addr}")
}
