use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct Selection {
    granularity: String,
    period: String,
    year: i32,
    key: String,
}

#[derive(Debug, Deserialize)]
struct OptionsResponse {
    periods: Vec<String>,
    show_year: bool,
    defaults: Selection,
}

#[derive(Debug, Deserialize)]
struct Card {
    title: String,
    amount: i64,
}

#[derive(Debug, Deserialize)]
struct DashboardResponse {
    selection: Selection,
    series_key: String,
    stats_key: String,
    fallback: bool,
    cards: Vec<Card>,
    charts: Value,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    requested: String,
    resolved: String,
    fallback: bool,
    record: Value,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/options")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_finance_dashboard"))
        .env("HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_json<T: serde::de::DeserializeOwned>(url: String) -> T {
    let response = Client::new().get(url).send().await.unwrap();
    assert!(response.status().is_success(), "status {}", response.status());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_index_serves_dashboard() {
    let server = shared_server().await;
    let response = Client::new().get(&server.base_url).send().await.unwrap();
    assert!(response.status().is_success());

    let body = response.text().await.unwrap();
    assert!(body.contains("Analytics Dashboard"));
    assert!(body.contains("granularity: 'Monthly'"));
}

#[tokio::test]
async fn http_options_reset_to_defaults() {
    let server = shared_server().await;
    let options: OptionsResponse =
        get_json(format!("{}/api/options?granularity=Annually", server.base_url)).await;

    assert_eq!(options.periods, vec!["2024", "2025"]);
    assert!(!options.show_year);
    assert_eq!(options.defaults.granularity, "Annually");
    assert_eq!(options.defaults.period, "2024");
    assert_eq!(options.defaults.key, "2024");
}

#[tokio::test]
async fn http_dashboard_selects_bucket() {
    let server = shared_server().await;
    let dashboard: DashboardResponse = get_json(format!(
        "{}/api/dashboard?granularity=Monthly&period=February&year=2024&revenue_chart=pie",
        server.base_url
    ))
    .await;

    assert_eq!(dashboard.selection.key, "February_2024");
    assert_eq!(dashboard.selection.year, 2024);
    assert_eq!(dashboard.series_key, "February_2024");
    assert_eq!(dashboard.stats_key, "February_2024");
    assert!(!dashboard.fallback);
    assert_eq!(dashboard.cards[0].title, "Total Revenue");
    assert_eq!(dashboard.cards[0].amount, 20250);

    let revenue = &dashboard.charts["revenue"];
    assert_eq!(revenue["type"], "pie");
    assert_eq!(revenue["data"]["datasets"][0]["data"][0], 20000);
    assert_eq!(revenue["data"]["datasets"][0]["data"][1], 15250);
    assert_eq!(dashboard.charts["expense"]["type"], "doughnut");
    assert_eq!(dashboard.charts["cashflow"]["type"], "bar");
}

#[tokio::test]
async fn http_dashboard_reports_fallback() {
    let server = shared_server().await;
    let dashboard: DashboardResponse = get_json(format!(
        "{}/api/dashboard?granularity=Monthly&period=July&year=2025",
        server.base_url
    ))
    .await;

    assert_eq!(dashboard.selection.key, "July_2025");
    assert_eq!(dashboard.series_key, "January_2024");
    assert!(dashboard.fallback);
}

#[tokio::test]
async fn http_dashboard_reports_stats_fallback_separately() {
    let server = shared_server().await;
    let dashboard: DashboardResponse = get_json(format!(
        "{}/api/dashboard?granularity=Monthly&period=January&year=2025",
        server.base_url
    ))
    .await;

    assert_eq!(dashboard.selection.key, "January_2025");
    assert_eq!(dashboard.series_key, "January_2025");
    assert_eq!(dashboard.stats_key, "January_2024");
    assert!(dashboard.fallback);
    assert_eq!(dashboard.cards[0].amount, 17750);
}

#[tokio::test]
async fn http_dashboard_rejects_typos() {
    let server = shared_server().await;
    let response = Client::new()
        .get(format!(
            "{}/api/dashboard?granularity=Monthly&period=Febuary",
            server.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.text().await.unwrap().contains("Febuary"));
}

#[tokio::test]
async fn http_lookup_by_composite_key() {
    let server = shared_server().await;
    let series: LookupResponse =
        get_json(format!("{}/api/series/Q3_2025", server.base_url)).await;
    assert_eq!(series.requested, "Q3_2025");
    assert_eq!(series.resolved, "Q3_2025");
    assert!(!series.fallback);
    assert_eq!(series.record["labels"][0], "Month 1");
    assert_eq!(series.record["series"]["income"][2], 171000);

    let stats: LookupResponse = get_json(format!("{}/api/stats/Q4_2024", server.base_url)).await;
    assert_eq!(stats.resolved, "Q1_2024");
    assert!(stats.fallback);
    assert_eq!(stats.record["total_revenue"], 252000);

    let response = Client::new()
        .get(format!("{}/api/series/Q9_2024", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_summary_totals() {
    let server = shared_server().await;
    let summary: Value = get_json(format!("{}/api/summary", server.base_url)).await;

    assert_eq!(summary["financials"]["total_revenue"], 328000);
    assert_eq!(summary["financials"]["total_expenses"], 223000);
    assert_eq!(summary["financials"]["net_profit"], 105000);
    assert_eq!(summary["charts"]["profit_trend"]["type"], "line");
    assert_eq!(summary["months"][0], "July");
}
