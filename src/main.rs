//! Console smoke client: lists the first page of clients from the
//! configured backend and prints any queued notices.

use assetdesk::ListController;
use assetdesk::api::rest::RestGateway;
use assetdesk::dto::client::ClientScreen;
use assetdesk::models::config::ServerConfig;
use assetdesk::prefs::FilePrefs;
use assetdesk::services::alert_level_to_str;
use assetdesk::services::controller::LoadState;

fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = ServerConfig::load("assetdesk")
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let gateway = RestGateway::new(&config)
        .map_err(|e| std::io::Error::other(format!("Failed to build gateway: {e}")))?;
    let prefs = FilePrefs::open(".assetdesk-prefs.json");

    let mut clients = ListController::<ClientScreen, _, _>::new(gateway, prefs);
    clients.load_page(1);

    for notice in clients.take_notices() {
        eprintln!("[{}] {}", alert_level_to_str(&notice.level), notice.message);
    }

    if clients.load_state() != LoadState::Loaded {
        return Err(std::io::Error::other("client listing failed"));
    }

    let info = clients.page_info();
    println!(
        "Clients, page {}/{} ({} total)",
        info.current_page, info.total_pages, info.total_items
    );
    for row in clients.rows() {
        println!(
            "{:<24} {:<28} {:<12} {:<10} {}",
            row.client_name, row.email, row.mobile, row.status, row.created_on
        );
    }

    Ok(())
}
