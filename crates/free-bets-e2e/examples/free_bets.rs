// Free Bets suite runner
//
// Runs every page-object scenario against the configured site and stops at
// the first failure. Configure with FREE_BETS_* variables and RUST_LOG:
//
//   RUST_LOG=free_bets_e2e=info cargo run -p free-bets-e2e --example free_bets

use free_bets_e2e::{BET365_BOOKIE_ID, BrowserSession, CardPosition, FreeBetsPage, SuiteConfig};

const GEOBLOCK_URL: &str = "https://www.bet365.com/crossdomainapi/geoblock";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = SuiteConfig::from_env()?;
    println!("Testing {}{}", config.base_url, FreeBetsPage::<free_bets_e2e::PlaywrightDriver>::PATH);
    let session = BrowserSession::launch(&config).await?;

    // Fresh page per scenario, like a test runner would give each case
    let page = FreeBetsPage::new(session.new_driver().await?, config.clone());
    page.visit_and_verify_loaded().await?;
    println!("✓ Page load");

    let page = FreeBetsPage::new(session.new_driver().await?, config.clone());
    page.visit()
        .await?
        .within_offer_card(BET365_BOOKIE_ID, CardPosition::First, async |card| {
            card.verify_common_elements().await?;
            card.verify_bet365_specific_elements().await?;
            Ok(())
        })
        .await?;
    println!("✓ Offer card components");

    let page = FreeBetsPage::new(session.new_driver().await?, config.clone());
    page.visit()
        .await?
        .click_offer_and_verify_new_tab(BET365_BOOKIE_ID, GEOBLOCK_URL)
        .await?;
    println!("✓ Offer link");

    let page = FreeBetsPage::new(session.new_driver().await?, config);
    page.visit().await?.click_see_more_and_verify().await?;
    println!("✓ See more");

    session.close().await?;
    Ok(())
}
