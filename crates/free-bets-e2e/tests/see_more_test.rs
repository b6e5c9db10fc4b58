// Integration tests for "see more" pagination
//
// Tests cover:
// - Count in the see-more label drops after a click (with late updates)
// - No drop within the retry window
// - Labels without a parenthesised count at either read

mod mock_page;

use free_bets_e2e::{Error, FreeBetsPage, LOCATORS};
use mock_page::{MockElement, MockPage, conforming_page, see_more, test_config};

#[tokio::test]
async fn test_see_more_reduces_remaining_count() {
    let page = FreeBetsPage::new(conforming_page(), test_config());
    assert_eq!(page.offer_card_count().await.unwrap(), 12);

    page.visit()
        .await
        .expect("Failed to visit")
        .click_see_more_and_verify()
        .await
        .expect("Count should drop after clicking see more");

    let state = page.driver().state();
    assert_eq!(state.clicks, [see_more().to_string()]);
    assert_eq!(
        state.element(&see_more()).unwrap().text,
        "See More (12)"
    );
    drop(state);

    assert_eq!(page.offer_card_count().await.unwrap(), 24);
    assert_eq!(page.promo_card_count().await.unwrap(), 24);
}

#[tokio::test]
async fn test_unchanged_count_times_out() {
    let mock = MockPage::new()
        .with_element(&see_more(), MockElement::visible().text("See More (24)"))
        .on_click(&see_more(), |_| {});
    let page = FreeBetsPage::new(mock, test_config());

    let err = page
        .click_see_more_and_verify()
        .await
        .err()
        .expect("Count that never drops should fail");

    match err {
        Error::AssertionTimeout(message) => {
            assert!(message.contains("drop below 24"), "{}", message);
            assert!(message.contains("was 24"), "{}", message);
        }
        other => panic!("expected an assertion timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_label_without_count_fails_before_click() {
    let mock = MockPage::new().with_element(&see_more(), MockElement::visible().text("See More"));
    let page = FreeBetsPage::new(mock, test_config());

    let err = page
        .click_see_more_and_verify()
        .await
        .err()
        .expect("Label without a count should fail");

    assert!(matches!(err, Error::CountNotFound(ref text) if text == "See More"));
    assert!(page.driver().state().clicks.is_empty());
}

#[tokio::test]
async fn test_label_losing_count_after_click_fails_immediately() {
    let mock = MockPage::new()
        .with_element(&see_more(), MockElement::visible().text("See More (24)"))
        .on_click(&see_more(), |state| {
            state.set_text(&see_more(), "Loading...");
        });
    let page = FreeBetsPage::new(mock, test_config().assertion_timeout(std::time::Duration::from_secs(30)));

    let started = std::time::Instant::now();
    let err = page
        .click_see_more_and_verify()
        .await
        .err()
        .expect("Label without a count after the click should fail");

    assert!(matches!(err, Error::CountNotFound(ref text) if text == "Loading..."));
    assert!(
        started.elapsed() < std::time::Duration::from_secs(5),
        "parse failures must not be retried"
    );
}

#[tokio::test]
async fn test_hidden_see_more_button_fails() {
    let mock = MockPage::new()
        .with_element(&see_more(), MockElement::hidden().text("See More (24)"))
        .with_count(&LOCATORS.all_offer_cards(), 24);
    let page = FreeBetsPage::new(mock, test_config());

    let err = page
        .click_see_more_and_verify()
        .await
        .err()
        .expect("Hidden button should fail the visibility check");

    assert!(matches!(err, Error::AssertionTimeout(_)));
    assert!(page.driver().state().clicks.is_empty());
}
