mod common;

use common::{fetcher, init_tracing, pub_date_hours_ago, rss_document};
use news_curator::{filter_recent, ArticleSource, BloombergFeedSource, GuardianFeedSource, Source};

#[tokio::test]
async fn guardian_feeds_are_stripped_and_sectioned() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;

    let long_summary = format!("<p>{}</p>", "x".repeat(700));
    let world = server
        .mock("GET", "/world/rss")
        .with_status(200)
        .with_header("content-type", "application/rss+xml")
        .with_body(rss_document(&[
            ("Hello", "https://guardian.test/hello", "<p>Hello <b>world</b></p>", Some(pub_date_hours_ago(1))),
            ("Long", "https://guardian.test/long", long_summary.as_str(), None),
        ]))
        .create_async()
        .await;
    let odd = server
        .mock("GET", "/lifeandstyle/rss")
        .with_status(200)
        .with_body(rss_document(&[("Recipe", "https://guardian.test/recipe", "Soup", None)]))
        .create_async()
        .await;

    let source = GuardianFeedSource::with_feeds(
        vec![
            format!("{}/world/rss", server.url()),
            format!("{}/lifeandstyle/rss", server.url()),
        ],
        fetcher(),
    );
    let articles = source.pull().await;

    world.assert_async().await;
    odd.assert_async().await;
    assert_eq!(articles.len(), 3);

    assert_eq!(articles[0].source, Source::Guardian);
    assert_eq!(articles[0].section, "world");
    assert_eq!(articles[0].abstract_text, "Hello world");
    assert!(articles[0].published_date.ends_with('Z'));

    assert_eq!(articles[1].abstract_text.chars().count(), 500);
    assert_eq!(articles[1].published_date, "");

    assert_eq!(articles[2].section, "general");
}

#[tokio::test]
async fn unreadable_pub_date_is_stored_verbatim_and_kept() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;

    let _markets = server
        .mock("GET", "/markets/news.rss")
        .with_status(200)
        .with_body(rss_document(&[
            (
                "Vague timing",
                "https://bloomberg.test/vague",
                "Later",
                Some("Tuesday morning, 10am EST".to_string()),
            ),
            ("Dated", "https://bloomberg.test/dated", "Now", Some(pub_date_hours_ago(1))),
        ]))
        .create_async()
        .await;

    let source = BloombergFeedSource::with_feeds(vec![format!("{}/markets/news.rss", server.url())], fetcher());
    let articles = source.pull().await;

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].published_date, "Tuesday morning, 10am EST");
    assert!(articles[1].published_date.ends_with('Z'));

    let kept = filter_recent(articles, 48);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].url, "https://bloomberg.test/vague");
}

#[tokio::test]
async fn bloomberg_keeps_raw_summaries() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;

    let _markets = server
        .mock("GET", "/markets/news.rss")
        .with_status(200)
        .with_body(rss_document(&[(
            "Stocks rally",
            "https://bloomberg.test/rally",
            "<b>Up</b> again",
            Some(pub_date_hours_ago(2)),
        )]))
        .create_async()
        .await;

    let source = BloombergFeedSource::with_feeds(vec![format!("{}/markets/news.rss", server.url())], fetcher());
    let articles = source.pull().await;

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].source, Source::Bloomberg);
    assert_eq!(articles[0].section, "markets");
    assert_eq!(articles[0].abstract_text, "<b>Up</b> again");
    assert_eq!(articles[0].url, "https://bloomberg.test/rally");
}

#[tokio::test]
async fn failing_feed_does_not_stop_the_others() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;

    let _broken = server
        .mock("GET", "/markets/news.rss")
        .with_status(500)
        .create_async()
        .await;
    let _garbage = server
        .mock("GET", "/technology/news.rss")
        .with_status(200)
        .with_body("this is not xml")
        .create_async()
        .await;
    let _politics = server
        .mock("GET", "/politics/news.rss")
        .with_status(200)
        .with_body(rss_document(&[
            ("One", "https://bloomberg.test/1", "a", None),
            ("Two", "https://bloomberg.test/2", "b", None),
        ]))
        .create_async()
        .await;

    let source = BloombergFeedSource::with_feeds(
        vec![
            format!("{}/markets/news.rss", server.url()),
            format!("{}/technology/news.rss", server.url()),
            format!("{}/politics/news.rss", server.url()),
        ],
        fetcher(),
    );
    let articles = source.pull().await;

    assert_eq!(articles.len(), 2);
    assert!(articles.iter().all(|a| a.section == "politics"));
}
