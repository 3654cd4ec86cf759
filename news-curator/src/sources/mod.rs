pub mod bloomberg_feed;
pub mod guardian_feed;
pub mod rss_feed;
pub mod topics_api;

pub use bloomberg_feed::BloombergFeedSource;
pub use guardian_feed::GuardianFeedSource;
pub use rss_feed::{RssFeedSource, SummaryPolicy};
pub use topics_api::TopicsApiSource;
