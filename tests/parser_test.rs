use news_aggregator::extract::pick_image;
use news_aggregator::parser::parse_feed;
use news_aggregator::Category;

const RSS_SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Philstar Business Headlines</title>
    <link>https://www.philstar.com/business</link>
    <description>Business news</description>
    <item>
      <title>Peso Rises</title>
      <link>https://www.philstar.com/business/peso-rises</link>
      <guid>abc123</guid>
      <pubDate>Tue, 01 Jul 2025 08:30:00 +0800</pubDate>
      <description>&lt;p&gt;The peso gained against the dollar.&lt;/p&gt;</description>
      <enclosure url="https://media.philstar.com/peso.jpg" length="12345" type="image/jpeg"/>
    </item>
    <item>
      <title>Markets Open Mixed</title>
      <link>https://www.philstar.com/business/markets-open</link>
      <guid>def456</guid>
      <pubDate>Tue, 01 Jul 2025 07:00:00 +0800</pubDate>
      <description>Trading was mixed at the open.</description>
      <content:encoded>&lt;p&gt;Full report.&lt;/p&gt;&lt;img src="https://media.philstar.com/psei.jpg"&gt;</content:encoded>
    </item>
  </channel>
</rss>"#;

const ATOM_SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Agency World Review</title>
  <id>urn:example:world</id>
  <updated>2025-07-01T02:00:00Z</updated>
  <entry>
    <title>Summit Concludes</title>
    <id>urn:example:world:summit</id>
    <link href="https://example.com/world/summit"/>
    <updated>2025-07-01T01:30:00Z</updated>
    <summary>Leaders wrapped up the summit.</summary>
    <author><name>Wire Service</name></author>
  </entry>
</feed>"#;

#[test]
fn parses_rss_items_into_raw_items() {
    let feed = parse_feed(RSS_SAMPLE).unwrap();

    assert_eq!(feed.title.as_deref(), Some("Philstar Business Headlines"));
    assert_eq!(feed.items.len(), 2);

    let peso = &feed.items[0];
    assert_eq!(peso.guid.as_deref(), Some("abc123"));
    assert_eq!(peso.link.as_deref(), Some("https://www.philstar.com/business/peso-rises"));
    assert!(peso.published.is_some());
    assert_eq!(peso.media_urls, vec!["https://media.philstar.com/peso.jpg"]);
    assert_eq!(
        pick_image(peso).as_deref(),
        Some("https://media.philstar.com/peso.jpg")
    );

    // Classification off the source label plus feed title.
    assert_eq!(
        Category::classify("Philstar", feed.title.as_deref().unwrap_or("")),
        Category::Business
    );
}

#[test]
fn rss_content_encoded_feeds_the_image_scan() {
    let feed = parse_feed(RSS_SAMPLE).unwrap();

    let markets = &feed.items[1];
    assert!(markets.media_urls.is_empty());
    let content = markets.content_html.as_deref().unwrap();
    assert!(content.contains("psei.jpg"));
    assert_eq!(
        pick_image(markets).as_deref(),
        Some("https://media.philstar.com/psei.jpg")
    );
}

#[test]
fn parses_atom_entries_with_updated_as_timestamp() {
    let feed = parse_feed(ATOM_SAMPLE).unwrap();

    assert_eq!(feed.title.as_deref(), Some("Agency World Review"));
    assert_eq!(feed.items.len(), 1);

    let entry = &feed.items[0];
    assert_eq!(entry.guid.as_deref(), Some("urn:example:world:summit"));
    assert_eq!(entry.link.as_deref(), Some("https://example.com/world/summit"));
    assert_eq!(entry.author.as_deref(), Some("Wire Service"));
    // No <published>; the updated timestamp stands in.
    assert!(entry.published.is_some());
    assert_eq!(entry.summary_html.as_deref(), Some("Leaders wrapped up the summit."));
}

#[test]
fn malformed_content_is_a_parse_error() {
    assert!(parse_feed("this is not a feed").is_err());
    assert!(parse_feed("").is_err());
}
