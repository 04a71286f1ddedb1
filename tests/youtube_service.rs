mod common;

use common::{service, MockTransport, API_KEY};
use youtube_data::{ChannelImageType, ThumbnailSize, YoutubeError};

#[tokio::test]
async fn test_search_returns_mapped_page() -> anyhow::Result<()> {
    let transport = MockTransport::default();
    transport.add_fixture("search.json");
    let youtube = service(&transport);

    let result = youtube.search("surfing", 5, &[]).await?;

    let query = transport.last_query();
    assert_eq!(query["key"], API_KEY);
    assert_eq!(query["q"], "surfing");
    assert_eq!(query["maxResults"], "5");
    assert_eq!(query["part"], "snippet");
    assert_eq!(query["type"], "video");
    assert_eq!(transport.requests()[0].path(), "/youtube/v3/search");

    assert_eq!(result.prev_page_token(), Some("ABCDEF"));
    assert_eq!(result.next_page_token(), Some("CAUQAA"));
    assert_eq!(result.total_results(), Some(1000000));

    let videos = result.videos()?;
    assert_eq!(videos.len(), 5);

    let video = &videos[0];
    assert_eq!(video.video_id(), "fNr8kqSLpxQ");
    assert_eq!(video.title(), Some("World's best surfing 2014/2015 (HD)"));
    assert_eq!(video.description(), Some("Follow us on Twitter ..."));
    assert_eq!(video.url(), "https://www.youtube.com/watch?v=fNr8kqSLpxQ");
    assert_eq!(video.channel_id(), Some("UC3Yc0vyFkYXB1_njh3uj7yw"));
    assert_eq!(video.channel_title(), Some("IcompilationTV"));
    assert_eq!(
        video.published_at().unwrap().format("%Y-%m-%d").to_string(),
        "2014-11-12"
    );
    assert_eq!(video.live_broadcast_content(), Some("none"));
    assert!(video.statistics().is_none());

    assert_eq!(video.thumbnails().len(), 3);
    let thumbnail = video.thumbnail(ThumbnailSize::Default).unwrap();
    assert_eq!(thumbnail.url(), "https://i.ytimg.com/vi/fNr8kqSLpxQ/default.jpg");
    assert_eq!(thumbnail.width(), Some(120));
    assert_eq!(thumbnail.height(), Some(90));

    Ok(())
}

#[tokio::test]
async fn test_search_extra_params_override_defaults() -> anyhow::Result<()> {
    let transport = MockTransport::default();
    transport.add_fixture("search.json");
    let youtube = service(&transport);

    youtube
        .search("surfing", 5, &[("order", "date"), ("part", "id,snippet")])
        .await?;

    let query = transport.last_query();
    assert_eq!(query["order"], "date");
    assert_eq!(query["part"], "id,snippet");
    assert_eq!(query["q"], "surfing");

    Ok(())
}

#[tokio::test]
async fn test_search_type_defaults_to_video_and_can_be_widened() -> anyhow::Result<()> {
    let transport = MockTransport::default();
    transport.add_fixture("search.json");
    transport.add_fixture("search.json");
    let youtube = service(&transport);

    youtube.search("surfing", 5, &[]).await?;
    assert_eq!(transport.last_query()["type"], "video");

    youtube
        .search("surfing", 5, &[("type", "video,channel")])
        .await?;
    let requests = transport.requests();
    let types: Vec<_> = requests[1]
        .query_pairs()
        .filter(|(name, _)| name == "type")
        .map(|(_, value)| value.into_owned())
        .collect();
    assert_eq!(types, vec!["video,channel"]);

    Ok(())
}

#[tokio::test]
async fn test_more_search_results_continues_last_search() -> anyhow::Result<()> {
    let transport = MockTransport::default();
    transport.add_fixture("search.json");
    transport.add_fixture("search_last_page.json");
    let youtube = service(&transport);

    youtube.search("surfing", 5, &[("order", "viewCount")]).await?;
    assert!(youtube.has_more_results());

    let page = youtube.more_search_results().await?;

    let query = transport.last_query();
    assert_eq!(query["pageToken"], "CAUQAA");
    assert_eq!(query["q"], "surfing");
    assert_eq!(query["order"], "viewCount");
    assert_eq!(query["key"], API_KEY);

    assert_eq!(page.videos()?[0].video_id(), "p6eP7TbG3s0");
    assert!(!youtube.has_more_results());

    let exhausted = youtube.more_search_results().await;
    assert!(matches!(exhausted, Err(YoutubeError::State(_))));
    assert_eq!(transport.requests().len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_more_search_results_without_search() {
    let transport = MockTransport::default();
    let youtube = service(&transport);

    let result = youtube.more_search_results().await;

    assert!(matches!(result, Err(YoutubeError::State(_))));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_lookups_do_not_reset_search_cursor() -> anyhow::Result<()> {
    let transport = MockTransport::default();
    transport.add_fixture("search.json");
    transport.add_fixture("video_list.json");
    transport.add_fixture("search_last_page.json");
    let youtube = service(&transport);

    youtube.search("surfing", 5, &[]).await?;
    youtube.get_video_by_id("Ks-_Mh1QhMc", &[]).await?;
    youtube.more_search_results().await?;

    assert_eq!(transport.last_query()["pageToken"], "CAUQAA");

    Ok(())
}

#[tokio::test]
async fn test_get_video_by_id() -> anyhow::Result<()> {
    let transport = MockTransport::default();
    transport.add_fixture("video_list.json");
    let youtube = service(&transport);

    let response = youtube.list_videos("Ks-_Mh1QhMc", &[]).await?;

    let query = transport.last_query();
    assert_eq!(query["id"], "Ks-_Mh1QhMc");
    assert_eq!(query["part"], "snippet,contentDetails,statistics");
    assert_eq!(query["key"], API_KEY);

    let video = response.video()?;
    assert!(std::ptr::eq(video, response.video()?));

    assert_eq!(video.video_id(), "Ks-_Mh1QhMc");
    assert_eq!(
        video.title(),
        Some("Your body language may shape who you are | Amy Cuddy")
    );
    assert_eq!(video.url(), "https://www.youtube.com/watch?v=Ks-_Mh1QhMc");
    assert_eq!(video.tags(), ["Amy Cuddy", "TED", "psychology"]);
    assert_eq!(video.thumbnails().len(), 5);

    let stats = video.statistics().unwrap();
    assert_eq!(stats.view_count(), Some(14411293));
    assert_eq!(stats.comment_count(), Some(7045));

    let details = video.details().unwrap();
    assert_eq!(details.duration().minutes(), 21);
    assert_eq!(details.caption(), Some("true"));
    assert!(details.is_licensed_content());

    Ok(())
}

#[tokio::test]
async fn test_get_video_by_id_with_parts() -> anyhow::Result<()> {
    let transport = MockTransport::default();
    transport.add_fixture("video_list.json");
    let youtube = service(&transport);

    let video = youtube.get_video_by_id("Ks-_Mh1QhMc", &["snippet"]).await?;

    assert_eq!(transport.last_query()["part"], "snippet");
    assert_eq!(video.channel_title(), Some("TED"));

    Ok(())
}

#[tokio::test]
async fn test_unknown_video_is_not_found() {
    let transport = MockTransport::default();
    transport.add_response(
        200,
        r#"{ "kind": "youtube#videoListResponse", "pageInfo": { "totalResults": 0, "resultsPerPage": 0 }, "items": [] }"#,
    );
    let youtube = service(&transport);

    let result = youtube.get_video_by_id("does-not-exist", &[]).await;

    assert!(matches!(result, Err(YoutubeError::NotFound(_))));
}

#[tokio::test]
async fn test_get_channel_by_id() -> anyhow::Result<()> {
    let transport = MockTransport::default();
    transport.add_fixture("channel_list.json");
    let youtube = service(&transport);

    let response = youtube
        .list_channels(
            "UC_x5XG1OV2P6uZZ5FSM9Ttw",
            &["snippet", "contentDetails", "statistics"],
        )
        .await?;

    let query = transport.last_query();
    assert_eq!(query["id"], "UC_x5XG1OV2P6uZZ5FSM9Ttw");
    assert_eq!(query["part"], "snippet,contentDetails,statistics");
    assert_eq!(query["key"], API_KEY);
    assert_eq!(transport.requests()[0].path(), "/youtube/v3/channels");

    let channel = response.channel()?;
    assert_eq!(channel.id(), "UC_x5XG1OV2P6uZZ5FSM9Ttw");
    assert_eq!(channel.title(), Some("Google Developers"));
    assert_eq!(
        channel.description(),
        Some("The Google Developers channel features talks...")
    );
    assert_eq!(
        channel.url(),
        "https://www.youtube.com/channel/UC_x5XG1OV2P6uZZ5FSM9Ttw"
    );
    assert_eq!(channel.custom_url(), Some("GoogleDevelopers"));
    assert_eq!(
        channel.published_at().unwrap().format("%Y-%m-%d").to_string(),
        "2007-08-23"
    );
    assert_eq!(channel.thumbnails().len(), 3);
    assert!(channel.thumbnail(ThumbnailSize::Default).is_some());

    let brand = channel.branding_settings().unwrap();
    assert_eq!(brand.profile_color(), Some("#000000"));
    assert_eq!(brand.images().len(), 14);
    assert_eq!(
        brand
            .image_by_type(ChannelImageType::BannerImageUrl)
            .unwrap()
            .image_type(),
        ChannelImageType::BannerImageUrl.as_str()
    );

    Ok(())
}

#[tokio::test]
async fn test_channel_uses_default_parts() -> anyhow::Result<()> {
    let transport = MockTransport::default();
    transport.add_fixture("channel_list.json");
    let youtube = service(&transport);

    let channel = youtube.get_channel_by_id("UC_x5XG1OV2P6uZZ5FSM9Ttw", &[]).await?;

    assert_eq!(transport.last_query()["part"], "snippet");
    assert_eq!(channel.id(), "UC_x5XG1OV2P6uZZ5FSM9Ttw");

    Ok(())
}

#[tokio::test]
async fn test_api_error_is_surfaced() {
    let transport = MockTransport::default();
    transport.add_response(
        403,
        r#"{"error":{"code":403,"message":"The request cannot be completed because you have exceeded your quota.","errors":[{"message":"quota","domain":"youtube.quota","reason":"quotaExceeded"}]}}"#,
    );
    let youtube = service(&transport);

    let result = youtube.search("surfing", 5, &[]).await;

    match result {
        Err(YoutubeError::Api { status, reason, .. }) => {
            assert_eq!(status, 403);
            assert_eq!(reason.as_deref(), Some("quotaExceeded"));
        }
        other => panic!("expected an API error, got {:?}", other.map(|_| ())),
    }
    // a failed search leaves nothing to continue
    assert!(!youtube.has_more_results());
}

#[tokio::test]
async fn test_malformed_body_is_a_parse_error() {
    let transport = MockTransport::default();
    transport.add_response(200, "<html>not json</html>");
    let youtube = service(&transport);

    let result = youtube.list_channels("UC123", &[]).await;

    assert!(matches!(result, Err(YoutubeError::Json(_))));
}

/// Answers `q=slow` only after `q=fast`, so the older search finishes last.
struct OutOfOrderTransport {
    requests: std::sync::Mutex<Vec<reqwest::Url>>,
}

#[async_trait::async_trait]
impl youtube_data::Transport for OutOfOrderTransport {
    async fn get(
        &self,
        url: reqwest::Url,
    ) -> Result<youtube_data::TransportResponse, YoutubeError> {
        self.requests.lock().unwrap().push(url.clone());

        let query: std::collections::HashMap<String, String> =
            url.query_pairs().into_owned().collect();
        let token = match query.get("q").map(String::as_str) {
            Some("slow") => {
                tokio::time::sleep(std::time::Duration::from_millis(50)).await;
                "SLOW"
            }
            _ => "FAST",
        };

        let body = format!(r#"{{ "nextPageToken": "{}", "items": [] }}"#, token);
        Ok(youtube_data::TransportResponse::new(200, body))
    }
}

#[tokio::test]
async fn test_stale_search_does_not_replace_newer_cursor() -> anyhow::Result<()> {
    common::init_logger();
    let youtube = youtube_data::YoutubeService::with_transport(
        youtube_data::ServiceConfig::new(API_KEY),
        OutOfOrderTransport {
            requests: std::sync::Mutex::new(Vec::new()),
        },
    );

    let (slow, fast) = tokio::join!(
        youtube.search("slow", 5, &[]),
        youtube.search("fast", 5, &[])
    );
    assert_eq!(slow?.next_page_token(), Some("SLOW"));
    assert_eq!(fast?.next_page_token(), Some("FAST"));

    let next = youtube.more_search_results().await?;
    assert_eq!(next.next_page_token(), Some("FAST"));

    Ok(())
}
