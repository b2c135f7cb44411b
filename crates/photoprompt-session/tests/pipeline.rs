//! End-to-end runs of the pipeline against mocked remote services.

use std::sync::Arc;
use std::time::Duration;

use photoprompt_ai::conversation::fallback::{GENERIC_OPENER, PET_OPENER};
use photoprompt_ai::{
    CaptionClient, CaptionConfig, CaptionProvider, ConversationClient, ConversationConfig,
    ConversationProvider,
};
use photoprompt_common::ImageRef;
use photoprompt_session::{FileImageReader, PipelineController, Session, Stage};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const UNREACHABLE: &str = "http://127.0.0.1:1/v1beta/models/gemini:generateContent";

fn controller(caption_endpoint: String, conversation_endpoint: &str) -> PipelineController {
    let captioner = CaptionClient::new(
        CaptionConfig::new(caption_endpoint)
            .with_token("hf_test")
            .with_timeout(Duration::from_secs(2)),
    )
    .unwrap();
    let conversation = ConversationClient::new(
        ConversationConfig::new(conversation_endpoint)
            .with_api_key("test-key")
            .with_timeout(Duration::from_secs(2)),
    )
    .unwrap();

    PipelineController::new(
        Arc::new(FileImageReader),
        Arc::new(captioner) as Arc<dyn CaptionProvider>,
        Arc::new(conversation) as Arc<dyn ConversationProvider>,
    )
}

fn write_photo(dir: &tempfile::TempDir, name: &str) -> ImageRef {
    let path = dir.path().join(name);
    std::fs::write(&path, [0x89, b'P', b'N', b'G', 0x0d, 0x0a]).unwrap();
    ImageRef::from_gallery(path.to_string_lossy())
}

#[tokio::test]
async fn both_services_down_still_reaches_ready() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/blip"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model loading"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let image = write_photo(&dir, "holiday.png");
    let mut controller = controller(format!("{}/models/blip", server.uri()), UNREACHABLE);

    controller.select_image(image.clone());
    assert!(controller.analyze().await);

    let session = controller.session();
    assert_eq!(session.stage(), Stage::AnalysisReady);
    assert_eq!(session.image(), Some(&image));
    let caption = session.caption().unwrap();
    assert!(
        caption.starts_with("An image captured on "),
        "unexpected caption: {caption}"
    );
    assert_eq!(session.prompt(), Some(GENERIC_OPENER));
    assert!(!session.can_save());

    controller.edit_response("Our first day at the lake.");
    let saved = controller.save().unwrap();
    assert_eq!(saved.response, "Our first day at the lake.");
    assert_eq!(controller.session(), &Session::default());
}

#[tokio::test]
async fn primary_caption_drives_keyword_opener() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/blip"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "generated_text": "a dog sitting on a beach" }])),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mut controller = controller(format!("{}/models/blip", server.uri()), UNREACHABLE);
    controller.select_image(write_photo(&dir, "dog.jpg"));
    assert!(controller.analyze().await);

    let session = controller.session();
    assert_eq!(session.caption(), Some("a dog sitting on a beach"));
    assert_eq!(session.prompt(), Some(PET_OPENER));
}

#[tokio::test]
async fn both_services_up() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/blip"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "generated_text": "a bowl of ramen" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Yum! Where did you have this?" }] }
            }]
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let conversation = format!("{}/v1beta/models/gemini:generateContent", server.uri());
    let mut controller = controller(format!("{}/models/blip", server.uri()), &conversation);
    controller.select_image(write_photo(&dir, "ramen.webp"));
    assert!(controller.analyze().await);

    assert_eq!(controller.session().caption(), Some("a bowl of ramen"));
    assert_eq!(
        controller.session().prompt(),
        Some("Yum! Where did you have this?")
    );
}

#[tokio::test]
async fn missing_file_lands_in_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut controller = controller(format!("{}/models/blip", server.uri()), UNREACHABLE);
    controller.select_image(ImageRef::from_gallery("/tmp/photoprompt-missing-photo.png"));
    assert!(controller.analyze().await);

    assert_eq!(controller.stage(), Stage::Error);
    assert!(controller.session().last_error().is_some());
    assert!(!controller.analyze().await);

    controller.clear();
    assert_eq!(controller.session(), &Session::default());
}
