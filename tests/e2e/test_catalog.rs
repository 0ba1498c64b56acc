use crate::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_all_sixteen_languages(ctx: &TestContext) {

    let response = ctx.client.get("/api/languages").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let languages = body.as_array().unwrap();

    assert_eq!(languages.len(), 16);
    assert_eq!(
        languages[0].get("label").and_then(|v| v.as_str()),
        Some("English (US)")
    );
    assert_eq!(
        languages[15].get("label").and_then(|v| v.as_str()),
        Some("Marathi (India)")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_expose_voices_in_catalog_order(ctx: &TestContext) {

    let response = ctx.client.get("/api/languages").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let hindi = body
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l.get("label").and_then(|v| v.as_str()) == Some("Hindi (India)"))
        .expect("Hindi missing from catalog");

    let voices: Vec<&str> = hindi
        .get("voices")
        .and_then(|v| v.as_array())
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();

    assert_eq!(voices, vec!["hi-IN-SwaraNeural", "hi-IN-MadhurNeural"]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_note_dialects_without_dedicated_voices(ctx: &TestContext) {

    let response = ctx.client.get("/api/languages").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    let languages = body.as_array().unwrap();

    // Rajasthani, Malwi and Haryanvi ride on Hindi voices
    let noted: Vec<&str> = languages
        .iter()
        .filter(|l| l.get("note").map(|n| !n.is_null()).unwrap_or(false))
        .filter_map(|l| l.get("label").and_then(|v| v.as_str()))
        .collect();

    assert_eq!(
        noted,
        vec![
            "Rajasthani (India, using Hindi TTS)",
            "Malwi (India, using Hindi TTS)",
            "Haryanvi (India, using Hindi TTS)",
        ]
    );

    let rajasthani = languages
        .iter()
        .find(|l| {
            l.get("label").and_then(|v| v.as_str())
                == Some("Rajasthani (India, using Hindi TTS)")
        })
        .unwrap();
    assert_eq!(
        rajasthani.get("note").and_then(|v| v.as_str()),
        Some("No dedicated voice model; spoken with Hindi voices")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_catalog_responses(ctx: &TestContext) {

    let response = ctx.client.get("/api/languages").await.unwrap();

    response.assert_status(StatusCode::OK);
    response.assert_header_exists("x-request-id");
}
