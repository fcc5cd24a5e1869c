use serde_json::json;

use crate::helpers::{error_code, TestApp};

#[actix_web::test]
async fn rfid_tag_is_created_and_listed(){
    let app = TestApp::spawn_app().await;

    app.create_restaurant("Pizza Place", "pizza.jpg", "italian").await;

    let body = app.create_rfid("04:A2:2B:1C", "table 4", "1").await;
    assert_eq!(body["data"]["createRfid"]["rfid"], json!({
        "id": "1",
        "restaurantId": "1",
        "uuidRfid": "04:A2:2B:1C",
        "label": "table 4"
    }));

    let body = app.graphql(
        "{ allRfidTags { totalCount edges { node { uuidRfid label } } } }",
        json!({})
    ).await;
    assert_eq!(body["data"]["allRfidTags"]["totalCount"], 1);
    assert_eq!(
        body["data"]["allRfidTags"]["edges"][0]["node"],
        json!({ "uuidRfid": "04:A2:2B:1C", "label": "table 4" })
    );
}

#[actix_web::test]
async fn rfid_tag_for_missing_restaurant_is_rejected(){
    let app = TestApp::spawn_app().await;

    let body = app.create_rfid("04:A2:2B:1C", "table 4", "3").await;
    assert_eq!(error_code(&body), Some("NOT_FOUND"));

    let body = app.graphql("{ allRfidTags { totalCount } }", json!({})).await;
    assert_eq!(body["data"]["allRfidTags"]["totalCount"], 0);
}

#[actix_web::test]
async fn rfid_tag_with_blank_label_is_rejected(){
    let app = TestApp::spawn_app().await;

    app.create_restaurant("Pizza Place", "pizza.jpg", "italian").await;

    let body = app.create_rfid("04:A2:2B:1C", "", "1").await;
    assert_eq!(error_code(&body), Some("VALIDATION"));
}
