use diesel::{QueryDsl, RunQueryDsl};
use restaurant_graph::schema::restaurants;
use serde_json::json;

use crate::helpers::{error_code, TestApp};

const ALL_RESTAURANTS: &str = r#"
    query ($first: Int, $after: String) {
        allRestaurants(first: $first, after: $after) {
            totalCount
            edges { cursor node { id name } }
            pageInfo { hasNextPage hasPreviousPage startCursor endCursor }
        }
    }
"#;

#[actix_web::test]
async fn created_restaurant_can_be_fetched_by_id(){
    let app = TestApp::spawn_app().await;

    let body = app.create_restaurant("Pizza Place", "pizza.jpg", "italian").await;
    let created = &body["data"]["createRestaurant"]["restaurant"];
    assert_eq!(created["id"], "1");

    let body = app.graphql(
        "query ($id: ID!) { restaurant(id: $id) { id name image tag } }",
        json!({ "id": created["id"] })
    ).await;

    assert_eq!(body["data"]["restaurant"], json!({
        "id": "1",
        "name": "Pizza Place",
        "image": "pizza.jpg",
        "tag": "italian"
    }));
}

#[actix_web::test]
async fn unknown_restaurant_is_null(){
    let app = TestApp::spawn_app().await;

    let body = app.graphql("{ restaurant(id: \"99\") { id } }", json!({})).await;

    assert!(body["data"]["restaurant"].is_null());
    assert!(body.get("errors").is_none());
}

#[actix_web::test]
async fn non_numeric_restaurant_id_is_a_validation_error(){
    let app = TestApp::spawn_app().await;

    let body = app.graphql("{ restaurant(id: \"abc\") { id } }", json!({})).await;

    assert!(body["data"]["restaurant"].is_null());
    assert_eq!(error_code(&body), Some("VALIDATION"));
}

#[actix_web::test]
async fn create_restaurant_without_tag_persists_nothing(){
    let app = TestApp::spawn_app().await;

    let body = app.graphql(
        r#"mutation { createRestaurant(name: "Pizza Place", image: "pizza.jpg") { restaurant { id } } }"#,
        json!({})
    ).await;
    assert!(!body["errors"].as_array().unwrap().is_empty());
    assert!(body["data"].is_null());

    let body = app.graphql("{ allRestaurants { totalCount } }", json!({})).await;
    assert_eq!(body["data"]["allRestaurants"]["totalCount"], 0);

    let mut conn = app.pool.get().unwrap();
    let count: i64 = restaurants::table
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(count, 0);
}

#[actix_web::test]
async fn create_restaurant_with_blank_tag_persists_nothing(){
    let app = TestApp::spawn_app().await;

    let body = app.create_restaurant("Pizza Place", "pizza.jpg", "   ").await;

    assert!(body["data"]["createRestaurant"].is_null());
    assert_eq!(error_code(&body), Some("VALIDATION"));
    assert_eq!(body["errors"][0]["message"], "tag must not be empty");

    let mut conn = app.pool.get().unwrap();
    let count: i64 = restaurants::table
        .count()
        .get_result(&mut conn)
        .unwrap();
    assert_eq!(count, 0);
}

#[actix_web::test]
async fn all_restaurants_lists_in_creation_order(){
    let app = TestApp::spawn_app().await;

    for name in ["First", "Second", "Third"] {
        app.create_restaurant(name, "r.jpg", "misc").await;
    }

    let body = app.graphql(ALL_RESTAURANTS, json!({})).await;
    let connection = &body["data"]["allRestaurants"];

    let names: Vec<&str> = connection["edges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|edge| edge["node"]["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, vec!["First", "Second", "Third"]);
    assert_eq!(connection["totalCount"], 3);
    assert_eq!(connection["pageInfo"]["hasNextPage"], false);
}

#[actix_web::test]
async fn all_restaurants_pages_forward_with_cursors(){
    let app = TestApp::spawn_app().await;

    for name in ["First", "Second", "Third"] {
        app.create_restaurant(name, "r.jpg", "misc").await;
    }

    let body = app.graphql(ALL_RESTAURANTS, json!({ "first": 2 })).await;
    let connection = &body["data"]["allRestaurants"];
    assert_eq!(connection["edges"].as_array().unwrap().len(), 2);
    assert_eq!(connection["pageInfo"]["hasNextPage"], true);

    let end_cursor = connection["pageInfo"]["endCursor"].clone();
    let body = app.graphql(ALL_RESTAURANTS, json!({ "first": 2, "after": end_cursor })).await;
    let connection = &body["data"]["allRestaurants"];

    let edges = connection["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0]["node"]["name"], "Third");
    assert_eq!(connection["pageInfo"]["hasNextPage"], false);
}

#[actix_web::test]
async fn malformed_cursor_is_a_validation_error(){
    let app = TestApp::spawn_app().await;

    let body = app.graphql(ALL_RESTAURANTS, json!({ "after": "garbage" })).await;

    assert!(body["data"]["allRestaurants"].is_null());
    assert_eq!(error_code(&body), Some("VALIDATION"));
}

#[actix_web::test]
async fn out_of_range_cursor_is_a_validation_error(){
    let app = TestApp::spawn_app().await;
    app.create_restaurant("Pizza Place", "pizza.jpg", "italian").await;

    // base64 of "arrayconnection:9223372036854775807"
    let cursor = "YXJyYXljb25uZWN0aW9uOjkyMjMzNzIwMzY4NTQ3NzU4MDc=";
    let body = app.graphql(ALL_RESTAURANTS, json!({ "first": 1, "after": cursor })).await;

    assert!(body["data"]["allRestaurants"].is_null());
    assert_eq!(error_code(&body), Some("VALIDATION"));
    assert_eq!(body["errors"][0]["message"], format!("{} is not a valid cursor", cursor));
}
