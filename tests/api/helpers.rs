use once_cell::sync::Lazy;
use restaurant_graph::{configuration::Settings, startup::Application, telemetry::{get_subscriber, init_subscriber}, utils::DbPool};
use serde_json::{json, Value};
use uuid::Uuid;

static LOGGER_INSTANCE: Lazy<()> = Lazy::new(|| {
    let log_level = "info".to_string();
    let name = "restaurant-graph-test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name, log_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(name, log_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp{
    pub host: String,
    pub port: u16,
    pub pool: DbPool,
    pub database_path: std::path::PathBuf,
    pub api_client: reqwest::Client
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.database_path);
    }
}

impl TestApp {
    pub fn get_app_url(&self) -> String{
        format!("http://{}:{}", self.host, self.port)
    }

    pub async fn spawn_app() -> TestApp{
        Lazy::force(&LOGGER_INSTANCE);

        let database_path = std::env::temp_dir().join(format!("{}.sqlite", Uuid::new_v4()));

        let mut settings = Settings::get().expect("Failed to read configuration");
        settings.application.host = "127.0.0.1".to_string();
        settings.application.port = 0;
        settings.database.path = database_path.to_string_lossy().into_owned();

        let application = Application::build(settings)
                            .await
                            .expect("Failed to build application");

        let host = application.host.clone();
        let port = application.port;
        let pool = application.pool.clone();

        tokio::task::spawn(application.run_until_stopped());

        let api_client = reqwest::Client::builder()
                            .build()
                            .unwrap();

        TestApp{
            host,
            port,
            pool,
            database_path,
            api_client
        }
    }

    pub async fn post_graphql(&self, query: &str, variables: Value) -> reqwest::Response{
        self.api_client
            .post(format!("{}/graphql", self.get_app_url()))
            .json(&json!({
                "query": query,
                "variables": variables
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    // Status is not checked: validation failures come back as 400 with a GraphQL body
    pub async fn graphql(&self, query: &str, variables: Value) -> Value{
        self.post_graphql(query, variables)
            .await
            .json::<Value>()
            .await
            .expect("Response was not json")
    }

    pub async fn create_restaurant(&self, name: &str, image: &str, tag: &str) -> Value{
        self.graphql(
            r#"mutation ($name: String!, $image: String!, $tag: String!) {
                createRestaurant(name: $name, image: $image, tag: $tag) {
                    restaurant { id name image tag }
                }
            }"#,
            json!({ "name": name, "image": image, "tag": tag })
        ).await
    }

    pub async fn create_meal(&self, name: &str, price: i32, restaurant_id: &str) -> Value{
        self.graphql(
            r#"mutation ($name: String!, $price: Int!, $restaurantId: ID!) {
                createMeal(name: $name, price: $price, image: "m.jpg", description: "classic", restaurantId: $restaurantId) {
                    meal { id restaurantId name price image description }
                }
            }"#,
            json!({ "name": name, "price": price, "restaurantId": restaurant_id })
        ).await
    }

    pub async fn create_rfid(&self, uuid_rfid: &str, label: &str, restaurant_id: &str) -> Value{
        self.graphql(
            r#"mutation ($uuidRfid: String!, $label: String!, $restaurantId: ID!) {
                createRfid(uuidRfid: $uuidRfid, label: $label, restaurantId: $restaurantId) {
                    rfid { id restaurantId uuidRfid label }
                }
            }"#,
            json!({ "uuidRfid": uuid_rfid, "label": label, "restaurantId": restaurant_id })
        ).await
    }
}

pub fn error_code(body: &Value) -> Option<&str> {
    body["errors"][0]["extensions"]["code"].as_str()
}
