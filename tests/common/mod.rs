use axum::Router;

pub async fn create_test_app() -> Router {
    // An empty host list keeps the handle unconfigured, so no test ever
    // opens a network connection.
    std::env::set_var("CASSANDRA_HOSTS", "");
    std::env::set_var("CASSANDRA_KEYSPACE", "");

    cql_console::create_app().await
}
