//! HTTP-level tests for the customers, products and orders API
//!
//! Every test runs against a fresh in-memory host seeded with the demo data:
//! customers 1 Ironman, 2 Thor; products 1 iPhone (80000), 2 MacBook Pro
//! (200000); orders 1 Ironman×iPhone×2, 2 Ironman×MacBook Pro×1,
//! 3 Thor×iPhone×1.

use axum::http::StatusCode;
use axum_test::TestServer;
use hateoas::prelude::*;
use serde_json::{Value, json};

async fn seeded_server_with(config: AppConfig) -> TestServer {
    let host = ServerBuilder::new()
        .with_config(config)
        .build_host()
        .expect("Failed to build host");
    load_static_data(
        host.state.customers.as_ref(),
        host.state.products.as_ref(),
        host.state.orders.as_ref(),
    )
    .await
    .expect("Failed to seed data");

    let app = RestExposure::build_router(&host, Vec::new());
    TestServer::try_new(app).expect("Failed to create test server")
}

async fn seeded_server() -> TestServer {
    seeded_server_with(AppConfig::default()).await
}

fn empty_server() -> TestServer {
    let app = ServerBuilder::new().build().expect("Failed to build app");
    TestServer::try_new(app).expect("Failed to create test server")
}

fn href<'a>(body: &'a Value, rel: &str) -> &'a str {
    body["_links"][rel]["href"]
        .as_str()
        .unwrap_or_else(|| panic!("missing '{rel}' link in {body}"))
}

// =============================================================================
// Customer Tests
// =============================================================================

mod customer_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_customer() {
        let server = seeded_server().await;

        let response = server.get("/customers/1").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(
            body,
            json!({
                "id": 1,
                "name": "Ironman",
                "_links": {
                    "self": { "href": "/customers/1" },
                    "collection": { "href": "/customers" },
                    "orders": { "href": "/orders/customer/1" }
                }
            })
        );
    }

    #[tokio::test]
    async fn test_customer_links_are_in_fixed_order() {
        let server = seeded_server().await;

        // Checked on the raw text: serde_json's Value does not keep key order
        let text = server.get("/customers/2").await.text();
        let position = |rel: &str| {
            text.find(&format!("\"{rel}\":"))
                .unwrap_or_else(|| panic!("missing '{rel}' in {text}"))
        };
        assert!(position("self") < position("collection"));
        assert!(position("collection") < position("orders"));
    }

    #[tokio::test]
    async fn test_list_customers() {
        let server = seeded_server().await;

        let response = server.get("/customers").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let customers = body["_embedded"]["customerList"]
            .as_array()
            .expect("customerList must be an array");
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0]["name"], "Ironman");
        assert_eq!(customers[1]["name"], "Thor");
        assert_eq!(href(&customers[1], "self"), "/customers/2");
        assert_eq!(href(&body, "self"), "/customers");
    }

    #[tokio::test]
    async fn test_get_unknown_customer_returns_404() {
        let server = seeded_server().await;

        let response = server.get("/customers/99").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["code"], "ENTITY_NOT_FOUND");
        assert_eq!(body["details"]["entity_type"], "customer");
        assert_eq!(body["details"]["id"], 99);
    }

    #[tokio::test]
    async fn test_get_customer_with_invalid_id_returns_400() {
        let server = seeded_server().await;

        server
            .get("/customers/not-a-number")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_customer() {
        let server = seeded_server().await;

        let response = server
            .post("/customers")
            .json(&json!({ "name": "Thanos" }))
            .await;
        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.header("location"), "/customers/3");

        let body: Value = response.json();
        assert_eq!(body["id"], 3);
        assert_eq!(body["name"], "Thanos");
        assert_eq!(href(&body, "orders"), "/orders/customer/3");

        server.get("/customers/3").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_create_customer_with_blank_name_returns_400() {
        let server = seeded_server().await;

        let response = server
            .post("/customers")
            .json(&json!({ "name": "   " }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}

// =============================================================================
// Product Tests
// =============================================================================

mod product_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_product() {
        let server = seeded_server().await;

        let body: Value = server.get("/products/2").await.json();
        assert_eq!(body["name"], "MacBook Pro");
        assert_eq!(body["price"], 200_000);
        assert_eq!(href(&body, "self"), "/products/2");
        assert_eq!(href(&body, "collection"), "/products");
        assert_eq!(href(&body, "orders"), "/orders/product/2");
    }

    #[tokio::test]
    async fn test_list_products() {
        let server = seeded_server().await;

        let body: Value = server.get("/products").await.json();
        let products = body["_embedded"]["productList"]
            .as_array()
            .expect("productList must be an array");
        assert_eq!(products.len(), 2);
        assert_eq!(products[0]["price"], 80_000);
        assert_eq!(href(&body, "self"), "/products");
    }

    #[tokio::test]
    async fn test_get_unknown_product_returns_404() {
        let server = seeded_server().await;

        server
            .get("/products/7")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_product() {
        let server = seeded_server().await;

        let response = server
            .post("/products")
            .json(&json!({ "name": "iPad", "price": 60000 }))
            .await;
        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.header("location"), "/products/3");

        let body: Value = response.json();
        assert_eq!(body["price"], 60_000);
    }
}

// =============================================================================
// Order Tests
// =============================================================================

mod order_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_order() {
        let server = seeded_server().await;

        let response = server.get("/orders/1").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["quantity"], 2);
        assert_eq!(body["totalPrice"], 160_000);
        assert_eq!(body["customer"]["name"], "Ironman");
        assert_eq!(body["product"]["name"], "iPhone");
        assert_eq!(
            body["_links"],
            json!({
                "self": { "href": "/orders/1" },
                "customer": { "href": "/customers/1" },
                "product": { "href": "/products/1" }
            })
        );
    }

    #[tokio::test]
    async fn test_list_orders() {
        let server = seeded_server().await;

        let body: Value = server.get("/orders").await.json();
        let orders = body["_embedded"]["orderList"]
            .as_array()
            .expect("orderList must be an array");
        assert_eq!(orders.len(), 3);
        assert_eq!(orders[2]["customer"]["name"], "Thor");
        assert_eq!(href(&body, "self"), "/orders");
    }

    #[tokio::test]
    async fn test_orders_of_product() {
        let server = seeded_server().await;

        let response = server.get("/orders/product/1").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let orders = body["_embedded"]["orderList"]
            .as_array()
            .expect("orderList must be an array");
        assert_eq!(orders.len(), 2);
        assert!(orders.iter().all(|order| order["product"]["id"] == 1));
        assert_eq!(href(&orders[0], "self"), "/orders/1");
        assert_eq!(href(&orders[1], "self"), "/orders/3");
        assert_eq!(href(&body, "self"), "/orders/product/1");
    }

    #[tokio::test]
    async fn test_orders_of_customer() {
        let server = seeded_server().await;

        let body: Value = server.get("/orders/customer/2").await.json();
        let orders = body["_embedded"]["orderList"]
            .as_array()
            .expect("orderList must be an array");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0]["product"]["name"], "iPhone");
        assert_eq!(href(&body, "self"), "/orders/customer/2");
    }

    #[tokio::test]
    async fn test_orders_of_unknown_owner_is_an_empty_collection() {
        let server = seeded_server().await;

        let response = server.get("/orders/customer/42").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(
            body,
            json!({ "_links": { "self": { "href": "/orders/customer/42" } } })
        );
    }

    #[tokio::test]
    async fn test_create_order_derives_total_price() {
        let server = seeded_server().await;

        let response = server
            .post("/orders")
            .json(&json!({ "customerId": 2, "productId": 2, "quantity": 3 }))
            .await;
        response.assert_status(StatusCode::CREATED);
        assert_eq!(response.header("location"), "/orders/4");

        let body: Value = response.json();
        assert_eq!(body["totalPrice"], 600_000);
        assert_eq!(href(&body, "customer"), "/customers/2");
        assert_eq!(href(&body, "product"), "/products/2");

        let thor_orders: Value = server.get("/orders/customer/2").await.json();
        assert_eq!(
            thor_orders["_embedded"]["orderList"]
                .as_array()
                .map(Vec::len),
            Some(2)
        );
    }

    #[tokio::test]
    async fn test_create_order_for_unknown_product_returns_404() {
        let server = seeded_server().await;

        let response = server
            .post("/orders")
            .json(&json!({ "customerId": 1, "productId": 9, "quantity": 1 }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["details"]["entity_type"], "product");
    }

    #[tokio::test]
    async fn test_create_order_with_zero_quantity_returns_400() {
        let server = seeded_server().await;

        let response = server
            .post("/orders")
            .json(&json!({ "customerId": 1, "productId": 1, "quantity": 0 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        server.get("/orders/4").await.assert_status(StatusCode::NOT_FOUND);
    }
}

// =============================================================================
// Request Body Tests
// =============================================================================

mod request_body_tests {
    use super::*;

    async fn assert_invalid_body(server: &TestServer, path: &str, body: Value) {
        let response = server.post(path).json(&body).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let error: Value = response.json();
        assert_eq!(error["code"], "INVALID_BODY", "body {body} on {path}");
        assert!(error["message"].is_string());
    }

    #[tokio::test]
    async fn test_negative_quantity_returns_400_json() {
        let server = seeded_server().await;

        assert_invalid_body(
            &server,
            "/orders",
            json!({ "customerId": 1, "productId": 1, "quantity": -1 }),
        )
        .await;
        server.get("/orders/4").await.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_out_of_range_or_non_numeric_quantity_returns_400_json() {
        let server = seeded_server().await;

        for quantity in [json!(5_000_000_000u64), json!("two")] {
            assert_invalid_body(
                &server,
                "/orders",
                json!({ "customerId": 1, "productId": 1, "quantity": quantity }),
            )
            .await;
        }
    }

    #[tokio::test]
    async fn test_missing_customer_id_returns_400_json() {
        let server = seeded_server().await;

        assert_invalid_body(
            &server,
            "/orders",
            json!({ "productId": 1, "quantity": 1 }),
        )
        .await;
    }

    #[tokio::test]
    async fn test_negative_price_returns_400_json() {
        let server = seeded_server().await;

        assert_invalid_body(&server, "/products", json!({ "name": "iPad", "price": -5 })).await;
        assert_invalid_body(&server, "/customers", json!({})).await;
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400_json() {
        let server = seeded_server().await;

        let response = server
            .post("/customers")
            .text("{\"name\": ")
            .content_type("application/json")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let error: Value = response.json();
        assert_eq!(error["code"], "INVALID_BODY");
    }
}

// =============================================================================
// Configuration Tests
// =============================================================================

mod config_tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_collections_keep_self_link() {
        let server = empty_server();

        for path in ["/customers", "/products", "/orders"] {
            let body: Value = server.get(path).await.json();
            assert!(body.get("_embedded").is_none());
            assert_eq!(href(&body, "self"), path);
        }
    }

    #[tokio::test]
    async fn test_base_url_prefixes_hrefs_only() {
        let config = AppConfig::from_yaml_str(
            r#"
links:
  base_url: "http://localhost:8080/"
"#,
        )
        .expect("valid config");
        let server = seeded_server_with(config).await;

        let body: Value = server.get("/customers/1").await.json();
        assert_eq!(href(&body, "self"), "http://localhost:8080/customers/1");
        assert_eq!(
            href(&body, "orders"),
            "http://localhost:8080/orders/customer/1"
        );
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = empty_server();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}
