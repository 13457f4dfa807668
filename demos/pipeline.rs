//! An HTTP-style handler built from async outcome combinators.
//!
//! Each step is a fallible operation; the handler chains them and folds the
//! final outcome into a status code and a response body.
//!
//! Run with: `cargo run --example pipeline`

use std::time::Duration;

use outcome_rail::prelude_async::*;

#[derive(Debug)]
struct Order {
    id: u32,
    quantity: u32,
}

async fn load_order(id: u32) -> Outcome<Order, String> {
    tokio::time::sleep(Duration::from_millis(10)).await;
    match id {
        0 => Outcome::failure("order id must not be zero".to_string()),
        id => Outcome::success(Order { id, quantity: id % 7 }),
    }
}

fn validate(order: Order) -> Outcome<Order, String> {
    if order.quantity == 0 {
        Outcome::failure(format!("order {} has no items", order.id))
    } else {
        Outcome::success(order)
    }
}

async fn reserve_stock(order: Order) -> Outcome<Order, String> {
    tokio::time::sleep(Duration::from_millis(10)).await;
    Outcome::success(order)
}

async fn price(order: Order) -> u32 {
    tokio::time::sleep(Duration::from_millis(10)).await;
    order.quantity * 1_250
}

async fn handle(id: u32) -> (u16, String) {
    load_order(id)
        .bind_async(validate)
        .bind_async(deferred(reserve_stock))
        .map_async(deferred(price))
        .fold_async(
            |total: u32| (200, format!("total: {}", total)),
            |error: String| (400, error),
        )
        .await
}

#[tokio::main]
async fn main() {
    for id in [3, 7, 0] {
        let (status, body) = handle(id).await;
        println!("GET /orders/{} -> {} {}", id, status, body);
    }
}
