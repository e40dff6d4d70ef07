//! Response helpers

use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

/// Read the body as JSON
pub async fn read_json<B>(resp: ServiceResponse<B>) -> Value
where
    B: actix_web::body::MessageBody,
{
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "response is not JSON ({}): {}",
            e,
            String::from_utf8_lossy(&body)
        )
    })
}

/// Read the body as text
pub async fn read_text<B>(resp: ServiceResponse<B>) -> String
where
    B: actix_web::body::MessageBody,
{
    let body = test::read_body(resp).await;
    String::from_utf8_lossy(&body).into_owned()
}
