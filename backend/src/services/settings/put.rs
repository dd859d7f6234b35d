//! # Settings Update Service
//!
//! Backs `PUT /settings`. The body is parsed by hand rather than through
//! `web::Json` so that any body that is not a JSON object, whatever its
//! content type, is answered with `400 Bad Request`.
//!
//! Only the writable parameters are looked up in the body, and only values of
//! the parameter's own type are taken. Everything else in the body is ignored,
//! so a page built for a newer firmware can still save onto an older one.

use crate::device::state::DeviceState;
use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::Value;

pub async fn process(body: web::Bytes, state: web::Data<DeviceState>) -> impl Responder {
    let object = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(object)) => object,
        Ok(_) => return HttpResponse::BadRequest().body("Expected a JSON object"),
        Err(e) => return HttpResponse::BadRequest().body(format!("Invalid JSON: {}", e)),
    };

    let mut manager = state.manager.write().await;
    let updated = manager.apply(&object);
    info!("updated settings: {}", updated.join(", "));

    match state.persist(&manager) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => {
            error!("failed to persist settings: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error saving settings: {}", e))
        }
    }
}
