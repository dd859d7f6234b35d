use crate::device::state::DeviceState;
use actix_web::{web, HttpResponse, Responder};
use log::{error, info};

pub async fn process(state: web::Data<DeviceState>) -> impl Responder {
    let mut manager = state.manager.write().await;
    manager.clear();
    info!("settings cleared");

    match state.persist(&manager) {
        Ok(()) => HttpResponse::Ok().json(manager.to_settings()),
        Err(e) => {
            error!("failed to persist settings: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error saving settings: {}", e))
        }
    }
}
