use crate::device::state::DeviceState;
use actix_web::{web, HttpResponse, Responder};

pub async fn process(state: web::Data<DeviceState>) -> impl Responder {
    let manager = state.manager.read().await;
    HttpResponse::Ok().json(manager.to_settings())
}
