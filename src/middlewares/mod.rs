use crate::{error, utils::panic::payload_message, StateTrait};
use axum::{
    response::{IntoResponse, Response},
    Router,
};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    request_id::MakeRequestUuid,
    ServiceBuilderExt,
};

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    error!("handler panicked: {}", payload_message(payload.as_ref()));
    error::INTERNAL.into_response()
}

pub fn middlewares<S: StateTrait>(state: S, router: Router<S>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let middlewares = ServiceBuilder::new()
        .layer(CatchPanicLayer::custom(handle_panic))
        .set_x_request_id(MakeRequestUuid)
        .propagate_x_request_id()
        .trace_for_http()
        .compression()
        .decompression()
        .layer(cors_layer)
        .into_inner();

    router.layer(middlewares).with_state(state)
}
