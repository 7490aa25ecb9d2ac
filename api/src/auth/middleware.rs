use crate::auth::claims::AuthUser;
use axum::{
    body::Body,
    extract::{ConnectInfo, FromRequestParts},
    http::{Method, Request, header},
    middleware::Next,
    response::Response,
};
use std::{net::SocketAddr, time::Instant};

/// Request log line: method, path, client ip, caller id when a valid token
/// is present, user agent, response status and latency.
///
/// CORS preflights pass through unlogged. Needs the server to be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();

    let caller = AuthUser::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|AuthUser(claims)| claims.sub);
    let user_agent = parts
        .headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let method = parts.method.clone();
    let path = parts.uri.path().to_string();

    let started = Instant::now();
    let response = next.run(Request::from_parts(parts, body)).await;

    tracing::info!(
        %method,
        %path,
        ip = %addr.ip(),
        caller = ?caller,
        %user_agent,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Handled request"
    );

    response
}
