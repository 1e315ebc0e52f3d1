/// Liveness/info message. Open to anonymous callers.
#[utoipa::path(
    get,
    path = "/",
    tag = "info",
    security(()),
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain"))
)]
pub async fn hello() -> &'static str {
    "Hello Lamia!"
}
