use super::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use std::sync::Arc;

/// Address the referee listens on when `BIND_ADDR` is unset.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Websocket endpoint at `/chess/`, one [`Table`] per connection.
pub struct Server;

impl Server {
    pub async fn run(oracle: Arc<dyn Oracle>) -> Result<(), std::io::Error> {
        let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let state = web::Data::from(Arc::new(oracle));
        log::info!("[referee] listening on {}", addr);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(state.clone())
                .route("/chess/", web::get().to(chess))
        })
        .workers(4)
        .bind(addr)?
        .run()
        .await
    }
}

async fn chess(
    oracle: web::Data<Arc<dyn Oracle>>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            bridge(Table::new(oracle.get_ref().clone()), session, stream);
            response
        }
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// Feeds websocket frames through the table until the client goes away.
fn bridge(mut table: Table, mut session: actix_ws::Session, mut stream: actix_ws::MessageStream) {
    use futures::StreamExt;
    actix_web::rt::spawn(async move {
        log::info!("[referee] client connected");
        'sesh: loop {
            match stream.next().await {
                Some(Ok(actix_ws::Message::Text(text))) => {
                    if let Some(reply) = table.receive(&text).await {
                        if session.text(reply).await.is_err() {
                            break 'sesh;
                        }
                    }
                }
                Some(Ok(actix_ws::Message::Ping(bytes))) => {
                    if session.pong(&bytes).await.is_err() {
                        break 'sesh;
                    }
                }
                Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                Some(Err(_)) => break 'sesh,
                None => break 'sesh,
                _ => continue 'sesh,
            }
        }
        session.close(None).await.ok();
        log::info!("[referee] client disconnected");
    });
}
