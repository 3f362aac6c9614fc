//! # Request/Response Tracing
//!
//! Configures `tower_http::trace::TraceLayer` so that every request gets
//! an `INFO` span carrying method, URI and version, and its completion is
//! logged with status and latency.

use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, HttpMakeClassifier, TraceLayer};
use tracing::Level;

pub fn layer() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_constructs() {
        let _layer = layer();
    }
}
