mod config;
mod knowledge;
mod word;

use anyhow::Result;
use config::Config;
use dotenv::dotenv;
use env_logger::Builder;
use knowledge::brain::Brain;
use log::LevelFilter;
use std::convert::Infallible;
use warp::{Filter, Rejection, Reply};
use word::UnlearnedWord;

#[macro_use]
extern crate log;

const MAX_BODY_BYTES: u64 = 16 * 1024;

#[tokio::main]
async fn main() -> Result<()> {
    // read .env
    dotenv().ok();

    // init logger
    let log_level = std::env::var("RUST_LOG").unwrap_or_default();

    if log_level == "debug" {
        Builder::new()
            .filter(None, LevelFilter::Off)
            .filter(Some("nearword::knowledge"), LevelFilter::Debug)
            .filter(Some("nearword"), LevelFilter::Debug)
            .init();
    } else if log_level == "info" {
        Builder::new()
            .filter(None, LevelFilter::Off)
            .filter(Some("nearword::knowledge"), LevelFilter::Info)
            .filter(Some("nearword"), LevelFilter::Info)
            .init();
    } else {
        env_logger::init();
    }

    let config = Config::from_env()?;
    info!("config loaded: {:?}", config);

    let brain = Brain::new();
    let routes = analyze_route(brain);

    info!("server running at port: {}", config.http_port);
    warp::serve(routes)
        .run(([0, 0, 0, 0], config.http_port))
        .await;

    Ok(())
}

fn analyze_route(brain: Brain) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    warp::path("analyze")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(warp::any().map(move || brain.clone()))
        .and_then(handle_analyze)
}

async fn handle_analyze(request: UnlearnedWord, brain: Brain) -> Result<impl Reply, Infallible> {
    info!("get analyze request: {}", request);
    let analysis = brain.analyze(request).await;
    Ok(warp::reply::json(&analysis))
}
