use std::process::ExitCode;

use railway_planner::cli::{Command, RouteSort, ServerConfig, USAGE};
use railway_planner::domain::render_journeys;
use railway_planner::graph::build_graph;
use railway_planner::network::{RailwayNetwork, SortOrder};
use railway_planner::planner::{SearchConfig, SearchError, find_routes};
use railway_planner::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so that planned journeys alone reach stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let command = match Command::parse(
        std::env::args().skip(1),
        std::env::var("RAILWAY_ADDR").ok(),
    ) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error! {e}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match command {
        Command::Plan {
            network_path,
            origin,
            destination,
            max_results,
        } => {
            let network = match RailwayNetwork::load(&network_path) {
                Ok(network) => network,
                Err(e) => {
                    eprintln!("An error has occurred while loading the network: {e}");
                    return ExitCode::FAILURE;
                }
            };

            let graph = build_graph(&network);
            match find_routes(&graph, &origin, &destination, max_results) {
                Ok(journeys) => {
                    print!("{}", render_journeys(&journeys));
                    ExitCode::SUCCESS
                }
                Err(SearchError::StationNotFound { name }) => {
                    eprintln!("One or more station cannot be found on this network: {name}");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Summary { network_path, sort } => {
            let mut network = match RailwayNetwork::load(&network_path) {
                Ok(network) => network,
                Err(e) => {
                    eprintln!("An error has occurred while loading the network: {e}");
                    return ExitCode::FAILURE;
                }
            };

            match sort {
                Some(RouteSort::Name) => network.sort_routes_by_name(SortOrder::Ascending),
                Some(RouteSort::Length) => network.sort_routes_by_length(SortOrder::Descending),
                None => {}
            }
            print!("{}", network.overview());
            ExitCode::SUCCESS
        }
        Command::Serve(config) => serve(config).await,
    }
}

async fn serve(config: ServerConfig) -> ExitCode {
    let network = match RailwayNetwork::load(&config.network_path) {
        Ok(network) => network,
        Err(e) => {
            error!(error = %e, "failed to load network");
            return ExitCode::FAILURE;
        }
    };
    info!(
        network = %network.name(),
        routes = network.routes().len(),
        stations = network.total_stations(),
        "loaded network"
    );

    let state = AppState::new(network, SearchConfig::default());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.addr, "railway planner listening");
    info!("GET /health, GET /network, GET /routes/:name, GET /journeys?origin=&destination=&max_results=");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
