//! Command-line arguments for the `railway-planner` binary.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Address the server binds to when none is given.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Usage text printed on argument errors.
pub const USAGE: &str = "Usage: railway-planner <data set> <origin> <destination> <max results>\n       railway-planner summary <data set> [name|length]\n       railway-planner serve <data set> [address]";

/// Error from parsing command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// Wrong number of arguments
    #[error("wrong number of arguments")]
    Arity,

    /// The result limit is not a non-negative integer
    #[error("invalid max results: {0}")]
    MaxResults(String),

    /// The listen address does not parse
    #[error("invalid address: {0}")]
    Address(String),

    /// The summary sort key is neither `name` nor `length`
    #[error("invalid sort key: {0}")]
    SortKey(String),
}

/// How the `summary` command orders routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteSort {
    /// Alphabetically by route name
    Name,

    /// Longest route first
    Length,
}

/// Settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Network description to serve
    pub network_path: PathBuf,

    /// Address to listen on
    pub addr: SocketAddr,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the best journeys between two stations and exit.
    Plan {
        network_path: PathBuf,
        origin: String,
        destination: String,
        max_results: usize,
    },

    /// Print an overview of the network's routes and exit.
    Summary {
        network_path: PathBuf,
        sort: Option<RouteSort>,
    },

    /// Serve the planner over HTTP.
    Serve(ServerConfig),
}

impl Command {
    /// Parses arguments (without the program name).
    ///
    /// For `serve`, the address comes from the optional argument, then
    /// `env_addr` (the `RAILWAY_ADDR` variable), then [`DEFAULT_ADDR`].
    pub fn parse<I>(args: I, env_addr: Option<String>) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();

        match args.as_slice() {
            [serve, path] | [serve, path, _] if serve == "serve" => {
                let addr = args
                    .get(2)
                    .cloned()
                    .or(env_addr)
                    .unwrap_or_else(|| DEFAULT_ADDR.to_string());
                let addr = addr.parse().map_err(|_| UsageError::Address(addr))?;
                Ok(Command::Serve(ServerConfig {
                    network_path: PathBuf::from(path),
                    addr,
                }))
            }
            [summary, path] | [summary, path, _] if summary == "summary" => {
                let sort = match args.get(2).map(String::as_str) {
                    None => None,
                    Some("name") => Some(RouteSort::Name),
                    Some("length") => Some(RouteSort::Length),
                    Some(other) => return Err(UsageError::SortKey(other.to_string())),
                };
                Ok(Command::Summary {
                    network_path: PathBuf::from(path),
                    sort,
                })
            }
            [path, origin, destination, max] => {
                let max_results = max
                    .trim()
                    .parse()
                    .map_err(|_| UsageError::MaxResults(max.clone()))?;
                Ok(Command::Plan {
                    network_path: PathBuf::from(path),
                    origin: origin.clone(),
                    destination: destination.clone(),
                    max_results,
                })
            }
            _ => Err(UsageError::Arity),
        }
    }
}
