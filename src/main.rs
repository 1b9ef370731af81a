use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use tsp3d_engine::config::CONFIG;
use tsp3d_engine::search::solver::Solver;
use tsp3d_engine::Point;

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EngineRequest {
    Solve {
        #[serde(default)]
        start: Point,
        destinations: Vec<Point>,
    },
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EngineResponse {
    Solve {
        path: Vec<Point>,
        total_distance: f64,
        permutations_evaluated: u64,
    },
    Error {
        message: String,
    },
}

fn respond(solver: &Solver, req: EngineRequest) -> EngineResponse {
    match req {
        EngineRequest::Solve { start, destinations } => match solver.solve(start, &destinations) {
            Ok(report) => {
                info!(
                    "solved {} destinations, {} orderings in {:?}",
                    destinations.len(),
                    report.permutations_evaluated,
                    report.elapsed
                );
                EngineResponse::Solve {
                    path: report.tour.path,
                    total_distance: report.tour.total_distance,
                    permutations_evaluated: report.permutations_evaluated,
                }
            }
            Err(e) => {
                warn!("rejected request: {}", e);
                EngineResponse::Error { message: e.to_string() }
            }
        },
    }
}

async fn handler(event: LambdaEvent<EngineRequest>) -> Result<EngineResponse, Error> {
    Ok(respond(&Solver::new((*CONFIG).clone()), event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let func = service_fn(handler);
    lambda_runtime::run(func).await
}
