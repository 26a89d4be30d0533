use ring_hanoi::{predict_convergence, DriverConfig, RunOutcome, SyncDriver};

/// States explored per set before prediction gives up.
const PREDICTION_STATE_LIMIT: usize = 10_000_000;

fn main() {
    env_logger::builder()
        .filter_module(
            "ring_hanoi",
            if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Warn
            },
        )
        .parse_default_env()
        .init();

    let config = DriverConfig::default();

    if log::log_enabled!(log::Level::Info) {
        match predict_convergence(&config, PREDICTION_STATE_LIMIT) {
            Ok(Some(rounds)) => log::info!("predicted convergence after {rounds} rounds"),
            Ok(None) => log::warn!("sets never win together; simulation will not terminate"),
            Err(e) => log::warn!("prediction skipped: {e}"),
        }
    }

    let mut driver = match SyncDriver::new(&config) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    for lane in driver.lanes() {
        log::debug!("initial layout:\n{}", lane.set);
    }

    match driver.run() {
        RunOutcome::Converged { rounds } => println!("Winning in {rounds} moves."),
        RunOutcome::RoundLimit { rounds } => println!("No win after {rounds} moves."),
    }
}
