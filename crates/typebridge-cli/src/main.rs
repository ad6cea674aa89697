mod cli;
mod commands;
mod logging;

use cli::{GenerateParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init_tracing();

    let params = GenerateParams::from_matches(&matches);
    commands::generate::run(params.into());
}
