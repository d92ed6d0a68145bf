mod cli;
mod commands;

use cli::{BuildParams, CheckParams, DemoParams, PreludeParams, TypesParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    // `-v` is global, so it lands in the subcommand's matches wherever it was given.
    init_logging(
        matches
            .subcommand()
            .map_or(0, |(_, m)| m.get_count("verbose")),
    );

    match matches.subcommand() {
        Some(("build", m)) => {
            let params = BuildParams::from_matches(m);
            commands::build::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("prelude", m)) => {
            let params = PreludeParams::from_matches(m);
            commands::prelude::run(params.into());
        }
        Some(("types", m)) => {
            let params = TypesParams::from_matches(m);
            commands::types::run(params.into());
        }
        Some(("demo", m)) => {
            let params = DemoParams::from_matches(m);
            commands::demo::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `RUST_LOG` wins; otherwise `-v` enables debug and `-vv` trace output.
fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
