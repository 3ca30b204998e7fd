use log::LevelFilter;
use std::io::Write;

use chrono::Local;

/// Diagnostics go to stderr so they never mix with the formatted lines.
/// `RUST_LOG` overrides the level given on the command line.
pub(crate) fn setup_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
            writeln!(
                buf,
                "[{} {} {}] {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(level)
        .parse_env("RUST_LOG")
        .target(env_logger::Target::Stderr)
        .init();
}
