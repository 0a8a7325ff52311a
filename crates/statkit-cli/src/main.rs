use log::LevelFilter;

mod command;
mod util;

fn main() -> anyhow::Result<()> {
    // logs go to stderr so JSON on stdout stays machine readable
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("STATKIT_LOG", "warn"))
        .init();

    command::run()
}
