// Abstract Factory demo: the same client code runs against both factories.

use std::io;

use abstract_factory::Result;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    abstract_factory::run(&mut out)
}
