use makesite::build::build_site;
use makesite::config::{app, Config};

fn main() {
    env_logger::init();

    let matches = app().get_matches();
    let config = match Config::load(&matches) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = build_site(config) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
