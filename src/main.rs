extern crate anyhow;
extern crate flexi_logger;
extern crate getopts;
extern crate reqwest;
extern crate serde_json;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod client;
mod coaches;
mod menu;
mod result;
mod schedule;
mod stations;
mod traininfo;

use anyhow::Context;

#[derive(Deserialize, Debug)]
struct Credentials {
    api_key: String,
}

fn credentials_from_file<P: AsRef<std::path::Path>>(path: P) -> result::RailResult<Credentials> {
    let debug_path = path.as_ref().to_str().map(|x| x.to_string());
    let file = std::fs::File::open(path)
        .with_context(|| format!("Opening rail api creds from '{:?}'", debug_path))?;
    let reader = std::io::BufReader::new(file);
    let creds: Credentials = serde_json::from_reader(reader)
        .with_context(|| format!("while parsing credentials"))?;
    return Ok(creds);
}

// A missing key resolves to "" and is passed through to the API unvalidated.
fn resolve_api_key(matches: &getopts::Matches) -> String {
    if let Some(key) = matches.opt_str("api-key") {
        return key;
    }

    if let Some(path) = matches.opt_str("credentials-file") {
        match credentials_from_file(&path) {
            Ok(creds) => return creds.api_key,
            Err(err) => warn!("Ignoring credentials file: {}", err),
        }
    }

    return std::env::var("RAIL_API_KEY").unwrap_or_default();
}

fn main() {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")
        .expect("logger spec")
        .start()
        .expect("logger start");

    let args: Vec<String> = std::env::args().collect();
    let mut opts = getopts::Options::new();
    opts.optopt("k", "api-key", "API key for indianrailapi.com.", "KEY");
    opts.optopt("c", "credentials-file",
                "JSON file holding {\"api_key\": \"...\"}.", "FILENAME");
    opts.optopt("u", "base-url", "Override the API base URL.", "URL");

    let matches = opts.parse(&args[1..]).expect("parse opts");

    let api_key = resolve_api_key(&matches);
    let rail_client = match matches.opt_str("base-url") {
        Some(base_url) => client::RailClient::new_ext(&api_key, &base_url, client::real_fetch),
        None => client::RailClient::new(&api_key),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();
    match menu::run(&rail_client, &mut input, &mut out) {
        Ok(()) => {},
        Err(err) => eprintln!("{}", err),
    }
}
