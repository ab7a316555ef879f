extern crate reqwest;
extern crate serde_json;

use std::io::Write;

use crate::coaches;
use crate::result;
use crate::schedule;
use crate::stations;
use crate::traininfo;

pub const BASE_URL: &str = "http://indianrailapi.com/api/v2/";

pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub type FetchFn = fn(&str) -> result::RailResult<HttpResponse>;

pub fn real_fetch(url: &str) -> result::RailResult<HttpResponse> {
    use std::io::Read;

    debug!("Fetching {}", url);
    let http_client = reqwest::blocking::Client::new();
    let mut response = http_client.get(url).send()?;
    let status = response.status().as_u16();
    let mut body = String::new();
    response.read_to_string(&mut body)?;
    return Ok(HttpResponse{status: status, body: body});
}

// One method per indianrailapi.com endpoint. Parameters go into the URL
// path verbatim; the remote side owns all validation. Every failure is
// reported right here, on the caller's output handle, so the interactive
// loop never sees an error.
pub struct RailClient {
    api_key: String,
    base_url: String,
    fetch_fn: FetchFn,
}

impl RailClient {
    pub fn new(api_key: &str) -> RailClient {
        return RailClient::new_ext(api_key, BASE_URL, real_fetch);
    }

    pub fn new_ext(api_key: &str, base_url: &str, fetch_fn: FetchFn) -> RailClient {
        return RailClient{
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
            fetch_fn: fetch_fn,
        };
    }

    fn fetch_body(&self, url: &str) -> result::RailResult<String> {
        let response = (self.fetch_fn)(url)?;
        return Ok(response.body);
    }

    pub fn train_schedule<W: Write>(&self, train_number: &str,
                                    out: &mut W) -> std::io::Result<()> {
        let url = format!("{}TrainSchedule/apikey/{}/TrainNumber/{}/",
                          self.base_url, self.api_key, train_number);
        let body = match self.fetch_body(&url) {
            Ok(body) => body,
            Err(err) => {
                return writeln!(out, "Error: request failed: {}", err);
            },
        };

        match serde_json::from_str::<schedule::ScheduleResponse>(&body) {
            Ok(response) => {
                return writeln!(out, "{}", schedule::render_schedule(&response));
            },
            Err(_) => {
                writeln!(out, "Error: invalid JSON response.")?;
                return writeln!(out, "Response text: {}", body);
            },
        }
    }

    pub fn live_status<W: Write>(&self, train_number: &str, date: &str,
                                 out: &mut W) -> std::io::Result<()> {
        let url = format!("{}livetrainstatus/apikey/{}/trainnumber/{}/date/{}",
                          self.base_url, self.api_key, train_number, date);
        match self.fetch_value(&url) {
            Ok(value) => return writeln!(out, "{}", pretty(&value)),
            Err(_) => return writeln!(out, "Could not fetch live train status."),
        }
    }

    // Returns the payload instead of printing it; the menu owns the PNR
    // display. A body that doesn't parse yields the sentinel object.
    pub fn pnr_status<W: Write>(&self, pnr_number: &str,
                                out: &mut W) -> std::io::Result<serde_json::Value> {
        let url = format!("{}PNRCheck/apikey/{}/PNRNumber/{}/",
                          self.base_url, self.api_key, pnr_number);
        let body = match self.fetch_body(&url) {
            Ok(body) => body,
            Err(err) => {
                writeln!(out, "Error: request failed: {}", err)?;
                return Ok(serde_json::json!({"error": "Invalid response"}));
            },
        };

        match serde_json::from_str(&body) {
            Ok(value) => return Ok(value),
            Err(_) => {
                writeln!(out, "Error: invalid JSON response.")?;
                writeln!(out, "Response text: {}", body)?;
                return Ok(serde_json::json!({"error": "Invalid response"}));
            },
        }
    }

    // The only endpoint that inspects the HTTP status before parsing.
    pub fn train_info<W: Write>(&self, train_number: &str,
                                out: &mut W) -> std::io::Result<()> {
        let url = format!("{}TrainInformation/apikey/{}/TrainNumber/{}/",
                          self.base_url, self.api_key, train_number);
        let response = match (self.fetch_fn)(&url) {
            Ok(response) => response,
            Err(err) => {
                return writeln!(out, "Error fetching train info: {}", err);
            },
        };

        if response.status != 200 {
            return writeln!(out, "Error fetching train info: {}", response.status);
        }

        match serde_json::from_str::<traininfo::TrainInfo>(&response.body) {
            Ok(info) => {
                return writeln!(out, "{}", traininfo::render_report(self, &info));
            },
            Err(err) => return writeln!(out, "Error displaying train info: {}", err),
        }
    }

    // Never fails: any transport or payload problem resolves to the code
    // the caller passed in.
    pub fn station_name(&self, station_code: &str) -> String {
        let url = format!("{}StationCodeToName/apikey/{}/StationCode/{}/",
                          self.base_url, self.api_key, station_code);
        match self.fetch_body(&url) {
            Ok(body) => return stations::resolve_station_name(&body, station_code),
            Err(_) => return station_code.to_string(),
        }
    }

    pub fn fare<W: Write>(&self, train_number: &str, station_from: &str,
                          station_to: &str, quota: &str,
                          out: &mut W) -> std::io::Result<()> {
        let url = format!("{}TrainFare/apikey/{}/TrainNumber/{}/From/{}/To/{}/Quota/{}",
                          self.base_url, self.api_key, train_number,
                          station_from, station_to, quota);
        match self.fetch_value(&url) {
            Ok(value) => return writeln!(out, "{}", pretty(&value)),
            Err(_) => return writeln!(out, "Unable to fetch fare details."),
        }
    }

    pub fn coach_layout<W: Write>(&self, train_number: &str,
                                  out: &mut W) -> std::io::Result<()> {
        let url = format!("{}CoachLayout/apikey/{}/TrainNumber/{}",
                          self.base_url, self.api_key, train_number);
        let parsed = self.fetch_body(&url).and_then(|body| {
            return serde_json::from_str::<coaches::CoachLayoutResponse>(&body)
                .map_err(result::RailError::from);
        });
        match parsed {
            Ok(response) => {
                return writeln!(out, "{}", coaches::render_coach_layout(&response));
            },
            Err(_) => return writeln!(out, "Error fetching coach layout."),
        }
    }

    pub fn trains_on_station<W: Write>(&self, station_code: &str,
                                       out: &mut W) -> std::io::Result<()> {
        let url = format!("{}AllTrainOnStation/apikey/{}/StationCode/{}/",
                          self.base_url, self.api_key, station_code);
        let body = match self.fetch_body(&url) {
            Ok(body) => body,
            Err(err) => {
                return writeln!(out, "Error: request failed: {}", err);
            },
        };

        match serde_json::from_str::<stations::StationTrainsResponse>(&body) {
            Ok(response) => {
                return writeln!(out, "{}",
                                stations::render_station_trains(&response, station_code));
            },
            Err(_) => {
                writeln!(out, "Error: invalid JSON response received from the API.")?;
                return writeln!(out, "Raw response: {}", body);
            },
        }
    }

    pub fn trains_between<W: Write>(&self, station_from: &str, station_to: &str,
                                    out: &mut W) -> std::io::Result<()> {
        let url = format!("{}TrainBetweenStation/apikey/{}/From/{}/To/{}",
                          self.base_url, self.api_key, station_from, station_to);
        match self.fetch_value(&url) {
            Ok(value) => return writeln!(out, "{}", pretty(&value)),
            Err(_) => return writeln!(out, "Error fetching trains between stations."),
        }
    }

    fn fetch_value(&self, url: &str) -> result::RailResult<serde_json::Value> {
        let body = self.fetch_body(url)?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        return Ok(value);
    }
}

pub fn pretty(value: &serde_json::Value) -> String {
    return serde_json::to_string_pretty(value).unwrap_or_default();
}

#[cfg(test)]
mod tests {
    extern crate serde_json;

    use std::cell::RefCell;

    use crate::result;

    use super::HttpResponse;
    use super::RailClient;

    thread_local! {
        static LAST_URL: RefCell<String> = RefCell::new(String::new());
    }

    fn recording_fetch(url: &str) -> result::RailResult<HttpResponse> {
        LAST_URL.with(|u| *u.borrow_mut() = url.to_string());
        return Ok(HttpResponse{status: 200, body: "{}".to_string()});
    }

    fn last_url() -> String {
        return LAST_URL.with(|u| u.borrow().clone());
    }

    fn garbage_fetch(_url: &str) -> result::RailResult<HttpResponse> {
        return Ok(HttpResponse{status: 200, body: "<html>not json</html>".to_string()});
    }

    fn failing_fetch(_url: &str) -> result::RailResult<HttpResponse> {
        return Err(result::make_error("connection refused"));
    }

    fn test_client(fetch_fn: super::FetchFn) -> RailClient {
        return RailClient::new_ext("KEY123", "http://rail.test/api/v2/", fetch_fn);
    }

    fn captured<F>(run: F) -> String
        where F: FnOnce(&mut Vec<u8>) -> std::io::Result<()> {
        let mut out: Vec<u8> = vec![];
        run(&mut out).expect("writing to buffer");
        return String::from_utf8(out).expect("client output utf8");
    }

    #[test]
    fn builds_endpoint_urls() {
        let rail_client = test_client(recording_fetch);
        let mut out: Vec<u8> = vec![];

        rail_client.train_schedule("12002", &mut out).expect("train_schedule");
        assert_eq!("http://rail.test/api/v2/TrainSchedule/apikey/KEY123/TrainNumber/12002/",
                   last_url());

        rail_client.live_status("12002", "2026-08-29", &mut out).expect("live_status");
        assert_eq!("http://rail.test/api/v2/livetrainstatus/apikey/KEY123/trainnumber/12002/date/2026-08-29",
                   last_url());

        rail_client.pnr_status("451278963", &mut out).expect("pnr_status");
        assert_eq!("http://rail.test/api/v2/PNRCheck/apikey/KEY123/PNRNumber/451278963/",
                   last_url());

        rail_client.train_info("12002", &mut out).expect("train_info");
        assert_eq!("http://rail.test/api/v2/TrainInformation/apikey/KEY123/TrainNumber/12002/",
                   last_url());

        rail_client.station_name("NDLS");
        assert_eq!("http://rail.test/api/v2/StationCodeToName/apikey/KEY123/StationCode/NDLS/",
                   last_url());

        rail_client.fare("12002", "NDLS", "RKMP", "GN", &mut out).expect("fare");
        assert_eq!("http://rail.test/api/v2/TrainFare/apikey/KEY123/TrainNumber/12002/From/NDLS/To/RKMP/Quota/GN",
                   last_url());

        rail_client.coach_layout("12002", &mut out).expect("coach_layout");
        assert_eq!("http://rail.test/api/v2/CoachLayout/apikey/KEY123/TrainNumber/12002",
                   last_url());

        rail_client.trains_on_station("AGC", &mut out).expect("trains_on_station");
        assert_eq!("http://rail.test/api/v2/AllTrainOnStation/apikey/KEY123/StationCode/AGC/",
                   last_url());

        rail_client.trains_between("NDLS", "RKMP", &mut out).expect("trains_between");
        assert_eq!("http://rail.test/api/v2/TrainBetweenStation/apikey/KEY123/From/NDLS/To/RKMP",
                   last_url());
    }

    #[test]
    fn malformed_parameters_pass_through_verbatim() {
        let rail_client = test_client(recording_fetch);
        let mut out: Vec<u8> = vec![];

        rail_client.train_schedule("not a train", &mut out).expect("train_schedule");
        assert_eq!("http://rail.test/api/v2/TrainSchedule/apikey/KEY123/TrainNumber/not a train/",
                   last_url());
    }

    #[test]
    fn schedule_echoes_raw_body_on_bad_json() {
        let rail_client = test_client(garbage_fetch);

        let output = captured(|out| rail_client.train_schedule("12002", out));

        assert_eq!(1, output.matches("Error: invalid JSON response.").count());
        assert!(output.contains("Response text: <html>not json</html>"));
        assert!(!output.contains("Station Name"));
    }

    #[test]
    fn trains_on_station_echoes_raw_body_on_bad_json() {
        let rail_client = test_client(garbage_fetch);

        let output = captured(|out| rail_client.trains_on_station("AGC", out));

        assert_eq!(1, output.matches("Error: invalid JSON response received from the API.").count());
        assert!(output.contains("Raw response: <html>not json</html>"));
        assert!(!output.contains("Train No."));
    }

    #[test]
    fn train_info_reports_non_200_status_and_no_report() {
        fn unavailable_fetch(_url: &str) -> result::RailResult<HttpResponse> {
            return Ok(HttpResponse{status: 503, body: "Service Unavailable".to_string()});
        }

        let rail_client = test_client(unavailable_fetch);
        let output = captured(|out| rail_client.train_info("12002", out));

        assert_eq!("Error fetching train info: 503\n", output);
        assert!(!output.contains("--- Train Information ---"));
    }

    #[test]
    fn live_status_failure_prints_single_generic_notice() {
        let rail_client = test_client(garbage_fetch);

        let output = captured(|out| rail_client.live_status("12002", "2026-08-29", out));

        assert_eq!("Could not fetch live train status.\n", output);
    }

    #[test]
    fn coach_layout_failure_prints_single_generic_notice() {
        let rail_client = test_client(garbage_fetch);

        let output = captured(|out| rail_client.coach_layout("12002", out));

        assert_eq!("Error fetching coach layout.\n", output);
    }

    #[test]
    fn pnr_returns_parsed_payload() {
        fn pnr_fetch(_url: &str) -> result::RailResult<HttpResponse> {
            return Ok(HttpResponse{
                status: 200,
                body: r#"{"Pnr":"451278963","Status":"CNF"}"#.to_string(),
            });
        }

        let rail_client = test_client(pnr_fetch);
        let mut out: Vec<u8> = vec![];
        let value = rail_client.pnr_status("451278963", &mut out).expect("pnr_status");

        assert_eq!("CNF", value["Status"]);
        assert!(out.is_empty());
    }

    #[test]
    fn pnr_returns_sentinel_and_echoes_body_on_bad_json() {
        let rail_client = test_client(garbage_fetch);
        let mut out: Vec<u8> = vec![];
        let value = rail_client.pnr_status("451278963", &mut out).expect("pnr_status");

        assert_eq!("Invalid response", value["error"]);
        let output = String::from_utf8(out).expect("client output utf8");
        assert_eq!(1, output.matches("Error: invalid JSON response.").count());
        assert!(output.contains("Response text: <html>not json</html>"));
    }

    #[test]
    fn pnr_returns_sentinel_on_transport_error() {
        let rail_client = test_client(failing_fetch);
        let mut out: Vec<u8> = vec![];
        let value = rail_client.pnr_status("451278963", &mut out).expect("pnr_status");

        assert_eq!("Invalid response", value["error"]);
    }

    #[test]
    fn station_name_falls_back_on_transport_error() {
        let rail_client = test_client(failing_fetch);

        assert_eq!("NDLS", rail_client.station_name("NDLS"));
        assert_eq!("", rail_client.station_name(""));
    }

    #[test]
    fn station_name_falls_back_on_garbage_body() {
        let rail_client = test_client(garbage_fetch);

        assert_eq!("NDLS", rail_client.station_name("NDLS"));
    }
}
