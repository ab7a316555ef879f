extern crate serde;
extern crate serde_json;

// StationCodeToName payload. The lookup only trusts the name when the
// embedded ResponseCode is the string "200".
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct StationNameResponse {
    pub response_code: Option<String>,
    pub station: Option<StationRecord>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct StationRecord {
    pub name_en: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct StationTrainsResponse {
    pub trains: Option<Vec<StationTrain>>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct StationTrain {
    pub train_no: Option<String>,
    pub train_name: Option<String>,
    pub source: Option<String>,
    pub arrival_time: Option<String>,
    pub destination: Option<String>,
    pub departure_time: Option<String>,
}

fn or_na(field: &Option<String>) -> &str {
    return field.as_deref().unwrap_or("N/A");
}

// Falls back to the original code on any payload it doesn't like. Callers
// rely on this never failing, even for an empty code.
pub fn resolve_station_name(body: &str, station_code: &str) -> String {
    let response: StationNameResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(_) => return station_code.to_string(),
    };

    if response.response_code.as_deref() == Some("200") {
        if let Some(name) = response.station.and_then(|s| s.name_en) {
            return name;
        }
    }
    return station_code.to_string();
}

pub fn render_station_trains(response: &StationTrainsResponse, station_code: &str) -> String {
    let trains = match &response.trains {
        Some(trains) if !trains.is_empty() => trains,
        _ => return format!("No train data found for station code: {}", station_code),
    };

    let mut out = String::new();
    out.push_str(&format!("\nTrains Stopping at Station: {}\n", station_code.to_uppercase()));
    out.push_str(&"-".repeat(130));
    out.push('\n');
    out.push_str(&format!("{:<12} {:<30} {:<10} {:<10} {:<15} {:<10}\n",
                          "Train No.", "Train Name", "Source",
                          "Arrival", "Destination", "Departure"));
    out.push_str(&"-".repeat(130));
    out.push('\n');
    for train in trains {
        out.push_str(&format!("{:<12} {:<30} {:<10} {:<10} {:<15} {:<10}\n",
                              or_na(&train.train_no),
                              or_na(&train.train_name),
                              or_na(&train.source),
                              or_na(&train.arrival_time),
                              or_na(&train.destination),
                              or_na(&train.departure_time)));
    }
    out.push_str(&"-".repeat(130));
    out.push('\n');
    return out;
}
