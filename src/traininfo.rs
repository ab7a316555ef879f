extern crate serde;
extern crate serde_json;

use crate::client;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct TrainInfo {
    pub train_no: Option<String>,
    pub train_name: Option<String>,
    pub source: Option<StationStop>,
    pub destination: Option<StationStop>,
}

// The upstream payload stores both endpoint timestamps under "Arrival";
// the source stop's one is the departure time of the train.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct StationStop {
    pub code: Option<String>,
    pub arrival: Option<String>,
}

fn or_na(field: &Option<String>) -> &str {
    return field.as_deref().unwrap_or("N/A");
}

pub fn render_report(rail_client: &client::RailClient, info: &TrainInfo) -> String {
    let source_code = info.source.as_ref().and_then(|s| s.code.clone());
    let dest_code = info.destination.as_ref().and_then(|s| s.code.clone());

    let source_name = match &source_code {
        Some(code) => rail_client.station_name(code),
        None => "N/A".to_string(),
    };
    let dest_name = match &dest_code {
        Some(code) => rail_client.station_name(code),
        None => "N/A".to_string(),
    };

    let departure = info.source.as_ref().and_then(|s| s.arrival.clone());
    let arrival = info.destination.as_ref().and_then(|s| s.arrival.clone());

    let mut out = String::new();
    out.push_str("\n--- Train Information ---\n");
    out.push_str(&format!("{:<21}: {}\n", "Train Number", or_na(&info.train_no)));
    out.push_str(&format!("{:<21}: {}\n", "Train Name", or_na(&info.train_name)));
    out.push_str(&format!("{:<21}: {} ({})\n", "Source Station",
                          source_name, source_code.as_deref().unwrap_or("N/A")));
    out.push_str(&format!("{:<21}: {}\n", "Departure Time", or_na(&departure)));
    out.push_str(&format!("{:<21}: {} ({})\n", "Destination Station",
                          dest_name, dest_code.as_deref().unwrap_or("N/A")));
    out.push_str(&format!("{:<21}: {}\n", "Arrival Time", or_na(&arrival)));
    return out;
}
