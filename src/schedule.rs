extern crate serde;
extern crate serde_json;

// TrainSchedule responses carry the stops under a top-level "Route" array.
// Every field is optional; absent values render as "N/A".
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleResponse {
    pub route: Option<Vec<ScheduleStop>>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleStop {
    pub station_name: Option<String>,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    pub distance: Option<String>,
}

fn or_na(field: &Option<String>) -> &str {
    return field.as_deref().unwrap_or("N/A");
}

pub fn render_schedule(response: &ScheduleResponse) -> String {
    let stops = match &response.route {
        Some(stops) => stops,
        None => return "Route not found in the response.".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!("\n{:<25} {:<15} {:<15} {:<15}\n",
                          "Station Name", "Arrival Time",
                          "Departure Time", "Distance (KM)"));
    out.push_str(&"-".repeat(75));
    out.push('\n');
    for stop in stops {
        out.push_str(&format!("{:<25} {:<15} {:<15} {:<15}\n",
                              or_na(&stop.station_name),
                              or_na(&stop.arrival_time),
                              or_na(&stop.departure_time),
                              or_na(&stop.distance)));
    }
    return out;
}
