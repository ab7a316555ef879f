extern crate serde;
extern crate serde_json;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct CoachLayoutResponse {
    pub coaches: Option<Vec<Coach>>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct Coach {
    pub serial_no: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
}

fn or_na(field: &Option<String>) -> &str {
    return field.as_deref().unwrap_or("N/A");
}

pub fn render_coach_layout(response: &CoachLayoutResponse) -> String {
    let coaches = match &response.coaches {
        Some(coaches) => coaches,
        None => return "Coach data not found.".to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!("\n{:<15} {:<15} {:<15}\n", "Serial No", "Code", "Name"));
    out.push_str(&"-".repeat(50));
    out.push('\n');
    for coach in coaches {
        out.push_str(&format!("{:<15} {:<15} {:<15}\n",
                              or_na(&coach.serial_no),
                              or_na(&coach.code),
                              or_na(&coach.name)));
    }
    return out;
}
