use std::io::BufRead;
use std::io::Write;

use crate::client;

const MENU_TEXT: &str = "How would you like to proceed?
1) Live Train Status
2) PNR Status
3) Train Schedule
4) Train Number Information
5) Get Fare
6) Coach Layout
7) Trains on Station
8) Trains Between Station
9) Exit
Enter choice: ";

// Reads numeric selections until "9" (or EOF). Query errors are handled
// inside the client methods, so one bad request never ends the session.
pub fn run<R: BufRead, W: Write>(rail_client: &client::RailClient,
                                 input: &mut R,
                                 out: &mut W) -> std::io::Result<()> {
    loop {
        write!(out, "\n{}\n", "-".repeat(40))?;
        write!(out, "{}", MENU_TEXT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match line.trim() {
            "1" => {
                let train_no = prompt(input, out, "Enter Train Number: ")?;
                let date = prompt(input, out, "Enter Date (yyyy-mm-dd): ")?;
                rail_client.live_status(&train_no, &date, out)?;
            },
            "2" => {
                let pnr = prompt(input, out, "Enter PNR Number: ")?;
                let status = rail_client.pnr_status(&pnr, out)?;
                writeln!(out, "\n--- PNR Status ---")?;
                writeln!(out, "{}", client::pretty(&status))?;
            },
            "3" => {
                let train_no = prompt(input, out, "Enter Train Number: ")?;
                rail_client.train_schedule(&train_no, out)?;
            },
            "4" => {
                let train_no = prompt(input, out, "Enter Train Number: ")?;
                rail_client.train_info(&train_no, out)?;
            },
            "5" => {
                let train_no = prompt(input, out, "Enter Train Number: ")?;
                let station_from = prompt(input, out, "Enter Source Station Code: ")?;
                let station_to = prompt(input, out, "Enter Destination Station Code: ")?;
                let quota = prompt(
                    input, out,
                    "Enter Quota (GN for General / CK for Current Booking): ")?;
                rail_client.fare(&train_no, &station_from, &station_to, &quota, out)?;
            },
            "6" => {
                let train_no = prompt(input, out, "Enter Train Number: ")?;
                rail_client.coach_layout(&train_no, out)?;
            },
            "7" => {
                let station_code = prompt(input, out, "Enter Station Code: ")?;
                rail_client.trains_on_station(&station_code, out)?;
            },
            "8" => {
                let station_from = prompt(input, out, "Enter Source Station Code: ")?;
                let station_to = prompt(input, out, "Enter Destination Station Code: ")?;
                rail_client.trains_between(&station_from, &station_to, out)?;
            },
            "9" => {
                writeln!(out, "Exiting... Thank you!")?;
                return Ok(());
            },
            _ => {
                writeln!(out, "Invalid option! Please select a valid number (1-9).")?;
            },
        }
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R,
                                out: &mut W,
                                message: &str) -> std::io::Result<String> {
    write!(out, "{}", message)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    return Ok(line.trim().to_string());
}
