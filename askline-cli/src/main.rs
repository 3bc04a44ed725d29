use askline::console::{Prompter, StdioChannel};

fn main() {
    println!("------------------------------------------------------------");
    println!("             █████  ███████ ██   ██ ██      ██ ███    ██ ███████");
    println!("            ██   ██ ██      ██  ██  ██      ██ ████   ██ ██     ");
    println!("            ███████ ███████ █████   ██      ██ ██ ██  ██ █████  ");
    println!("            ██   ██      ██ ██  ██  ██      ██ ██  ██ ██ ██     ");
    println!("            ██   ██ ███████ ██   ██ ███████ ██ ██   ████ ███████");
    println!("                         interactive input demo             ");
    println!("                            VERSION: 0.1.0                  ");
    println!("------------------------------------------------------------");

    let mut io = Prompter::new(StdioChannel::new());

    let name = io.read_string_predicate(
        "What's your name? ",
        "Name",
        |answer| !answer.trim().is_empty(),
    );

    let guests = io.read_int("How many guests are you bringing? ", "Guest count");

    let rating = io.read_number_range(
        "Rate the venue from 1 to 10 (bounds allowed): ",
        "Rating",
        1.0,
        10.0,
    );

    let opens = io.read_iso_date("When do bookings open? (YYYY-MM-DD) ", "Date");
    let closes = io.read_iso_date("When do bookings close? (YYYY-MM-DD) ", "Date");

    let visit = io.read_iso_date_range(
        "Pick a visit date strictly between those two: ",
        "Date",
        opens,
        closes,
    );

    let confirmed = io.read_string_options(
        "Confirm the booking? (yes/no) ",
        "Answer",
        &[String::from("yes"), String::from("no")],
    );

    if confirmed == "yes" {
        io.write_line(format!(
            "Booked: {} plus {} guests on {}, venue rated {}.",
            name, guests, visit, rating
        ));
    } else {
        io.write_line("Nothing booked.");
    }
}
