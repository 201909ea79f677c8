//! Plain-text table rendering for train listings.

use trains_core::TrainRecord;

/// Render records as a bordered table with a numbering column.
///
/// An empty slice renders a message instead of an empty frame.
pub fn render(trains: &[TrainRecord]) -> String {
    if trains.is_empty() {
        return "No trains to display.\n".to_string();
    }

    let frame = frame_line();
    let mut out = String::new();
    out.push_str(&frame);
    out.push_str(&format!(
        "| {:^4} | {:^20} | {:^13} | {:^18} | {:^20} |\n",
        "#", "Departure point", "Train number", "Departure time", "Destination"
    ));
    out.push_str(&frame);
    for (index, train) in trains.iter().enumerate() {
        out.push_str(&format!(
            "| {:>4} | {:<20} | {:<13} | {:>18} | {:<20} |\n",
            index + 1,
            train.departure_point,
            train.number,
            train.departure_time,
            train.destination
        ));
        out.push_str(&frame);
    }
    out
}

fn frame_line() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+-{}-+\n",
        "-".repeat(4),
        "-".repeat(20),
        "-".repeat(13),
        "-".repeat(18),
        "-".repeat(20)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_message() {
        assert_eq!(render(&[]), "No trains to display.\n");
    }

    #[test]
    fn rows_are_numbered_and_framed() {
        let trains = vec![
            TrainRecord::new("Moscow", "101", "09:15", "Kazan"),
            TrainRecord::new("Moscow", "202", "08:00", "Samara"),
        ];
        let rendered = render(&trains);
        let lines: Vec<&str> = rendered.lines().collect();

        // frame, header, frame, then a row and a frame per record
        assert_eq!(lines.len(), 3 + trains.len() * 2);
        assert!(lines[0].starts_with("+-"));
        assert!(lines[1].contains("Departure point"));
        assert!(lines[3].contains("|    1 |"));
        assert!(lines[3].contains("Moscow"));
        assert!(lines[5].contains("|    2 |"));
        assert!(lines[5].contains("Samara"));
    }

    #[test]
    fn frame_width_matches_rows() {
        let trains = vec![TrainRecord::new("Moscow", "101", "09:15", "Kazan")];
        let rendered = render(&trains);
        let lines: Vec<&str> = rendered.lines().collect();

        let width = lines[0].len();
        assert!(lines.iter().all(|line| line.len() == width));
    }
}
