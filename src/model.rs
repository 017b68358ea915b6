//! The submission: a captured customer configuration.
//!
//! Field names mirror the stored JSON exactly (the web tier that produces
//! these files is out of scope here). Everything except `id` and `timestamp`
//! is optional, since partially filled forms are valid input.

use serde::Deserialize;

/// A customer configuration as captured by the options form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Submission {
    pub id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub schema_version: Option<String>,

    // Customer identity
    #[serde(default)]
    pub bauherr_anrede: Option<String>,
    #[serde(default)]
    pub bauherr_vorname: Option<String>,
    #[serde(default)]
    pub bauherr_nachname: Option<String>,
    #[serde(default)]
    pub bauherr_email: Option<String>,
    #[serde(default)]
    pub bauherr_telefon: Option<String>,

    // Project facts
    #[serde(default)]
    pub kfw_standard: Option<String>,
    #[serde(default)]
    pub personenanzahl: Option<u32>,
    #[serde(default)]
    pub grundstueck: Option<String>,

    // Selected catalog variant ids
    #[serde(default)]
    pub haustyp: Option<String>,
    #[serde(default)]
    pub wall: Option<String>,
    #[serde(default)]
    pub innerwall: Option<String>,
    #[serde(default)]
    pub decke: Option<String>,
    #[serde(default)]
    pub window: Option<String>,
    #[serde(default)]
    pub tiles: Option<String>,
    #[serde(default)]
    pub dach: Option<String>,
    #[serde(default)]
    pub heizung: Option<String>,
    #[serde(default)]
    pub treppe: Option<String>,
    #[serde(default)]
    pub lueftung: Option<String>,

    #[serde(default)]
    pub rooms: Rooms,
    #[serde(default)]
    pub eigenleistungen: Vec<String>,

    // Advisor handoff
    #[serde(default)]
    pub berater_name: Option<String>,
    #[serde(default)]
    pub berater_telefon: Option<String>,
    #[serde(default)]
    pub berater_email: Option<String>,
    #[serde(default)]
    pub berater_freitext: Option<String>,
}

/// Planned rooms, grouped by floor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rooms {
    #[serde(default)]
    pub erdgeschoss: Vec<Room>,
    #[serde(default)]
    pub obergeschoss: Vec<Room>,
    #[serde(default)]
    pub untergeschoss: Vec<Room>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Room {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub details: Option<String>,
}

impl Submission {
    /// Parse a submission from JSON.
    pub fn from_json(json: &str) -> Result<Self, crate::error::ProspektError> {
        Ok(serde_json::from_str(json)?)
    }

    /// True if any floor has at least one room.
    pub fn has_rooms(&self) -> bool {
        !self.rooms.erdgeschoss.is_empty()
            || !self.rooms.obergeschoss.is_empty()
            || !self.rooms.untergeschoss.is_empty()
    }

    /// True if the advisor page should appear.
    pub fn has_advisor(&self) -> bool {
        self.berater_name.is_some() || self.berater_freitext.is_some()
    }

    /// "Vorname Nachname", or "-" when both are missing.
    pub fn full_name(&self) -> String {
        let name = format!(
            "{} {}",
            self.bauherr_vorname.as_deref().unwrap_or(""),
            self.bauherr_nachname.as_deref().unwrap_or("")
        );
        let name = name.trim().to_string();
        if name.is_empty() {
            "-".to_string()
        } else {
            name
        }
    }

    /// Human label for the KfW efficiency standard.
    pub fn kfw_label(&self) -> &'static str {
        match self.kfw_standard.as_deref() {
            Some("KFW55") => "KfW 55",
            _ => "KfW 40",
        }
    }

    /// Human label for the plot status.
    pub fn grundstueck_label(&self) -> String {
        match self.grundstueck.as_deref() {
            Some("vorhanden") => "vorhanden".to_string(),
            Some("in_aussicht") => "in Aussicht".to_string(),
            Some("suche") => "auf der Suche".to_string(),
            Some(other) => other.to_string(),
            None => "-".to_string(),
        }
    }
}

const MONTHS: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

fn split_iso_date(timestamp: &str) -> Option<(u32, usize, u32)> {
    let date = timestamp.split('T').next()?;
    let mut parts = date.splitn(3, '-');
    let year: u32 = parts.next()?.parse().ok()?;
    let month: usize = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month, day))
}

/// "14. Februar 2026" from an ISO timestamp; the raw string if unparseable.
pub fn german_date(timestamp: &str) -> String {
    match split_iso_date(timestamp) {
        Some((y, m, d)) => format!("{}. {} {}", d, MONTHS[m - 1], y),
        None => timestamp.to_string(),
    }
}

/// "14.02.2026" from an ISO timestamp; the raw string if unparseable.
pub fn short_date(timestamp: &str) -> String {
    match split_iso_date(timestamp) {
        Some((y, m, d)) => format!("{:02}.{:02}.{}", d, m, y),
        None => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_submission_parses() {
        let s = Submission::from_json(r#"{ "id": "abc123" }"#).unwrap();
        assert_eq!(s.id, "abc123");
        assert!(s.wall.is_none());
        assert!(!s.has_rooms());
        assert!(!s.has_advisor());
        assert_eq!(s.full_name(), "-");
    }

    #[test]
    fn test_rooms_detection() {
        let s = Submission::from_json(
            r#"{ "id": "x", "rooms": { "obergeschoss": [{ "name": "Bad" }] } }"#,
        )
        .unwrap();
        assert!(s.has_rooms());
        assert_eq!(s.rooms.obergeschoss[0].name, "Bad");
    }

    #[test]
    fn test_kfw_and_grundstueck_labels() {
        let s = Submission::from_json(
            r#"{ "id": "x", "kfw_standard": "KFW55", "grundstueck": "in_aussicht" }"#,
        )
        .unwrap();
        assert_eq!(s.kfw_label(), "KfW 55");
        assert_eq!(s.grundstueck_label(), "in Aussicht");
    }

    #[test]
    fn test_date_formatting() {
        assert_eq!(german_date("2026-02-14T09:30:00Z"), "14. Februar 2026");
        assert_eq!(short_date("2026-02-14T09:30:00Z"), "14.02.2026");
        assert_eq!(german_date("soon"), "soon");
    }
}
