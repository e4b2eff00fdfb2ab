//! Built-in team roster
//!
//! Teams are cosmetic: the simulation never reads them. A renderer uses the
//! colours and short name to draw agents and the scoreboard.

use serde::{Deserialize, Serialize};

/// A selectable club
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    /// Three-letter scoreboard name
    pub short_name: String,
    /// Kit colours as `#RRGGBB`
    pub primary_color: String,
    pub secondary_color: String,
    pub text_color: String,
    #[serde(default)]
    pub players: Vec<String>,
}

struct Entry {
    id: &'static str,
    name: &'static str,
    short_name: &'static str,
    colors: [&'static str; 3],
    players: [&'static str; 5],
}

const ROSTER: [Entry; 8] = [
    Entry {
        id: "madrid",
        name: "Real Madrid",
        short_name: "RMA",
        colors: ["#FFFFFF", "#FEBE10", "#1B1B1B"],
        players: ["Courtois", "Vinícius Jr", "Bellingham", "Mbappé", "Valverde"],
    },
    Entry {
        id: "barca",
        name: "FC Barcelona",
        short_name: "FCB",
        colors: ["#A50044", "#004D98", "#FFFFFF"],
        players: ["Ter Stegen", "Lamine Yamal", "Lewandowski", "Gavi", "Pedri"],
    },
    Entry {
        id: "atleti",
        name: "Atlético de Madrid",
        short_name: "ATM",
        colors: ["#CB3524", "#262F61", "#FFFFFF"],
        players: ["Oblak", "Griezmann", "Julián Álvarez", "Koke", "De Paul"],
    },
    Entry {
        id: "bilbao",
        name: "Athletic Club",
        short_name: "ATH",
        colors: ["#EE2523", "#000000", "#FFFFFF"],
        players: ["Unai Simón", "Nico Williams", "Iñaki Williams", "Sancet", "Vivian"],
    },
    Entry {
        id: "sociedad",
        name: "Real Sociedad",
        short_name: "RSO",
        colors: ["#0067B1", "#FFFFFF", "#1B1B1B"],
        players: ["Remiro", "Oyarzabal", "Zubimendi", "Kubo", "Brais Méndez"],
    },
    Entry {
        id: "villarreal",
        name: "Villarreal CF",
        short_name: "VIL",
        colors: ["#FFE500", "#005187", "#1B1B1B"],
        players: ["Diego Conde", "Gerard Moreno", "Baena", "Yeremy Pino", "Ayoze"],
    },
    Entry {
        id: "betis",
        name: "Real Betis",
        short_name: "BET",
        colors: ["#0BB363", "#FFFFFF", "#1B1B1B"],
        players: ["Rui Silva", "Lo Celso", "Abde", "Fornals", "Isco"],
    },
    Entry {
        id: "valencia",
        name: "Valencia CF",
        short_name: "VCF",
        colors: ["#FFFFFF", "#000000", "#1B1B1B"],
        players: ["Mamardashvili", "Pepelu", "Hugo Duro", "Gayà", "Javi Guerra"],
    },
];

impl Entry {
    fn to_team(&self) -> Team {
        let [primary, secondary, text] = self.colors;
        Team {
            id: self.id.to_string(),
            name: self.name.to_string(),
            short_name: self.short_name.to_string(),
            primary_color: primary.to_string(),
            secondary_color: secondary.to_string(),
            text_color: text.to_string(),
            players: self.players.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// All built-in teams, in display order
pub fn builtin() -> Vec<Team> {
    ROSTER.iter().map(Entry::to_team).collect()
}

/// The first two teams of the roster, used when nothing is configured
pub fn default_pair() -> (Team, Team) {
    (ROSTER[0].to_team(), ROSTER[1].to_team())
}

/// Look up a built-in team by id (case-insensitive)
pub fn find(id: &str) -> Option<Team> {
    ROSTER
        .iter()
        .find(|entry| entry.id.eq_ignore_ascii_case(id))
        .map(Entry::to_team)
}
