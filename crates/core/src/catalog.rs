//! Compiled-in catalog of games, systems, and mission types.

use std::fmt;

/// The three supported game datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameId {
    /// Wing Commander 2: Vengeance of the Kilrathi.
    WingCommander2,
    /// Secret Operations 1 expansion.
    SecretOps1,
    /// Secret Operations 2 expansion.
    SecretOps2,
}

impl GameId {
    /// Every selectable game, in menu order.
    pub const ALL: [GameId; 3] = [GameId::WingCommander2, GameId::SecretOps1, GameId::SecretOps2];

    /// Resolve this id to its catalog record.
    pub fn info(self) -> &'static GameInfo {
        match self {
            GameId::WingCommander2 => &WC2,
            GameId::SecretOps1 => &SO1,
            GameId::SecretOps2 => &SO2,
        }
    }

    /// Lowercase tag used in the generated launch command (`play-<tag>`).
    pub fn launch_tag(self) -> &'static str {
        match self {
            GameId::WingCommander2 => "wc2",
            GameId::SecretOps1 => "so1",
            GameId::SecretOps2 => "so2",
        }
    }
}

/// One game's catalog entry.
#[derive(Debug)]
pub struct GameInfo {
    /// Which game this record describes.
    pub id: GameId,
    /// Human-readable game title.
    pub title: &'static str,
    /// Short uppercase abbreviation shown in prompts.
    pub abbrev: &'static str,
    /// Campaign systems in menu order. Never empty.
    pub systems: &'static [SystemInfo],
}

/// A campaign system and its missions.
#[derive(Debug)]
pub struct SystemInfo {
    /// System name as shown in the menu.
    pub name: &'static str,
    /// Mission types in flight order. Never empty.
    pub missions: &'static [MissionType],
}

impl SystemInfo {
    /// User-facing description of one mission, e.g. `Enigma System A - Strike`.
    pub fn mission_label(&self, mission: usize) -> String {
        let letter = mission_letter(mission);
        match self.missions.get(mission) {
            Some(kind) => format!("{} {} - {}", self.name, letter, kind),
            None => format!("{} {}", self.name, letter),
        }
    }
}

/// Closed vocabulary of mission types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionType {
    /// Fly a patrol circuit.
    Patrol,
    /// Attack a designated target.
    Strike,
    /// Escort a friendly ship.
    Escort,
    /// Meet up with friendly forces.
    Rendezvous,
    /// Defend a fixed position.
    Defend,
}

impl fmt::Display for MissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MissionType::Patrol => "Patrol",
            MissionType::Strike => "Strike",
            MissionType::Escort => "Escort",
            MissionType::Rendezvous => "Rendezvous",
            MissionType::Defend => "Defend",
        };
        f.write_str(label)
    }
}

/// Letter designation for a zero-based mission index (`0` → `A`).
pub fn mission_letter(mission: usize) -> char {
    char::from(b'A' + (mission as u8 & 0x1f))
}

use MissionType::{Defend, Escort, Patrol, Rendezvous, Strike};

static WC2: GameInfo = GameInfo {
    id: GameId::WingCommander2,
    title: "Wing Commander 2",
    abbrev: "WC2",
    systems: &[
        SystemInfo { name: "Gwynedd System", missions: &[Patrol, Defend, Escort, Patrol] },
        SystemInfo { name: "Niven System", missions: &[Patrol, Patrol, Escort, Patrol] },
        SystemInfo { name: "Ghorah Khar", missions: &[Patrol, Escort, Escort, Defend] },
        SystemInfo { name: "Novaya Kiev", missions: &[Strike, Rendezvous, Strike, Rendezvous] },
        SystemInfo { name: "Heaven's Gate", missions: &[Patrol, Escort, Escort, Strike] },
        SystemInfo { name: "Tesla System", missions: &[Patrol, Strike, Escort, Escort] },
        // The campaign skips Enigma's fourth slot; only three missions fly.
        SystemInfo { name: "Enigma System", missions: &[Strike, Strike, Strike] },
        SystemInfo { name: "K'tithrak Mang", missions: &[Strike, Patrol, Strike, Strike] },
        SystemInfo { name: "Ghorah Khar (Alt)", missions: &[Patrol, Patrol, Patrol, Patrol] },
        SystemInfo { name: "Novaya Kiev (Alt)", missions: &[Escort, Patrol, Patrol, Rendezvous] },
        SystemInfo { name: "Tesla (Alt)", missions: &[Escort, Strike, Defend, Escort] },
        SystemInfo { name: "Gwynedd (Alt)", missions: &[Strike, Patrol, Strike, Strike] },
    ],
};

static SO1: GameInfo = GameInfo {
    id: GameId::SecretOps1,
    title: "Secret Operations 1",
    abbrev: "SO1",
    systems: &[
        SystemInfo { name: "Pembroke System", missions: &[Patrol, Patrol, Defend, Patrol, Defend] },
        SystemInfo { name: "Rigel System", missions: &[Patrol, Patrol, Patrol, Patrol, Strike] },
        SystemInfo {
            name: "Ghorah Khar (Part 1)",
            missions: &[Patrol, Rendezvous, Patrol, Patrol, Strike],
        },
        SystemInfo {
            name: "Ghorah Khar (Part 2)",
            missions: &[Strike, Strike, Patrol, Strike, Strike],
        },
    ],
};

static SO2: GameInfo = GameInfo {
    id: GameId::SecretOps2,
    title: "Secret Operations 2",
    abbrev: "SO2",
    systems: &[
        SystemInfo { name: "Canewdon (Part 1)", missions: &[Strike, Patrol, Strike, Escort, Patrol] },
        SystemInfo { name: "Canewdon (Part 2)", missions: &[Patrol, Strike, Patrol, Strike, Patrol] },
        SystemInfo {
            name: "Canewdon (Part 3)",
            missions: &[Patrol, Patrol, Rendezvous, Strike, Patrol],
        },
        SystemInfo { name: "Ayers Rock", missions: &[Strike, Strike, Strike, Strike, Patrol] },
    ],
};
