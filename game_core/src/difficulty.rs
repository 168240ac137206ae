//! Fixed difficulty lookup table

use std::fmt;
use std::str::FromStr;

/// Speed constants for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Multiplier on the base paddle speed for the opponent
    pub opponent_speed_factor: f32,
    /// Horizontal ball speed on serve and after every paddle hit
    pub serve_speed_x: f32,
    /// Maximum vertical ball speed on serve and paddle hits
    pub serve_speed_y: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Impossible,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile {
                opponent_speed_factor: 0.4,
                serve_speed_x: 8.0,
                serve_speed_y: 6.0,
            },
            Difficulty::Medium => DifficultyProfile {
                opponent_speed_factor: 0.6,
                serve_speed_x: 12.0,
                serve_speed_y: 8.0,
            },
            Difficulty::Hard => DifficultyProfile {
                opponent_speed_factor: 1.2,
                serve_speed_x: 16.0,
                serve_speed_y: 10.0,
            },
            Difficulty::Impossible => DifficultyProfile {
                opponent_speed_factor: 2.0,
                serve_speed_x: 25.0,
                serve_speed_y: 25.0,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Impossible => "impossible",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Difficulty name outside the fixed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDifficulty(pub String);

impl fmt::Display for UnknownDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown difficulty: {:?}", self.0)
    }
}

impl std::error::Error for UnknownDifficulty {}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medium_profile() {
        let profile = Difficulty::Medium.profile();
        assert_eq!(profile.serve_speed_x, 12.0);
        assert_eq!(profile.serve_speed_y, 8.0);
        assert_eq!(profile.opponent_speed_factor, 0.6);
    }

    #[test]
    fn test_parse_names() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.name().parse::<Difficulty>(), Ok(difficulty));
        }
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(" easy ".parse::<Difficulty>(), Ok(Difficulty::Easy));
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "nightmare".parse::<Difficulty>().unwrap_err();
        assert_eq!(err, UnknownDifficulty("nightmare".to_string()));
        assert_eq!(err.to_string(), "unknown difficulty: \"nightmare\"");
    }

    #[test]
    fn test_default_is_easy() {
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }
}
