use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// What the user wants to get out of the journal, picked at onboarding.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    RelieveConstipation,
    ReduceBloating,
    RegularHabit,
    GeneralWellness,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    FewTimesAWeek,
    Weekly,
    Irregular,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub gender: Option<Gender>,
    pub goal: Option<Goal>,
    pub symptoms: Vec<String>,
    pub frequency: Option<Frequency>,
    pub reminder_time: NaiveTime,
    pub onboarded: bool,
    pub level: u32,
    pub exp: u32,
}

impl UserProfile {
    pub fn new(name: &str) -> UserProfile {
        UserProfile {
            name: name.to_owned(),
            gender: None,
            goal: None,
            symptoms: Vec::new(),
            frequency: None,
            reminder_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            onboarded: false,
            level: 1,
            exp: 0,
        }
    }

    pub fn gain_exp(&mut self, exp: u32) {
        self.exp += exp;
        while let Some(next) = Level::get(self.level + 1) {
            if self.exp >= next.required_exp {
                self.level = next.level;
            } else {
                break;
            }
        }
    }

    pub fn current_level(&self) -> &'static Level {
        Level::get(self.level).unwrap_or(&LEVELS[0])
    }

    pub fn next_level(&self) -> Option<&'static Level> {
        Level::get(self.level + 1)
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile::new("")
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Level {
    pub level: u32,
    pub name: &'static str,
    pub icon: &'static str,
    pub required_exp: u32,
}

impl Level {
    pub fn get(level: u32) -> Option<&'static Level> {
        LEVELS.iter().find(|l| l.level == level)
    }
}

pub static LEVELS: [Level; 5] = [
    Level {
        level: 1,
        name: "새싹",
        icon: "🌱",
        required_exp: 0,
    },
    Level {
        level: 2,
        name: "성장",
        icon: "🌿",
        required_exp: 500,
    },
    Level {
        level: 3,
        name: "튼튼",
        icon: "🌳",
        required_exp: 1500,
    },
    Level {
        level: 4,
        name: "달인",
        icon: "🏆",
        required_exp: 3000,
    },
    Level {
        level: 5,
        name: "마스터",
        icon: "👑",
        required_exp: 6000,
    },
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_gain_exp_levels_up() {
        let mut profile = UserProfile::new("철수");
        assert_eq!(profile.level, 1);

        profile.gain_exp(450);
        assert_eq!(profile.level, 1);
        assert_eq!(profile.next_level().unwrap().name, "성장");

        profile.gain_exp(50);
        assert_eq!(profile.level, 2);

        // a single large grant may skip levels
        profile.gain_exp(5500);
        assert_eq!(profile.level, 5);
        assert!(profile.next_level().is_none());
    }
}
