use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{SkillCategory, null_as_default};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon: String,
    /// 1 (novice) to 5 (expert).
    pub proficiency_level: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub years_experience: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Skill {
    pub fn proficiency_label(&self) -> &'static str {
        proficiency_label(self.proficiency_level)
    }

    /// Width of the proficiency bar in percent.
    pub fn proficiency_percent(&self) -> u8 {
        self.proficiency_level.min(5) * 20
    }
}

pub fn proficiency_label(level: u8) -> &'static str {
    match level {
        0 | 1 => "Novice",
        2 => "Beginner",
        3 => "Intermediate",
        4 => "Advanced",
        _ => "Expert",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_labels() {
        assert_eq!(proficiency_label(5), "Expert");
        assert_eq!(proficiency_label(4), "Advanced");
        assert_eq!(proficiency_label(3), "Intermediate");
        assert_eq!(proficiency_label(2), "Beginner");
        assert_eq!(proficiency_label(1), "Novice");
        assert_eq!(proficiency_label(0), "Novice");
    }
}
