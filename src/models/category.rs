use serde::{Deserialize, Serialize};

/// Declares a lowercase string-backed category enum with `as_str`, `label`,
/// `Display`, `FromStr` and comparison against `&str`.
macro_rules! category {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => ($value:literal, $label:literal)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(format!(concat!("invalid ", stringify!($name), ": {}"), s)),
                }
            }
        }
    };
}

category! {
    pub enum CertificationCategory {
        Technical => ("technical", "Technical"),
        Professional => ("professional", "Professional"),
        Academic => ("academic", "Academic"),
    }
}

category! {
    pub enum AchievementCategory {
        Award => ("award", "Award"),
        Recognition => ("recognition", "Recognition"),
        Milestone => ("milestone", "Milestone"),
    }
}

category! {
    pub enum SkillCategory {
        Frontend => ("frontend", "Frontend"),
        Backend => ("backend", "Backend"),
        Research => ("research", "Research"),
        Tools => ("tools", "Tools"),
        Database => ("database", "Database"),
        Cloud => ("cloud", "Cloud"),
        Mobile => ("mobile", "Mobile"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing_is_case_insensitive() {
        assert_eq!("Technical".parse(), Ok(CertificationCategory::Technical));
        assert_eq!("MILESTONE".parse(), Ok(AchievementCategory::Milestone));
        assert!("gaming".parse::<SkillCategory>().is_err());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&SkillCategory::Cloud).unwrap();
        assert_eq!(json, "\"cloud\"");
        assert_eq!(SkillCategory::Cloud, "cloud");
        assert_eq!(SkillCategory::ALL.len(), 7);
    }
}
