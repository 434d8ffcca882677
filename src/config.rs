use crate::color::Palette;
use crate::models::HABIT_COUNT;
use std::env;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitSlot {
    pub name: String,
    pub icon: Option<String>,
}

impl HabitSlot {
    fn named(name: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: Some(icon.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub habit_slots: [HabitSlot; HABIT_COUNT],
    pub palette: Palette,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Classic,
    Named,
}

impl Variant {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "classic" => Some(Variant::Classic),
            "named" => Some(Variant::Named),
            _ => None,
        }
    }

    pub fn from_env() -> Self {
        match env::var("HABIT_VARIANT") {
            Ok(value) => Self::parse(&value).unwrap_or_else(|| {
                warn!("unknown HABIT_VARIANT '{value}', using classic");
                Variant::Classic
            }),
            Err(_) => Variant::Classic,
        }
    }
}

impl TrackerConfig {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Self::classic(),
            Variant::Named => Self::named(),
        }
    }

    /// Anonymous "Habit 1".."Habit 7" slots on the blue palette.
    pub fn classic() -> Self {
        Self {
            habit_slots: std::array::from_fn(|index| HabitSlot {
                name: format!("Habit {}", index + 1),
                icon: None,
            }),
            palette: Palette::BLUE,
        }
    }

    pub fn named() -> Self {
        Self {
            habit_slots: [
                HabitSlot::named("Exercise", "🏃"),
                HabitSlot::named("Read", "📚"),
                HabitSlot::named("Meditate", "🧘"),
                HabitSlot::named("Drink water", "💧"),
                HabitSlot::named("Sleep early", "🌙"),
                HabitSlot::named("Eat healthy", "🥗"),
                HabitSlot::named("Journal", "✍️"),
            ],
            palette: Palette::GREEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_slots_are_numbered() {
        let config = TrackerConfig::classic();
        assert_eq!(config.habit_slots[0].name, "Habit 1");
        assert_eq!(config.habit_slots[6].name, "Habit 7");
        assert!(config.habit_slots.iter().all(|slot| slot.icon.is_none()));
        assert_eq!(config.palette, Palette::BLUE);
    }

    #[test]
    fn named_slots_carry_icons() {
        let config = TrackerConfig::for_variant(Variant::Named);
        assert!(config.habit_slots.iter().all(|slot| slot.icon.is_some()));
        assert_eq!(config.palette, Palette::GREEN);
    }

    #[test]
    fn variant_parsing_is_case_insensitive() {
        assert_eq!(Variant::parse("Named"), Some(Variant::Named));
        assert_eq!(Variant::parse(" classic "), Some(Variant::Classic));
        assert_eq!(Variant::parse("fancy"), None);
    }
}
