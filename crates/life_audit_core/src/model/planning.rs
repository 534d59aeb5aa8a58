//! Reflection worksheets: Odyssey plans and "Designing Your Life" gauges.

use serde::{Deserialize, Serialize};

/// One of the three fixed Odyssey plan slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OdysseyPlanId {
    A,
    B,
    C,
}

impl OdysseyPlanId {
    pub const ALL: [OdysseyPlanId; 3] = [OdysseyPlanId::A, OdysseyPlanId::B, OdysseyPlanId::C];

    pub fn title(self) -> &'static str {
        match self {
            Self::A => "Plan A: The Current Path",
            Self::B => "Plan B: The Alternative Path",
            Self::C => "Plan C: The Wild Card",
        }
    }
}

/// Editable free-text field of an Odyssey plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OdysseyField {
    Theme,
    Activities,
    Metrics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OdysseyPlan {
    pub id: OdysseyPlanId,
    pub title: String,
    pub theme: String,
    pub activities: String,
    pub metrics: String,
}

impl OdysseyPlan {
    pub fn seeded(id: OdysseyPlanId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            theme: String::new(),
            activities: String::new(),
            metrics: String::new(),
        }
    }

    pub fn set_field(&mut self, field: OdysseyField, value: impl Into<String>) {
        let slot = match field {
            OdysseyField::Theme => &mut self.theme,
            OdysseyField::Activities => &mut self.activities,
            OdysseyField::Metrics => &mut self.metrics,
        };
        *slot = value.into();
    }
}

/// The four "Designing Your Life" dashboard gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DylArea {
    Health,
    Work,
    Play,
    Love,
}

impl DylArea {
    pub const ALL: [DylArea; 4] = [DylArea::Health, DylArea::Work, DylArea::Play, DylArea::Love];

    pub fn name(self) -> &'static str {
        match self {
            Self::Health => "Health",
            Self::Work => "Work",
            Self::Play => "Play",
            Self::Love => "Love",
        }
    }

    pub fn definition(self) -> &'static str {
        match self {
            Self::Health => "Your physical and mental well-being, including sleep, diet, and stress management.",
            Self::Work => "Any activity that provides income, meaning, or a sense of contribution.",
            Self::Play => "Activities done purely for the joy of it, with no goal or outcome.",
            Self::Love => "The quality of your relationships with others, including family, friends, and partners.",
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            Self::Health => "Am I consistently investing in my physical and mental health?",
            Self::Work => "Does my work align with my values and provide a sense of purpose?",
            Self::Play => "When was the last time I did something just for fun, and what was it?",
            Self::Love => "Are my most important relationships thriving and receiving the attention they deserve?",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DylComponent {
    pub id: DylArea,
    pub name: String,
    pub definition: String,
    pub question: String,
    pub reflection: String,
}

impl DylComponent {
    pub fn seeded(id: DylArea) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            definition: id.definition().to_string(),
            question: id.question().to_string(),
            reflection: String::new(),
        }
    }
}
