//! Talent categories.

use crate::text_enum::define_text_enum;

define_text_enum! {
    /// The single top-level category a talent profile belongs to.
    TalentCategory("talent category") {
        Actor = "actor",
        Singer = "singer",
        Dancer = "dancer",
        Model = "model",
        Musician = "musician",
        VoiceArtist = "voice_artist",
        Comedian = "comedian",
        Influencer = "influencer",
        Other = "other",
    }
}

impl TalentCategory {
    /// Human-readable label, as shown in role-type filters.
    pub fn label(self) -> &'static str {
        match self {
            TalentCategory::Actor => "Actor",
            TalentCategory::Singer => "Singer",
            TalentCategory::Dancer => "Dancer",
            TalentCategory::Model => "Model",
            TalentCategory::Musician => "Musician",
            TalentCategory::VoiceArtist => "Voice Artist",
            TalentCategory::Comedian => "Comedian",
            TalentCategory::Influencer => "Influencer",
            TalentCategory::Other => "Other",
        }
    }
}

/// Parse a comma-separated list of categories, ignoring blanks and
/// duplicates while preserving first-seen order.
pub fn parse_category_list(raw: &str) -> Result<Vec<TalentCategory>, crate::error::CoreError> {
    let mut out: Vec<TalentCategory> = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let category: TalentCategory = part.parse()?;
        if !out.contains(&category) {
            out.push(category);
        }
    }
    Ok(out)
}
