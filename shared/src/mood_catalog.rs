//! Fixed catalog of moods and tags offered by the mood journal

use crate::models::{Mood, MoodTag};

/// (id, name, emoji, background colour, description)
const MOODS: &[(i32, &str, &str, &str, &str)] = &[
    (0, "Happy / Joyful", "😄", "#EAF8FF", "Bright open smile — signals positive energy and dopamine release."),
    (1, "Calm / Relaxed", "😌", "#EAFDF2", "Eyes closed, soft smile — reflects inner peace and parasympathetic activation."),
    (2, "Excited / Energetic", "🤩", "#FFF0E6", "Stars in eyes — logical symbol of high arousal and positive anticipation."),
    (3, "Focused / Productive", "🧠", "#F0F8FF", "Brain — represents cognitive engagement and mental clarity."),
    (4, "Motivated / Confident", "💪", "#FFF5E6", "Flexed arm — symbol of strength and self-efficacy."),
    (5, "Neutral / Okay", "😐", "#F8F8F8", "Straight face — balanced emotion, neither positive nor negative."),
    (6, "Tired / Low Energy", "😴", "#F0F0F0", "Sleeping face — indicates physiological rest need."),
    (7, "Stressed / Anxious", "😰", "#F0F0FF", "Blue face with sweat — shows sympathetic activation (fight or flight)."),
    (8, "Sad / Down", "😔", "#FFECEC", "Downcast eyes — classic sign of serotonin drop or sadness."),
    (9, "Angry / Irritated", "😠", "#FFE5E5", "Red face — biologically linked to anger and adrenaline."),
    (10, "Lonely / Empty", "😞", "#FFF0E6", "Slight frown and downward gaze — signals social disconnection."),
    (11, "Overwhelmed / Burnt out", "😫", "#FFE5E5", "Exhausted face — logical symbol of cognitive/emotional overload."),
    (12, "Grateful / Content", "🥰", "#F5FFFA", "Hearts around face — linked to oxytocin and gratitude."),
    (13, "Hopeful / Positive Outlook", "🌤️", "#E6F3FF", "Sun peeking through clouds — symbolic of optimism after challenge."),
    (14, "Sick / Unwell", "🤒", "#FFF5E6", "Thermometer — direct representation of physical discomfort."),
    (15, "Confused / Uncertain", "🤔", "#F0F0F0", "Thinking face — represents cognitive uncertainty or contemplation."),
];

/// (id, name, colour)
const TAGS: &[(&str, &str, &str)] = &[
    ("work", "Work", "#FF6B6B"),
    ("friends", "Friends", "#4ECDC4"),
    ("health", "Health", "#45B7D1"),
    ("study", "Study", "#96CEB4"),
    ("family", "Family", "#FFEAA7"),
    ("exercise", "Exercise", "#DDA0DD"),
    ("sleep", "Sleep", "#98D8C8"),
    ("food", "Food", "#F7DC6F"),
];

fn to_mood(&(id, name, emoji, background_color, description): &(i32, &str, &str, &str, &str)) -> Mood {
    Mood {
        id,
        name: name.to_string(),
        emoji: emoji.to_string(),
        background_color: background_color.to_string(),
        description: description.to_string(),
    }
}

fn to_tag(&(id, name, color): &(&str, &str, &str)) -> MoodTag {
    MoodTag {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
    }
}

pub fn moods() -> Vec<Mood> {
    MOODS.iter().map(to_mood).collect()
}

pub fn tags() -> Vec<MoodTag> {
    TAGS.iter().map(to_tag).collect()
}

pub fn mood_by_id(id: i32) -> Option<Mood> {
    MOODS.iter().find(|m| m.0 == id).map(to_mood)
}

pub fn mood_by_emoji(emoji: &str) -> Option<Mood> {
    MOODS.iter().find(|m| m.2 == emoji).map(to_mood)
}

pub fn tag_by_id(id: &str) -> Option<MoodTag> {
    TAGS.iter().find(|t| t.0 == id).map(to_tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(moods().len(), 16);
        assert_eq!(tags().len(), 8);
    }

    #[test]
    fn test_mood_ids_are_sequential() {
        for (index, mood) in moods().iter().enumerate() {
            assert_eq!(mood.id, index as i32);
        }
    }

    #[test]
    fn test_lookups() {
        assert_eq!(mood_by_id(3).unwrap().name, "Focused / Productive");
        assert_eq!(mood_by_emoji("😴").unwrap().id, 6);
        assert_eq!(tag_by_id("sleep").unwrap().color, "#98D8C8");
        assert!(mood_by_id(16).is_none());
        assert!(tag_by_id("travel").is_none());
    }
}
