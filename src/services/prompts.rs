use crate::services::chat_client::SamplingParams;

/// A fully templated request for one generator: system prompt, user prompt
/// and the sampling parameters tuned for that generator.
#[derive(Debug, Clone)]
pub struct GeneratorPrompt {
    pub system: String,
    pub user: String,
    pub sampling: SamplingParams,
}

const RECOMMENDATION_SYSTEM: &str = "You are a professional travel planner for older adults. \
Based on the traveler's season, health condition, budget and interests, recommend 3-5 popular \
destinations (domestic or abroad) that suit senior travelers.

Each recommendation should include:
- Destination name
- Why it fits (favor mild climates, wellness, and comfort)
- Ideal trip length
- Cautions, including health and safety advice
- Examples of gentle activities

Reply in warm, plain language and avoid technical jargon.";

const ITINERARY_SYSTEM: &str = "You are an experienced itinerary planner for older adults. \
Draft a gentle, considerate day-by-day plan.

Requirements:
- Half a day of activity, half a day of rest, every day
- No high-intensity segments
- Include health reminders and cautions
- Provide a fallback plan for rainy days
- Keep the tone kind and unhurried";

const CHECKLIST_SYSTEM: &str = r#"You are a meticulous travel assistant for older adults. Prepare a detailed pre-trip checklist with booking guidance for transport, hotels and attractions.

Return JSON with exactly this structure:
{
  "checklist": [
    {
      "category": "Documents",
      "items": [
        {"name": "item name", "required": true, "note": "short note"}
      ]
    }
  ],
  "booking_guides": {
    "transport": {
      "guide": "transport booking guidance",
      "platforms": ["recommended platform 1", "recommended platform 2"]
    },
    "hotel": {
      "guide": "hotel booking guidance",
      "platforms": ["recommended platform 1", "recommended platform 2"]
    },
    "attractions": {
      "guide": "attraction booking guidance",
      "platforms": ["recommended platform 1", "recommended platform 2"]
    }
  },
  "tips": ["friendly tip 1", "friendly tip 2"]
}

Categories should cover documents, medication, clothing, electronics and daily essentials.
Mark each item required: true (must bring) or required: false (optional).
Booking guidance must be concrete, with the booking steps and recommended platforms.
Return only the JSON, with no other text."#;

const STORY_SYSTEM: &str = "You are a warm storyteller for older travelers. Turn the photos and \
notes into a heartfelt travel narrative.

Requirements:
- Warm, affectionate language full of positive energy
- Focus on the joyful moments and feelings of the trip
- Weave in themes of health, comfort and wellness where natural
- Moderate length with a clear thread";

pub fn recommendation_prompt(
    season: &str,
    health_condition: &str,
    budget: &str,
    interests: &[String],
) -> GeneratorPrompt {
    GeneratorPrompt {
        system: RECOMMENDATION_SYSTEM.to_string(),
        user: format!(
            "Season: {}, health condition: {}, budget: {}, interests: {}",
            season,
            health_condition,
            budget,
            interests.join(", ")
        ),
        sampling: SamplingParams {
            temperature: 0.7,
            max_tokens: 1500,
        },
    }
}

pub fn itinerary_prompt(
    destination: &str,
    duration: &str,
    mobility: &str,
    health_focus: &[String],
) -> GeneratorPrompt {
    GeneratorPrompt {
        system: ITINERARY_SYSTEM.to_string(),
        user: format!(
            "Destination: {}\nTrip length: {}\nMobility: {}\nHealth focus: {}",
            destination,
            duration,
            mobility,
            health_focus.join(", ")
        ),
        sampling: SamplingParams {
            temperature: 0.7,
            max_tokens: 1500,
        },
    }
}

pub fn checklist_prompt(destination: &str, duration: &str, special_needs: &str) -> GeneratorPrompt {
    GeneratorPrompt {
        system: CHECKLIST_SYSTEM.to_string(),
        user: format!(
            "Destination: {}, trip length: {}, special needs: {}",
            destination, duration, special_needs
        ),
        sampling: SamplingParams {
            temperature: 0.6,
            max_tokens: 2000,
        },
    }
}

pub fn story_prompt(custom_input: &str, photo_names: &[String]) -> GeneratorPrompt {
    let user = if photo_names.is_empty() {
        format!(
            "Traveler's notes: {}\nNo photos were provided; write the narrative from the notes alone.",
            custom_input
        )
    } else {
        format!(
            "Traveler's notes: {}\nPhotos from the trip: {}",
            custom_input,
            photo_names.join(", ")
        )
    };

    GeneratorPrompt {
        system: STORY_SYSTEM.to_string(),
        user,
        sampling: SamplingParams {
            temperature: 0.8,
            max_tokens: 1500,
        },
    }
}
