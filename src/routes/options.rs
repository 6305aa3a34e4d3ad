use actix_web::{HttpResponse, Responder};

// Choice lists the tabbed form renders as dropdowns and checkbox groups.

const SEASONS: [&str; 4] = ["Spring", "Summer", "Autumn", "Winter"];

const HEALTH_CONDITIONS: [&str; 3] = [
    "In good health",
    "Chronic condition, well controlled",
    "Limited mobility but travels independently",
];

const BUDGETS: [&str; 3] = ["Budget-friendly", "Comfort", "Luxury"];

const DURATIONS: [&str; 4] = ["3-5 days", "About a week", "10-15 days", "More than 15 days"];

const MOBILITY_LEVELS: [&str; 3] = [
    "Walks with ease",
    "Needs occasional rest",
    "Uses a wheelchair",
];

const INTERESTS: [&str; 25] = [
    "Warm-winter wellness",
    "Island getaways",
    "Culture and history",
    "Hot springs",
    "Natural scenery",
    "Food experiences",
    "Photography",
    "Leisurely shopping",
    "Traditional architecture",
    "Folk customs",
    "Slow-paced touring",
    "Seaside strolls",
    "Tea culture",
    "Temple visits",
    "Old towns",
    "Countryside",
    "Wildlife watching",
    "Art exhibitions",
    "Traditional opera",
    "Handicraft workshops",
    "Health and wellness",
    "Traditional medicine spas",
    "Yoga and meditation",
    "Forest bathing",
    "Sunbathing",
];

const HEALTH_FOCUS: [&str; 25] = [
    "Avoid overexertion",
    "Light diet",
    "Stay near a hospital",
    "Avoid high altitude",
    "Needs accessible facilities",
    "Avoid long walks",
    "Sun protection",
    "Avoid humid climates",
    "Needs quiet surroundings",
    "Blood pressure control",
    "Blood sugar control",
    "Air quality matters",
    "Carries medication",
    "Heart care",
    "Joint mobility",
    "Cold prevention",
    "Avoid crowds",
    "Needs good sleep",
    "No strenuous exercise",
    "Keep warm",
    "Drink plenty of water",
    "Regular rest breaks",
    "Avoid strong sun",
    "Regular meals",
    "Moderate activity",
];

/*
    GET /api/options
*/
pub async fn get_options() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "seasons": SEASONS,
        "health_conditions": HEALTH_CONDITIONS,
        "budgets": BUDGETS,
        "durations": DURATIONS,
        "mobility_levels": MOBILITY_LEVELS,
        "interests": INTERESTS,
        "health_focus": HEALTH_FOCUS,
    }))
}
