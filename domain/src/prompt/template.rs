//! Prompt and response schema for exhibition generation

use crate::search::{InvitationFilter, SearchFilter};
use serde_json::{Value, json};

/// Number of exhibitions requested when nothing else is configured
pub const DEFAULT_TARGET_COUNT: usize = 10;

/// Keys every generated record must carry, in schema order
pub const REQUIRED_FIELDS: [&str; 14] = [
    "id",
    "name",
    "province",
    "city",
    "category",
    "startDate",
    "endDate",
    "venue",
    "organizer",
    "website",
    "applicationLink",
    "invitationType",
    "verificationStatus",
    "consularAcceptance",
];

/// Templates for the generation request
pub struct ExhibitionPrompt;

impl ExhibitionPrompt {
    /// Render the instruction for `filter`, asking for `target_count` items.
    ///
    /// The output depends only on the arguments.
    pub fn render(filter: &SearchFilter, target_count: usize) -> String {
        let province = filter
            .province()
            .value()
            .unwrap_or("Any province in China");
        let city = filter.city().value().unwrap_or("Any major city");
        let category = filter.category().value().unwrap_or("Any category");
        let invitation = match filter.invitation_type() {
            InvitationFilter::Free => "Free",
            InvitationFilter::Paid => "Paid",
            InvitationFilter::Any => "Both Free and Paid",
        };

        format!(
            r#"You are an advanced AI agent specialized in finding and verifying trade exhibition invitations in China.
Based on the following criteria, generate a list of {count} fictional but highly realistic trade exhibitions.

Criteria:
- Province: {province}
- City: {city}
- Category: {category}
- Date Range: {start} to {end}
- Invitation Type: {invitation}

Your response MUST be a valid JSON array of objects. Each object must conform to the provided schema.
Provide realistic but fictional data for all fields, including official-looking websites (e.g., example.com domains).
Every "id" must be unique. Dates use the YYYY-MM-DD format and must fall within the specified range.
"#,
            count = target_count,
            province = province,
            city = city,
            category = category,
            start = filter.start_date(),
            end = filter.end_date(),
            invitation = invitation,
        )
    }

    /// Strict output schema: an array of objects with every field required
    pub fn response_schema() -> Value {
        json!({
            "type": "ARRAY",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "id": { "type": "STRING", "description": "A unique identifier, e.g., 'canton-fair-2025-spring'" },
                    "name": { "type": "STRING" },
                    "province": { "type": "STRING" },
                    "city": { "type": "STRING" },
                    "category": { "type": "STRING" },
                    "startDate": { "type": "STRING", "description": "Format: YYYY-MM-DD" },
                    "endDate": { "type": "STRING", "description": "Format: YYYY-MM-DD" },
                    "venue": { "type": "STRING" },
                    "organizer": { "type": "STRING" },
                    "website": { "type": "STRING", "description": "A valid-looking but fictional URL" },
                    "applicationLink": { "type": "STRING", "description": "A valid-looking but fictional URL for the invitation application" },
                    "invitationType": { "type": "STRING", "enum": ["Free", "Paid"], "description": "Either 'Free' or 'Paid'" },
                    "verificationStatus": { "type": "BOOLEAN" },
                    "consularAcceptance": { "type": "BOOLEAN" }
                },
                "required": REQUIRED_FIELDS,
            }
        })
    }
}
