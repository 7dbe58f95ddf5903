//! Wire types for the generateContent endpoint.

use serde::{Deserialize, Serialize};

/// Request body: the user input wrapped in the provider's content shape.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    pub fn from_input(input: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![Part {
                    text: input.to_string(),
                }],
            }],
        }
    }
}

/// Response body. Only the first candidate's first part is consumed.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}
