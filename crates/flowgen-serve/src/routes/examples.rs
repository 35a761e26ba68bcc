//! Example text descriptions for flowchart generation.

use axum::Json;
use serde::Serialize;

/// A single example entry.
#[derive(Debug, Clone, Serialize)]
pub struct Example {
    pub title: &'static str,
    pub description: &'static str,
}

/// Response body for `GET /examples`.
#[derive(Debug, Clone, Serialize)]
pub struct ExamplesResponse {
    pub success: bool,
    pub examples: Vec<Example>,
}

/// The fixed example set shown in the UI. Static data with no lifecycle.
const EXAMPLES: [Example; 5] = [
    Example {
        title: "User Registration Process",
        description: "User enters details, system validates, creates account if valid, \
                      sends confirmation email",
    },
    Example {
        title: "Order Processing Workflow",
        description: "Customer places order, check inventory, if available process payment, \
                      if payment successful ship order, otherwise cancel order",
    },
    Example {
        title: "Bug Fixing Process",
        description: "Bug reported, assign to developer, developer investigates, if \
                      reproducible fix the bug, test the fix, if test passes deploy to \
                      production, otherwise return to development",
    },
    Example {
        title: "Login Authentication",
        description: "User enters credentials, validate username and password, if valid \
                      check if account is active, if active grant access, otherwise show \
                      error message",
    },
    Example {
        title: "Data Backup Process",
        description: "Start backup process, check available storage space, if sufficient \
                      begin data backup, verify backup integrity, if successful update \
                      backup log, otherwise retry backup",
    },
];

/// `GET /examples`
///
/// Returns the fixed list of example descriptions.
pub async fn get_examples() -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        success: true,
        examples: EXAMPLES.to_vec(),
    })
}
