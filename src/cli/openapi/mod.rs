//! Openapi command - prints the generated API document

use crate::api::docs::openapi_document;

/// Print the OpenAPI document to stdout
pub fn run() -> anyhow::Result<()> {
    let document = openapi_document();
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
