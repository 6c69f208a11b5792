use tracing::{info, warn};

use crate::api_connection::connection::ApiConnectionError;
use crate::api_connection::endpoints::Provider;
use crate::recipe_annotator::annotate_recipe;

pub const EMPTY_RESPONSE_MESSAGE: &str = "Sorry, I couldn't generate a recipe.";

pub fn build_recipe_prompt(dish: &str) -> String {
    format!(
        "Generate a detailed recipe for {}. Include ingredients with measurements and step-by-step instructions.",
        dish.trim()
    )
}

/// Asks the model for a recipe. Never fails: any problem is turned into a
/// message that stands in for the recipe text.
pub async fn generate_recipe(provider: &Provider, dish: &str) -> String {
    let request = provider.generate_request(build_recipe_prompt(dish));
    info!(dish = dish.trim(), model = provider.model(), "requesting recipe");

    match provider.call_generate(request).await {
        Ok(response) => match response.response {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                warn!("model returned no recipe text");
                EMPTY_RESPONSE_MESSAGE.to_string()
            }
        },
        Err(e) => {
            warn!(error = %e, "recipe generation failed");
            failure_message(provider, &e)
        }
    }
}

/// Generates a recipe and annotates its quantities with grams at `temperature_c`.
pub async fn generate_annotated_recipe(provider: &Provider, dish: &str, temperature_c: f64) -> String {
    let recipe = generate_recipe(provider, dish).await;
    annotate_recipe(&recipe, temperature_c)
}

pub fn failure_message(provider: &Provider, error: &ApiConnectionError) -> String {
    match error {
        ApiConnectionError::ApiError { status, .. } => format!(
            "Error: {}. Make sure Ollama is running with the {} model.",
            status.as_u16(),
            provider.model()
        ),
        other => format!("Error connecting to Ollama: {}", other),
    }
}
