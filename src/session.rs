use serde::Serialize;

use crate::api_connection::endpoints::ChatMessage;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SavedRecipe {
    pub key: String,
    pub name: String,
    pub recipe: String,
}

/// Conversation state for one interactive session. Lives only as long as the
/// process; nothing is written anywhere.
#[derive(Debug, Default, Clone)]
pub struct RecipeSession {
    history: Vec<ChatMessage>,
    saved: Vec<SavedRecipe>,
}

impl RecipeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves an annotated recipe under the next `recipe_{n}` key and logs the
    /// exchange in the history. Returns the key.
    pub fn record_recipe(&mut self, dish: &str, annotated_recipe: &str) -> String {
        let key = format!("recipe_{}", self.saved.len() + 1);
        self.saved.push(SavedRecipe {
            key: key.clone(),
            name: dish.to_string(),
            recipe: annotated_recipe.to_string(),
        });
        self.history
            .push(ChatMessage::user(format!("Generate recipe for {}", dish)));
        self.history.push(ChatMessage::assistant(annotated_recipe));
        key
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Saved recipes in the order they were generated.
    pub fn saved_recipes(&self) -> &[SavedRecipe] {
        &self.saved
    }

    pub fn saved_recipe(&self, key: &str) -> Option<&SavedRecipe> {
        self.saved.iter().find(|saved| saved.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}
