//! Add-item form state and validation.

use validator::Validate;

use stockwatch_domain::{Category, ItemName, Threshold};

use crate::application::{NewItem, ServiceError};

#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct AddItemForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
    pub category: Category,
    #[validate(range(min = 1, message = "Threshold must be at least 1"))]
    pub threshold: u32,
}

impl Default for AddItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: 1,
            category: Category::Electronics,
            threshold: Threshold::DEFAULT.value(),
        }
    }
}

impl AddItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the defaults, as after a successful submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `(field, message)` pairs for every failing field, ordered by field.
    pub fn field_errors(&self) -> Vec<(String, String)> {
        let Err(errors) = self.validate() else {
            return Vec::new();
        };

        let mut messages: Vec<(String, String)> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"));
                    (field.clone(), message)
                })
            })
            .collect();
        messages.sort();
        messages
    }

    /// Validate and turn the form into a `NewItem`.
    pub fn submit(&self) -> Result<NewItem, ServiceError> {
        let errors = self.field_errors();
        if !errors.is_empty() {
            let joined = errors
                .into_iter()
                .map(|(_, message)| message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ServiceError::Validation(joined));
        }

        let name = ItemName::new(self.name.as_str())
            .map_err(|e| ServiceError::Validation(e.to_string()))?;
        let threshold =
            Threshold::new(self.threshold).map_err(|e| ServiceError::Validation(e.to_string()))?;

        Ok(NewItem {
            name,
            quantity: self.quantity,
            category: self.category,
            threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_blank_form() {
        let form = AddItemForm::new();
        assert_eq!(form.name, "");
        assert_eq!(form.quantity, 1);
        assert_eq!(form.category, Category::Electronics);
        assert_eq!(form.threshold, 5);
    }

    #[test]
    fn valid_form_submits() {
        let form = AddItemForm {
            name: "  Widget ".to_string(),
            quantity: 2,
            category: Category::Tools,
            threshold: 5,
        };
        let new_item = form.submit().unwrap();

        assert_eq!(new_item.name.as_str(), "Widget");
        assert_eq!(new_item.quantity, 2);
        assert_eq!(new_item.category, Category::Tools);
        assert_eq!(new_item.threshold, Threshold::DEFAULT);
    }

    #[test]
    fn reports_each_failing_field() {
        let form = AddItemForm {
            name: "W".to_string(),
            quantity: 0,
            threshold: 0,
            ..AddItemForm::default()
        };

        assert_eq!(
            form.field_errors(),
            vec![
                ("name".to_string(), "Name must be at least 2 characters".to_string()),
                ("quantity".to_string(), "Quantity must be at least 1".to_string()),
                ("threshold".to_string(), "Threshold must be at least 1".to_string()),
            ]
        );
        assert!(matches!(form.submit(), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn whitespace_name_is_rejected_on_submit() {
        let form = AddItemForm {
            name: "   ".to_string(),
            ..AddItemForm::default()
        };
        assert!(form.field_errors().is_empty());
        assert!(matches!(form.submit(), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = AddItemForm {
            name: "Desk".to_string(),
            quantity: 9,
            category: Category::Furniture,
            threshold: 2,
        };
        form.reset();
        assert_eq!(form, AddItemForm::default());
    }
}
