use crate::server::{
    error::validate::ValidationError,
    util::validate::{require_positive, sanitize_text, validate_cost},
};

/// A validated product record, owned by the profile that listed it.
///
/// `id` is `None` until the item is first persisted. `kind` is the
/// item's category ("type" on the wire).
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: Option<i32>,
    profile_id: i32,
    description: String,
    kind: String,
    name: String,
    cost: f64,
}

impl Item {
    pub fn new(
        id: Option<i32>,
        profile_id: i32,
        description: &str,
        kind: &str,
        name: &str,
        cost: f64,
    ) -> Result<Self, ValidationError> {
        if let Some(id) = id {
            require_positive("item_id", id)?;
        }

        Ok(Self {
            id,
            profile_id: require_positive("profile_id", profile_id)?,
            description: sanitize_text("description", description, 200)?,
            kind: sanitize_text("type", kind, 32)?,
            name: sanitize_text("name", name, 500)?,
            cost: validate_cost("cost", cost)?,
        })
    }

    /// Materializes a stored row back into a validated item.
    pub fn from_model(model: &entity::item::Model) -> Result<Self, ValidationError> {
        Self::new(
            Some(model.id),
            model.profile_id,
            &model.description,
            &model.kind,
            &model.name,
            model.cost,
        )
    }

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn profile_id(&self) -> i32 {
        self.profile_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn set_profile_id(&mut self, profile_id: i32) -> Result<(), ValidationError> {
        self.profile_id = require_positive("profile_id", profile_id)?;
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) -> Result<(), ValidationError> {
        self.description = sanitize_text("description", description, 200)?;
        Ok(())
    }

    pub fn set_kind(&mut self, kind: &str) -> Result<(), ValidationError> {
        self.kind = sanitize_text("type", kind, 32)?;
        Ok(())
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), ValidationError> {
        self.name = sanitize_text("name", name, 500)?;
        Ok(())
    }

    pub fn set_cost(&mut self, cost: f64) -> Result<(), ValidationError> {
        self.cost = validate_cost("cost", cost)?;
        Ok(())
    }
}
