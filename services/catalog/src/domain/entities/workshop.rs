//! 车间实体

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::WorkshopId;

/// 车间（生产工序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workshop {
    id: WorkshopId,
    name: String,
    workshop_type: String,
    staff_count: i32,
}

impl Workshop {
    pub fn new(
        id: WorkshopId,
        name: impl Into<String>,
        workshop_type: impl Into<String>,
        staff_count: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            workshop_type: workshop_type.into(),
            staff_count,
        }
    }

    pub fn id(&self) -> WorkshopId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn workshop_type(&self) -> &str {
        &self.workshop_type
    }

    pub fn staff_count(&self) -> i32 {
        self.staff_count
    }
}
