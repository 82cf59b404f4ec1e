//! Domain layer: entities and value objects.

pub mod entities;
