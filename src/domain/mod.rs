// Domain layer: core models only. No dependencies beyond indexmap/serde.

pub mod model;
