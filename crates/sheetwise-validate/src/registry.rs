//! Sheet-name to schema mapping.
//!
//! Which schema applies to which sheet is an explicit, testable mapping. The
//! default registry carries a fallback schema so every sheet is processed
//! uniformly; a strict registry has no fallback and unrecognized sheets are
//! skipped with a diagnostic instead of silently validated.

use std::collections::BTreeMap;

use sheetwise_model::FieldSchema;

#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: BTreeMap<String, FieldSchema>,
    fallback: Option<FieldSchema>,
}

impl SchemaRegistry {
    /// Registry that applies `fallback` to any sheet without its own schema.
    pub fn with_fallback(fallback: FieldSchema) -> Self {
        Self {
            schemas: BTreeMap::new(),
            fallback: Some(fallback),
        }
    }

    /// Registry with no fallback: only registered sheet names are processed.
    pub fn strict() -> Self {
        Self {
            schemas: BTreeMap::new(),
            fallback: None,
        }
    }

    pub fn register(&mut self, sheet: impl Into<String>, schema: FieldSchema) {
        self.schemas.insert(sheet.into(), schema);
    }

    #[must_use]
    pub fn with_schema(mut self, sheet: impl Into<String>, schema: FieldSchema) -> Self {
        self.register(sheet, schema);
        self
    }

    /// The schema for a sheet name, if any applies.
    pub fn schema_for(&self, sheet: &str) -> Option<&FieldSchema> {
        self.schemas.get(sheet).or(self.fallback.as_ref())
    }
}

impl Default for SchemaRegistry {
    /// Uniform processing with the built-in intake schema, matching the
    /// active behavior of the system this replaces.
    fn default() -> Self {
        Self::with_fallback(FieldSchema::default_intake())
    }
}
