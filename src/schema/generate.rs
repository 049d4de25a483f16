use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value};

use super::types::{FieldType, Payload, Schema};

/// Exclusive upper bound for `int` fields.
pub(crate) const INT_UPPER: i64 = 100;
/// Exclusive upper bound for `float` fields.
pub(crate) const FLOAT_UPPER: f64 = 100.0;
/// Exclusive upper bound for the number embedded in `string` fields.
pub(crate) const STRING_SUFFIX_UPPER: u32 = 10_000;
pub(crate) const STRING_PREFIX: &str = "str_";

/// Draws one value matching `field_type`.
pub fn generate_value<R>(field_type: &FieldType, rng: &mut R) -> Value
where
    R: Rng,
{
    match field_type {
        FieldType::Int => Value::from(rng.gen_range(0..INT_UPPER)),
        FieldType::Float => Value::from(rng.gen_range(0.0..FLOAT_UPPER)),
        FieldType::String => Value::String(format!(
            "{}{}",
            STRING_PREFIX,
            rng.gen_range(0..STRING_SUFFIX_UPPER)
        )),
        FieldType::Bool => Value::Bool(rng.gen_bool(0.5)),
        FieldType::Unknown(_) => Value::Null,
    }
}

/// Builds one payload with exactly one entry per schema field.
pub fn generate_payload<R>(schema: &Schema, rng: &mut R) -> Payload
where
    R: Rng,
{
    let mut fields = Map::new();
    for (name, field_type) in schema.fields() {
        fields.insert(name.to_owned(), generate_value(field_type, rng));
    }
    Payload::new(fields)
}

/// Owns the random source used for every tick.
pub struct Synthesizer {
    rng: StdRng,
}

impl Synthesizer {
    /// Seeds from `seed` when given, otherwise from OS entropy.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self { rng }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    pub fn generate(&mut self, schema: &Schema) -> Payload {
        generate_payload(schema, &mut self.rng)
    }
}
