//! JSON catalog serializer.
//!
//! Produces one document per epoch. Constant groups map symbolic names to
//! values; class groups map identifiers to their descriptors, matching the
//! shape of the generated `*ClassesMap` tables.

use serde_json::{json, Map, Value};

use crate::model::Schema;

/// Serializes an epoch to its JSON catalog `Value`.
///
/// Object keys follow source order only if `serde_json` is built with
/// `preserve_order`; consumers must treat the maps as unordered.
#[must_use]
pub fn to_json(schema: &Schema) -> Value {
    let mut constants = Map::new();
    for group in schema.constant_groups() {
        let entries: Map<String, Value> = group
            .vocab
            .iter()
            .map(|(name, value)| (name.clone(), json!(value)))
            .collect();
        constants.insert(group.name.clone(), Value::Object(entries));
    }

    let mut classes = Map::new();
    for group in schema.class_groups() {
        let entries: Map<String, Value> = group
            .vocab
            .iter()
            .map(|(_, class)| {
                (
                    class.class_name.clone(),
                    json!({
                        "symbol": class.symbol,
                        "title": class.title,
                        "description": class.description
                    }),
                )
            })
            .collect();
        classes.insert(group.name.clone(), Value::Object(entries));
    }

    json!({
        "namespace": schema.namespace,
        "digest": schema.digest,
        "constants": constants,
        "classes": classes
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epochs;

    #[test]
    fn catalog_has_all_class_groups() {
        let schema = epochs::hiveot::schema().expect("load");
        let doc = to_json(&schema);
        assert_eq!(doc["namespace"], "hiveot");
        for group in ["ActionClasses", "PropertyClasses", "ThingClasses", "UnitClasses"] {
            assert!(doc["classes"][group].is_object(), "missing {group}");
        }
    }

    #[test]
    fn catalog_keys_descriptors_by_identifier() {
        let schema = epochs::hiveot::schema().expect("load");
        let doc = to_json(&schema);
        let watt = &doc["classes"]["UnitClasses"]["hiveot:unit:watt"];
        assert_eq!(watt["symbol"], "W");
        assert_eq!(watt["title"], "Watt");
        assert_eq!(doc["constants"]["WoTVocab"]["OpUnobserveProperty"], "unobserveroperty");
    }
}
