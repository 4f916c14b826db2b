/// Required top-level keys for student profile files
///
/// Every JSON file under a student folder must carry these keys. Order matters:
/// missing keys are reported in the order listed here.
pub const REQUIRED_KEYS: RequiredKeySet = RequiredKeySet(&[
    "nombre",
    "edad",
    "carrera",
    "semestre",
    "gustos",
    "noGustos",
    "foto",
    "redSocial",
]);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredKeySet(&'static [&'static str]);

impl RequiredKeySet {
    pub fn keys(&self) -> &'static [&'static str] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys from this set absent from the top level of `value`, in set order.
    ///
    /// Anything other than an object has no own keys, so every key is missing.
    /// Callers that must reject `null` check for it before calling this.
    pub fn missing_from(&self, value: &serde_json::Value) -> Vec<String> {
        let object = value.as_object();
        self.0
            .iter()
            .filter(|key| !object.is_some_and(|map| map.contains_key(**key)))
            .map(|key| (*key).to_string())
            .collect()
    }
}
