use serde::Serialize;
use std::sync::Arc;

/// Class names in model output order.
pub const PLANT_CLASSES: [&str; 11] = [
    "AloeVera",
    "Arive-Dantu",
    "Betel",
    "Crape-Jasmine",
    "Mint",
    "Neem",
    "Oleander",
    "Peepal",
    "Pomegranate",
    "Tulsi",
    "curry",
];

/// Ordered label list. Index `i` names the class scored at position `i` of the
/// model output, so the order must never change after the model is trained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LabelCatalog {
    labels: Arc<[String]>,
}

impl LabelCatalog {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// The catalog the bundled plant model was trained with.
    pub fn plants() -> Self {
        Self::new(PLANT_CLASSES)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self::plants()
    }
}
