//! Presentation-ready readings returned by collectors.
//!
//! A [`Reading`] carries no numeric types: every value has already been
//! formatted and unit-suffixed. Insertion order is the display order and is
//! preserved when serialized.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::policy::PERMISSION_DENIED;

/// Ordered mapping from metric label to formatted value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reading {
    entries: Vec<(String, String)>,
}

impl Reading {
    /// Create an empty reading.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(label, value);
        self
    }

    /// Insert a metric, replacing the value in place if the label exists.
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((label, value)),
        }
    }

    /// Look up a value by label.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate `(label, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Reading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// Usage of one volume, or the marker for a device the OS refused to stat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VolumeEntry {
    Usage(Reading),
    PermissionDenied,
}

impl VolumeEntry {
    pub const fn is_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied)
    }

    /// The usage reading, if access was granted.
    pub const fn usage(&self) -> Option<&Reading> {
        match self {
            Self::Usage(reading) => Some(reading),
            Self::PermissionDenied => None,
        }
    }
}

impl Serialize for VolumeEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Usage(reading) => reading.serialize(serializer),
            Self::PermissionDenied => serializer.serialize_str(PERMISSION_DENIED),
        }
    }
}

/// Ordered mapping from device identifier to [`VolumeEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageReading {
    volumes: Vec<(String, VolumeEntry)>,
}

impl StorageReading {
    pub const fn new() -> Self {
        Self {
            volumes: Vec::new(),
        }
    }

    /// Record a device. A device seen twice keeps its first position and
    /// takes the latest entry.
    pub fn insert(&mut self, device: impl Into<String>, entry: VolumeEntry) {
        let device = device.into();
        match self.volumes.iter_mut().find(|(d, _)| *d == device) {
            Some((_, existing)) => *existing = entry,
            None => self.volumes.push((device, entry)),
        }
    }

    pub fn get(&self, device: &str) -> Option<&VolumeEntry> {
        self.volumes
            .iter()
            .find(|(d, _)| d == device)
            .map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VolumeEntry)> {
        self.volumes.iter().map(|(d, e)| (d.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Number of devices that reported a permission denial.
    pub fn denied_count(&self) -> usize {
        self.volumes.iter().filter(|(_, e)| e.is_denied()).count()
    }
}

impl Serialize for StorageReading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.volumes.len()))?;
        for (device, entry) in &self.volumes {
            map.serialize_entry(device, entry)?;
        }
        map.end()
    }
}

/// What a section query yields.
///
/// Storage is the only section whose values are themselves mappings, so the
/// rendering layer has to branch on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionReading {
    Metrics(Reading),
    Volumes(StorageReading),
}

impl SectionReading {
    pub const fn as_metrics(&self) -> Option<&Reading> {
        match self {
            Self::Metrics(reading) => Some(reading),
            Self::Volumes(_) => None,
        }
    }

    pub const fn as_volumes(&self) -> Option<&StorageReading> {
        match self {
            Self::Volumes(volumes) => Some(volumes),
            Self::Metrics(_) => None,
        }
    }
}

impl Serialize for SectionReading {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Metrics(reading) => reading.serialize(serializer),
            Self::Volumes(volumes) => volumes.serialize(serializer),
        }
    }
}
