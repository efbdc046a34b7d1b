/// Outcome of measuring a single path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    /// Recursive size in bytes
    Measured(u64),
    /// The path exists but its size could not be determined
    Inaccessible,
    /// Nothing exists at the path
    Absent,
}

impl Measurement {
    /// Size of a location worth reporting, `None` for absent paths
    pub fn location_size(self) -> Option<LocationSize> {
        match self {
            Measurement::Measured(bytes) => Some(LocationSize::Measured(bytes)),
            Measurement::Inaccessible => Some(LocationSize::Inaccessible),
            Measurement::Absent => None,
        }
    }
}

/// Size of a location that exists on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSize {
    Measured(u64),
    Inaccessible,
}

impl LocationSize {
    /// Bytes counted towards totals (0 when inaccessible)
    pub fn bytes(self) -> u64 {
        match self {
            LocationSize::Measured(bytes) => bytes,
            LocationSize::Inaccessible => 0,
        }
    }

    pub fn is_inaccessible(self) -> bool {
        matches!(self, LocationSize::Inaccessible)
    }
}

/// A probed catalog location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationRecord {
    pub path: String,
    pub label: String,
    pub size: LocationSize,
    pub requires_elevated_access: bool,
}

impl LocationRecord {
    pub fn size_bytes(&self) -> u64 {
        self.size.bytes()
    }

    /// True when the location could not be read and is known to need root
    pub fn needs_elevated_access(&self) -> bool {
        self.requires_elevated_access && self.size.is_inaccessible()
    }
}

/// A subdirectory above the size threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargeDirectory {
    pub path: String,
    pub size_bytes: u64,
}
