//! Grid interpretation variants

/// Interpretation of parsed values on the assembled grid
///
/// The format itself does not distinguish the two; this is a user-facing
/// choice applied during assembly. A closed two-variant enum, deliberately
/// not an open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum GridKind {
    /// One value per grid cell
    #[default]
    CellData = 0,
    /// One value per grid point
    PointData = 1,
}

impl GridKind {
    /// Convert from u8 representation
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(GridKind::CellData),
            1 => Some(GridKind::PointData),
            _ => None,
        }
    }

    /// Convert to u8 representation
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

impl core::fmt::Display for GridKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridKind::CellData => write!(f, "Cell data"),
            GridKind::PointData => write!(f, "Point data"),
        }
    }
}
