//! Key well modifier resolution.
//!
//! Every `(column, row)` cell receives one offset and rotation composed from
//! three layers, in order:
//!
//! 1. the finger assigned to the column (offset, tilt around X)
//! 2. the column override, if any (offset, tilt around X)
//! 3. the row override, if any (offset, tilt around Y)
//!
//! Finger and column tilt share the X axis (lean along a column) while row
//! tilt acts on Y (curvature along a row). Missing layers contribute nothing.

use crate::models::keyboard::{FingerModifier, FingerModifiers, Keywell, KeywellModifiers, Layout};
use crate::models::template_data::{KeyMatrix, ResolvedKeyModifier, TemplateKeywell};
use crate::models::vector::{combine, Rotation};

/// Finger slot of the finger layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    /// Slot 0
    Index,
    /// Slot 1
    Middle,
    /// Slot 2
    Ring,
    /// Slot 3, also every slot outside 0..=3
    Pinky,
}

impl Finger {
    /// Maps a signed finger slot to a finger, saturating at [`Finger::Pinky`].
    #[must_use]
    pub const fn from_slot(slot: isize) -> Self {
        match slot {
            0 => Self::Index,
            1 => Self::Middle,
            2 => Self::Ring,
            _ => Self::Pinky,
        }
    }

    /// Finger assigned to column `col`.
    ///
    /// Columns left of `index_finger_start_column` all belong to the index
    /// finger. From the boundary on, the slot is `index_finger_start_column - col`,
    /// so the boundary column is the index finger and every column past it
    /// saturates at the pinky.
    ///
    /// - start 3, col 2 → Index
    /// - start 3, col 3 → Index
    /// - start 3, col 5 → Pinky
    #[must_use]
    pub const fn for_column(col: usize, index_finger_start_column: usize) -> Self {
        if col < index_finger_start_column {
            return Self::Index;
        }
        Self::from_slot(index_finger_start_column as isize - col as isize)
    }

    /// Selects this finger's entry from the finger layer.
    #[must_use]
    pub const fn modifier(self, fingers: &FingerModifiers) -> FingerModifier {
        match self {
            Self::Index => fingers.index,
            Self::Middle => fingers.middle,
            Self::Ring => fingers.ring,
            Self::Pinky => fingers.pinky,
        }
    }
}

/// Finger layer plus column override for one column.
///
/// Shared by every row of the column.
#[must_use]
pub fn resolve_column(
    modifiers: &KeywellModifiers,
    col: usize,
    index_finger_start_column: usize,
) -> ResolvedKeyModifier {
    let finger = Finger::for_column(col, index_finger_start_column).modifier(&modifiers.finger);
    let mut base = ResolvedKeyModifier::regular(finger.offset, Rotation::tilt_x(finger.tilt));

    if let Some(column) = modifiers.columns.get(&col) {
        base.offset = combine(base.offset, column.offset);
        base.rotation = combine(base.rotation, Rotation::tilt_x(column.tilt));
    }

    base
}

/// Applies the row override for `row` on top of a column base.
#[must_use]
pub fn resolve_cell(
    column_base: &ResolvedKeyModifier,
    modifiers: &KeywellModifiers,
    row: usize,
) -> ResolvedKeyModifier {
    let mut cell = column_base.clone();

    if let Some(row_modifier) = modifiers.rows.get(&row) {
        cell.offset = combine(cell.offset, row_modifier.offset);
        cell.rotation = combine(cell.rotation, Rotation::tilt_y(row_modifier.tilt));
    }

    cell
}

/// Resolves the full `layout.cols × layout.rows` matrix, indexed `[col][row]`.
#[must_use]
pub fn resolve_matrix(
    modifiers: &KeywellModifiers,
    layout: Layout,
    index_finger_start_column: usize,
) -> KeyMatrix {
    (0..layout.cols)
        .map(|col| {
            let column_base = resolve_column(modifiers, col, index_finger_start_column);
            (0..layout.rows)
                .map(|row| resolve_cell(&column_base, modifiers, row))
                .collect()
        })
        .collect()
}

/// Builds the template view of the key well with its resolved matrix.
#[must_use]
pub fn build_template_keywell(keywell: &Keywell, layout: Layout) -> TemplateKeywell {
    TemplateKeywell {
        tilt_angle: keywell.tilt_angle,
        vertical_radius: keywell.vertical_radius,
        horizontal_radius: keywell.horizontal_radius,
        center_offset: keywell.center_offset,
        inner_lip_size: keywell.inner_lip_size,
        outer_lip_size: keywell.outer_lip_size,
        index_finger_start_column: keywell.index_finger_start_column,
        matrix: resolve_matrix(
            &keywell.modifiers,
            layout,
            keywell.index_finger_start_column,
        ),
    }
}
